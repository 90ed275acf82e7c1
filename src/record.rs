//! User records as delivered by the remote directory.
//!
//! A [`UserRecord`] mirrors one entry of the provider's `results` array. The
//! list pipeline only ever looks at two derived values, the display name and
//! the search key; every other field is carried through untouched so the
//! detail popup can show it.
//!
//! # Examples
//!
//! ```
//! use rolodex::record::UserRecord;
//! use rolodex::list::Item;
//!
//! let user = UserRecord::new("Ada", "Lovelace").with_email("ada@example.com");
//! assert_eq!(user.display_name(), "Ada Lovelace");
//! assert_eq!(user.filter_value(), "ada");
//! ```

use crate::list::Item;
use serde::Deserialize;
use std::fmt;

/// First and last name of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Name {
    /// Given name.
    #[serde(default)]
    pub first: String,
    /// Family name.
    #[serde(default)]
    pub last: String,
}

/// Portrait links; only the large variant is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Picture {
    /// URL of the large portrait.
    #[serde(default)]
    pub large: String,
}

/// Where the user lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Location {
    /// City name.
    #[serde(default)]
    pub city: String,
    /// State, province or region.
    #[serde(default)]
    pub state: String,
}

/// One user of the remote directory.
///
/// Unknown fields in the payload are ignored; missing fields decode as empty
/// strings so a sparse record still shows up in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Given and family name.
    #[serde(default)]
    pub name: Name,
    /// Contact e-mail address.
    #[serde(default)]
    pub email: String,
    /// Contact phone number, formatted by the provider.
    #[serde(default)]
    pub phone: String,
    /// Portrait links.
    #[serde(default)]
    pub picture: Picture,
    /// City and state.
    #[serde(default)]
    pub location: Location,
}

impl UserRecord {
    /// Creates a record with the given name and an empty payload.
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            name: Name {
                first: first.to_string(),
                last: last.to_string(),
            },
            ..Self::default()
        }
    }

    /// Sets the e-mail address (builder pattern).
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Sets the phone number (builder pattern).
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    /// Sets the large portrait URL (builder pattern).
    pub fn with_photo(mut self, url: &str) -> Self {
        self.picture.large = url.to_string();
        self
    }

    /// Sets city and state (builder pattern).
    pub fn with_location(mut self, city: &str, state: &str) -> Self {
        self.location = Location {
            city: city.to_string(),
            state: state.to_string(),
        };
        self
    }

    /// First and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Lowercased first name, the only text the search box matches against.
    pub fn search_key(&self) -> String {
        self.name.first.to_lowercase()
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name.first, self.name.last)
    }
}

impl Item for UserRecord {
    fn filter_value(&self) -> String {
        self.search_key()
    }

    fn sort_value(&self) -> String {
        self.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_first_and_last() {
        let user = UserRecord::new("Grace", "Hopper");
        assert_eq!(user.display_name(), "Grace Hopper");
        assert_eq!(user.to_string(), "Grace Hopper");
    }

    #[test]
    fn test_search_key_is_lowercase_first_name_only() {
        let user = UserRecord::new("ÉLODIE", "Martin");
        assert_eq!(user.search_key(), "élodie");
        assert!(!user.search_key().contains("martin"));
    }

    #[test]
    fn test_decode_provider_entry() {
        let json = r#"{
            "gender": "female",
            "name": { "title": "Ms", "first": "Noor", "last": "Visser" },
            "location": { "city": "Zwolle", "state": "Overijssel", "postcode": "1234 AB" },
            "email": "noor.visser@example.com",
            "phone": "(067) 123 4567",
            "picture": { "large": "https://example.com/portraits/women/1.jpg" }
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "Noor Visser");
        assert_eq!(user.location.city, "Zwolle");
        assert_eq!(user.location.state, "Overijssel");
        assert_eq!(user.picture.large, "https://example.com/portraits/women/1.jpg");
    }

    #[test]
    fn test_decode_sparse_entry_defaults_to_empty_fields() {
        let user: UserRecord = serde_json::from_str(r#"{ "name": { "first": "Kai" } }"#).unwrap();
        assert_eq!(user.name.last, "");
        assert_eq!(user.email, "");
        assert_eq!(user.display_name(), "Kai ");
    }
}
