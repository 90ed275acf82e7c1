//! Key bindings with help text.
//!
//! A [`Binding`] groups the key presses that trigger one action together
//! with the short text shown in the help line. Types that own bindings
//! implement [`KeyMap`] so a help line can be generated from them.
//!
//! ```
//! use rolodex::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next page");
//! let press = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&press));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers it must be held with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Required modifiers; empty means "no control or alt held".
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.modifiers.is_empty() {
            // Shift is implied by the character itself ('G' vs 'g').
            !msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            msg.modifiers.contains(self.modifiers)
        }
    }
}

/// Help text for a binding: the keys as shown to the user and what they do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"→/l"`.
    pub key: String,
    /// Action label, e.g. `"next page"`.
    pub desc: String,
}

/// Key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help lines.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Help text of the binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Key presses of the binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Types that can describe their key bindings for a help line.
pub trait KeyMap {
    /// The most important bindings, shown in a single line.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Joins the enabled bindings as `"key desc • key desc"`.
pub fn help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_plain_binding_ignores_shift_but_not_control() {
        let binding = Binding::new(vec![KeyCode::Char('G')]);
        assert!(binding.matches(&press(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(!binding.matches(&press(KeyCode::Char('G'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_modified_binding_requires_modifier() {
        let binding = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(binding.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]).with_help("enter", "open");
        binding.set_enabled(false);
        assert!(!binding.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(help_line(&[&binding]), "");
    }

    #[test]
    fn test_help_line_joins_bindings() {
        let up = Binding::new(vec![KeyCode::Up]).with_help("↑", "up");
        let down = Binding::new(vec![KeyCode::Down]).with_help("↓", "down");
        assert_eq!(help_line(&[&up, &down]), "↑ up • ↓ down");
    }
}
