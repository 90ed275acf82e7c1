//! Command-line and environment configuration.
//!
//! [`Args`] is what clap parses; [`Config`] is the validated form the rest of
//! the crate consumes. Every flag can also come from a `ROLODEX_*`
//! environment variable.

use crate::list::SortKey;
use clap::Parser;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Provider queried when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Number of users requested per load.
pub const DEFAULT_RESULTS: usize = 100;

/// Largest batch the provider serves in one response.
pub const MAX_RESULTS: usize = 5000;

/// Seconds before an unanswered request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Raw command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rolodex",
    version,
    about = "Browse a remote user directory in the terminal",
    long_about = "Rolodex fetches a batch of users from a randomuser-compatible API and shows them as a searchable, sortable, paginated list.\n\nExamples:\n  rolodex\n  rolodex --sort size --results 250\n  rolodex --log-file /tmp/rolodex.log --log-level debug"
)]
pub struct Args {
    /// User directory endpoint.
    #[arg(
        short = 'e',
        long,
        env = "ROLODEX_ENDPOINT",
        value_name = "URL",
        default_value = DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Number of users to request per load.
    #[arg(
        short = 'n',
        long,
        env = "ROLODEX_RESULTS",
        value_name = "COUNT",
        default_value_t = DEFAULT_RESULTS
    )]
    pub results: usize,

    /// Initial sort key: name, size or none.
    #[arg(
        short = 's',
        long,
        env = "ROLODEX_SORT",
        value_name = "KEY",
        default_value = "name"
    )]
    pub sort: String,

    /// HTTP timeout in seconds.
    #[arg(
        short = 't',
        long,
        env = "ROLODEX_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout: u64,

    /// Write logs to this file (the terminal is taken by the UI).
    #[arg(
        long,
        env = "ROLODEX_LOG_FILE",
        value_name = "FILE"
    )]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. info or rolodex=debug.
    #[arg(
        long,
        env = "ROLODEX_LOG_LEVEL",
        value_name = "LEVEL",
        default_value = "info"
    )]
    pub log_level: String,
}

/// Reasons a configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The endpoint is not a URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    Endpoint {
        /// Endpoint as given.
        endpoint: String,
        /// Parser message.
        reason: String,
    },
    /// The endpoint is not http or https.
    #[error("endpoint {0:?} must use http or https")]
    Scheme(String),
    /// The batch size is outside `1..=MAX_RESULTS`.
    #[error("results must be between 1 and 5000, got {0}")]
    Results(usize),
    /// The sort key is not `name`, `size` or `none`.
    #[error("unknown sort key {0:?} (expected name, size or none)")]
    SortKey(String),
    /// The timeout is zero.
    #[error("timeout must be at least one second")]
    Timeout,
}

/// Validated settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory endpoint, without the `results` query parameter.
    pub endpoint: String,
    /// Users requested per load.
    pub results: usize,
    /// Sort key applied at start-up.
    pub sort: SortKey,
    /// HTTP timeout.
    pub timeout: Duration,
    /// Log destination, if any.
    pub log_file: Option<PathBuf>,
    /// Log filter directive.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
            sort: SortKey::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let url = Url::parse(&args.endpoint).map_err(|e| ConfigError::Endpoint {
            endpoint: args.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Scheme(args.endpoint));
        }

        if !(1..=MAX_RESULTS).contains(&args.results) {
            return Err(ConfigError::Results(args.results));
        }

        let sort = args
            .sort
            .parse::<SortKey>()
            .map_err(|_| ConfigError::SortKey(args.sort.clone()))?;

        if args.timeout == 0 {
            return Err(ConfigError::Timeout);
        }

        Ok(Self {
            endpoint: args.endpoint,
            results: args.results,
            sort,
            timeout: Duration::from_secs(args.timeout),
            log_file: args.log_file,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Config, ConfigError> {
        let mut argv = vec!["rolodex"];
        argv.extend_from_slice(extra);
        Config::try_from(Args::parse_from(argv))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.results, 100);
        assert_eq!(config.sort, SortKey::ByName);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.log_file.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_sort_and_results_flags() {
        let config = parse(&["--sort", "size", "-n", "250"]).unwrap();
        assert_eq!(config.sort, SortKey::ByNameLength);
        assert_eq!(config.results, 250);
    }

    #[test]
    fn test_help_lists_every_flag() {
        let mut command = <Args as clap::CommandFactory>::command();
        command.clone().debug_assert();

        let help = command.render_long_help().to_string();
        assert!(help.contains("User directory endpoint"));
        assert!(help.contains("Number of users to request per load"));
        assert!(help.contains("Initial sort key: name, size or none"));
        assert!(help.contains("HTTP timeout in seconds"));
        assert!(help.contains("Write logs to this file"));
        assert!(help.contains("Log filter, e.g. info or rolodex=debug"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(parse(&["--results", "0"]), Err(ConfigError::Results(0))));
        assert!(matches!(parse(&["--sort", "age"]), Err(ConfigError::SortKey(_))));
        assert!(matches!(parse(&["--timeout", "0"]), Err(ConfigError::Timeout)));
        assert!(matches!(parse(&["--endpoint", "not a url"]), Err(ConfigError::Endpoint { .. })));
        assert!(matches!(parse(&["--endpoint", "ftp://example.com/"]), Err(ConfigError::Scheme(_))));
    }
}
