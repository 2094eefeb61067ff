//! Environment-driven configuration
//!
//! The program takes no command-line arguments; the only knobs are logging
//! related and come from the environment.

use std::path::PathBuf;

/// Filter directive for the log file, e.g. `debug` or `ctag=trace`
pub const LOG_ENV: &str = "CTAG_LOG";
/// Directory the log file is written to
pub const LOG_DIR_ENV: &str = "CTAG_LOG_DIR";
/// File name of the log inside the log directory
pub const LOG_FILE_NAME: &str = "ctag.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` disables logging entirely
    pub log_filter: Option<String>,
    pub log_dir: PathBuf,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let log_dir = lookup(LOG_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        Config {
            log_filter,
            log_dir,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: None,
            log_dir: std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_logging_disabled_by_default() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.log_filter, None);
        assert_eq!(config.log_dir, std::env::temp_dir());
    }

    #[test]
    fn test_reads_filter_and_dir() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_ENV, " debug "),
            (LOG_DIR_ENV, "/var/log/ctag"),
        ]));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.log_path(), PathBuf::from("/var/log/ctag/ctag.log"));
    }

    #[test]
    fn test_blank_filter_disables_logging() {
        let config = Config::from_lookup(lookup_from(&[(LOG_ENV, "   ")]));
        assert_eq!(config.log_filter, None);
    }
}
