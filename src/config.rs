use serde::Deserialize;
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;
use std::time::Duration;
use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Effective runtime configuration, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub interval_seconds: NonZeroU64,
}

/// On-disk layout of the config file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    interval: Option<i64>,
}

impl Config {
    /// Resolves the interval from the command-line override and the config file.
    ///
    /// A non-empty `cli_interval` wins over the file; in that case a missing or
    /// malformed file is only logged. Without an override the file must load and
    /// carry a positive `interval`.
    pub fn resolve(cli_interval: Option<&str>, config_path: &Path) -> Result<Self> {
        let cli_interval = cli_interval.filter(|s| !s.is_empty());

        let file = match Self::read_file(config_path) {
            Ok(file) => Some(file),
            Err(e) if cli_interval.is_some() => {
                log::warn!("{}; using interval from command line", e);
                None
            }
            Err(e) => return Err(e),
        };

        let interval_seconds = match (cli_interval, file.and_then(|f| f.interval)) {
            (Some(raw), _) => parse_interval(raw)?,
            (None, Some(value)) => {
                log::debug!("Using interval {} from {}", value, config_path.display());
                positive_interval(value).ok_or_else(|| Error::InvalidInterval(value.to_string()))?
            }
            (None, None) => {
                return Err(Error::Config(format!(
                    "{}: no interval set and none given on the command line",
                    config_path.display()
                )))
            }
        };

        Ok(Self { interval_seconds })
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds.get())
    }

    fn read_file(path: &Path) -> Result<FileConfig> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        // An empty document deserializes as unit, not as a mapping
        if content.trim().is_empty() {
            return Ok(FileConfig::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Parses an interval given as text, rejecting zero, negatives and non-numbers.
pub fn parse_interval(raw: &str) -> Result<NonZeroU64> {
    raw.parse::<i64>()
        .ok()
        .and_then(positive_interval)
        .ok_or_else(|| Error::InvalidInterval(raw.to_string()))
}

fn positive_interval(value: i64) -> Option<NonZeroU64> {
    u64::try_from(value).ok().and_then(NonZeroU64::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_interval_from_file() {
        let file = config_file("interval: 10\n");
        let config = Config::resolve(None, file.path()).unwrap();
        assert_eq!(config.interval_seconds.get(), 10);
        assert_eq!(config.interval(), Duration::from_secs(10));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = config_file("interval: 10\n");
        let config = Config::resolve(Some("3"), file.path()).unwrap();
        assert_eq!(config.interval_seconds.get(), 3);
    }

    #[test]
    fn test_empty_cli_value_falls_back_to_file() {
        let file = config_file("interval: 7\n");
        let config = Config::resolve(Some(""), file.path()).unwrap();
        assert_eq!(config.interval_seconds.get(), 7);
    }

    #[test]
    fn test_cli_used_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.yaml");
        let config = Config::resolve(Some("5"), &missing).unwrap();
        assert_eq!(config.interval_seconds.get(), 5);
    }

    #[test]
    fn test_cli_used_when_file_malformed() {
        let file = config_file("interval: [not, a, number\n");
        let config = Config::resolve(Some("2"), file.path()).unwrap();
        assert_eq!(config.interval_seconds.get(), 2);
    }

    #[test]
    fn test_missing_file_without_cli_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.yaml");
        let err = Config::resolve(None, &missing).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_file_without_interval_is_fatal() {
        let file = config_file("other: 4\n");
        assert!(matches!(Config::resolve(None, file.path()), Err(Error::Config(_))));

        let empty = config_file("");
        assert!(matches!(Config::resolve(None, empty.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_cli_values_are_rejected() {
        let file = config_file("interval: 10\n");
        for raw in ["0", "-5", "abc", "1.5", " 3", "3 "] {
            let err = Config::resolve(Some(raw), file.path()).unwrap_err();
            match err {
                Error::InvalidInterval(value) => assert_eq!(value, raw),
                other => panic!("unexpected error for {:?}: {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_invalid_file_values_are_rejected() {
        let zero = config_file("interval: 0\n");
        let err = Config::resolve(None, zero.path()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid interval: 0. Please provide a positive integer.");

        let negative = config_file("interval: -3\n");
        assert!(matches!(
            Config::resolve(None, negative.path()),
            Err(Error::InvalidInterval(v)) if v == "-3"
        ));

        let text = config_file("interval: soon\n");
        assert!(matches!(Config::resolve(None, text.path()), Err(Error::Config(_))));
    }
}
