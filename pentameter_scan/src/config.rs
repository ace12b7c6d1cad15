// Scanner configuration.
//
// `ScanConfig` holds the tunable limits of a `Scanner`, loaded from JSON or
// built with `Default`. Every field has a default, so a config file only
// needs the fields it changes:
//
//   {"strategy": "exhaustive", "max_realizations": 4096}
//
// `max_tokens` is checked first, before any lookup work. `max_realizations`
// only applies to the exhaustive strategy: the search never materializes
// realizations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// How a `Scanner` finds the best realization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Dynamic-programming search over syllable-count states.
    #[default]
    Search,
    /// Enumerate every realization, then select.
    Exhaustive,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "search" => Ok(Strategy::Search),
            "exhaustive" => Ok(Strategy::Exhaustive),
            other => Err(format!(
                "unknown strategy {other:?} (expected search or exhaustive)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub strategy: Strategy,
    /// Longest phrase accepted, in tokens (words plus joiners). `None`
    /// disables the check.
    pub max_tokens: Option<usize>,
    /// Largest realization set the exhaustive strategy will enumerate.
    pub max_realizations: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            strategy: Strategy::Search,
            max_tokens: Some(512),
            max_realizations: 1 << 16,
        }
    }
}

impl ScanConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ScanError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.strategy, Strategy::Search);
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.max_realizations, 65536);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{"strategy": "exhaustive"}"#;
        let config = ScanConfig::from_json(json).unwrap();
        assert_eq!(config.strategy, Strategy::Exhaustive);
        assert_eq!(config.max_tokens, Some(512));

        let config = ScanConfig::from_json("{}").unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn test_null_disables_token_limit() {
        let config = ScanConfig::from_json(r#"{"max_tokens": null}"#).unwrap();
        assert_eq!(config.max_tokens, None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ScanConfig {
            strategy: Strategy::Exhaustive,
            max_tokens: None,
            max_realizations: 10,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""strategy":"exhaustive""#));
        assert_eq!(ScanConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_strategy_is_an_error() {
        let err = ScanConfig::from_json(r#"{"strategy": "guess"}"#).unwrap_err();
        assert!(matches!(err, ScanError::ConfigJson(_)));
        assert!("guess".parse::<Strategy>().is_err());
        assert_eq!("search".parse::<Strategy>(), Ok(Strategy::Search));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_realizations": 8}}"#).unwrap();
        let config = ScanConfig::load(file.path()).unwrap();
        assert_eq!(config.max_realizations, 8);

        let missing = Path::new("/nonexistent/scan.json");
        let err = ScanConfig::load(missing).unwrap_err();
        assert!(matches!(err, ScanError::ConfigIo { .. }));
    }
}
