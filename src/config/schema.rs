// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! [`ConfigFile`] mirrors msgcheck.toml as written by users. Every value is
//! optional there so that files, environment and flags can be layered; the
//! layered result is then validated into the immutable [`Config`] the rules
//! run against.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default maximum subject length, in characters.
pub const DEFAULT_SUBJECT_CHAR_LIMIT: usize = 50;

/// Default maximum body line length, in characters.
pub const DEFAULT_BODY_CHAR_LIMIT: usize = 72;

/// Validated rule configuration.
///
/// Both limits are guaranteed positive. There are no setters: build a new
/// value through [`Config::new`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config {
    subject_char_limit: usize,
    body_char_limit: usize,
    check_blank_line: bool,
}

impl Config {
    /// Build a configuration, rejecting non-positive limits.
    pub fn new(
        subject_char_limit: i64,
        body_char_limit: i64,
        check_blank_line: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            subject_char_limit: positive_limit("subject_char_limit", subject_char_limit)?,
            body_char_limit: positive_limit("body_char_limit", body_char_limit)?,
            check_blank_line,
        })
    }

    /// Maximum subject length, in characters.
    pub fn subject_char_limit(&self) -> usize {
        self.subject_char_limit
    }

    /// Maximum body line length, in characters.
    pub fn body_char_limit(&self) -> usize {
        self.body_char_limit
    }

    /// Whether blank separator lines are enforced.
    pub fn check_blank_line(&self) -> bool {
        self.check_blank_line
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject_char_limit: DEFAULT_SUBJECT_CHAR_LIMIT,
            body_char_limit: DEFAULT_BODY_CHAR_LIMIT,
            check_blank_line: false,
        }
    }
}

fn positive_limit(key: &str, value: i64) -> Result<usize, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("must be a positive integer, got {}", value),
        });
    }

    usize::try_from(value).map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("{} does not fit in a character count", value),
    })
}

/// Contents of a msgcheck.toml file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigFile {
    /// Rule configuration.
    pub rules: RulesConfig,
}

/// The `[rules]` table.
///
/// Limits are signed so that `subject_char_limit = -1` is reported as an
/// invalid value instead of a TOML type mismatch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum length of the subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_char_limit: Option<i64>,

    /// Maximum length of each body line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_char_limit: Option<i64>,

    /// Require blank lines after the subject and before trailers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_blank_line: Option<bool>,
}

impl RulesConfig {
    /// Fill unset values with defaults and validate the result.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        Config::new(
            self.subject_char_limit
                .unwrap_or(DEFAULT_SUBJECT_CHAR_LIMIT as i64),
            self.body_char_limit.unwrap_or(DEFAULT_BODY_CHAR_LIMIT as i64),
            self.check_blank_line.unwrap_or(false),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.subject_char_limit(), 50);
        assert_eq!(config.body_char_limit(), 72);
        assert!(!config.check_blank_line());
    }

    #[test]
    fn test_new_accepts_positive_limits() {
        let config = Config::new(1, 100, true).unwrap();
        assert_eq!(config.subject_char_limit(), 1);
        assert_eq!(config.body_char_limit(), 100);
        assert!(config.check_blank_line());
    }

    #[test]
    fn test_new_rejects_zero_subject_limit() {
        let err = Config::new(0, 72, false).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "subject_char_limit"
        ));
    }

    #[test]
    fn test_new_rejects_negative_body_limit() {
        let err = Config::new(50, -3, false).unwrap_err();
        assert!(err.to_string().contains("body_char_limit"));
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let rules = RulesConfig {
            body_char_limit: Some(80),
            ..Default::default()
        };
        let config = rules.resolve().unwrap();
        assert_eq!(config.subject_char_limit(), 50);
        assert_eq!(config.body_char_limit(), 80);
        assert!(!config.check_blank_line());
    }

    #[test]
    fn test_config_file_serialization() {
        let file = ConfigFile {
            rules: RulesConfig {
                subject_char_limit: Some(60),
                body_char_limit: None,
                check_blank_line: Some(true),
            },
        };
        let toml_str = toml::to_string(&file).unwrap();
        assert!(toml_str.contains("subject_char_limit = 60"));
        assert!(!toml_str.contains("body_char_limit"));
    }
}
