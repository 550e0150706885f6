// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and layering.

use crate::error::{ConfigError, MsgCheckError, Result};
use std::path::{Path, PathBuf};

use super::schema::{ConfigFile, RulesConfig};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["msgcheck.toml", ".msgcheck.toml", ".config/msgcheck.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("msgcheck").join("config.toml");
    xdg.is_file().then_some(xdg)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<ConfigFile> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(ConfigFile::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(MsgCheckError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        MsgCheckError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    Ok(parse_config(&content)?)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> std::result::Result<ConfigFile, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to parse TOML: {}", e),
    })
}

/// Layer two rule tables; values set in `overlay` win.
pub fn merge_rules(base: RulesConfig, overlay: RulesConfig) -> RulesConfig {
    RulesConfig {
        subject_char_limit: overlay.subject_char_limit.or(base.subject_char_limit),
        body_char_limit: overlay.body_char_limit.or(base.body_char_limit),
        check_blank_line: overlay.check_blank_line.or(base.check_blank_line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let file = parse_config("").unwrap();
        let config = file.rules.resolve().unwrap();
        assert_eq!(config.subject_char_limit(), 50);
        assert_eq!(config.body_char_limit(), 72);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
subject_char_limit = 65
body_char_limit = 100
check_blank_line = true
"#;
        let config = parse_config(toml).unwrap().rules.resolve().unwrap();
        assert_eq!(config.subject_char_limit(), 65);
        assert_eq!(config.body_char_limit(), 100);
        assert!(config.check_blank_line());
    }

    #[test]
    fn test_parse_rejects_non_integer_limit() {
        let toml = r#"
[rules]
subject_char_limit = "fifty"
"#;
        let err = parse_config(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_negative_limit_is_invalid_value() {
        let toml = r#"
[rules]
body_char_limit = -1
"#;
        let file = parse_config(toml).unwrap();
        let err = file.rules.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_merge_rules_overlay_wins() {
        let base = RulesConfig {
            subject_char_limit: Some(60),
            body_char_limit: Some(80),
            check_blank_line: Some(true),
        };
        let overlay = RulesConfig {
            subject_char_limit: Some(40),
            ..Default::default()
        };
        let merged = merge_rules(base, overlay);
        assert_eq!(merged.subject_char_limit, Some(40));
        assert_eq!(merged.body_char_limit, Some(80));
        assert_eq!(merged.check_blank_line, Some(true));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".msgcheck.toml"), "[rules]\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".msgcheck.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(MsgCheckError::Config(ConfigError::NotFound { .. }))
        ));
    }
}
