// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CheckerError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CheckerConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["ccheck.toml", ".ccheck.toml", ".config/ccheck.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    if let Some(found) = find_in_ancestors(start_dir) {
        return Some(found);
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in_dir(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("ccheck").join("config.toml");
    xdg.exists().then_some(xdg)
}

fn find_in_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(find_in_dir)
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CheckerConfig> {
    load_found(find_config_file())
}

/// Load configuration discovered upward from `dir`, then the home and XDG
/// locations.
pub fn load_config_in(dir: &Path) -> Result<CheckerConfig> {
    let start = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    load_found(find_config_file_from(&start))
}

fn load_found(path: Option<PathBuf>) -> Result<CheckerConfig> {
    match path {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CheckerConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CheckerConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CheckerError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CheckerError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CheckerConfig> {
    toml::from_str(content).map_err(|e| {
        CheckerError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert!(config.options.exclude_base);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_options() {
        let toml = r#"
[options]
base_sha = "abc123"
exclude_base = false
format = "json"
repo_dir = "/tmp/repo"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.options.base_sha.as_deref(), Some("abc123"));
        assert!(!config.options.exclude_base);
        assert_eq!(config.options.format, Some(OutputFormat::Json));
        assert_eq!(config.options.repo_dir, Some(PathBuf::from("/tmp/repo")));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[[rules]]\nkind = \"sometimes\"\ncheck = \"require-body\"\n")
            .unwrap_err();
        assert!(matches!(
            err,
            CheckerError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".ccheck.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".ccheck.toml"));
    }

    #[test]
    fn test_find_config_priority() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ccheck.toml"), "").unwrap();
        std::fs::write(dir.path().join(".ccheck.toml"), "").unwrap();

        let found = find_config_file_from(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("ccheck.toml"));
    }

    #[test]
    fn test_load_in_uses_given_directory() {
        let dir = TempDir::new().unwrap();
        let repo = dir.path().join("repo");
        std::fs::create_dir_all(&repo).unwrap();
        std::fs::write(
            repo.join("ccheck.toml"),
            "[[rules]]\nkind = \"required\"\ncheck = \"require-scope\"\n",
        )
        .unwrap();

        let config = load_config_in(&repo).unwrap();
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(
            err,
            CheckerError::Config(ConfigError::NotFound { .. })
        ));
    }
}
