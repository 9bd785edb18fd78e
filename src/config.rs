use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::installer::puppet::DEFAULT_PROGRAM;

/// Log level used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// Directory forge modules are installed into
    pub moduledir: Option<PathBuf>,
    pub installer: InstallerConfig,
    pub log_level: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            moduledir: None,
            installer: InstallerConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Installer client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InstallerConfig {
    /// Executable that provides the `module` subcommand
    pub program: PathBuf,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SyncConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicitly given file, else the default config file if it
    /// exists, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = config_path();
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Returns the path to the data directory for forge-sync.
/// Uses $XDG_DATA_HOME/forge-sync if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/forge-sync,
/// or ./forge-sync if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("forge-sync.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("forge-sync")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn sync_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<SyncConfig>(json!({
            "moduledir": "/etc/puppet/modules"
        }))
        .unwrap();

        assert_eq!(result.moduledir, Some(PathBuf::from("/etc/puppet/modules")));
        assert_eq!(result.installer, InstallerConfig::default());
        assert_eq!(result.log_level, "info");
    }

    #[test]
    fn sync_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<SyncConfig>(json!({
            "moduledir": "/moduledir",
            "installer": { "program": "/opt/puppetlabs/bin/puppet" },
            "logLevel": "debug"
        }))
        .unwrap();

        assert_eq!(
            result,
            SyncConfig {
                moduledir: Some(PathBuf::from("/moduledir")),
                installer: InstallerConfig {
                    program: PathBuf::from("/opt/puppetlabs/bin/puppet"),
                },
                log_level: "debug".to_string(),
            }
        );
    }

    #[test]
    fn load_reports_parse_error_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ moduledir").unwrap();

        let result = SyncConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse { path: p, .. }) if p == path));
    }

    #[test]
    fn resolve_fails_when_explicit_file_is_missing() {
        let dir = TempDir::new().unwrap();

        let result = SyncConfig::resolve(Some(&dir.path().join("missing.json")));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    #[serial]
    fn resolve_reads_default_config_file_from_data_dir() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("forge-sync");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join("config.json"), r#"{"logLevel": "trace"}"#).unwrap();

        // SAFETY: serialized with the other tests touching XDG_DATA_HOME
        unsafe { std::env::set_var("XDG_DATA_HOME", dir.path()) };
        let result = SyncConfig::resolve(None);
        unsafe { std::env::remove_var("XDG_DATA_HOME") };

        assert_eq!(result.unwrap().log_level, "trace");
    }

    #[test]
    #[serial]
    fn resolve_falls_back_to_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();

        // SAFETY: serialized with the other tests touching XDG_DATA_HOME
        unsafe { std::env::set_var("XDG_DATA_HOME", dir.path()) };
        let result = SyncConfig::resolve(None);
        unsafe { std::env::remove_var("XDG_DATA_HOME") };

        assert_eq!(result.unwrap(), SyncConfig::default());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/forge-sync"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/forge-sync"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./forge-sync"));
    }
}
