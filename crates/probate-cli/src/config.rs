//! CLI configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults (embedded registry, no updates, text output).
//! 2. YAML file given by `--config` or `PROBATE_CONFIG`.
//! 3. Environment: `PROBATE_REGISTRY_PATH`, `PROBATE_UPDATES_PATH`,
//!    `PROBATE_OUTPUT`.
//! 4. Command-line flags.
//!
//! ```yaml
//! registry_path: /etc/probate/jurisdictions.yaml
//! updates_path: /var/lib/probate/updates.json
//! format: json
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_REGISTRY_PATH: &str = "PROBATE_REGISTRY_PATH";
pub const ENV_UPDATES_PATH: &str = "PROBATE_UPDATES_PATH";
pub const ENV_OUTPUT: &str = "PROBATE_OUTPUT";

/// How command output is rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid output format {value:?} (expected \"text\" or \"json\")")]
    InvalidFormat { value: String },
}

/// On-disk config shape. Every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    registry_path: Option<PathBuf>,
    updates_path: Option<PathBuf>,
    format: Option<OutputFormat>,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Registry data file. `None` selects the embedded registry.
    pub registry_path: Option<PathBuf>,
    /// Legal updates file (JSON or YAML list) merged over the registry.
    pub updates_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load from an optional file and the process environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Load from an optional file and a caller-supplied environment lookup.
    pub fn load_with(
        config_path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let file: ConfigFile = if content.trim().is_empty() {
                ConfigFile::default()
            } else {
                serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            };
            tracing::debug!(path = %path.display(), "loaded config file");
            if file.registry_path.is_some() {
                config.registry_path = file.registry_path;
            }
            if file.updates_path.is_some() {
                config.updates_path = file.updates_path;
            }
            if let Some(format) = file.format {
                config.format = format;
            }
        }

        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        if let Some(path) = non_empty(ENV_REGISTRY_PATH) {
            config.registry_path = Some(PathBuf::from(path));
        }
        if let Some(path) = non_empty(ENV_UPDATES_PATH) {
            config.updates_path = Some(PathBuf::from(path));
        }
        if let Some(format) = non_empty(ENV_OUTPUT) {
            config.format = format.parse()?;
        }

        Ok(config)
    }

    /// Apply command-line flags, which win over every other source.
    pub fn with_overrides(
        mut self,
        registry_path: Option<PathBuf>,
        updates_path: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Self {
        if registry_path.is_some() {
            self.registry_path = registry_path;
        }
        if updates_path.is_some() {
            self.updates_path = updates_path;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = CliConfig::load_with(None, env_of(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn file_values_apply() {
        let file = config_file("registry_path: /data/reg.yaml\nformat: json\n");
        let config = CliConfig::load_with(Some(file.path()), env_of(&[])).unwrap();
        assert_eq!(config.registry_path, Some(PathBuf::from("/data/reg.yaml")));
        assert_eq!(config.updates_path, None);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn empty_file_is_defaults() {
        let file = config_file("");
        let config = CliConfig::load_with(Some(file.path()), env_of(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn env_overrides_file() {
        let file = config_file("registry_path: /from/file.yaml\nformat: json\n");
        let env = env_of(&[
            (ENV_REGISTRY_PATH, "/from/env.yaml"),
            (ENV_OUTPUT, "TEXT"),
            (ENV_UPDATES_PATH, "  "),
        ]);
        let config = CliConfig::load_with(Some(file.path()), env).unwrap();
        assert_eq!(config.registry_path, Some(PathBuf::from("/from/env.yaml")));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.updates_path, None);
    }

    #[test]
    fn flags_override_env() {
        let env = env_of(&[(ENV_UPDATES_PATH, "/env/updates.json"), (ENV_OUTPUT, "json")]);
        let config = CliConfig::load_with(None, env)
            .unwrap()
            .with_overrides(None, Some(PathBuf::from("/flag/updates.json")), Some(OutputFormat::Text));
        assert_eq!(config.updates_path, Some(PathBuf::from("/flag/updates.json")));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.registry_path, None);
    }

    #[test]
    fn bad_env_format_rejected() {
        let err = CliConfig::load_with(None, env_of(&[(ENV_OUTPUT, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat { ref value } if value == "xml"));
    }

    #[test]
    fn unknown_key_rejected() {
        let file = config_file("registry: /oops.yaml\n");
        assert!(matches!(
            CliConfig::load_with(Some(file.path()), env_of(&[])),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(matches!(
            CliConfig::load_with(Some(&path), env_of(&[])),
            Err(ConfigError::Read { .. })
        ));
    }
}
