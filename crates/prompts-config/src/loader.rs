//! Loading configuration from files and the environment.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::SiteConfig;

/// Environment variable overriding `web.host`.
pub const ENV_HOST: &str = "PROMPTS_HOST";
/// Environment variable overriding `web.port`.
pub const ENV_PORT: &str = "PROMPTS_PORT";
/// Environment variable overriding `web.static_dir`.
pub const ENV_STATIC_DIR: &str = "PROMPTS_STATIC_DIR";
/// Environment variable overriding `logging.level`.
pub const ENV_LOG: &str = "PROMPTS_LOG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but did not parse.
    #[error("failed to parse {format} config: {message}")]
    Parse {
        /// Format the file was parsed as.
        format: &'static str,
        /// Parser message.
        message: String,
    },

    /// The extension does not map to an enabled format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A value was parsed but is not usable.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// File formats understood by [`ConfigLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

/// Loads [`SiteConfig`] values.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from `path` when given, otherwise start from defaults. Environment
    /// overrides are applied last and the result is validated.
    pub async fn load(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path).await?,
            None => {
                debug!("no config file given, using defaults");
                SiteConfig::default()
            }
        };

        apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a single file. No overrides, no validation.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self::parse(&contents, format)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse `contents` in the given format.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<SiteConfig, ConfigError> {
        match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| ConfigError::Parse {
                format: "json",
                message: e.to_string(),
            }),
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse {
                format: "toml",
                message: e.to_string(),
            }),
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => {
                // An empty YAML document parses as null, not as an empty map.
                if contents.trim().is_empty() {
                    return Ok(SiteConfig::default());
                }
                serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse {
                    format: "yaml",
                    message: e.to_string(),
                })
            }
            #[allow(unreachable_patterns)]
            other => Err(ConfigError::UnsupportedFormat(format!("{other:?}"))),
        }
    }
}

/// Apply `PROMPTS_*` variables from the process environment.
pub fn apply_env_overrides(config: &mut SiteConfig) -> Result<(), ConfigError> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup. Empty values are ignored.
pub fn apply_overrides_from<F>(config: &mut SiteConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(host) = get(ENV_HOST) {
        config.web.host = host;
    }
    if let Some(port) = get(ENV_PORT) {
        config.web.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: ENV_PORT.to_string(),
            reason: format!("'{port}' is not a port number"),
        })?;
    }
    if let Some(dir) = get(ENV_STATIC_DIR) {
        config.web.static_dir = Some(PathBuf::from(dir));
    }
    if let Some(level) = get(ENV_LOG) {
        config.logging.level = level;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_toml() {
        let file = temp_config(
            ".toml",
            r#"
            [web]
            host = "0.0.0.0"
            port = 8080

            [logging]
            level = "debug"
            "#,
        );

        let config = ConfigLoader::load_from_file(file.path()).await.unwrap();
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.ansi);
    }

    #[tokio::test]
    async fn loads_yaml_and_json() {
        let yaml = temp_config(".yml", "web:\n  port: 4000\n");
        let config = ConfigLoader::load_from_file(yaml.path()).await.unwrap();
        assert_eq!(config.web.port, 4000);
        assert_eq!(config.web.host, "127.0.0.1");

        let json = temp_config(".json", r#"{"web":{"static_dir":"/srv/public"}}"#);
        let config = ConfigLoader::load_from_file(json.path()).await.unwrap();
        assert_eq!(config.web.static_dir, Some(PathBuf::from("/srv/public")));
    }

    #[tokio::test]
    async fn empty_files_give_defaults() {
        let toml = temp_config(".toml", "");
        assert_eq!(
            ConfigLoader::load_from_file(toml.path()).await.unwrap(),
            SiteConfig::default()
        );

        let yaml = temp_config(".yaml", "");
        assert_eq!(
            ConfigLoader::load_from_file(yaml.path()).await.unwrap(),
            SiteConfig::default()
        );
    }

    #[tokio::test]
    async fn unknown_extension_is_rejected() {
        let file = temp_config(".ini", "port=1");
        let err = ConfigLoader::load_from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = ConfigLoader::load_from_file("/nonexistent/prompts.toml")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_parse_error() {
        let file = temp_config(".toml", "[web\nport = ");
        let err = ConfigLoader::load_from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "toml", .. }));
    }

    #[test]
    fn overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, " 9000 "),
            (ENV_STATIC_DIR, "/tmp/public"),
            (ENV_LOG, ""),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        apply_overrides_from(&mut config, |k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 9000);
        assert_eq!(config.web.static_dir, Some(PathBuf::from("/tmp/public")));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = SiteConfig::default();
        let err = apply_overrides_from(&mut config, |k| {
            (k == ENV_PORT).then(|| "http".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[tokio::test]
    #[serial]
    async fn load_applies_process_environment() {
        std::env::set_var(ENV_PORT, "3100");
        let result = ConfigLoader::load(None).await;
        std::env::remove_var(ENV_PORT);

        assert_eq!(result.unwrap().web.port, 3100);
    }

    #[tokio::test]
    #[serial]
    async fn load_validates_result() {
        std::env::set_var(ENV_LOG, "loud");
        let result = ConfigLoader::load(None).await;
        std::env::remove_var(ENV_LOG);

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
