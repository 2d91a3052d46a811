use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Environment variable prefix for host configuration overrides.
pub const ENV_PREFIX: &str = "LOGVIEW_PREFS";

/// Host configuration: where settings and logs live, and how verbose logging is.
///
/// Layered with the `config` crate:
/// 1. Built-in defaults
/// 2. Optional YAML file passed to [`AppConfig::load`]
/// 3. Environment variables such as `LOGVIEW_PREFS__SETTINGS_DIR`
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub settings_dir: Utf8PathBuf,
    pub log_dir: Utf8PathBuf,
    pub log_prefix: String,
    pub debug_mode: bool,
    pub console_output: bool,
}

impl AppConfig {
    /// Build the configuration from defaults, an optional file and the environment.
    ///
    /// # Arguments
    /// * `config_file` - Optional YAML file; ignored if it does not exist
    pub fn load(config_file: Option<&Utf8Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("settings_dir", "settings")?
            .set_default("log_dir", "logs")?
            .set_default("log_prefix", "logview-prefs")?
            .set_default("debug_mode", false)?
            .set_default("console_output", true)?;

        if let Some(path) = config_file {
            builder = builder.add_source(
                config::File::new(path.as_str(), config::FileFormat::Yaml).required(false),
            );
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build host configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to parse host configuration")?;

        tracing::debug!("Host configuration: {:?}", app_config);
        Ok(app_config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_dir: Utf8PathBuf::from("settings"),
            log_dir: Utf8PathBuf::from("logs"),
            log_prefix: "logview-prefs".to_string(),
            debug_mode: false,
            console_output: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(config.log_prefix, defaults.log_prefix);
        assert_eq!(config.log_dir, defaults.log_dir);
    }

    #[test]
    fn test_load_missing_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().join("host.yaml")).unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.log_prefix, "logview-prefs");
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().join("host.yaml")).unwrap();
        fs::write(
            &path,
            "settings_dir: /srv/prefs\nlog_prefix: viewer\ndebug_mode: true\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.settings_dir, Utf8PathBuf::from("/srv/prefs"));
        assert_eq!(config.log_prefix, "viewer");
        assert!(config.debug_mode);
        assert!(config.console_output);
    }
}
