use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use tracing::debug;

use crate::config::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "jyotish.toml";
/// Prefix of overriding environment variables; `__` separates nested keys,
/// as in `JYOTISH_ENGINE__BACKEND=kernel`.
pub const ENV_PREFIX: &str = "JYOTISH_";

/// Layers defaults, a config file and the environment, later layers
/// winning. A missing file is not an error.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: PathBuf,
    use_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CONFIG_FILE),
            use_env: true,
        }
    }

    /// Reads `path` instead of `jyotish.toml`; a `.json` extension selects
    /// the JSON format.
    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self {
            file: path.as_ref().to_path_buf(),
            ..Self::new()
        }
    }

    /// Skips the environment layer.
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    pub fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        let is_json = self
            .file
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        figment = if is_json {
            figment.merge(Json::file(&self.file))
        } else {
            figment.merge(Toml::file(&self.file))
        };
        if self.use_env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }
        figment
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value is invalid.
    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .with_context(|| format!("reading configuration from {}", self.file.display()))?;
        config.validate()?;
        debug!(
            file = %self.file.display(),
            backend = ?config.engine.backend,
            offset_minutes = config.utc_offset_minutes,
            "configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_core::{BackendKind, NodeMode};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = ConfigLoader::with_file(dir.path().join("absent.toml"))
            .without_env()
            .load()
            .expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn toml_overrides_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("jyotish.toml");
        fs::write(
            &path,
            "utc_offset_minutes = 345\ndefault_language = \"hi\"\n\n[engine]\nnode_mode = \"true\"\n",
        )
        .expect("write");
        let config = ConfigLoader::with_file(&path).without_env().load().expect("load");
        assert_eq!(config.utc_offset_minutes, 345);
        assert_eq!(config.default_language, "hi");
        assert_eq!(config.engine.node_mode, NodeMode::True);
        assert_eq!(config.engine.backend, BackendKind::Analytic);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn json_file_is_read() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("jyotish.json");
        fs::write(&path, r#"{ "log_filter": "debug" }"#).expect("write");
        let config = ConfigLoader::with_file(&path).without_env().load().expect("load");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn invalid_values_fail_with_context() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("jyotish.toml");
        fs::write(&path, "[engine]\nbackend = \"kernel\"\n").expect("write");
        let err = ConfigLoader::with_file(&path)
            .without_env()
            .load()
            .expect_err("kernel without a path");
        assert!(format!("{err:#}").contains("kernel_path"));

        fs::write(&path, "utc_offset_minutes = \"east\"\n").expect("write");
        let err = ConfigLoader::with_file(&path)
            .without_env()
            .load()
            .expect_err("type mismatch");
        assert!(format!("{err:#}").contains("reading configuration"));
    }
}
