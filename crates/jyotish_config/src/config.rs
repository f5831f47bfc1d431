use anyhow::{Context, Result, ensure};
use chrono::FixedOffset;
use jyotish_core::EngineConfig;
use jyotish_time::{IST_OFFSET_SECONDS, zone_from_minutes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Civil zone for dates and reported instants, minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Narrative language tag, `en` or `hi`.
    pub default_language: String,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            utc_offset_minutes: IST_OFFSET_SECONDS / 60,
            default_language: "en".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn zone(&self) -> Result<FixedOffset> {
        zone_from_minutes(self.utc_offset_minutes).context("utc_offset_minutes")
    }

    /// Checks every field that can be wrong independently of the others.
    pub fn validate(&self) -> Result<()> {
        self.engine.validate().context("engine")?;
        self.zone()?;
        ensure!(!self.log_filter.trim().is_empty(), "log_filter must not be empty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_core::BackendKind;

    #[test]
    fn defaults_are_valid() {
        let c = AppConfig::default();
        assert_eq!(c.utc_offset_minutes, 330);
        assert_eq!(c.engine.backend, BackendKind::Analytic);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn kernel_without_path_is_rejected() {
        let mut c = AppConfig::default();
        c.engine.backend = BackendKind::Kernel;
        let err = c.validate().expect_err("missing kernel path");
        assert!(format!("{err:#}").contains("kernel_path"));
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        let c = AppConfig {
            utc_offset_minutes: 15 * 60,
            ..AppConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
