use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lunisolar_calendar::{ConversionConfig, DEFAULT_WINDOW_MARGIN_DAYS};
use serde::Deserialize;

use crate::cli::CommonArgs;

/// Top-level configuration file. Every key is optional.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LunisolarToml {
    /// IANA timezone of input dates.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Time used when an input omits one.
    #[serde(default = "default_time")]
    pub time: String,

    /// Event table path.
    #[serde(default)]
    pub events: Option<PathBuf>,

    #[serde(default = "default_window_margin_days")]
    pub window_margin_days: u32,
}

impl Default for LunisolarToml {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            time: default_time(),
            events: None,
            window_margin_days: default_window_margin_days(),
        }
    }
}

fn default_timezone() -> String {
    "Asia/Shanghai".to_string()
}
fn default_time() -> String {
    "12:00".to_string()
}
fn default_window_margin_days() -> u32 {
    DEFAULT_WINDOW_MARGIN_DAYS
}

impl LunisolarToml {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Config file from `--config` (or defaults) with command-line overrides applied.
    pub fn resolve(common: &CommonArgs) -> Result<Self> {
        let mut config = match &common.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(events) = &common.events {
            config.events = Some(events.clone());
        }
        if let Some(tz) = &common.timezone {
            config.timezone = tz.clone();
        }
        Ok(config)
    }

    pub fn events_path(&self) -> Result<&Path> {
        self.events
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no event table: set `events` in config or use --events"))
    }

    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig::default().with_window_margin_days(self.window_margin_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: LunisolarToml = toml::from_str("").unwrap();
        assert_eq!(config, LunisolarToml::default());
        assert_eq!(config.timezone, "Asia/Shanghai");
        assert_eq!(config.time, "12:00");
        assert_eq!(config.window_margin_days, 30);
    }

    #[test]
    fn parses_all_keys() {
        let config: LunisolarToml = toml::from_str(
            r#"
            timezone = "Asia/Ho_Chi_Minh"
            time = "08:30"
            events = "data/events.txt"
            window_margin_days = 45
            "#,
        )
        .unwrap();
        assert_eq!(config.timezone, "Asia/Ho_Chi_Minh");
        assert_eq!(config.time, "08:30");
        assert_eq!(config.events_path().unwrap(), Path::new("data/events.txt"));
        assert_eq!(config.conversion_config().window_margin_days, 45);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<LunisolarToml>("timezone_id = \"UTC\"").is_err());
    }

    #[test]
    fn flags_override_file() {
        let common = CommonArgs {
            config: None,
            events: Some(PathBuf::from("/tmp/events.txt")),
            timezone: Some("Europe/Paris".to_string()),
        };
        let config = LunisolarToml::resolve(&common).unwrap();
        assert_eq!(config.timezone, "Europe/Paris");
        assert_eq!(config.events_path().unwrap(), Path::new("/tmp/events.txt"));
    }

    #[test]
    fn missing_events_is_reported() {
        let err = LunisolarToml::default().events_path().unwrap_err();
        assert!(err.to_string().contains("--events"));
    }
}
