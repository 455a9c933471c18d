use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "locale",
    "currency",
    "ui_color_enabled",
    "strict_validation",
    "max_scenarios",
    "recalc_debounce_ms",
    "pricing_file",
    "data_dir",
];

/// Stores user-configurable planner preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Reject impossible parameters (no guests, zero duration) instead of pricing them.
    #[serde(default)]
    pub strict_validation: bool,
    #[serde(default = "Config::default_max_scenarios")]
    pub max_scenarios: usize,
    /// Quiet period an interactive front end waits after the last input change before
    /// recalculating. The CLI recalculates on each command, so it only reports this value.
    #[serde(default = "Config::default_recalc_debounce_ms")]
    pub recalc_debounce_ms: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional JSON price list replacing the built-in pricing tables.
    pub pricing_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for preferences and saved budgets.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            strict_validation: false,
            max_scenarios: Self::default_max_scenarios(),
            recalc_debounce_ms: Self::default_recalc_debounce_ms(),
            pricing_file: None,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_max_scenarios() -> usize {
        5
    }

    pub fn default_recalc_debounce_ms() -> u64 {
        500
    }

    /// The configured data directory, or `app_dir` when none is set.
    pub fn resolve_data_dir(&self, app_dir: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| app_dir.to_path_buf())
    }

    /// Updates one setting from its textual form. Empty values clear optional paths.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let trimmed = value.trim();
        match key {
            "locale" => self.locale = trimmed.to_string(),
            "currency" => self.currency = trimmed.to_ascii_uppercase(),
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(key, trimmed)?,
            "strict_validation" => self.strict_validation = parse_bool(key, trimmed)?,
            "max_scenarios" => {
                let parsed: usize = trimmed
                    .parse()
                    .map_err(|_| invalid(key, trimmed, "expected a number"))?;
                if parsed == 0 {
                    return Err(invalid(key, trimmed, "must be at least 1"));
                }
                self.max_scenarios = parsed;
            }
            "recalc_debounce_ms" => {
                self.recalc_debounce_ms = trimmed
                    .parse()
                    .map_err(|_| invalid(key, trimmed, "expected milliseconds"))?;
            }
            "pricing_file" => self.pricing_file = optional_path(trimmed),
            "data_dir" => self.data_dir = optional_path(trimmed),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Current value of a setting in the textual form accepted by [`Config::set`].
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "locale" => self.locale.clone(),
            "currency" => self.currency.clone(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "strict_validation" => self.strict_validation.to_string(),
            "max_scenarios" => self.max_scenarios.to_string(),
            "recalc_debounce_ms" => self.recalc_debounce_ms.to_string(),
            "pricing_file" => display_path(&self.pricing_file),
            "data_dir" => display_path(&self.data_dir),
            _ => return None,
        };
        Some(value)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value, "expected true or false")),
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
