pub mod build_info;

use std::{env, fs, path::PathBuf, sync::Once};

use evplan_config::Config;
use evplan_core::PricingTables;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::AppError;

const DEFAULT_DIR_NAME: &str = ".evplan";
const DEFAULT_DIRECTIVE: &str = "evplan=info";

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber. `RUST_LOG` overrides the `evplan=info` default.
/// Events go to stderr so command output stays machine readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Returns the application directory, `$EVPLAN_HOME` or `~/.evplan`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EVPLAN_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Pricing tables for a session: the configured price list, or the built-in tables.
pub fn load_pricing(config: &Config) -> Result<PricingTables, AppError> {
    let Some(path) = &config.pricing_file else {
        return Ok(PricingTables::standard().clone());
    };
    let data = fs::read_to_string(path)?;
    let tables = PricingTables::from_json(&data)?;
    info!(path = %path.display(), version = tables.version, "custom pricing loaded");
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pricing_is_the_builtin_table() {
        let tables = load_pricing(&Config::default()).expect("pricing");
        assert_eq!(&tables, PricingTables::standard());
    }

    #[test]
    fn missing_pricing_file_is_an_io_error() {
        let mut config = Config::default();
        config.pricing_file = Some(PathBuf::from("/nonexistent/evplan/prices.json"));
        assert!(matches!(load_pricing(&config), Err(AppError::Io(_))));
    }
}
