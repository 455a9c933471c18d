use std::{
    cmp::Reverse,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, info, warn};

use crate::{Config, ConfigError};

const CONFIG_FILE: &str = "config.json";
const SNAPSHOT_PREFIX: &str = "config_";
const SNAPSHOT_EXTENSION: &str = "json";
const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Loads, saves and snapshots the planner [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf, backups_dir: PathBuf) -> Self {
        Self {
            config_path,
            backups_dir,
        }
    }

    /// Lays out `<base>/config/config.json` and `<base>/config/backups`.
    pub fn with_base_dir(base: &Path) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        let backups_dir = config_dir.join("backups");
        fs::create_dir_all(&backups_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE), backups_dir))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Reads the stored config, or the defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        read_config(&self.config_path)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        write_config(&self.config_path, config)?;
        info!(path = %self.config_path.display(), "configuration saved");
        Ok(())
    }

    /// Writes a timestamped snapshot and returns its file name.
    pub fn backup(&self, config: &Config, note: Option<&str>) -> Result<String, ConfigError> {
        let stamp = Utc::now().format(SNAPSHOT_TIMESTAMP_FORMAT);
        let name = match note.and_then(slugify) {
            Some(label) => format!("{SNAPSHOT_PREFIX}{stamp}_{label}.{SNAPSHOT_EXTENSION}"),
            None => format!("{SNAPSHOT_PREFIX}{stamp}.{SNAPSHOT_EXTENSION}"),
        };
        write_config(&self.backups_dir.join(&name), config)?;
        info!(backup = %name, "configuration snapshot written");
        Ok(name)
    }

    /// Reads a snapshot by file name. The caller decides whether to save it.
    pub fn restore(&self, backup_name: &str) -> Result<Config, ConfigError> {
        let is_plain_name = Path::new(backup_name)
            .file_name()
            .is_some_and(|name| name == backup_name);
        let path = self.backups_dir.join(backup_name);
        if !is_plain_name || !path.is_file() {
            warn!(backup = backup_name, "configuration snapshot not found");
            return Err(ConfigError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("configuration backup `{backup_name}` not found"),
            )));
        }
        let config = read_config(&path)?;
        info!(backup = backup_name, "configuration snapshot restored");
        Ok(config)
    }

    /// Snapshot file names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>, ConfigError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort_by_key(|name| Reverse((snapshot_time(name), name.clone())));
        Ok(names)
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
}

fn write_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|err| ConfigError::Serde(err.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    let mut file = File::create(&tmp)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Lower-case alphanumerics joined by single dashes.
fn slugify(note: &str) -> Option<String> {
    let slug = note
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    (!slug.is_empty()).then_some(slug)
}

fn snapshot_time(name: &str) -> Option<DateTime<Utc>> {
    let stem = name
        .strip_prefix(SNAPSHOT_PREFIX)?
        .strip_suffix(SNAPSHOT_EXTENSION)?
        .trim_end_matches('.');
    // date and time are the first two underscore-separated segments
    let mut segments = stem.splitn(3, '_');
    let raw = format!("{}_{}", segments.next()?, segments.next()?);
    NaiveDateTime::parse_from_str(&raw, SNAPSHOT_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("  Before Diwali!! pricing "), Some("before-diwali-pricing".into()));
        assert_eq!(slugify("..."), None);
    }

    #[test]
    fn snapshot_time_reads_name_with_and_without_note() {
        let plain = snapshot_time("config_20240102_0930.json").expect("timestamp");
        let noted = snapshot_time("config_20240102_0930_pre-import.json").expect("timestamp");
        assert_eq!(plain, noted);
        assert!(snapshot_time("notes.json").is_none());
    }
}
