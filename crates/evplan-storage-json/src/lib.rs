//! JSON file storage for event preferences and saved budgets.
//!
//! Layout under the data directory:
//!
//! ```text
//! preferences.json
//! budgets/budget_<yyyymmdd_hhmmss>_<id>.json
//! ```

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use evplan_core::{storage::PreferencesStore, CoreError};
use evplan_domain::{EventPreferences, SavedBudget};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

const PREFERENCES_FILE: &str = "preferences.json";
const BUDGETS_DIR: &str = "budgets";
const JSON_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const BUDGET_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const DEFAULT_BUDGET_RETENTION: usize = 20;

/// Filesystem-backed [`PreferencesStore`].
#[derive(Debug, Clone)]
pub struct JsonPreferencesStore {
    root: PathBuf,
    retention: usize,
}

impl JsonPreferencesStore {
    pub fn new(root: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(root, DEFAULT_BUDGET_RETENTION)
    }

    /// Keeps at most `retention` saved budgets; the oldest are pruned on save.
    pub fn with_retention(root: PathBuf, retention: usize) -> Result<Self, CoreError> {
        fs::create_dir_all(root.join(BUDGETS_DIR))?;
        Ok(Self {
            root,
            retention: retention.max(1),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    pub fn budgets_dir(&self) -> PathBuf {
        self.root.join(BUDGETS_DIR)
    }

    /// Saved budget by id.
    pub fn load_budget(&self, id: Uuid) -> Result<SavedBudget, CoreError> {
        self.list_saved_budgets()?
            .into_iter()
            .find(|budget| budget.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("saved budget `{id}`")))
    }

    /// Removes a saved budget. Missing ids are not an error.
    pub fn delete_budget(&self, id: Uuid) -> Result<(), CoreError> {
        for (path, budget) in self.read_budgets()? {
            if budget.id == id {
                fs::remove_file(&path)?;
                info!(%id, "saved budget deleted");
            }
        }
        Ok(())
    }

    fn budget_path(&self, budget: &SavedBudget) -> PathBuf {
        let stamp = budget.created_at.format(BUDGET_TIMESTAMP_FORMAT);
        self.budgets_dir()
            .join(format!("budget_{stamp}_{}.{JSON_EXTENSION}", budget.id))
    }

    /// Parsed budgets paired with their files, newest first. Unreadable files are skipped.
    fn read_budgets(&self) -> Result<Vec<(PathBuf, SavedBudget)>, CoreError> {
        let dir = self.budgets_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut budgets = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            let is_json = path.extension().and_then(|ext| ext.to_str()) == Some(JSON_EXTENSION);
            if !path.is_file() || !is_json {
                continue;
            }
            match read_json::<SavedBudget>(&path) {
                Ok(budget) => budgets.push((path, budget)),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable saved budget")
                }
            }
        }
        budgets.sort_by_key(|(_, budget)| Reverse(budget.created_at));
        Ok(budgets)
    }

    fn prune_budgets(&self) -> Result<(), CoreError> {
        for (path, budget) in self.read_budgets()?.into_iter().skip(self.retention) {
            fs::remove_file(&path)?;
            debug!(id = %budget.id, "pruned old saved budget");
        }
        Ok(())
    }
}

impl PreferencesStore for JsonPreferencesStore {
    fn save_preferences(&self, prefs: &EventPreferences) -> Result<(), CoreError> {
        let path = self.preferences_path();
        write_json(&path, prefs)?;
        info!(path = %path.display(), city = %prefs.city, "preferences saved");
        Ok(())
    }

    fn latest_preferences(&self) -> Result<Option<EventPreferences>, CoreError> {
        let path = self.preferences_path();
        if !path.exists() {
            return Ok(None);
        }
        read_json(&path).map(Some)
    }

    fn save_budget(&self, budget: &SavedBudget) -> Result<(), CoreError> {
        write_json(&self.budget_path(budget), budget)?;
        info!(id = %budget.id, name = %budget.name, "budget saved");
        self.prune_budgets()
    }

    fn list_saved_budgets(&self) -> Result<Vec<SavedBudget>, CoreError> {
        Ok(self
            .read_budgets()?
            .into_iter()
            .map(|(_, budget)| budget)
            .collect())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    let written = File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(json.as_bytes())?;
            file.flush()
        })
        .and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
