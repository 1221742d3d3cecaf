//! Persisted collapse preference.
//!
//! One key-value pair in `.navrail/ui.local.toml`. Read once at startup,
//! written through on every toggle. Writes are best-effort: a failed write
//! is logged and dropped, never surfaced to the user, and never blocks the
//! in-memory state update.

use std::path::{Path, PathBuf};

use navrail_core::prelude::*;
use serde::{Deserialize, Serialize};

pub const NAVRAIL_DIR: &str = ".navrail";
const PREFS_FILENAME: &str = "ui.local.toml";
const PREFS_TEMP_FILENAME: &str = ".ui.local.toml.tmp";

/// On-disk shape of the UI preference file.
///
/// `collapsed` must be the TOML boolean literal `true` to start collapsed;
/// anything else (absent key, wrong type, unparseable file) is treated as
/// "no stored preference" and defaults to expanded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct UiPrefs {
    collapsed: bool,
}

/// Durable store for the collapse preference.
#[derive(Debug, Clone)]
pub struct PersistedPreference {
    base_dir: PathBuf,
}

impl PersistedPreference {
    /// Store rooted at `base_dir` (the preference file lives in
    /// `base_dir/.navrail/ui.local.toml`). Injectable for tests.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn prefs_path(&self) -> PathBuf {
        self.base_dir.join(NAVRAIL_DIR).join(PREFS_FILENAME)
    }

    /// Read the stored collapse preference.
    ///
    /// Absent, unreadable, or malformed files all yield `false` (expanded).
    pub fn load_collapsed(&self) -> bool {
        let path = self.prefs_path();

        if !path.exists() {
            debug!("No preference file at {:?}", path);
            return false;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<UiPrefs>(&content) {
                Ok(prefs) => {
                    debug!("Loaded preferences from {:?}", path);
                    prefs.collapsed
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    false
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                false
            }
        }
    }

    /// Write the collapse preference.
    ///
    /// Uses atomic write (temp file + rename). The caller treats failure as
    /// non-fatal.
    pub fn store_collapsed(&self, collapsed: bool) -> Result<()> {
        let dir = self.base_dir.join(NAVRAIL_DIR);

        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| {
                Error::preference_write(format!("Failed to create .navrail dir: {}", e))
            })?;
        }

        let prefs_path = dir.join(PREFS_FILENAME);
        let temp_path = dir.join(PREFS_TEMP_FILENAME);

        let header = "# UI preferences (not tracked in git)\n\n";
        let content = toml::to_string_pretty(&UiPrefs { collapsed })
            .map_err(|e| Error::preference_write(format!("Failed to serialize: {}", e)))?;

        std::fs::write(&temp_path, format!("{}{}", header, content))
            .map_err(|e| Error::preference_write(format!("Failed to write temp file: {}", e)))?;

        std::fs::rename(&temp_path, &prefs_path)
            .map_err(|e| Error::preference_write(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved collapsed={} to {:?}", collapsed, prefs_path);
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_to_expanded_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PersistedPreference::new(dir.path());
        assert!(!prefs.load_collapsed());
    }

    #[test]
    fn test_store_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PersistedPreference::new(dir.path());

        prefs.store_collapsed(true).unwrap();
        assert!(prefs.load_collapsed());

        prefs.store_collapsed(false).unwrap();
        assert!(!prefs.load_collapsed());
    }

    #[test]
    fn test_malformed_file_defaults_to_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let navrail_dir = dir.path().join(NAVRAIL_DIR);
        std::fs::create_dir_all(&navrail_dir).unwrap();
        std::fs::write(navrail_dir.join(PREFS_FILENAME), "not [valid toml").unwrap();

        let prefs = PersistedPreference::new(dir.path());
        assert!(!prefs.load_collapsed());
    }

    #[test]
    fn test_wrong_value_type_defaults_to_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let navrail_dir = dir.path().join(NAVRAIL_DIR);
        std::fs::create_dir_all(&navrail_dir).unwrap();
        // A string "true" is not the boolean literal; treated as absent
        std::fs::write(navrail_dir.join(PREFS_FILENAME), "collapsed = \"true\"").unwrap();

        let prefs = PersistedPreference::new(dir.path());
        assert!(!prefs.load_collapsed());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let navrail_dir = dir.path().join(NAVRAIL_DIR);
        std::fs::create_dir_all(&navrail_dir).unwrap();
        std::fs::write(
            navrail_dir.join(PREFS_FILENAME),
            "collapsed = true\nfuture_key = 42",
        )
        .unwrap();

        let prefs = PersistedPreference::new(dir.path());
        assert!(prefs.load_collapsed());
    }

    #[test]
    fn test_store_fails_when_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        // Occupy the .navrail path with a plain file so create_dir_all fails
        std::fs::write(dir.path().join(NAVRAIL_DIR), "occupied").unwrap();

        let prefs = PersistedPreference::new(dir.path());
        let result = prefs.store_collapsed(true);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_recoverable());
    }
}
