//! @acp:module "Form Store"
//! @acp:summary "Persisted form values and last result in a key-value JSON file"
//! @acp:domain cli
//! @acp:layer io
//!
//! The file is a flat JSON object of named blobs. Form values live under
//! [`FORM_KEY`] as key→text pairs; the last displayed brief lives under
//! [`RESULT_KEY`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BriefError, Result};
use crate::generate::Source;
use crate::requirements::UserRequirements;

/// Blob key holding the last-submitted form fields
pub const FORM_KEY: &str = "promptGeneratorData";

/// Blob key holding the last displayed result
pub const RESULT_KEY: &str = "lastResult";

/// @acp:summary "Last displayed brief with provenance"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub text: String,
    pub source: Source,
    pub saved_at: DateTime<Utc>,
}

/// @acp:summary "Key-value blob file"
#[derive(Debug, Clone)]
pub struct FormStore {
    path: PathBuf,
}

impl FormStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, blobs: &BTreeMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(blobs)?)?;
        Ok(())
    }

    /// Blobs to rewrite; an unparseable file is replaced rather than kept
    fn read_for_write(&self) -> Result<(BTreeMap<String, Value>, bool)> {
        match self.read_all() {
            Ok(blobs) => Ok((blobs, false)),
            Err(BriefError::Json(e)) => {
                tracing::warn!("Overwriting unreadable store {}: {}", self.path.display(), e);
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn put(&self, key: &str, value: Value) -> Result<()> {
        let (mut blobs, _) = self.read_for_write()?;
        blobs.insert(key.to_string(), value);
        self.write_all(&blobs)
    }

    fn remove(&self, key: &str) -> Result<Option<Value>> {
        let (mut blobs, corrupt) = self.read_for_write()?;
        let removed = blobs.remove(key);
        if removed.is_some() || corrupt {
            self.write_all(&blobs)?;
        }
        Ok(removed)
    }

    /// @acp:summary "Restore saved form fields (empty values are skipped)"
    pub fn load_form(&self) -> Result<UserRequirements> {
        let blobs = self.read_all()?;
        match blobs.get(FORM_KEY) {
            Some(value) => {
                let fields: BTreeMap<String, String> = serde_json::from_value(value.clone())?;
                Ok(UserRequirements::from_fields(&fields))
            }
            None => Ok(UserRequirements::default()),
        }
    }

    /// Overwrite the saved form fields
    pub fn save_form(&self, requirements: &UserRequirements) -> Result<()> {
        self.put(FORM_KEY, serde_json::to_value(requirements.to_fields())?)
    }

    /// Returns whether anything was stored
    pub fn clear_form(&self) -> Result<bool> {
        Ok(self.remove(FORM_KEY)?.is_some())
    }

    pub fn save_result(&self, text: &str, source: Source) -> Result<StoredResult> {
        let stored = StoredResult {
            text: text.to_string(),
            source,
            saved_at: Utc::now(),
        };
        self.put(RESULT_KEY, serde_json::to_value(&stored)?)?;
        Ok(stored)
    }

    pub fn load_result(&self) -> Result<Option<StoredResult>> {
        let blobs = self.read_all()?;
        match blobs.get(RESULT_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Returns whether a non-empty result was stored
    pub fn clear_result(&self) -> Result<bool> {
        let removed = self.remove(RESULT_KEY)?;
        Ok(removed
            .and_then(|value| serde_json::from_value::<StoredResult>(value).ok())
            .map(|r| !r.text.is_empty())
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FormStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FormStore::new(dir.path().join("nested").join("storage.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_restores_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load_form().unwrap().is_empty());
        assert!(store.load_result().unwrap().is_none());
    }

    #[test]
    fn test_form_round_trip_and_clear() {
        let (_dir, store) = temp_store();
        let req = UserRequirements {
            theme: "絵本のサイト".into(),
            keywords: "ファンタジー".into(),
            ..Default::default()
        };
        store.save_form(&req).unwrap();
        assert_eq!(store.load_form().unwrap(), req);

        assert!(store.clear_form().unwrap());
        assert!(store.load_form().unwrap().is_empty());
        assert!(!store.clear_form().unwrap());
    }

    #[test]
    fn test_form_and_result_are_independent() {
        let (_dir, store) = temp_store();
        store.save_form(&UserRequirements::with_theme("カフェ")).unwrap();
        store.save_result("brief", Source::Fallback).unwrap();

        assert!(store.clear_result().unwrap());
        assert_eq!(store.load_form().unwrap().theme, "カフェ");
        assert!(!store.clear_result().unwrap());
    }

    #[test]
    fn test_stored_form_uses_form_keys() {
        let (_dir, store) = temp_store();
        let req = UserRequirements {
            theme: "教室".into(),
            freeform_notes: "メモ".into(),
            ..Default::default()
        };
        store.save_form(&req).unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw[FORM_KEY]["memo"], "メモ");
        assert_eq!(raw[FORM_KEY]["theme"], "教室");
    }

    #[test]
    fn test_unreadable_file_is_overwritten_on_write() {
        let (_dir, store) = temp_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load_form().is_err());
        store.save_form(&UserRequirements::with_theme("カフェ")).unwrap();
        assert_eq!(store.load_form().unwrap().theme, "カフェ");
    }

    #[test]
    fn test_clear_resets_unreadable_file() {
        let (_dir, store) = temp_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(!store.clear_form().unwrap());
        assert!(store.load_form().unwrap().is_empty());

        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(!store.clear_result().unwrap());
        assert!(store.load_result().unwrap().is_none());
    }
}
