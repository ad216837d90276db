use crate::error::{PersonaError, Result};
use crate::paths;
use crate::record::OnboardingRecord;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ProfileStore
// ---------------------------------------------------------------------------

/// Directory-rooted persistence for finished onboarding records, one YAML
/// file per user under `.persona/profiles/`. Accepts only fully-formed
/// records and writes them atomically; there is no partial-write path.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, user_id: &str) -> PathBuf {
        paths::profile_path(&self.root, user_id)
    }

    pub fn save(&self, record: &OnboardingRecord) -> Result<()> {
        paths::validate_user_id(&record.user_id)?;
        let data = serde_yaml::to_string(record)?;
        crate::io::atomic_write(&self.path_for(&record.user_id), data.as_bytes())
    }

    pub fn load(&self, user_id: &str) -> Result<OnboardingRecord> {
        paths::validate_user_id(user_id)?;
        let path = self.path_for(user_id);
        if !path.exists() {
            return Err(PersonaError::ProfileNotFound(user_id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let record: OnboardingRecord = serde_yaml::from_str(&data)?;
        Ok(record)
    }

    pub fn exists(&self, user_id: &str) -> bool {
        self.path_for(user_id).exists()
    }

    /// User ids with a stored profile, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let dir = paths::profiles_dir(&self.root);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(id) = name.strip_suffix(".yaml") {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype;
    use crate::assessment::RawResponse;
    use crate::resolver;
    use crate::types::TraitKey;
    use crate::voice::{self, VoiceInputs};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_record(user_id: &str) -> OnboardingRecord {
        let responses: BTreeMap<_, _> = TraitKey::all()
            .iter()
            .map(|k| (*k, RawResponse { left: 1, right: 5 }))
            .collect();
        let traits = resolver::resolve(&responses, &BTreeMap::new()).unwrap();
        let blend = archetype::blend(&traits);
        let value_ids: Vec<String> = ["curiosity", "family", "ambition", "health", "justice"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let inspiration_ids: Vec<String> = [
            "marie-curie",
            "ada-lovelace",
            "frida-kahlo",
            "nelson-mandela",
            "serena-williams",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let voice_profile = voice::generate(&VoiceInputs {
            blend: &blend,
            display_name: None,
            value_ids: &value_ids,
            inspiration_ids: &inspiration_ids,
            future_self: None,
        })
        .unwrap();
        OnboardingRecord {
            user_id: user_id.to_string(),
            traits,
            archetype_blend: blend,
            voice_profile,
            selected_value_ids: value_ids,
            selected_inspiration_ids: inspiration_ids,
            future_self: Some("braver".to_string()),
            completed_at: "2026-08-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());
        let record = sample_record("ada");
        store.save(&record).unwrap();

        assert!(store.exists("ada"));
        let loaded = store.load("ada").unwrap();
        assert_eq!(loaded, record);

        // re-serialization is byte-identical
        assert_eq!(
            serde_yaml::to_string(&loaded).unwrap(),
            serde_yaml::to_string(&record).unwrap()
        );
    }

    #[test]
    fn load_missing_profile() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());
        assert!(matches!(
            store.load("nobody"),
            Err(PersonaError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn rejects_bad_user_id() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());
        let mut record = sample_record("ada");
        record.user_id = "../escape".to_string();
        assert!(matches!(
            store.save(&record),
            Err(PersonaError::InvalidUserId(_))
        ));
    }

    #[test]
    fn list_is_sorted() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path());
        store.save(&sample_record("zoe")).unwrap();
        store.save(&sample_record("ada")).unwrap();
        assert_eq!(store.list().unwrap(), vec!["ada", "zoe"]);
    }
}
