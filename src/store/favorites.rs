// Saved cafes store.
// A flat JSON array in one file, rewritten in full on every save.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::overpass::Cafe;

/// Result of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Saved => "Cafe saved!",
            SaveOutcome::AlreadySaved => "Already saved!",
        }
    }
}

/// File-backed list of saved cafes.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all saved cafes. A missing file or `null` is an empty list.
    pub fn load(&self) -> Result<Vec<Cafe>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        let saved: Option<Vec<Cafe>> = serde_json::from_str(&contents)?;
        Ok(saved.unwrap_or_default())
    }

    /// Append `cafe` unless a saved entry already has its id.
    pub fn save(&self, cafe: &Cafe) -> Result<SaveOutcome> {
        let mut saved = self.load()?;
        if saved.iter().any(|c| c.id == cafe.id) {
            return Ok(SaveOutcome::AlreadySaved);
        }

        saved.push(cafe.clone());
        self.write_all(&saved)?;
        tracing::info!(id = cafe.id, name = cafe.display_name(), "saved cafe");
        Ok(SaveOutcome::Saved)
    }

    /// Overwrite the stored list.
    fn write_all(&self, cafes: &[Cafe]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(cafes)?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CuppaError;
    use tempfile::TempDir;

    fn cafe(id: u64, name: &str) -> Cafe {
        serde_json::from_value(serde_json::json!({
            "type": "node",
            "id": id,
            "lat": 45.5,
            "lon": -73.56,
            "tags": { "amenity": "cafe", "name": name }
        }))
        .unwrap()
    }

    fn store(dir: &TempDir) -> FavoritesStore {
        FavoritesStore::new(dir.path().join("nested").join("favorites.json"))
    }

    #[test]
    fn test_load_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(store(&temp_dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_new_persists() {
        let temp_dir = TempDir::new().unwrap();
        let favorites = store(&temp_dir);

        assert_eq!(favorites.save(&cafe(1, "Olimpico")).unwrap(), SaveOutcome::Saved);
        assert_eq!(favorites.save(&cafe(2, "Myriade")).unwrap(), SaveOutcome::Saved);

        // A fresh handle sees the same data.
        let reread = FavoritesStore::new(favorites.path()).load().unwrap();
        assert_eq!(reread, vec![cafe(1, "Olimpico"), cafe(2, "Myriade")]);
    }

    #[test]
    fn test_save_duplicate_id_not_duplicated() {
        let temp_dir = TempDir::new().unwrap();
        let favorites = store(&temp_dir);

        favorites.save(&cafe(1, "Olimpico")).unwrap();
        let outcome = favorites.save(&cafe(1, "Renamed")).unwrap();

        assert_eq!(outcome, SaveOutcome::AlreadySaved);
        let saved = favorites.load().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].display_name(), "Olimpico");
    }

    #[test]
    fn test_saved_copy_is_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let favorites = store(&temp_dir);
        favorites.save(&cafe(9, "Pikolo")).unwrap();

        let raw = fs::read_to_string(favorites.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["type"], "node");
        assert_eq!(value[0]["tags"]["amenity"], "cafe");
    }

    #[test]
    fn test_null_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("favorites.json");
        fs::write(&path, "null").unwrap();
        let favorites = FavoritesStore::new(&path);

        assert!(favorites.load().unwrap().is_empty());
        assert_eq!(favorites.save(&cafe(4, "Elbgold")).unwrap(), SaveOutcome::Saved);
        assert_eq!(favorites.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_error_and_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("favorites.json");
        fs::write(&path, "not json").unwrap();
        let favorites = FavoritesStore::new(&path);

        assert!(matches!(favorites.load(), Err(CuppaError::Json(_))));
        assert!(favorites.save(&cafe(1, "Olimpico")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }
}
