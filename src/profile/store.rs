//! Loading and saving the profile file.
//!
//! Loading never fails: a missing, unreadable or malformed file yields
//! defaults. Saving reports errors so the caller can log them, but the game
//! keeps running either way.

use super::types::{Profile, ProfileRecord};
use crate::core::constants::PROFILE_FILE_NAME;
use crate::utils::persistence::{data_path, load_json_or_default, write_atomic};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("profile could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reads and writes the profile at a fixed path.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at ~/.sky-hopper/profile.json.
    pub fn default_location() -> Result<Self, ProfileError> {
        Ok(Self::new(data_path(PROFILE_FILE_NAME)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the profile, falling back to defaults on any failure.
    pub fn load(&self) -> Profile {
        // Anything but a JSON object is treated as a damaged file.
        let record = match load_json_or_default::<Value>(&self.path) {
            value @ Value::Object(_) => {
                serde_json::from_value::<ProfileRecord>(value).unwrap_or_default()
            }
            Value::Null => ProfileRecord::default(),
            _ => {
                warn!(path = %self.path.display(), "Profile is not a JSON object, using defaults");
                ProfileRecord::default()
            }
        };
        let profile = Profile::from_record(record);
        debug!(
            path = %self.path.display(),
            high_score = profile.high_score,
            coins = profile.coins,
            "Profile loaded"
        );
        profile
    }

    pub fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        let json = serde_json::to_string_pretty(&profile.to_record())?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), "Profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmetics::SkinId;
    use crate::run::Difficulty;
    use std::fs;

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        let mut profile = Profile {
            high_score: 17,
            coins: 3,
            difficulty: Difficulty::Easy,
            ..Profile::default()
        };
        profile.unlocked_skins.insert(SkinId::MysticPurple);
        profile.equipped_skin = SkinId::MysticPurple;

        store.save(&profile).unwrap();
        assert!(store.exists());
        assert_eq!(store.load(), profile);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("absent.json"));
        assert!(!store.exists());
        assert_eq!(store.load(), Profile::default());
    }

    #[test]
    fn test_garbage_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "\u{0}\u{1}garbage").unwrap();
        assert_eq!(ProfileStore::new(&path).load(), Profile::default());
    }

    #[test]
    fn test_non_object_json_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "\"just a string\"").unwrap();
        assert_eq!(ProfileStore::new(&path).load(), Profile::default());
    }

    #[test]
    fn test_save_into_unwritable_location_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // parent "directory" is a regular file
        let store = ProfileStore::new(blocker.join("profile.json"));
        assert!(matches!(
            store.save(&Profile::default()),
            Err(ProfileError::Io(_))
        ));
    }
}
