//! JSON persistence helpers for files under ~/.sky-hopper/.

use crate::core::constants::PROFILE_DIR_NAME;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Get the ~/.sky-hopper/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(PROFILE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.sky-hopper/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
///
/// A missing file is the normal first-run case and is not logged.
pub fn load_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read file, using defaults");
            return T::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Malformed JSON, using defaults");
            T::default()
        }
    }
}

/// Replace `path` with `contents` through a sibling temp file and a rename.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
