//! File-backed tracing setup for the binary.
//!
//! The terminal belongs to the game screen, so log lines go to
//! ~/.sky-hopper/sky-hopper.log. The filter comes from `SKY_HOPPER_LOG`
//! (same syntax as `RUST_LOG`), defaulting to `sky_hopper=info`.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE_NAME;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SKY_HOPPER_LOG";
const DEFAULT_DIRECTIVE: &str = "sky_hopper=info";

/// Build the filter from the environment, or the default directive.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Returns the log path on success and
/// `None` when logging had to be disabled (no home dir, unwritable file, or a
/// subscriber was already installed).
pub fn init() -> Option<PathBuf> {
    let path = data_path(LOG_FILE_NAME).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_builds() {
        let filter = EnvFilter::new(DEFAULT_DIRECTIVE);
        assert!(filter.to_string().contains("sky_hopper"));
    }
}
