//! Persisted player profile: high score, coins, owned skins and preferences.

pub mod store;
pub mod types;

pub use store::{ProfileError, ProfileStore};
pub use types::{Profile, ProfileRecord};
