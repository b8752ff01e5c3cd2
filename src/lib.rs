//! Sky Hopper - terminal arcade game library.
//!
//! Exposes the simulation core (run controller, screen state machine,
//! cosmetics and profile persistence) for the binary and for tests.

/// Generate `ALL`, `from_index()`, `index()`, `name()`, `key()` and
/// `from_key()` for a fixed set of selectable options. `name` is the display
/// label, `key` the stable string written to the profile file.
macro_rules! option_enum_impl {
    ($name:ident, $count:expr, { $($variant:ident => ($label:expr, $key:expr)),+ $(,)? }) => {
        impl $name {
            pub const ALL: [$name; $count] = [$($name::$variant),+];

            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            pub fn index(&self) -> usize {
                Self::ALL.iter().position(|v| v == self).unwrap_or(0)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            pub fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.key() == key)
            }
        }
    };
}

pub mod app;
pub mod core;
pub mod cosmetics;
pub mod input;
pub mod profile;
pub mod run;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, Command, MenuDestination, Screen};
pub use core::{ConfigError, GameConfig};
pub use profile::{Profile, ProfileError, ProfileStore};
pub use run::{Difficulty, RunController, RunEvent, RunPhase};
