//! Core engine pieces shared by every module: constants, run configuration,
//! collision geometry, the color palette and the fixed-step clock.

pub mod clock;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod palette;

pub use clock::FixedStep;
pub use config::{ConfigError, GameConfig};
pub use geometry::Rect;
pub use palette::Rgb;
