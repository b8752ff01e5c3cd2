//! The real-time run: a bird boosting through scrolling pipe pairs.
//!
//! Gravity pulls the avatar down every tick, a boost resets its velocity
//! upward, obstacles spawn on a timer at the right edge and scroll left, and
//! touching a pipe or the ground ends the run.

pub mod controller;
pub mod logic;
pub mod types;

pub use controller::{RunController, RunEvent, RunPhase, RunSession};
pub use types::{Avatar, CrashCause, Difficulty, Obstacle, Particle};
