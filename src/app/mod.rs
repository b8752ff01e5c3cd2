//! Application state machine: screens, commands and the profile flush points.

pub mod screen;
pub mod state;

pub use screen::{Command, MenuDestination, Screen};
pub use state::{App, AppEvent};
