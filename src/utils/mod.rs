//! Utility modules: build info, logging setup, JSON persistence helpers.

pub mod build_info;
pub mod logging;
pub mod persistence;
