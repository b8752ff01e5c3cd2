//! Cosmetics: bird skins bought with coins, plus free background themes and
//! trail effects. None of them affect gameplay.

pub mod data;
pub mod logic;

pub use data::{BackgroundTheme, SkinCategory, SkinDescriptor, SkinId, TrailEffect, SKINS};
pub use logic::{select_skin, select_theme, select_trail, SkinSelection};
