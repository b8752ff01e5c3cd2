//! The persisted player profile and its on-disk record.
//!
//! [`ProfileRecord`] mirrors the JSON file field for field and reads each
//! field leniently, so one bad value never discards the rest of the file.
//! [`Profile`] is the validated in-memory form the game works with.

use crate::core::constants::{COINS_PER_OBSTACLE, STARTING_COINS};
use crate::cosmetics::{BackgroundTheme, SkinId, TrailEffect};
use crate::run::Difficulty;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Player progress and preferences.
///
/// Invariants (kept by [`Profile::from_record`] and the cosmetics policy):
/// the default skin is always unlocked and the equipped skin is unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub high_score: u32,
    pub coins: u32,
    pub unlocked_skins: BTreeSet<SkinId>,
    pub equipped_skin: SkinId,
    pub background_theme: BackgroundTheme,
    pub trail_effect: TrailEffect,
    pub difficulty: Difficulty,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            high_score: 0,
            coins: STARTING_COINS,
            unlocked_skins: BTreeSet::from([SkinId::DEFAULT]),
            equipped_skin: SkinId::DEFAULT,
            background_theme: BackgroundTheme::default(),
            trail_effect: TrailEffect::default(),
            difficulty: Difficulty::default(),
        }
    }
}

impl Profile {
    pub fn is_unlocked(&self, skin: SkinId) -> bool {
        self.unlocked_skins.contains(&skin)
    }

    /// Credit the reward for clearing one obstacle.
    pub fn award_obstacle_coin(&mut self) {
        self.coins = self.coins.saturating_add(COINS_PER_OBSTACLE);
    }

    /// Keep `score` if it beats the high score. Returns true on a new record.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    pub fn reset_high_score(&mut self) {
        self.high_score = 0;
    }

    /// Build a profile from a (possibly partial) record, falling back to
    /// defaults field by field and repairing skin ownership.
    pub fn from_record(record: ProfileRecord) -> Self {
        let defaults = Profile::default();

        let mut unlocked_skins: BTreeSet<SkinId> = record
            .unlocked_skins
            .unwrap_or_default()
            .iter()
            .filter_map(|name| SkinId::from_key(name))
            .collect();
        unlocked_skins.insert(SkinId::DEFAULT);

        let equipped_skin = record
            .equipped_skin
            .as_deref()
            .and_then(SkinId::from_key)
            .filter(|skin| unlocked_skins.contains(skin))
            .unwrap_or(SkinId::DEFAULT);

        Self {
            high_score: record.highscore.unwrap_or(defaults.high_score),
            coins: record.coins.unwrap_or(defaults.coins),
            unlocked_skins,
            equipped_skin,
            background_theme: record
                .background_theme
                .as_deref()
                .and_then(BackgroundTheme::from_key)
                .unwrap_or(defaults.background_theme),
            trail_effect: record
                .trail_effect
                .as_deref()
                .and_then(TrailEffect::from_key)
                .unwrap_or(defaults.trail_effect),
            difficulty: record
                .game_speed
                .as_deref()
                .and_then(Difficulty::from_key)
                .unwrap_or(defaults.difficulty),
        }
    }

    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord {
            highscore: Some(self.high_score),
            coins: Some(self.coins),
            unlocked_skins: Some(
                self.unlocked_skins
                    .iter()
                    .map(|skin| skin.key().to_string())
                    .collect(),
            ),
            equipped_skin: Some(self.equipped_skin.key().to_string()),
            background_theme: Some(self.background_theme.key().to_string()),
            trail_effect: Some(self.trail_effect.key().to_string()),
            game_speed: Some(self.difficulty.key().to_string()),
        }
    }
}

/// JSON shape of the profile file. Every field is optional on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub highscore: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub coins: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub unlocked_skins: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub equipped_skin: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub background_theme: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub trail_effect: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub game_speed: Option<String>,
}

/// Accept any JSON value; keep it only if it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
