//! Tuning constants for one run, validated once up front.
//!
//! Every value that shapes the simulation lives in [`GameConfig`]. A config is
//! checked by [`GameConfig::validate`] when a run controller is built, so the
//! tick path can assume positive gap heights, a non-empty gap range and so on.

use super::constants::*;
use crate::run::types::Difficulty;
use thiserror::Error;

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("field must have positive size, got {width}x{height}")]
    EmptyField { width: f64, height: f64 },

    #[error("ground band {band} must lie strictly inside field height {height}")]
    GroundBandOutOfField { band: f64, height: f64 },

    #[error("avatar radius must be positive, got {0}")]
    AvatarRadius(f64),

    #[error("obstacle width must be positive, got {0}")]
    ObstacleWidth(f64),

    #[error("gap height must be positive, got {0}")]
    GapHeight(f64),

    #[error("gap top range [{min}, {max}] leaves a solid region with no height")]
    GapRange { min: f64, max: f64 },

    #[error("tick duration must be positive, got {0} ms")]
    TickDuration(f64),

    #[error("{difficulty} tier: {reason}")]
    Difficulty {
        difficulty: &'static str,
        reason: &'static str,
    },

    #[error("particle size range [{min}, {max}] is empty")]
    ParticleSize { min: u32, max: u32 },

    #[error("tilt range [{min}, {max}] is empty")]
    TiltRange { min: f64, max: f64 },

    #[error("particle speed must be finite and not negative, got {0}")]
    ParticleSpeed(f64),

    #[error("particle drag must lie in [0, 1], got {0}")]
    ParticleDrag(f64),
}

/// Geometry and timing shared by every session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub ground_band_height: f64,

    pub avatar_radius: f64,
    pub tilt_gain: f64,
    pub min_tilt: f64,
    pub max_tilt: f64,

    pub obstacle_width: f64,
    pub gap_height: f64,
    /// Inclusive range the gap top is drawn from.
    pub gap_top_min: f64,
    pub gap_top_max: f64,

    /// Simulated time advanced by one tick.
    pub tick_ms: f64,

    pub particle_burst_size: usize,
    pub particle_lifetime_ticks: u32,
    pub particle_drag: f64,
    pub particle_max_speed: f64,
    pub particle_min_size: u32,
    pub particle_max_size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_band_height: GROUND_BAND_HEIGHT,
            avatar_radius: AVATAR_RADIUS,
            tilt_gain: TILT_GAIN,
            min_tilt: MIN_TILT_DEGREES,
            max_tilt: MAX_TILT_DEGREES,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_top_min: GAP_TOP_MIN,
            gap_top_max: FIELD_HEIGHT - GAP_TOP_BOTTOM_MARGIN,
            tick_ms: TICK_INTERVAL_MS,
            particle_burst_size: PARTICLE_BURST_SIZE,
            particle_lifetime_ticks: PARTICLE_LIFETIME_TICKS,
            particle_drag: PARTICLE_DRAG,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_min_size: PARTICLE_MIN_SIZE,
            particle_max_size: PARTICLE_MAX_SIZE,
        }
    }
}

impl GameConfig {
    /// Check every invariant the tick path relies on. NaN never passes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.field_width) || !positive(self.field_height) {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(self.ground_band_height >= 0.0 && self.ground_band_height < self.field_height) {
            return Err(ConfigError::GroundBandOutOfField {
                band: self.ground_band_height,
                height: self.field_height,
            });
        }
        if !positive(self.avatar_radius) {
            return Err(ConfigError::AvatarRadius(self.avatar_radius));
        }
        if !(self.min_tilt <= self.max_tilt) {
            return Err(ConfigError::TiltRange {
                min: self.min_tilt,
                max: self.max_tilt,
            });
        }
        if !positive(self.obstacle_width) {
            return Err(ConfigError::ObstacleWidth(self.obstacle_width));
        }
        if !positive(self.gap_height) {
            return Err(ConfigError::GapHeight(self.gap_height));
        }
        if self.gap_center_range().is_none() {
            return Err(ConfigError::GapRange {
                min: self.gap_top_min,
                max: self.gap_top_max,
            });
        }
        if !positive(self.tick_ms) {
            return Err(ConfigError::TickDuration(self.tick_ms));
        }
        if !(self.particle_max_speed.is_finite() && self.particle_max_speed >= 0.0) {
            return Err(ConfigError::ParticleSpeed(self.particle_max_speed));
        }
        if !(0.0..=1.0).contains(&self.particle_drag) {
            return Err(ConfigError::ParticleDrag(self.particle_drag));
        }
        if self.particle_min_size > self.particle_max_size {
            return Err(ConfigError::ParticleSize {
                min: self.particle_min_size,
                max: self.particle_max_size,
            });
        }
        for difficulty in Difficulty::ALL {
            validate_difficulty(difficulty)?;
        }
        Ok(())
    }

    /// Spawn position of the avatar: a third of the way across, vertically
    /// centered.
    pub fn avatar_start(&self) -> (f64, f64) {
        ((self.field_width / 3.0).floor(), self.field_height / 2.0)
    }

    /// Deepest y the avatar center may reach before touching the ground.
    pub fn ground_limit(&self) -> f64 {
        self.field_height - self.ground_band_height - self.avatar_radius
    }

    /// Inclusive range of gap centers that keeps both solid regions at a
    /// positive height, or `None` when the configured range is degenerate.
    pub fn gap_center_range(&self) -> Option<(f64, f64)> {
        let half_gap = self.gap_height / 2.0;
        let upper_ok = self.gap_top_min > 0.0;
        let lower_ok = self.gap_top_max + self.gap_height < self.field_height;
        if self.gap_height <= 0.0 || !upper_ok || !lower_ok || self.gap_top_min > self.gap_top_max {
            return None;
        }
        Some((self.gap_top_min + half_gap, self.gap_top_max + half_gap))
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_difficulty(difficulty: Difficulty) -> Result<(), ConfigError> {
    let reason = if difficulty.obstacle_speed() <= 0.0 {
        Some("obstacle speed must be positive")
    } else if difficulty.spawn_interval_ms() <= 0.0 {
        Some("spawn interval must be positive")
    } else if difficulty.gravity() <= 0.0 {
        Some("gravity must be positive")
    } else if difficulty.boost_impulse() >= 0.0 {
        Some("boost impulse must point upward")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::Difficulty {
            difficulty: difficulty.name(),
            reason,
        }),
        None => Ok(()),
    }
}
