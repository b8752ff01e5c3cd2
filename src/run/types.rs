//! Run data structures: difficulty tiers, the avatar, obstacles and crash
//! particles.

use crate::core::constants::*;
use crate::core::geometry::Rect;
use crate::core::palette::Rgb;
use crate::cosmetics::SkinId;

/// Difficulty tiers. Chosen before a session starts and fixed for its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

option_enum_impl!(Difficulty, 3, {
    Easy => ("Easy", "EASY"),
    Normal => ("Normal", "NORMAL"),
    Hard => ("Hard", "HARD"),
});

impl Difficulty {
    /// Downward velocity gained per tick.
    pub fn gravity(&self) -> f64 {
        match self {
            Self::Easy => GRAVITY,
            Self::Normal => GRAVITY,
            Self::Hard => GRAVITY,
        }
    }

    /// Velocity a boost sets (negative = upward). Overrides, never adds.
    pub fn boost_impulse(&self) -> f64 {
        match self {
            Self::Easy => BOOST_IMPULSE,
            Self::Normal => BOOST_IMPULSE,
            Self::Hard => BOOST_IMPULSE,
        }
    }

    /// Leftward obstacle speed in pixels per tick.
    pub fn obstacle_speed(&self) -> f64 {
        match self {
            Self::Easy => EASY_OBSTACLE_SPEED,
            Self::Normal => NORMAL_OBSTACLE_SPEED,
            Self::Hard => HARD_OBSTACLE_SPEED,
        }
    }

    /// Simulated milliseconds between obstacle spawns.
    pub fn spawn_interval_ms(&self) -> f64 {
        match self {
            Self::Easy => SPAWN_INTERVAL_MS,
            Self::Normal => SPAWN_INTERVAL_MS,
            Self::Hard => SPAWN_INTERVAL_MS,
        }
    }

    /// Next tier for the settings toggle, wrapping Hard back to Easy.
    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len()).unwrap_or_default()
    }

    /// One-line summary shown on the mode select screen.
    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Easy => "Slow pipes for a relaxed flight",
            Self::Normal => "The classic pace",
            Self::Hard => "Fast pipes, quick reflexes",
        }
    }
}

/// The player's bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Horizontal center, fixed for the session.
    pub x: f64,
    /// Vertical center. Never below 0 after a physics step.
    pub y: f64,
    /// Pixels per tick, positive = downward.
    pub velocity: f64,
    pub radius: f64,
    pub alive: bool,
    /// Only affects rendering.
    pub skin: SkinId,
    /// Visual tilt in degrees, derived from velocity.
    pub tilt: f64,
    /// Wing animation phase in [0, WING_PHASE_PERIOD).
    pub wing_phase: f64,
}

impl Avatar {
    pub fn new(x: f64, y: f64, radius: f64, skin: SkinId) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            radius,
            alive: true,
            skin,
            tilt: 0.0,
            wing_phase: 0.0,
        }
    }

    /// Bounding square of the circular body.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// A pipe pair with a gap. The upper solid region spans the field top to the
/// gap top, the lower one the gap bottom to the field bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    pub gap_center: f64,
    pub gap_height: f64,
    /// Pixels per tick, fixed at creation.
    pub speed: f64,
    /// Set once when the obstacle is scored, never cleared.
    pub passed: bool,
    pub color: Rgb,
}

impl Obstacle {
    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_center - self.gap_height / 2.0
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_center + self.gap_height / 2.0
    }

    pub fn upper_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top())
    }

    pub fn lower_rect(&self, field_height: f64) -> Rect {
        let bottom = self.gap_bottom();
        Rect::new(self.x, bottom, self.width, field_height - bottom)
    }
}

/// Decorative crash particle. Has no gameplay effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: u32,
    pub color: Rgb,
    pub lifetime: u32,
    pub max_lifetime: u32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    /// Remaining life as a fraction in [0, 1], used for fading.
    pub fn fade(&self) -> f64 {
        if self.max_lifetime == 0 {
            return 0.0;
        }
        self.lifetime as f64 / self.max_lifetime as f64
    }
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Obstacle,
    Ground,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_defaults_to_normal() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn test_difficulty_speeds_increase() {
        assert_eq!(Difficulty::Easy.obstacle_speed(), 2.0);
        assert_eq!(Difficulty::Normal.obstacle_speed(), 3.0);
        assert_eq!(Difficulty::Hard.obstacle_speed(), 4.0);
    }

    #[test]
    fn test_difficulty_shared_physics() {
        for d in Difficulty::ALL {
            assert_eq!(d.gravity(), 0.5);
            assert_eq!(d.boost_impulse(), -10.0);
            assert_eq!(d.spawn_interval_ms(), 1500.0);
        }
    }

    #[test]
    fn test_difficulty_keys_round_trip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_key(d.key()), Some(d));
        }
        assert_eq!(Difficulty::from_key("INSANE"), None);
        assert_eq!(Difficulty::Hard.key(), "HARD");
        assert_eq!(Difficulty::Easy.name(), "Easy");
    }

    #[test]
    fn test_difficulty_cycle_wraps() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Normal);
        assert_eq!(Difficulty::Normal.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_avatar_bounds_square() {
        let avatar = Avatar::new(100.0, 200.0, 20.0, SkinId::ClassicRed);
        assert_eq!(avatar.bounds(), Rect::new(80.0, 180.0, 40.0, 40.0));
    }

    #[test]
    fn test_obstacle_regions() {
        let obstacle = Obstacle {
            x: 500.0,
            width: 80.0,
            gap_center: 300.0,
            gap_height: 150.0,
            speed: 3.0,
            passed: false,
            color: crate::core::palette::GREEN,
        };
        assert_eq!(obstacle.right_edge(), 580.0);
        assert_eq!(obstacle.upper_rect(), Rect::new(500.0, 0.0, 80.0, 225.0));
        assert_eq!(
            obstacle.lower_rect(600.0),
            Rect::new(500.0, 375.0, 80.0, 225.0)
        );
    }

    #[test]
    fn test_particle_fade() {
        let mut particle = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            size: 5,
            color: crate::core::palette::RED,
            lifetime: 30,
            max_lifetime: 60,
        };
        assert!((particle.fade() - 0.5).abs() < f64::EPSILON);
        particle.lifetime = 0;
        assert!(!particle.is_alive());
    }
}
