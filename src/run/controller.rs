//! Run controller: the Idle -> Active -> Ended state machine around one play
//! session.
//!
//! The controller owns the session (avatar, obstacles, score, spawn timer and
//! crash particles) and drives the per-tick steps in a fixed order:
//! avatar physics, spawning, scrolling, scoring, crash detection (obstacles,
//! then the ground), then retirement. It reports what happened as
//! [`RunEvent`]s and never touches the persisted profile itself.

use super::logic::{
    advance_obstacles, boost, detect_crash, retire_obstacles, score_passed, spawn_burst,
    spawn_obstacle, step_avatar, step_particles,
};
use super::types::{Avatar, CrashCause, Difficulty, Obstacle, Particle};
use crate::core::config::{ConfigError, GameConfig};
use crate::cosmetics::SkinId;
use rand::Rng;
use tracing::{debug, info};

/// Lifecycle of the run controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No session exists.
    Idle,
    /// A session is ticking.
    Active,
    /// The session is frozen with its final score.
    Ended,
}

/// Something the presentation or profile layer should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// An obstacle was cleared; `score` is the running total.
    ObstaclePassed { score: u32 },
    /// The avatar crashed this tick. `x`/`y` is its frozen position.
    Crashed {
        x: f64,
        y: f64,
        cause: CrashCause,
        score: u32,
    },
}

/// State of one play session. Replaced wholesale on retry.
#[derive(Debug, Clone)]
pub struct RunSession {
    pub avatar: Avatar,
    /// Spawn order is preserved.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Simulated milliseconds since the last spawn.
    pub spawn_elapsed_ms: f64,
    pub difficulty: Difficulty,
    pub particles: Vec<Particle>,
    pub crash: Option<CrashCause>,
    pub tick_count: u64,
}

impl RunSession {
    fn new(config: &GameConfig, difficulty: Difficulty, skin: SkinId) -> Self {
        let (x, y) = config.avatar_start();
        Self {
            avatar: Avatar::new(x, y, config.avatar_radius, skin),
            obstacles: Vec::new(),
            score: 0,
            // Primed so the first obstacle appears on the first tick.
            spawn_elapsed_ms: difficulty.spawn_interval_ms(),
            difficulty,
            particles: Vec::new(),
            crash: None,
            tick_count: 0,
        }
    }
}

/// Drives one session at a time.
#[derive(Debug, Clone)]
pub struct RunController {
    config: GameConfig,
    phase: RunPhase,
    session: Option<RunSession>,
}

impl RunController {
    /// Build a controller after validating the configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: RunPhase::Idle,
            session: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&RunSession> {
        self.session.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.score)
    }

    /// Start a fresh session. Allowed from Idle and from Ended (retry).
    /// Returns false if a session is already active.
    pub fn start(&mut self, difficulty: Difficulty, skin: SkinId) -> bool {
        if self.phase == RunPhase::Active {
            return false;
        }
        self.session = Some(RunSession::new(&self.config, difficulty, skin));
        self.phase = RunPhase::Active;
        info!(difficulty = difficulty.name(), skin = skin.name(), "Run started");
        true
    }

    /// Drop an ended session. Returns false unless the run had ended.
    pub fn reset(&mut self) -> bool {
        if self.phase != RunPhase::Ended {
            return false;
        }
        self.session = None;
        self.phase = RunPhase::Idle;
        true
    }

    /// Boost the avatar. A no-op unless a session is active.
    pub fn boost(&mut self) -> bool {
        if self.phase != RunPhase::Active {
            return false;
        }
        match self.session.as_mut() {
            Some(session) if session.avatar.alive => {
                boost(&mut session.avatar, session.difficulty.boost_impulse());
                true
            }
            _ => false,
        }
    }

    /// Change the avatar's skin. Rendering only.
    pub fn set_skin(&mut self, skin: SkinId) {
        if let Some(session) = self.session.as_mut() {
            session.avatar.skin = skin;
        }
    }

    /// Advance one tick.
    ///
    /// While Active this runs the full simulation. While Ended only the crash
    /// particles keep animating. While Idle nothing happens.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<RunEvent> {
        let mut events = Vec::new();
        let config = &self.config;
        let Some(session) = self.session.as_mut() else {
            return events;
        };

        step_particles(&mut session.particles, config.particle_drag);

        if self.phase != RunPhase::Active || !session.avatar.alive {
            return events;
        }

        session.tick_count += 1;
        step_avatar(
            &mut session.avatar,
            session.difficulty.gravity(),
            config,
        );

        session.spawn_elapsed_ms += config.tick_ms;
        if session.spawn_elapsed_ms > session.difficulty.spawn_interval_ms() {
            if let Some(obstacle) = spawn_obstacle(config, session.difficulty, rng) {
                debug!(gap_center = obstacle.gap_center, "Obstacle spawned");
                session.obstacles.push(obstacle);
            }
            session.spawn_elapsed_ms = 0.0;
        }

        advance_obstacles(&mut session.obstacles);

        for _ in 0..score_passed(&session.avatar, &mut session.obstacles) {
            session.score += 1;
            events.push(RunEvent::ObstaclePassed {
                score: session.score,
            });
        }

        // Obstacles leaving the field this tick are still solid.
        let crash = detect_crash(&session.avatar, &session.obstacles, config);
        retire_obstacles(&mut session.obstacles);

        if let Some(cause) = crash {
            let (x, y) = (session.avatar.x, session.avatar.y);
            session.avatar.alive = false;
            session.crash = Some(cause);
            session.particles = spawn_burst(x, y, config, rng);
            self.phase = RunPhase::Ended;
            info!(score = session.score, ?cause, ticks = session.tick_count, "Run ended");
            events.push(RunEvent::Crashed {
                x,
                y,
                cause,
                score: session.score,
            });
        }

        events
    }
}
