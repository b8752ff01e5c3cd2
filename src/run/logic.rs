//! Per-tick simulation steps: avatar physics, obstacle generation and
//! scrolling, scoring, collision detection and crash particles.
//!
//! Every function here mutates only what it is handed. The ordering of the
//! steps within a tick is owned by [`super::controller::RunController`].

use super::types::{Avatar, CrashCause, Difficulty, Obstacle, Particle};
use crate::core::config::GameConfig;
use crate::core::constants::{WING_PHASE_PERIOD, WING_PHASE_STEP};
use crate::core::palette::{OBSTACLE_COLORS, PARTICLE_COLORS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Advance the avatar by one tick of gravity.
///
/// Tilt is derived from the velocity before the ceiling clamp. There is no
/// floor clamp here; touching the ground is a terminal condition checked by
/// [`touches_ground`].
pub fn step_avatar(avatar: &mut Avatar, gravity: f64, config: &GameConfig) {
    avatar.velocity += gravity;
    avatar.y += avatar.velocity;

    avatar.tilt = (avatar.velocity * config.tilt_gain).clamp(config.min_tilt, config.max_tilt);

    avatar.wing_phase += WING_PHASE_STEP;
    if avatar.wing_phase >= WING_PHASE_PERIOD {
        avatar.wing_phase = 0.0;
    }

    if avatar.y < 0.0 {
        avatar.y = 0.0;
        avatar.velocity = 0.0;
    }
}

/// Override the avatar's velocity with the boost impulse.
pub fn boost(avatar: &mut Avatar, impulse: f64) {
    avatar.velocity = impulse;
}

/// Create an obstacle at the right field boundary with a random gap.
///
/// Returns `None` when the configured gap range is degenerate; the caller
/// treats that as "no spawn this time".
pub fn spawn_obstacle<R: Rng>(
    config: &GameConfig,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Obstacle> {
    let (min_center, max_center) = config.gap_center_range()?;
    let gap_center = if max_center > min_center {
        rng.gen_range(min_center..=max_center)
    } else {
        min_center
    };
    let color = *OBSTACLE_COLORS.choose(rng)?;

    Some(Obstacle {
        x: config.field_width,
        width: config.obstacle_width,
        gap_center,
        gap_height: config.gap_height,
        speed: difficulty.obstacle_speed(),
        passed: false,
        color,
    })
}

/// Scroll every obstacle left by its own speed.
pub fn advance_obstacles(obstacles: &mut [Obstacle]) {
    for obstacle in obstacles {
        obstacle.x -= obstacle.speed;
    }
}

/// Drop obstacles whose right edge is strictly left of the field's left
/// boundary. Survivors keep their spawn order. Returns how many were removed.
pub fn retire_obstacles(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| o.right_edge() >= 0.0);
    before - obstacles.len()
}

/// Mark obstacles whose right edge is now behind the avatar as passed.
/// Returns the number newly passed this tick.
pub fn score_passed(avatar: &Avatar, obstacles: &mut [Obstacle]) -> u32 {
    let mut newly_passed = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right_edge() < avatar.x {
            obstacle.passed = true;
            newly_passed += 1;
        }
    }
    newly_passed
}

/// True if the avatar's bounding square overlaps any solid region.
pub fn hits_obstacle(avatar: &Avatar, obstacles: &[Obstacle], field_height: f64) -> bool {
    let bounds = avatar.bounds();
    obstacles.iter().any(|o| {
        bounds.intersects(&o.upper_rect()) || bounds.intersects(&o.lower_rect(field_height))
    })
}

/// True once the avatar has sunk into the ground band.
pub fn touches_ground(avatar: &Avatar, config: &GameConfig) -> bool {
    avatar.y > config.ground_limit()
}

/// Check obstacles first, then the ground. The first hit wins.
pub fn detect_crash(
    avatar: &Avatar,
    obstacles: &[Obstacle],
    config: &GameConfig,
) -> Option<CrashCause> {
    if hits_obstacle(avatar, obstacles, config.field_height) {
        Some(CrashCause::Obstacle)
    } else if touches_ground(avatar, config) {
        Some(CrashCause::Ground)
    } else {
        None
    }
}

/// Build the burst of particles shown where the avatar crashed.
pub fn spawn_burst<R: Rng>(x: f64, y: f64, config: &GameConfig, rng: &mut R) -> Vec<Particle> {
    let speed = config.particle_max_speed;
    (0..config.particle_burst_size)
        .map(|_| {
            let color = PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())];
            Particle {
                x,
                y,
                vx: rng.gen_range(-speed..=speed),
                vy: rng.gen_range(-speed..=speed),
                size: rng.gen_range(config.particle_min_size..=config.particle_max_size),
                color,
                lifetime: config.particle_lifetime_ticks,
                max_lifetime: config.particle_lifetime_ticks,
            }
        })
        .collect()
}

/// Move, slow and age particles, dropping the ones that have faded out.
pub fn step_particles(particles: &mut Vec<Particle>, drag: f64) {
    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        p.lifetime = p.lifetime.saturating_sub(1);
        p.vx *= drag;
        p.vy *= drag;
    }
    particles.retain(Particle::is_alive);
}
