// Tick and timing
pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_INTERVAL_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;
/// Largest wall-clock gap the scheduler will catch up on in one go.
pub const MAX_FRAME_LAG_MS: u64 = 100;

// Playfield (pixels, y grows downward)
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const GROUND_BAND_HEIGHT: f64 = 100.0;

// Avatar
pub const AVATAR_RADIUS: f64 = 20.0;
pub const GRAVITY: f64 = 0.5;
pub const BOOST_IMPULSE: f64 = -10.0;
pub const TILT_GAIN: f64 = 3.0;
pub const MIN_TILT_DEGREES: f64 = -30.0;
pub const MAX_TILT_DEGREES: f64 = 90.0;
pub const WING_PHASE_STEP: f64 = 0.2;
pub const WING_PHASE_PERIOD: f64 = 3.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 80.0;
pub const GAP_HEIGHT: f64 = 150.0;
/// Smallest allowed distance from the field top to the gap top.
pub const GAP_TOP_MIN: f64 = 100.0;
/// The gap top never goes below `FIELD_HEIGHT - GAP_TOP_BOTTOM_MARGIN`.
pub const GAP_TOP_BOTTOM_MARGIN: f64 = 200.0;
pub const SPAWN_INTERVAL_MS: f64 = 1500.0;

// Obstacle speed per difficulty tier (pixels per tick)
pub const EASY_OBSTACLE_SPEED: f64 = 2.0;
pub const NORMAL_OBSTACLE_SPEED: f64 = 3.0;
pub const HARD_OBSTACLE_SPEED: f64 = 4.0;

// Crash particles
pub const PARTICLE_BURST_SIZE: usize = 30;
pub const PARTICLE_LIFETIME_TICKS: u32 = 60;
pub const PARTICLE_DRAG: f64 = 0.98;
pub const PARTICLE_MAX_SPEED: f64 = 5.0;
pub const PARTICLE_MIN_SIZE: u32 = 5;
pub const PARTICLE_MAX_SIZE: u32 = 15;

// Economy
pub const STARTING_COINS: u32 = 100;
pub const COINS_PER_OBSTACLE: u32 = 1;

// Persistence
pub const PROFILE_DIR_NAME: &str = ".sky-hopper";
pub const PROFILE_FILE_NAME: &str = "profile.json";
pub const LOG_FILE_NAME: &str = "sky-hopper.log";
