// Shared animation tuning constants used by the engine and the web frontend.

// Visibility
pub const REVEAL_THRESHOLD_DEFAULT: f32 = 0.1;
pub const REVEAL_THRESHOLD_SECTION: f32 = 0.2;
pub const REVEAL_STAGGER_STEP_MS: u32 = 100; // per-child transition delay

// Scroll parallax
pub const PARALLAX_SPEED_DEFAULT: f32 = 0.3;
pub const PARALLAX_LAYER_SPEED_DEFAULT: f32 = 0.5;
pub const FADE_IN_BOOST: f32 = 1.5; // opacity hits 1 before the element is fully inside
pub const SCALE_MIN: f32 = 0.95; // scale at the viewport edge
pub const SCALE_SPAN: f32 = 0.05; // added as the element approaches center

// Navigation
pub const NAV_SCROLLED_THRESHOLD_PX: f32 = 50.0;
pub const NAV_SPY_OFFSET_PX: f32 = 100.0; // sections count as active slightly before their top

// Particle field ranges
pub const PARTICLE_COUNT_DEFAULT: usize = 30;
pub const PARTICLE_COUNT_MAX: usize = 500;
pub const PARTICLE_SIZE_MIN_PX: f32 = 4.0;
pub const PARTICLE_SIZE_SPAN_PX: f32 = 10.0;
pub const PARTICLE_DELAY_MAX_SEC: f32 = 5.0;
pub const PARTICLE_DURATION_MIN_SEC: f32 = 10.0;
pub const PARTICLE_DURATION_SPAN_SEC: f32 = 10.0;

// Network simulation
pub const NETWORK_NODE_COUNT: usize = 40;
pub const NETWORK_INITIAL_SPEED: f32 = 0.5; // velocity drawn from ±half of this per axis
pub const NETWORK_ATTRACTION_RADIUS: f32 = 200.0;
pub const NETWORK_ATTRACTION_STRENGTH: f32 = 0.03;
pub const NETWORK_DAMPING: f32 = 0.99; // velocity multiplier per frame
pub const NETWORK_MIN_SPEED: f32 = 0.2;
pub const NETWORK_JITTER: f32 = 0.1; // ± per axis when below min speed
pub const NETWORK_LINK_DISTANCE: f32 = 150.0;
pub const NETWORK_POINTER_LINK_DISTANCE: f32 = 180.0;
pub const NETWORK_NODE_RADIUS: f32 = 2.0;
pub const NETWORK_NODE_RADIUS_BOOST: f32 = 2.0; // extra radius right under the pointer

// Falling-symbol simulation
pub const RAIN_GLYPH_PX: f32 = 12.0;
pub const RAIN_ALPHABET: &str = "01";
pub const RAIN_TICK_MS: u32 = 80;
pub const RAIN_RESET_PROBABILITY: f64 = 0.02;
pub const RAIN_INITIAL_ROW_MIN: i32 = -100;

// Typewriter
pub const TYPEWRITER_CHAR_MS: f64 = 60.0;

// Background grid and gradient orbs
pub const GRID_CELL_PX: f32 = 50.0;
pub const GRID_LINE_PX: f32 = 1.0;
pub const GRID_DRIFT_SEC: f32 = 20.0; // one full cell of drift
pub const ORB_BLUR_PX: f32 = 100.0;
pub const ORB_DELAY_STEP_SEC: f32 = 1.5;
