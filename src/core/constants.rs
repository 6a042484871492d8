// Shared tuning constants for the pointer tracker, cursor layers and particles.

// Pointer trail
pub const TRAIL_CAPACITY: usize = 6; // most recent samples kept, newest first

// Elements that flip the interactive flag on hover
pub const INTERACTIVE_TAGS: [&str; 2] = ["A", "BUTTON"];
pub const INTERACTIVE_CLASSES: [&str; 2] = ["group", "card-glow"];

// Neon palette
pub const NEON_CYAN: &str = "#65b3ff";
pub const NEON_MAGENTA: &str = "#ff00ff";
pub const NEON_PURPLE: &str = "#5500ff";
pub const RING_IDLE_COLOR: &str = "rgb(101, 179, 255)";
pub const RING_HOVER_COLOR: &str = "rgb(255, 0, 255)";

// Cursor layer radii (px)
pub const DOT_RADIUS: f32 = 8.0;
pub const RING_RADIUS: f32 = 16.0;
pub const TRAIL_RADIUS: f32 = 4.0;
pub const GLOW_RADIUS: f32 = 24.0;

// Scale multipliers while the interactive flag is set
pub const HOVER_SCALE: f32 = 1.3; // dot and ring
pub const TRAIL_HOVER_SCALE: f32 = 1.2;
pub const GLOW_HOVER_SCALE: f32 = 1.5;

// Opacities
pub const TRAIL_OPACITY_IDLE: f32 = 0.6;
pub const TRAIL_OPACITY_HOVER: f32 = 0.8;
pub const GLOW_OPACITY_IDLE: f32 = 0.15;
pub const GLOW_OPACITY_HOVER: f32 = 0.3;

// Spring (stiffness, damping) per layer; unit mass
pub const DOT_SPRING: (f32, f32) = (500.0, 28.0);
pub const RING_SPRING: (f32, f32) = (300.0, 20.0);
pub const GLOW_SPRING: (f32, f32) = (200.0, 25.0);
pub const TRAIL_SPRING: (f32, f32) = (100.0, 10.0);
pub const SCALE_SPRING: (f32, f32) = (400.0, 30.0);

// Largest integration step for springs (seconds)
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 120.0;

// Ambient particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_PALETTE: [&str; 3] = [NEON_CYAN, NEON_MAGENTA, NEON_PURPLE];
pub const PARTICLE_POS_MAX: f32 = 100.0; // percent of viewport
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_DURATION_MIN_SEC: f32 = 30.0;
pub const PARTICLE_DURATION_MAX_SEC: f32 = 50.0;
pub const PARTICLE_DELAY_MAX_SEC: f32 = 5.0;
pub const PARTICLE_DRIFT_X_HALF_SPAN: f32 = 25.0; // +/- percent
pub const PARTICLE_DRIFT_Y_MAX: f32 = 100.0; // upward, percent
pub const PARTICLE_OPACITY_KEYFRAMES: [f32; 3] = [0.0, 0.8, 0.0];
pub const PARTICLE_GLOW_FACTOR: f32 = 2.0; // shadow blur = size * factor

// Contact form
pub const CONTACT_RESET_MS: f64 = 3000.0;
