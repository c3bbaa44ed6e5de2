// Shared tuning constants for the page behaviors and the particle background.

// Particle background
pub const PARTICLE_COUNT: usize = 80;
pub const CONNECTION_DISTANCE: f32 = 150.0; // pairs closer than this get a line
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per-axis velocity range is ±this
pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
pub const LINE_BASE_OPACITY: f32 = 0.2; // opacity of a line between coincident particles
pub const PARTICLE_FILL: &str = "rgba(0, 82, 204, 0.5)";
pub const LINE_RGB: [u8; 3] = [0, 82, 204];
pub const LINE_WIDTH: f64 = 1.0;

// Layout breakpoints
pub const DESKTOP_MIN_WIDTH: f64 = 768.0; // effects only run strictly above this

// Scroll behavior
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
pub const REVEAL_VISIBLE_MARGIN: f64 = 150.0;
pub const PARALLAX_CONTENT_RATE: f64 = 0.3;
pub const PARALLAX_VISUAL_RATE: f64 = 0.15;
pub const SCROLL_DEBOUNCE_MS: i32 = 10;

// Stats counters
pub const COUNTER_TICK_MS: i32 = 16;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const STAT_TARGETS: [f64; 3] = [3.0, 5.0, 100.0];

// Typing effect
pub const TYPING_DEFAULT_SPEED_MS: i32 = 100;
pub const HERO_TYPING_SPEED_MS: i32 = 80;

// Transient notice
pub const NOTICE_VISIBLE_MS: i32 = 4000;
pub const NOTICE_EXIT_MS: i32 = 300;

// Cursor trail
pub const CURSOR_TRAIL_LEN: usize = 10;
pub const CURSOR_DOT_LIFETIME_MS: i32 = 800;

// Card tilt
pub const TILT_DAMPING: f32 = 20.0; // pixels of pointer offset per degree of rotation
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_LIFT_PX: i32 = -8;

#[inline]
pub fn is_desktop_width(viewport_width: f64) -> bool {
    viewport_width > DESKTOP_MIN_WIDTH
}
