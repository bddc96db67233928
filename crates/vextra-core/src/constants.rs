/// Animation and interaction tuning constants.
///
/// These express intended behavior (smoothing factors, thresholds, divisors)
/// and keep magic numbers out of the engine code.

// Scroll progress smoothing factor applied once per animation frame
pub const PROGRESS_LERP_FACTOR: f64 = 0.08;

// Below this gap `current` lands on `target`; plain f64 lerp stalls a few ulps short
pub const PROGRESS_SNAP_EPSILON: f64 = 1e-5;

// Extra scroll distance (fraction of viewport height) added to the container height
pub const PROGRESS_TAIL_VIEWPORT_FRACTION: f64 = 0.3;

// Reference frame rate for the time-corrected smoothing variant
pub const REFERENCE_FRAME_HZ: f64 = 60.0;

// A tree node is revealed once its top edge is above this fraction of the viewport
pub const NODE_REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

// Intersection thresholds
pub const SECTION_THRESHOLD: f64 = 0.1;
pub const CARD_THRESHOLD: f64 = 0.1;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const TEXT_THRESHOLD: f64 = 0.5;

// Sections fire slightly before they fully enter from the bottom
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

// Counter animation
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Per-character delay for text reveal (seconds)
pub const TEXT_CHAR_DELAY_SEC: f32 = 0.03;

// Tilt divisors (pixels of pointer offset per degree of rotation)
pub const CARD_TILT_DIVISOR: f32 = 10.0;
pub const TEAM_TILT_DIVISOR: f32 = 8.0;

// CSS perspective used by every 3D transform (px)
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Hover scale for tilt cards
pub const CARD_HOVER_SCALE: f32 = 1.02;

// Lift for team cards while hovered (px)
pub const TEAM_HOVER_LIFT_PX: f32 = 20.0;

// Magnetic buttons follow the pointer by this fraction of its offset
pub const MAGNETIC_DAMPING: f32 = 0.3;

// Showcase parallax stack
pub const SHOWCASE_ROTATE_Y_SPAN_DEG: f32 = 15.0;
pub const SHOWCASE_ROTATE_X_SPAN_DEG: f32 = 10.0;
pub const SHOWCASE_DEPTH_STEP: f32 = 0.5;
pub const SHOWCASE_DEPTH_ROTATE_DEG: f32 = 10.0;
pub const SHOWCASE_BASE_Z_PX: f32 = 50.0;
pub const SHOWCASE_Z_STEP_PX: f32 = 20.0;

// Hero phone follower
pub const HERO_OFFSET_DIVISOR: f32 = 20.0;
pub const HERO_LERP_FACTOR: f32 = 0.1;
pub const HERO_GLOW_MULTIPLIER: f32 = 5.0;

// Sparkles
pub const SPARKLE_DELAY_STEP_SEC: f32 = 0.3;

// Parallax containers scroll at `speed * PARALLAX_SCALE` of the scrolled distance
pub const PARALLAX_SCALE: f64 = 0.1;
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.5;

// Navbar switches to its compact style past this scroll offset (px)
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;
// A section is "active" in the navbar when it spans this line from the top (px)
pub const NAVBAR_ACTIVE_LINE_PX: f64 = 100.0;

// Reveal stagger steps per section (ms)
pub const PROBLEM_STAGGER_MS: u32 = 150;
pub const STEP_STAGGER_MS: u32 = 200;
pub const FEATURE_STAGGER_MS: u32 = 100;
pub const ROADMAP_STAGGER_MS: u32 = 150;
pub const TECH_STAGGER_MS: u32 = 100;
pub const TEAM_STAGGER_MS: u32 = 100;
