// Tuning constants shared by the effect state machines and the web frontend.

// Page loader
pub const LOADER_REVEAL_DELAY_MS: u32 = 500; // delay after `load` before fading the loader

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // visible fraction required to reveal
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

// Header
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0; // px of scroll before the header switches state

// Magnetic buttons
pub const MAGNETIC_STRENGTH: f32 = 0.3; // fraction of the centre offset applied as translation
pub const MAGNETIC_ENTER_TRANSITION: &str = "transform 0.1s ease-out";
pub const MAGNETIC_LEAVE_TRANSITION: &str = "transform 0.5s cubic-bezier(0.16, 1, 0.3, 1)";

// Page transition
pub const PAGE_TRANSITION_DELAY_MS: u32 = 600;

// Parallax
pub const PARALLAX_MAX_OFFSET: f64 = 60.0; // full travel in px, centred on zero
pub const PARALLAX_RESIZE_DEBOUNCE_MS: u32 = 150;

// Lazy images
pub const LAZY_ROOT_MARGIN: &str = "50px 0px";

// Cursor trail
pub const CURSOR_DOT_FOLLOW: f32 = 0.25; // fraction of remaining distance per frame
pub const CURSOR_RING_FOLLOW: f32 = 0.15;
pub const CURSOR_DOT_HALF_SIZE: f32 = 4.0;
pub const CURSOR_RING_HALF_SIZE: f32 = 20.0;

// Globe
pub const GLOBE_TILT_RANGE_DEG: f32 = 20.0; // total tilt span across the viewport

// Typewriter
pub const TYPEWRITER_DEFAULT_SPEED_MS: u32 = 50;
