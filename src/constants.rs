// DOM hooks the effects attach to.
//
// Selectors, ids and class names shared with the site's markup and
// stylesheet. Kept free of `web-sys` so they can be checked on the host.

// Page loader
pub const PAGE_LOADER: &str = ".page-loader";
pub const LOADED_CLASS: &str = "loaded";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-skew, .reveal-fade, .reveal-scale";
pub const REVEALED_CLASS: &str = "revealed";

// Header
pub const HEADER_ID: &str = "header";
pub const SCROLLED_CLASS: &str = "scrolled";

// Magnetic buttons
pub const MAGNETIC_SELECTOR: &str = ".magnetic";

// Page transition
pub const PAGE_TRANSITION: &str = ".page-transition";
pub const TRANSITION_LINKS: &str = "[data-transition]";
pub const ACTIVE_CLASS: &str = "active";

// Parallax
pub const PARALLAX_IMAGES: &str = "[data-parallax-img]";
pub const PARALLAX_WRAPPER: &str = ".fleet-image-wrapper";

// Cursor-follow city images
pub const CITY_ITEMS: &str = ".city-item";
pub const CITY_IMAGE: &str = ".city-image";
pub const CITY_IMAGE_TRANSFORM: &str = "translate(-50%, -50%)";

// Anchors
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

// Mobile menu
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_ID: &str = "nav";
pub const MENU_BARS: &str = "span";

// Globe
pub const GLOBE_CONTAINER: &str = ".globe-container";
pub const GLOBE_WIREFRAME: &str = ".globe-wireframe";
pub const GLOBE_THROTTLE_MS: f64 = 16.0; // about one frame at 60 Hz

// Typewriter
pub const TYPEWRITER_ATTR: &str = "data-typewriter";
pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";

// Lazy images
pub const DATA_SRC_ATTR: &str = "data-src";
pub const LAZY_IMAGES: &str = "img[data-src]";

// Custom cursor
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
pub const CURSOR_RING_CLASS: &str = "cursor-ring";
pub const HOVER_CLASS: &str = "hover";
pub const CLICK_CLASS: &str = "click";
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, .magnetic, .link-underline, .city-item, input, textarea";

// Injected at start-up; referenced by the open mobile menu's `animation`.
pub const FADE_IN_KEYFRAMES: &str = "
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(-10px); }
        to { opacity: 1; transform: translateY(0); }
    }
";
