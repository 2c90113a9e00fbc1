//! Platform-independent half of the site effects: state machines, smoothing
//! filters and layout math.
//!
//! Nothing here touches the DOM, so the web frontend stays a thin layer of
//! event wiring and every decision can be tested on the host.

pub mod config;
pub mod constants;
pub mod error;
pub mod frame_gate;
pub mod geometry;
pub mod header;
pub mod links;
pub mod menu;
pub mod oneshot;
pub mod timing;
pub mod trail;
pub mod transition;
pub mod typewriter;

pub use config::EffectsConfig;
pub use error::{ConfigError, EffectError, Result};
pub use frame_gate::FrameGate;
pub use geometry::Rect;
pub use header::HeaderScroll;
pub use menu::{MenuState, MobileMenu, StyleSnapshot, StyleTarget};
pub use oneshot::{IntersectionSample, LazyLoader, LoadImage, OneShotSet, RevealTracker};
pub use timing::{Debounce, Throttle};
pub use trail::{CursorTrail, Follower, TrailFrame};
pub use transition::{LinkClick, PageTransition, TransitionState};
pub use typewriter::TypeWriter;
