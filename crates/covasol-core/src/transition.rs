use crate::links::is_transition_target;

/// Page-transition overlay lifecycle within one document.
///
/// There is no `Transitioning -> Idle` edge on the happy path: navigation
/// unloads the document. Restoring the page from the back/forward cache is
/// the only way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Transitioning { target: String },
}

/// Outcome of a click on a transition-marked link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClick {
    /// Let the browser handle the click.
    PassThrough,
    /// Swallow the click; a transition is already running.
    Suppress,
    /// Suppress default navigation, show the overlay, navigate after `delay_ms`.
    Begin { href: String, delay_ms: u32 },
}

#[derive(Debug, Clone)]
pub struct PageTransition {
    state: TransitionState,
    delay_ms: u32,
}

impl PageTransition {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            state: TransitionState::Idle,
            delay_ms,
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn on_link_click(&mut self, href: Option<&str>, current_path: &str) -> LinkClick {
        let Some(href) = href else {
            return LinkClick::PassThrough;
        };
        if !is_transition_target(href, current_path) {
            return LinkClick::PassThrough;
        }
        if matches!(self.state, TransitionState::Transitioning { .. }) {
            return LinkClick::Suppress;
        }
        self.state = TransitionState::Transitioning {
            target: href.to_string(),
        };
        LinkClick::Begin {
            href: href.to_string(),
            delay_ms: self.delay_ms,
        }
    }

    /// `pageshow` handler. Returns `true` when the overlay must be cleared.
    pub fn on_page_show(&mut self, persisted: bool) -> bool {
        if !persisted {
            return false;
        }
        self.state = TransitionState::Idle;
        true
    }
}
