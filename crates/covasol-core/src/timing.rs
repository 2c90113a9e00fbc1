//! Debounce and throttle bookkeeping. The browser owns the timers; these only
//! decide which callbacks are allowed through.

/// Only the most recently scheduled call is allowed to run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    /// Start a new wait window and return its token.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// `true` when the timer carrying `token` is still the latest one.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}

/// Accepts at most one call per `limit_ms` window.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    limit_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last: None,
        }
    }

    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}
