/// Coalesces bursts of events (scroll, resize) into a single update per
/// rendered frame.
///
/// `request` returns `true` only for the first call after the last
/// `begin_frame`; the caller schedules an animation frame exactly then.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the top of the scheduled frame callback.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
