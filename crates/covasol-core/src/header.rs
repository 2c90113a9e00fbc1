/// Scrolled/unscrolled display state of the site header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderScroll {
    threshold: f64,
    scrolled: bool,
}

impl HeaderScroll {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    #[inline]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed the current scroll offset. Returns the new state only when it
    /// differs from the previous one, so the DOM is touched on edges only.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y >= self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderScroll;

    #[test]
    fn threshold_is_inclusive() {
        let mut h = HeaderScroll::new(50.0);
        assert_eq!(h.update(49.9), None);
        assert!(!h.is_scrolled());
        assert_eq!(h.update(50.0), Some(true));
        assert!(h.is_scrolled());
    }

    #[test]
    fn repeated_offsets_are_idempotent() {
        let mut h = HeaderScroll::new(50.0);
        assert_eq!(h.update(300.0), Some(true));
        for _ in 0..5 {
            assert_eq!(h.update(300.0), None);
        }
        assert_eq!(h.update(0.0), Some(false));
        assert_eq!(h.update(10.0), None);
        assert!(!h.is_scrolled());
    }
}
