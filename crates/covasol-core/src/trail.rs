//! Exponential-smoothing cursor trail (dot + ring) state.

use glam::Vec2;

/// A point that moves a fixed fraction of the remaining distance toward its
/// target on every step. It approaches geometrically and never overshoots for
/// factors in (0, 1).
#[derive(Debug, Clone, Copy)]
pub struct Follower {
    pub position: Vec2,
    factor: f32,
}

impl Follower {
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            factor,
        }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.position += (target - self.position) * self.factor;
        self.position
    }
}

/// Positions to write for one rendered frame, already shifted by the element
/// half-sizes so the shapes are centred on the tracked point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailFrame {
    pub dot: Vec2,
    pub ring: Vec2,
}

#[derive(Debug, Clone)]
pub struct CursorTrail {
    dot: Follower,
    ring: Follower,
    target: Vec2,
    dot_half: f32,
    ring_half: f32,
    pub visible: bool,
}

impl CursorTrail {
    pub fn new(dot_follow: f32, ring_follow: f32, dot_half: f32, ring_half: f32) -> Self {
        Self {
            dot: Follower::new(dot_follow),
            ring: Follower::new(ring_follow),
            target: Vec2::ZERO,
            dot_half,
            ring_half,
            visible: false,
        }
    }

    /// Record the latest pointer position. Returns `true` when the trail just
    /// became visible.
    pub fn pointer_moved(&mut self, pointer: Vec2) -> bool {
        self.target = pointer;
        let was_visible = self.visible;
        self.visible = true;
        !was_visible
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn dot(&self) -> Vec2 {
        self.dot.position
    }

    pub fn ring(&self) -> Vec2 {
        self.ring.position
    }

    /// Advance both followers by one frame.
    pub fn step(&mut self) -> TrailFrame {
        let dot = self.dot.step(self.target);
        let ring = self.ring.step(self.target);
        TrailFrame {
            dot: dot - Vec2::splat(self.dot_half),
            ring: ring - Vec2::splat(self.ring_half),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_moves_fixed_fraction() {
        let mut f = Follower::new(0.25);
        let p = f.step(Vec2::new(100.0, -40.0));
        assert_eq!(p, Vec2::new(25.0, -10.0));
    }

    #[test]
    fn trail_frame_is_offset_by_half_size() {
        let mut t = CursorTrail::new(0.25, 0.15, 4.0, 20.0);
        t.pointer_moved(Vec2::new(100.0, 100.0));
        let frame = t.step();
        assert_eq!(frame.dot, Vec2::new(21.0, 21.0));
        assert!((frame.ring.x - (15.0 - 20.0)).abs() < 1e-5);
    }

    #[test]
    fn visibility_edges() {
        let mut t = CursorTrail::new(0.25, 0.15, 4.0, 20.0);
        assert!(t.pointer_moved(Vec2::ONE));
        assert!(!t.pointer_moved(Vec2::ONE));
        t.pointer_left();
        assert!(!t.visible);
        assert!(t.pointer_moved(Vec2::ONE));
    }
}
