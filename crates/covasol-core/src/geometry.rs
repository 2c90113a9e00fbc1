//! Viewport geometry helpers for pointer- and scroll-driven transforms.

use glam::Vec2;

/// Client-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.width / 2.0) as f32,
            (self.top + self.height / 2.0) as f32,
        )
    }

    /// Vertical overlap with a viewport `viewport_height` tall, edges excluded.
    #[inline]
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom() > 0.0
    }
}

/// Translation pulling an element toward the pointer.
#[inline]
pub fn magnetic_offset(rect: Rect, pointer: Vec2, strength: f32) -> Vec2 {
    (pointer - rect.center()) * strength
}

/// Vertical parallax translation for a wrapper, or `None` when the wrapper is
/// outside the viewport.
///
/// Progress runs from 0 (wrapper top at the viewport bottom) to 1 (wrapper
/// bottom at the viewport top); the result is centred on zero and scaled so the
/// full travel is `max_offset`.
pub fn parallax_offset(wrapper: Rect, viewport_height: f64, max_offset: f64) -> Option<f64> {
    if !wrapper.intersects_viewport(viewport_height) {
        return None;
    }
    let span = viewport_height + wrapper.height;
    if span <= 0.0 {
        return None;
    }
    let progress = ((viewport_height - wrapper.top) / span).clamp(0.0, 1.0);
    Some((progress - 0.5) * max_offset)
}

/// Globe tilt in degrees `(rotate_x, rotate_y)` for a pointer position.
/// A degenerate viewport produces no tilt.
pub fn globe_tilt(pointer: Vec2, viewport: Vec2, range_deg: f32) -> (f32, f32) {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return (0.0, 0.0);
    }
    let y_axis = (pointer.x / viewport.x - 0.5) * range_deg;
    let x_axis = (pointer.y / viewport.y - 0.5) * range_deg;
    (x_axis, y_axis)
}

/// Smooth-scroll destination for an anchor target: its document position
/// minus the fixed header height.
#[inline]
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top + scroll_y - header_height
}

// ---------------- CSS value formatting ----------------
#[inline]
pub fn translate_px(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[inline]
pub fn translate_y_px(offset: f64) -> String {
    format!("translateY({offset}px)")
}

#[inline]
pub fn rotate_xy_deg(x_deg: f32, y_deg: f32) -> String {
    format!("rotateX({x_deg}deg) rotateY({y_deg}deg)")
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, height: f64) -> Rect {
        Rect {
            left: 0.0,
            top,
            width: 100.0,
            height,
        }
    }

    #[test]
    fn magnetic_is_zero_at_center() {
        let r = Rect {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 40.0,
        };
        assert_eq!(magnetic_offset(r, r.center(), 0.3), Vec2::ZERO);
    }

    #[test]
    fn magnetic_scales_offset() {
        let r = Rect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let off = magnetic_offset(r, Vec2::new(100.0, 0.0), 0.3);
        assert!((off.x - 15.0).abs() < 1e-5);
        assert!((off.y + 15.0).abs() < 1e-5);
    }

    #[test]
    fn parallax_skips_offscreen_wrappers() {
        assert_eq!(parallax_offset(rect(900.0, 200.0), 800.0, 60.0), None);
        assert_eq!(parallax_offset(rect(-200.0, 200.0), 800.0, 60.0), None);
    }

    #[test]
    fn parallax_is_centered_and_bounded() {
        // wrapper centred in the viewport -> progress 0.5
        let centred = parallax_offset(rect(300.0, 200.0), 800.0, 60.0).unwrap();
        assert!(centred.abs() < 1e-9);
        for top in [-199.0, -50.0, 0.0, 250.0, 600.0, 799.0] {
            let off = parallax_offset(rect(top, 200.0), 800.0, 60.0).unwrap();
            assert!((-30.0..=30.0).contains(&off), "offset {off} at top {top}");
        }
    }

    #[test]
    fn parallax_moves_up_as_page_scrolls() {
        let low = parallax_offset(rect(700.0, 200.0), 800.0, 60.0).unwrap();
        let high = parallax_offset(rect(0.0, 200.0), 800.0, 60.0).unwrap();
        assert!(high > low);
    }

    #[test]
    fn globe_tilt_is_zero_at_center_and_bounded() {
        let vp = Vec2::new(1000.0, 800.0);
        assert_eq!(globe_tilt(Vec2::new(500.0, 400.0), vp, 20.0), (0.0, 0.0));
        let (x, y) = globe_tilt(Vec2::new(1000.0, 0.0), vp, 20.0);
        assert_eq!((x, y), (-10.0, 10.0));
        assert_eq!(globe_tilt(Vec2::new(5.0, 5.0), Vec2::ZERO, 20.0), (0.0, 0.0));
    }

    #[test]
    fn anchor_subtracts_header() {
        assert_eq!(anchor_scroll_top(120.0, 400.0, 80.0), 440.0);
    }

    #[test]
    fn css_formatting() {
        assert_eq!(translate_px(Vec2::new(1.5, -2.0)), "translate(1.5px, -2px)");
        assert_eq!(translate_y_px(-12.5), "translateY(-12.5px)");
        assert_eq!(rotate_xy_deg(1.0, -2.5), "rotateX(1deg) rotateY(-2.5deg)");
        assert_eq!(px(4.0), "4px");
    }
}
