//! Per-surface pan/zoom state, read by the render loop every frame.

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;

/// Wheel zoom is multiplicative: scroll down shrinks, scroll up grows.
const WHEEL_OUT: f64 = 0.9;
const WHEEL_IN: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    /// Offsets are unconstrained; panning has no bounds.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Applies a wheel event's deltaY. Zoom stays within [MIN_ZOOM, MAX_ZOOM].
    pub fn apply_wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 { WHEEL_OUT } else { WHEEL_IN };
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Additive zoom for the toolbar +/- buttons.
    pub fn zoom_step(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_zoom_is_always_clamped() {
        let mut v = Viewport::default();
        for _ in 0..100 {
            v.apply_wheel(-1.0);
            assert!(v.zoom >= MIN_ZOOM && v.zoom <= MAX_ZOOM);
        }
        assert_eq!(v.zoom, MAX_ZOOM);
        for _ in 0..200 {
            v.apply_wheel(1.0);
            assert!(v.zoom >= MIN_ZOOM && v.zoom <= MAX_ZOOM);
        }
        assert_eq!(v.zoom, MIN_ZOOM);
    }

    #[test]
    fn zoom_step_is_clamped() {
        let mut v = Viewport::default();
        v.zoom_step(10.0);
        assert_eq!(v.zoom, MAX_ZOOM);
        v.zoom_step(-10.0);
        assert_eq!(v.zoom, MIN_ZOOM);
        v.zoom_step(0.25);
        assert_eq!(v.zoom, 0.75);
    }

    #[test]
    fn pan_accumulates_without_bounds() {
        let mut v = Viewport::default();
        v.pan_by(1e6, -1e6);
        v.pan_by(3.5, 2.5);
        assert_eq!(v.offset_x, 1e6 + 3.5);
        assert_eq!(v.offset_y, -1e6 + 2.5);
    }

    #[test]
    fn opposite_drags_restore_offsets() {
        let mut v = Viewport::default();
        let (ox, oy) = (v.offset_x, v.offset_y);
        v.pan_by(37.25, -18.5);
        v.pan_by(-37.25, 18.5);
        assert!((v.offset_x - ox).abs() < 1e-9);
        assert!((v.offset_y - oy).abs() < 1e-9);
    }

    #[test]
    fn zoom_percent_rounds() {
        let mut v = Viewport::default();
        assert_eq!(v.zoom_percent(), 100);
        v.apply_wheel(-1.0);
        assert_eq!(v.zoom_percent(), 110);
    }
}
