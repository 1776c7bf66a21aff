//! Linear lat/lng to canvas projection for the demo operating window.
//!
//! This is not a geodesic transform: it maps a small fixed bounding box onto
//! the canvas with two divisions and a y flip. Positions outside the window
//! project off-canvas, which is fine for the static demo catalog.

use serde::{Deserialize, Serialize};

/// South-west anchor and spans of the reference window (Tokyo demo area).
pub const LON_ORIGIN: f64 = 139.645;
pub const LAT_ORIGIN: f64 = 35.674;
pub const LON_SPAN: f64 = 0.01;
pub const LAT_SPAN: f64 = 0.004;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Projects a geographic position into untransformed canvas space.
/// Screen y grows downward while latitude grows northward, hence the flip.
pub fn project(pos: GeoPoint, canvas_width: f64, canvas_height: f64) -> (f64, f64) {
    let x = ((pos.lng - LON_ORIGIN) / LON_SPAN) * canvas_width;
    let y = canvas_height - ((pos.lat - LAT_ORIGIN) / LAT_SPAN) * canvas_height;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 400.0;
    const H: f64 = 300.0;

    #[test]
    fn window_corners_map_to_canvas_corners() {
        let (x, y) = project(GeoPoint::new(LAT_ORIGIN, LON_ORIGIN), W, H);
        assert_eq!((x, y), (0.0, H));
        let (x, y) = project(
            GeoPoint::new(LAT_ORIGIN + LAT_SPAN, LON_ORIGIN + LON_SPAN),
            W,
            H,
        );
        // The window bounds are not exactly representable, so allow fp slop.
        assert!((x - W).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn longitude_is_strictly_monotonic_in_x() {
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=20 {
            let lng = LON_ORIGIN + LON_SPAN * (i as f64 / 20.0);
            let (x, _) = project(GeoPoint::new(LAT_ORIGIN, lng), W, H);
            assert!(x > prev, "x must strictly increase with longitude");
            prev = x;
        }
    }

    #[test]
    fn latitude_is_strictly_antitonic_in_y() {
        let mut prev = f64::INFINITY;
        for i in 0..=20 {
            let lat = LAT_ORIGIN + LAT_SPAN * (i as f64 / 20.0);
            let (_, y) = project(GeoPoint::new(lat, LON_ORIGIN), W, H);
            assert!(y < prev, "y must strictly decrease with latitude");
            prev = y;
        }
    }

    #[test]
    fn out_of_window_positions_project_off_canvas() {
        let (x, _) = project(GeoPoint::new(LAT_ORIGIN, LON_ORIGIN - LON_SPAN), W, H);
        assert!(x < 0.0);
        let (_, y) = project(GeoPoint::new(LAT_ORIGIN + 2.0 * LAT_SPAN, LON_ORIGIN), W, H);
        assert!(y < 0.0);
    }
}
