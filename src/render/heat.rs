//! Heat surface: radial intensity blobs for the selected sample kind.

use web_sys::CanvasRenderingContext2d;

use crate::catalog::samples_of_kind;
use crate::geo::project;
use crate::model::{HeatKind, HeatSample};
use crate::state::Viewport;

/// RGB triple for a heat kind, spliced into rgba() stop colors.
pub fn heat_rgb(kind: HeatKind) -> &'static str {
    match kind {
        HeatKind::Threat => "255, 0, 0",
        HeatKind::Activity => "255, 165, 0",
        HeatKind::Movement => "0, 255, 255",
    }
}

/// One frame of the heat surface. Only samples of `selected` are drawn.
/// Radii are in untransformed canvas units, so blobs visually scale with
/// zoom along with everything else under the transform.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    w: f64,
    h: f64,
    view: &Viewport,
    samples: &[HeatSample],
    selected: HeatKind,
) {
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.save();
    let _ = ctx.translate(view.offset_x, view.offset_y);
    let _ = ctx.scale(view.zoom, view.zoom);

    let rgb = heat_rgb(selected);
    for sample in samples_of_kind(samples, selected) {
        let (x, y) = project(sample.position, w, h);
        let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, sample.radius) {
            Ok(g) => g,
            Err(_) => continue,
        };
        let center = format!("rgba({}, {})", rgb, sample.intensity * 0.5);
        let edge = format!("rgba({}, 0)", rgb);
        let _ = gradient.add_color_stop(0.0, &center);
        let _ = gradient.add_color_stop(1.0, &edge);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        let _ = ctx.arc(x, y, sample.radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    ctx.restore();
    super::tactical::draw_zoom_badge(ctx, w, view.zoom_percent());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_a_distinct_palette() {
        let a = heat_rgb(HeatKind::Activity);
        let t = heat_rgb(HeatKind::Threat);
        let m = heat_rgb(HeatKind::Movement);
        assert_ne!(a, t);
        assert_ne!(t, m);
        assert_ne!(a, m);
    }
}
