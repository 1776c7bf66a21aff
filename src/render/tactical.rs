//! Tactical surface: reference grid, entity markers, friendly chain.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geo::project;
use crate::model::{EntityKind, MapEntity};
use crate::state::Viewport;

/// Pitch of the faint background grid. Purely a visual ruler; drawn in world
/// space so it pans and zooms with the viewport, unaffected by projection.
const GRID_STEP: f64 = 20.0;

struct MarkerStyle {
    color: &'static str,
    radius: f64,
    glow: f64,
}

fn marker_style(kind: EntityKind) -> MarkerStyle {
    match kind {
        EntityKind::Threat => MarkerStyle {
            color: "#ff4c4c",
            radius: 6.0,
            glow: 10.0,
        },
        EntityKind::Friendly => MarkerStyle {
            color: "#00ff73",
            radius: 4.0,
            glow: 8.0,
        },
        EntityKind::Camera => MarkerStyle {
            color: "#3399ff",
            radius: 4.0,
            glow: 6.0,
        },
    }
}

/// One frame of the tactical surface. `pulse` is a [0,1) phase driving the
/// threat ring animation. Projection happens in untransformed canvas space;
/// the viewport transform carries pan/zoom.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    w: f64,
    h: f64,
    view: &Viewport,
    entities: &[MapEntity],
    pulse: f64,
) {
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.save();
    let _ = ctx.translate(view.offset_x, view.offset_y);
    let _ = ctx.scale(view.zoom, view.zoom);

    draw_grid(ctx, w, h);
    for entity in entities {
        draw_marker(ctx, w, h, entity, pulse);
    }
    draw_friendly_chain(ctx, w, h, entities);

    ctx.restore();
    draw_zoom_badge(ctx, w, view.zoom_percent());
}

fn draw_grid(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_stroke_style_str("rgba(0, 255, 115, 0.1)");
    ctx.set_line_width(1.0);
    let mut x = 0.0;
    while x <= w {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y <= h {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
        y += GRID_STEP;
    }
}

fn draw_marker(ctx: &CanvasRenderingContext2d, w: f64, h: f64, entity: &MapEntity, pulse: f64) {
    let (x, y) = project(entity.position, w, h);
    let style = marker_style(entity.kind);

    ctx.save();
    ctx.set_fill_style_str(style.color);
    ctx.set_shadow_color(style.color);
    ctx.set_shadow_blur(style.glow);
    ctx.begin_path();
    let _ = ctx.arc(x, y, style.radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();

    if entity.kind == EntityKind::Threat {
        ctx.set_stroke_style_str(style.color);
        ctx.set_line_width(2.0);
        ctx.set_global_alpha(0.5 * (1.0 - pulse) + 0.15);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 10.0 + 4.0 * pulse, 0.0, std::f64::consts::PI * 2.0);
        ctx.stroke();
    }
    ctx.restore();
}

/// Dashed chain between consecutive friendly units in catalog order; a
/// sequential link line, not a nearest-neighbor mesh.
fn draw_friendly_chain(ctx: &CanvasRenderingContext2d, w: f64, h: f64, entities: &[MapEntity]) {
    let friendlies: Vec<&MapEntity> = entities
        .iter()
        .filter(|e| e.kind == EntityKind::Friendly)
        .collect();
    if friendlies.len() < 2 {
        return;
    }
    ctx.set_stroke_style_str("rgba(0, 255, 115, 0.3)");
    ctx.set_line_width(1.0);
    let dash = js_sys::Array::new();
    dash.push(&JsValue::from_f64(2.0));
    dash.push(&JsValue::from_f64(4.0));
    let _ = ctx.set_line_dash(&dash);
    for pair in friendlies.windows(2) {
        let (x1, y1) = project(pair[0].position, w, h);
        let (x2, y2) = project(pair[1].position, w, h);
        ctx.begin_path();
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.stroke();
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());
}

/// Screen-fixed HUD: drawn after the transform is restored so it ignores
/// pan/zoom.
pub fn draw_zoom_badge(ctx: &CanvasRenderingContext2d, w: f64, percent: u32) {
    let label = format!("{}%", percent);
    ctx.save();
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.8)");
    ctx.fill_rect(w - 48.0, 6.0, 42.0, 18.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("11px monospace");
    let _ = ctx.fill_text(&label, w - 42.0, 19.0);
    ctx.restore();
}
