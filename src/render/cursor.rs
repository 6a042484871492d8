use super::circle_path;
use crate::constants::{DOT_GLOW_BLUR, RING_LINE_WIDTH};
use crate::core::{CursorFrame, CursorLayer};
use web_sys as web;

fn fill_layer(ctx: &web::CanvasRenderingContext2d, layer: &CursorLayer, blur: f64) {
    ctx.set_global_alpha(layer.opacity.clamp(0.0, 1.0) as f64);
    ctx.set_fill_style_str(layer.color);
    ctx.set_shadow_color(layer.color);
    ctx.set_shadow_blur(blur);
    circle_path(
        ctx,
        layer.center.x as f64,
        layer.center.y as f64,
        layer.scaled_radius() as f64,
    );
    ctx.fill();
}

fn stroke_layer(ctx: &web::CanvasRenderingContext2d, layer: &CursorLayer) {
    ctx.set_global_alpha(layer.opacity.clamp(0.0, 1.0) as f64);
    ctx.set_stroke_style_str(layer.color);
    ctx.set_shadow_blur(0.0);
    ctx.set_line_width(RING_LINE_WIDTH);
    circle_path(
        ctx,
        layer.center.x as f64,
        layer.center.y as f64,
        layer.scaled_radius() as f64,
    );
    ctx.stroke();
}

/// Paint glow, trail, ring and dot, back to front. Nothing is drawn while the
/// pointer is outside the page.
pub fn paint_cursor(ctx: &web::CanvasRenderingContext2d, frame: &CursorFrame) {
    if !frame.visible {
        return;
    }
    ctx.save();
    stroke_layer(ctx, &frame.glow);
    // oldest first so the newest trail dot ends on top
    for layer in frame.trail.iter().rev() {
        fill_layer(ctx, layer, 0.0);
    }
    stroke_layer(ctx, &frame.ring);
    fill_layer(ctx, &frame.dot, DOT_GLOW_BLUR);
    ctx.restore();
}
