use crate::core::{SceneFrame, SCENE_BACKGROUND};
use web_sys as web;

/// Paint the projected backdrop onto its own canvas.
pub fn paint_scene(ctx: &web::CanvasRenderingContext2d, frame: &SceneFrame, css_w: f64, css_h: f64) {
    ctx.save();
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(SCENE_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, css_w, css_h);

    ctx.set_fill_style_str("#ffffff");
    for star in &frame.stars {
        ctx.set_global_alpha(star.alpha.clamp(0.0, 1.0) as f64);
        let s = star.size as f64;
        ctx.fill_rect(
            star.position.x as f64 - s * 0.5,
            star.position.y as f64 - s * 0.5,
            s,
            s,
        );
    }

    ctx.set_line_width(1.0);
    for solid in &frame.solids {
        ctx.set_global_alpha(solid.opacity as f64);
        ctx.set_stroke_style_str(solid.color);
        ctx.begin_path();
        for [a, b] in &solid.segments {
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
        }
        ctx.stroke();
    }
    ctx.restore();
}
