use web_sys as web;

pub mod cursor;
pub mod particles;
pub mod scene;

pub use cursor::paint_cursor;
pub use particles::paint_particles;
pub use scene::paint_scene;

/// Reset the transform to CSS pixels and clear the whole surface.
#[inline]
pub fn begin_frame(ctx: &web::CanvasRenderingContext2d, css_w: f64, css_h: f64, dpr: f64) {
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.set_global_alpha(1.0);
    ctx.set_shadow_blur(0.0);
    ctx.clear_rect(0.0, 0.0, css_w, css_h);
}

#[inline]
pub fn circle_path(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    _ = ctx.arc(x, y, r.max(0.0), 0.0, std::f64::consts::TAU);
}
