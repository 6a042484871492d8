use super::circle_path;
use crate::core::FxController;
use web_sys as web;

/// Paint every ambient particle at the controller's current clock.
///
/// Particle coordinates are viewport percentages; `css_w`/`css_h` map them to
/// pixels. Each particle gets a soft glow twice its size.
pub fn paint_particles(
    ctx: &web::CanvasRenderingContext2d,
    controller: &FxController,
    css_w: f64,
    css_h: f64,
) {
    ctx.save();
    for (particle, frame) in controller.particle_frames() {
        if frame.opacity <= 0.0 {
            continue;
        }
        let x = frame.x as f64 / 100.0 * css_w;
        let y = frame.y as f64 / 100.0 * css_h;
        ctx.set_global_alpha(frame.opacity as f64);
        ctx.set_fill_style_str(particle.color);
        ctx.set_shadow_color(particle.color);
        ctx.set_shadow_blur(particle.glow_radius() as f64);
        circle_path(ctx, x, y, frame.size as f64 * 0.5);
        ctx.fill();
    }
    ctx.restore();
}
