use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::FxController;
use crate::dom;
use crate::events;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    // Resize the backing store if needed and clear; returns the CSS size.
    fn begin(&self, dpr: f64) -> (f64, f64) {
        dom::sync_canvas_backing_size(&self.canvas);
        let (w, h) = dom::css_size(&self.canvas);
        render::begin_frame(&self.ctx, w, h, dpr);
        (w, h)
    }
}

pub struct FrameContext {
    pub controller: Rc<RefCell<FxController>>,
    pub fx: Surface,
    pub scene: Option<Surface>,
    pub contact_form: Option<web::Element>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let mut controller = self.controller.borrow_mut();
        let cursor = controller.advance(dt_sec);
        let dpr = dom::device_pixel_ratio();

        let (w, h) = self.fx.begin(dpr);
        render::paint_particles(&self.fx.ctx, &controller, w, h);
        render::paint_cursor(&self.fx.ctx, &cursor);

        if let (Some(surface), Some(scene)) = (self.scene.as_ref(), controller.scene()) {
            let (sw, sh) = surface.begin(dpr);
            let projected = scene.project(sw as f32, sh as f32);
            render::paint_scene(&surface.ctx, &projected, sw, sh);
        }

        if let Some(form) = self.contact_form.as_ref() {
            events::refresh_contact_form(form, &mut controller, dom::now_ms());
        }
    }
}

/// A running requestAnimationFrame loop; cancelled when dropped.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference so it can be freed.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let mut ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &handle);
    FrameLoop { handle, tick }
}
