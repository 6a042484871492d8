use crate::error::MountError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), MountError> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    Ok((window, document))
}

/// Milliseconds from the page's monotonic clock.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Look up `#id` as a canvas with a 2D context.
pub fn canvas_2d(
    document: &web::Document,
    id: &'static str,
) -> Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d), MountError> {
    let canvas = document
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(id))?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(MountError::NoContext2d(id))?;
    Ok((canvas, ctx))
}

/// Match the canvas backing store to its CSS box times the device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        if canvas.width() != w_px.max(1) || canvas.height() != h_px.max(1) {
            canvas.set_width(w_px.max(1));
            canvas.set_height(h_px.max(1));
        }
    }
}

/// CSS pixel size of the canvas box.
#[inline]
pub fn css_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width(), rect.height())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// An event listener that is removed again when dropped.
///
/// Every handler the effects install goes through this type, so tearing down
/// a mount (or failing halfway through one) leaves no handler behind.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, MountError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        target
            .add_event_listener_with_callback(event, callback)
            .map_err(|e| MountError::Listener {
                event,
                detail: format!("{:?}", e),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    #[inline]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, callback)
        {
            log::warn!("[dom] failed to remove '{}' listener: {:?}", self.event, e);
        }
    }
}

/// Toggle `class` on `el` to match `on`.
#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}
