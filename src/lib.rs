#![cfg(target_arch = "wasm32")]
use crate::config::FxConfig;
use crate::core::FxController;
use crate::dom::ListenerGuard;
use crate::frame::{FrameContext, FrameLoop, Surface};
use anyhow::Context;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
pub mod core;
mod dom;
mod error;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx loaded");
    Ok(())
}

/// Live effects attached to the page.
///
/// Dropping the handle (or calling `unmount` from JS) removes every listener
/// and stops the frame loop.
#[wasm_bindgen]
pub struct FxHandle {
    controller: Rc<RefCell<FxController>>,
    listeners: Vec<ListenerGuard>,
    _frame: FrameLoop,
}

#[wasm_bindgen]
impl FxHandle {
    /// Tear the effects down now instead of waiting for garbage collection.
    pub fn unmount(self) {}

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.controller.borrow().particles().len()
    }

    #[wasm_bindgen(js_name = isInteractive)]
    pub fn is_interactive(&self) -> bool {
        self.controller.borrow().tracker().is_interactive()
    }
}

impl Drop for FxHandle {
    fn drop(&mut self) {
        self.controller.borrow_mut().unmount();
        log::info!("[fx] unmounted; releasing {} listeners", self.listeners.len());
        log::debug!(
            "[fx] removing: {:?}",
            self.listeners.iter().map(|g| g.event()).collect::<Vec<_>>()
        );
    }
}

/// Attach cursor, particles and backdrop to the current page.
#[wasm_bindgen]
pub fn mount() -> Result<FxHandle, JsValue> {
    mount_inner().map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn mount_inner() -> anyhow::Result<FxHandle> {
    let (window, document) = dom::window_document()?;
    let defaults = FxConfig::default();

    let (fx_canvas, fx_ctx) = dom::canvas_2d(&document, defaults.fx_canvas_id)?;
    let cfg = FxConfig::from_element(&fx_canvas);

    let scene = if cfg.scene_enabled {
        match dom::canvas_2d(&document, cfg.scene_canvas_id) {
            Ok((canvas, ctx)) => Some(Surface { canvas, ctx }),
            Err(e) => {
                log::warn!("[fx] backdrop disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let controller = Rc::new(RefCell::new(FxController::new()));
    controller.borrow_mut().mount(&mut rng, scene.is_some());
    log::info!(
        "[fx] mounted: {} particles, backdrop={}, seed={:?}",
        controller.borrow().particles().len(),
        scene.is_some(),
        cfg.seed
    );

    // Guards collected so far are dropped (and removed) if a later step fails.
    let mut listeners = events::wire_pointer_handlers(&window, &document, &controller)
        .context("wiring pointer listeners")?;
    listeners.extend(
        events::wire_contact_form(&document, &controller).context("wiring contact form")?,
    );
    listeners.extend(events::wire_navigation(&document, &controller).context("wiring navigation")?);
    log::info!("[fx] {} listeners attached", listeners.len());

    let frame = frame::start_loop(FrameContext {
        controller: controller.clone(),
        fx: Surface {
            canvas: fx_canvas,
            ctx: fx_ctx,
        },
        scene,
        contact_form: document.get_element_by_id(constants::CONTACT_FORM_ID),
        last_instant: Instant::now(),
    });

    Ok(FxHandle {
        controller,
        listeners,
        _frame: frame,
    })
}
