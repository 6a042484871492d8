use crate::constants::{DATA_SCENE_KEY, DATA_SEED_KEY, FX_CANVAS_ID, SCENE_CANVAS_ID};
use web_sys as web;

/// Mount-time options.
///
/// Defaults come from `constants.rs`; the page can override the seed and
/// disable the backdrop through `data-fx-*` attributes on the fx canvas.
#[derive(Clone, Debug)]
pub struct FxConfig {
    pub fx_canvas_id: &'static str,
    pub scene_canvas_id: &'static str,
    /// Fixed RNG seed; `None` draws one from the browser's entropy source.
    pub seed: Option<u64>,
    pub scene_enabled: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            fx_canvas_id: FX_CANVAS_ID,
            scene_canvas_id: SCENE_CANVAS_ID,
            seed: None,
            scene_enabled: true,
        }
    }
}

impl FxConfig {
    pub fn from_element(el: &web::HtmlElement) -> Self {
        let mut cfg = Self::default();
        let data = el.dataset();
        if let Some(raw) = data.get(DATA_SEED_KEY) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => cfg.seed = Some(seed),
                Err(e) => log::warn!("[config] ignoring data-fx-seed={:?}: {}", raw, e),
            }
        }
        if let Some(raw) = data.get(DATA_SCENE_KEY) {
            cfg.scene_enabled = !matches!(raw.trim(), "off" | "false" | "0");
        }
        cfg
    }
}
