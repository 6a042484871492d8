/// DOM hooks and frame tuning for the web front-end.
///
/// Element ids and class names are the contract with the static page markup;
/// keeping them here keeps string literals out of the wiring code.
// Canvases
pub const FX_CANVAS_ID: &str = "fx-canvas"; // cursor + particles, above content
pub const SCENE_CANVAS_ID: &str = "scene-canvas"; // 3D backdrop, below content

// Dataset overrides read from the fx canvas (`data-fx-seed`, `data-fx-scene`)
pub const DATA_SEED_KEY: &str = "fxSeed";
pub const DATA_SCENE_KEY: &str = "fxScene";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMITTED_CLASS: &str = "submitted";

// Navigation
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const RESUME_BUTTON_CLASS: &str = "resume-download";
pub const OPEN_CLASS: &str = "open";

// Frame loop
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / stalls

// Cursor painting
pub const RING_LINE_WIDTH: f64 = 1.0;
pub const DOT_GLOW_BLUR: f64 = 12.0;
