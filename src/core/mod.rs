pub mod constants;
pub mod contact;
pub mod controller;
pub mod cursor;
pub mod nav;
pub mod particles;
pub mod scene;
pub mod tracker;
pub mod trail;
pub mod tween;

pub use controller::FxController;
pub use cursor::{CursorFrame, CursorLayer};
pub use particles::{Particle, ParticleFrame};
pub use scene::{SceneFrame, SCENE_BACKGROUND};
pub use tracker::InteractiveTarget;
pub use trail::PointerSample;
