use super::constants::{INTERACTIVE_CLASSES, INTERACTIVE_TAGS};
use super::trail::{PointerSample, TrailHistory};

/// Minimal view of a hovered element, enough to classify it as interactive.
///
/// The web layer implements this for DOM elements; tests use plain structs.
pub trait InteractiveTarget {
    /// Upper-case tag name (`"A"`, `"BUTTON"`, `"DIV"`, ...).
    fn tag_name(&self) -> String;
    fn has_class(&self, class: &str) -> bool;
}

/// Whether hovering `target` should put the cursor into its interactive look.
pub fn is_interactive(target: &dyn InteractiveTarget) -> bool {
    let tag = target.tag_name();
    INTERACTIVE_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
        || INTERACTIVE_CLASSES.iter().any(|c| target.has_class(c))
}

/// Pointer state consumed by the cursor renderer.
///
/// Holds the latest position, the bounded trail, whether the pointer is over
/// an interactive element, and whether the pointer is inside the document at
/// all. Every operation is total.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    current: PointerSample,
    trail: TrailHistory,
    interactive: bool,
    visible: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            current: PointerSample::default(),
            trail: TrailHistory::new(),
            interactive: false,
            visible: true,
        }
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample) {
        self.current = sample;
        self.trail.push(sample);
    }

    /// Set the interactive flag from the element now under the pointer.
    pub fn on_pointer_enter_element(&mut self, target: &dyn InteractiveTarget) {
        self.interactive = is_interactive(target);
    }

    pub fn on_pointer_leave_element(&mut self) {
        self.interactive = false;
    }

    /// Pointer left the document: hide, and forget the trail and hover state.
    pub fn on_visibility_leave(&mut self) {
        self.visible = false;
        self.interactive = false;
        self.trail.clear();
    }

    pub fn on_visibility_enter(&mut self) {
        self.visible = true;
    }

    #[inline]
    pub fn current(&self) -> PointerSample {
        self.current
    }

    #[inline]
    pub fn trail(&self) -> &TrailHistory {
        &self.trail
    }

    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
