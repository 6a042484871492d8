use crate::core::{FxController, InteractiveTarget, PointerSample};
use crate::dom::ListenerGuard;
use crate::error::MountError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

impl InteractiveTarget for web::Element {
    fn tag_name(&self) -> String {
        web::Element::tag_name(self)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

/// Pointer listeners feeding the tracker: movement on the window, hover
/// classification on the document, and enter/leave of the page itself.
pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    controller: &Rc<RefCell<FxController>>,
) -> Result<Vec<ListenerGuard>, MountError> {
    let mut guards = Vec::with_capacity(5);

    let c = controller.clone();
    guards.push(ListenerGuard::attach(window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let sample = PointerSample::new(ev.client_x() as f32, ev.client_y() as f32);
            c.borrow_mut().on_pointer_move(sample);
        }
    })?);

    let c = controller.clone();
    guards.push(ListenerGuard::attach(document, "mouseover", move |ev| {
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
            c.borrow_mut().on_pointer_enter_element(&el);
        }
    })?);

    let c = controller.clone();
    guards.push(ListenerGuard::attach(document, "mouseout", move |_ev| {
        c.borrow_mut().on_pointer_leave_element();
    })?);

    // mouseenter/mouseleave fire on the root element when crossing the viewport edge
    let surface: web::EventTarget = match document.document_element() {
        Some(root) => root.into(),
        None => document.clone().into(),
    };

    let c = controller.clone();
    guards.push(ListenerGuard::attach(&surface, "mouseleave", move |_ev| {
        c.borrow_mut().on_visibility_leave();
    })?);

    let c = controller.clone();
    guards.push(ListenerGuard::attach(&surface, "mouseenter", move |_ev| {
        c.borrow_mut().on_visibility_enter();
    })?);

    Ok(guards)
}
