use crate::constants::{CONTACT_FORM_ID, SUBMITTED_CLASS};
use crate::core::FxController;
use crate::dom::{self, ListenerGuard};
use crate::error::MountError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// (name, value) of the form control that raised an input event
fn field_of(ev: &web::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    None
}

/// Keep the contact form model in sync and intercept submission.
///
/// Returns no guards when the page has no contact form.
pub fn wire_contact_form(
    document: &web::Document,
    controller: &Rc<RefCell<FxController>>,
) -> Result<Vec<ListenerGuard>, MountError> {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("[contact] no #{} on page; form wiring skipped", CONTACT_FORM_ID);
        return Ok(Vec::new());
    };
    let mut guards = Vec::with_capacity(2);

    let c = controller.clone();
    guards.push(ListenerGuard::attach(&form, "input", move |ev| {
        if let Some((name, value)) = field_of(&ev) {
            if !c.borrow_mut().contact.set_field(&name, &value) {
                log::debug!("[contact] ignoring input from field {:?}", name);
            }
        }
    })?);

    let c = controller.clone();
    let form_el = form.clone();
    guards.push(ListenerGuard::attach(&form, "submit", move |ev| {
        ev.prevent_default();
        c.borrow_mut().contact.submit(dom::now_ms());
        dom::set_class(&form_el, SUBMITTED_CLASS, true);
        log::info!("[contact] form submitted (local only)");
    })?);

    Ok(guards)
}

/// Drop the submitted look once the reset window has passed.
pub fn refresh_contact_form(form: &web::Element, controller: &mut FxController, now_ms: f64) {
    if controller.contact.tick(now_ms) {
        dom::set_class(form, SUBMITTED_CLASS, false);
    }
}
