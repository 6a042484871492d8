use crate::constants::{NAV_MENU_ID, NAV_TOGGLE_ID, OPEN_CLASS, RESUME_BUTTON_CLASS};
use crate::core::nav::{item_for_href, NavMenu, RESUME_FILE_NAME, RESUME_HREF};
use crate::core::FxController;
use crate::dom::{self, ListenerGuard};
use crate::error::MountError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start a download of the resume through a throwaway anchor.
pub fn download_resume(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let link = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_href(RESUME_HREF);
    link.set_download(RESUME_FILE_NAME);
    body.append_child(&link)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.click();
    body.remove_child(&link)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn apply_menu(menu: &NavMenu, menu_el: &web::Element, toggle_el: &web::Element) {
    dom::set_class(menu_el, OPEN_CLASS, menu.is_open());
    toggle_el.set_text_content(Some(menu.button_label()));
}

/// Mobile menu toggle, close-on-select, and the resume download buttons.
pub fn wire_navigation(
    document: &web::Document,
    controller: &Rc<RefCell<FxController>>,
) -> Result<Vec<ListenerGuard>, MountError> {
    let mut guards = Vec::with_capacity(4);

    let menu_parts = document
        .get_element_by_id(NAV_MENU_ID)
        .zip(document.get_element_by_id(NAV_TOGGLE_ID));
    match menu_parts {
        Some((menu_el, toggle_el)) => {
            let c = controller.clone();
            let (m, t) = (menu_el.clone(), toggle_el.clone());
            guards.push(ListenerGuard::attach(&toggle_el, "click", move |_ev| {
                let mut ctl = c.borrow_mut();
                ctl.nav.toggle();
                apply_menu(&ctl.nav, &m, &t);
            })?);

            let c = controller.clone();
            let (m, t) = (menu_el.clone(), toggle_el.clone());
            guards.push(ListenerGuard::attach(&menu_el, "click", move |ev| {
                let link = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::Element>().ok())
                    .and_then(|el| el.closest("a").ok().flatten());
                if let Some(link) = link {
                    if let Some(item) = link.get_attribute("href").as_deref().and_then(item_for_href) {
                        log::debug!("[nav] -> {}", item.label);
                    }
                    let mut ctl = c.borrow_mut();
                    ctl.nav.close();
                    apply_menu(&ctl.nav, &m, &t);
                }
            })?);
        }
        None => log::warn!(
            "[nav] #{} / #{} missing; menu toggle skipped",
            NAV_MENU_ID,
            NAV_TOGGLE_ID
        ),
    }

    // One listener per button: the synthetic anchor click bubbles to `document`,
    // so a document-level handler would re-enter itself.
    let selector = format!(".{}", RESUME_BUTTON_CLASS);
    let buttons = document
        .query_selector_all(&selector)
        .map_err(|e| MountError::Listener {
            event: "click",
            detail: format!("{:?}", e),
        })?;
    for i in 0..buttons.length() {
        let Some(button) = buttons
            .item(i)
            .and_then(|n| n.dyn_into::<web::Element>().ok())
        else {
            continue;
        };
        let c = controller.clone();
        let doc = document.clone();
        guards.push(ListenerGuard::attach(&button, "click", move |_ev| {
            if let Err(e) = download_resume(&doc) {
                log::error!("[nav] resume download failed: {:?}", e);
            }
            let mut ctl = c.borrow_mut();
            ctl.nav.close();
            if let (Some(m), Some(t)) = (
                doc.get_element_by_id(NAV_MENU_ID),
                doc.get_element_by_id(NAV_TOGGLE_ID),
            ) {
                apply_menu(&ctl.nav, &m, &t);
            }
        })?);
    }

    Ok(guards)
}
