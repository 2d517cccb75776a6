use crate::constants::*;
use crate::core::Testimonial;
use crate::dom;
use crate::events::Listener;
use web_sys as web;

/// Fill the detail modal with `item` and open it. Missing parts are skipped.
pub fn show(document: &web::Document, item: &Testimonial) {
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        log::info!("[modal] no #{} on this page", MODAL_ID);
        return;
    };
    if let Some(img) = document.get_element_by_id(MODAL_IMAGE_ID) {
        _ = img.set_attribute("src", item.src);
        _ = img.set_attribute("alt", item.alt);
    }
    dom::set_text_by_id(document, MODAL_TEXT_ID, item.text);
    dom::set_text_by_id(document, MODAL_AUTHOR_NAME_ID, item.author_name);
    dom::set_text_by_id(document, MODAL_AUTHOR_TITLE_ID, item.author_title);
    dom::set_text_by_id(document, MODAL_DIVISION_ID, item.division);

    _ = modal.class_list().add_1(MODAL_ACTIVE_CLASS);
    dom::set_body_overflow(document, "hidden");
    log::info!("[modal] open {}", item.id);
}

pub fn hide(document: &web::Document) {
    if let Some(modal) = document.get_element_by_id(MODAL_ID) {
        _ = modal.class_list().remove_1(MODAL_ACTIVE_CLASS);
        dom::set_body_overflow(document, "");
    }
}

/// Close on the close button, and on clicks that land on the backdrop
/// itself rather than the modal content.
pub fn wire_close(document: &web::Document) -> Vec<Listener> {
    let mut out = Vec::new();

    if let Some(close) = document.get_element_by_id(MODAL_CLOSE_ID) {
        let doc = document.clone();
        out.extend(Listener::attach(&close, "click", move |_ev| hide(&doc)));
    }

    if let Some(modal) = document.get_element_by_id(MODAL_ID) {
        let doc = document.clone();
        out.extend(Listener::attach(&modal, "click", move |ev| {
            let Some(target) = dom::target_element(&ev) else {
                return;
            };
            if target.id() == MODAL_ID || target.class_list().contains(MODAL_OVERLAY_CLASS) {
                hide(&doc);
            }
        }));
    }

    out
}
