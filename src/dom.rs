use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `window.innerWidth` in CSS pixels, 0 when unavailable.
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn pointer_client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// The event target as an `Element`, if it is one.
#[inline]
pub fn target_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Closest ancestor-or-self of the event target matching `selector`.
pub fn closest_target(ev: &web::Event, selector: &str) -> Option<web::Element> {
    target_element(ev).and_then(|el| el.closest(selector).ok().flatten())
}

#[inline]
pub fn set_text_by_id(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", value);
    }
}
