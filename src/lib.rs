#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod host;
mod modal;
mod sphere;

use sphere::SphereWidget;

thread_local! {
    static MOUNTED: RefCell<Option<SphereWidget>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("testimonial-sphere starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    mount_into(&document, constants::SPHERE_CONTAINER_ID)?;
    Ok(())
}

/// Replace any mounted instance with a fresh one in `#container_id`.
/// Returns whether the container was found.
fn mount_into(document: &web_sys::Document, container_id: &str) -> anyhow::Result<bool> {
    unmount_testimonials();
    let Some(widget) = SphereWidget::mount(document, container_id)? else {
        return Ok(false);
    };
    MOUNTED.with(|m| *m.borrow_mut() = Some(widget));
    Ok(true)
}

/// Mount the sphere into the element with id `container_id`.
#[wasm_bindgen]
pub fn mount_testimonials(container_id: &str) -> bool {
    let Some(document) = dom::window_document() else {
        return false;
    };
    match mount_into(&document, container_id) {
        Ok(found) => found,
        Err(e) => {
            log::error!("mount error: {:?}", e);
            false
        }
    }
}

/// Tear down the mounted sphere, if any.
#[wasm_bindgen]
pub fn unmount_testimonials() {
    if let Some(widget) = MOUNTED.with(|m| m.borrow_mut().take()) {
        widget.teardown();
    }
}
