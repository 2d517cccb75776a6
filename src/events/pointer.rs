use crate::constants::NODE_SELECTOR;
use crate::core::{PointerKind, PointerTarget};
use crate::dom;
use crate::events::Listener;
use crate::modal;
use crate::sphere::{with_state, SphereState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub state: Weak<RefCell<SphereState>>,
}

/// Attach the container press handler and the document-level move/up/cancel
/// handlers. The returned records must be detached on teardown.
pub fn wire_pointer_handlers(w: PointerWiring) -> Vec<Listener> {
    let mut out = Vec::with_capacity(4);
    out.extend(wire_pointerdown(&w));
    out.extend(wire_pointermove(&w));
    out.extend(wire_pointerup(&w));
    out.extend(wire_pointercancel(&w));
    out
}

fn wire_pointerdown(w: &PointerWiring) -> Option<Listener> {
    let state = w.state.clone();
    Listener::attach(&w.container, "pointerdown", move |ev| {
        // Tiles handle their own presses.
        if dom::closest_target(&ev, NODE_SELECTOR).is_some() {
            return;
        }
        let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        ev.prevent_default();
        with_state(&state, |s| {
            s.engine.controller.pointer_down(
                PointerTarget::Background,
                dom::pointer_client_pos(pev),
                PointerKind::from_pointer_type(&pev.pointer_type()),
                Instant::now(),
            );
            s.refresh_cursor();
        });
    })
}

fn wire_pointermove(w: &PointerWiring) -> Option<Listener> {
    let state = w.state.clone();
    Listener::attach(&w.document, "pointermove", move |ev| {
        let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        with_state(&state, |s| {
            let dragging = s.engine.controller.is_dragging();
            let engine = &mut s.engine;
            engine.controller.pointer_move(dom::pointer_client_pos(pev), &engine.config);
            if dragging {
                ev.prevent_default();
            }
        });
    })
}

fn wire_pointerup(w: &PointerWiring) -> Option<Listener> {
    let state = w.state.clone();
    let document = w.document.clone();
    Listener::attach(&w.document, "pointerup", move |ev| {
        let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let selected = with_state(&state, |s| {
            let picked = s
                .engine
                .controller
                .pointer_up(dom::pointer_client_pos(pev), Instant::now());
            s.refresh_cursor();
            picked.and_then(|i| s.engine.item(i).cloned())
        })
        .flatten();

        // Open outside the state borrow.
        if let Some(item) = selected {
            modal::show(&document, &item);
        }
    })
}

fn wire_pointercancel(w: &PointerWiring) -> Option<Listener> {
    let state = w.state.clone();
    Listener::attach(&w.document, "pointercancel", move |_ev| {
        with_state(&state, |s| {
            s.engine.controller.pointer_cancel();
            s.refresh_cursor();
        });
    })
}
