use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener that owns its closure.
///
/// Always `detach` before dropping: the closure is invalidated on drop, and a
/// still-registered listener would then throw when the event fires.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref::<js_sys::Function>())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn detach_all(listeners: impl IntoIterator<Item = Listener>) {
    for l in listeners {
        l.detach();
    }
}
