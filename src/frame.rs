use crate::sphere::{SharedSphere, SphereState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Momentum step, then the gated render pass.
fn frame(state: &SharedSphere) {
    let Ok(mut s) = state.try_borrow_mut() else {
        return;
    };
    let SphereState {
        engine,
        registry,
        host,
    } = &mut *s;
    if let Some(placements) = engine.frame(Instant::now()) {
        registry.render_pass(&placements, host);
    }
}

/// A running requestAnimationFrame loop. `stop` cancels the pending frame and
/// releases the recurring callback.
pub struct FrameLoop {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(state: SharedSphere) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let raf_clone = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame(&state);
            raf_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        raf_id.set(request_frame(&tick));
        Self { tick, raf_id }
    }

    pub fn stop(self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference back to its own slot.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
