use crate::core::{Debounce, RESIZE_DEBOUNCE_MS};
use crate::events::Listener;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Single pending timeout backing the debounce policy.
struct TimerSlot {
    debounce: Debounce,
    handle: Option<i32>,
    fire: Option<Closure<dyn FnMut()>>,
}

impl TimerSlot {
    fn schedule(&mut self, wait: Duration) {
        self.clear_timer();
        let (Some(window), Some(fire)) = (web::window(), self.fire.as_ref()) else {
            return;
        };
        self.handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.as_ref().unchecked_ref(),
                wait.as_millis().min(i32::MAX as u128) as i32,
            )
            .ok();
    }

    fn clear_timer(&mut self) {
        if let (Some(h), Some(window)) = (self.handle.take(), web::window()) {
            window.clear_timeout_with_handle(h);
        }
    }
}

/// Debounced window resize: `on_settled` runs once per burst of resize
/// events, after `RESIZE_DEBOUNCE_MS` of quiet.
pub struct ResizeWatcher {
    listener: Option<Listener>,
    slot: Rc<RefCell<TimerSlot>>,
}

impl ResizeWatcher {
    pub fn attach(mut on_settled: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let slot = Rc::new(RefCell::new(TimerSlot {
            debounce: Debounce::new(Duration::from_millis(RESIZE_DEBOUNCE_MS)),
            handle: None,
            fire: None,
        }));

        let slot_fire = Rc::downgrade(&slot);
        let fire = Closure::wrap(Box::new(move || {
            let Some(slot) = slot_fire.upgrade() else {
                return;
            };
            let due = {
                let mut s = slot.borrow_mut();
                s.handle = None;
                let now = Instant::now();
                if s.debounce.poll(now) {
                    true
                } else {
                    if s.debounce.is_pending() {
                        let wait = s.debounce.remaining(now);
                        s.schedule(wait);
                    }
                    false
                }
            };
            if due {
                log::info!("[resize] settled");
                on_settled();
            }
        }) as Box<dyn FnMut()>);
        slot.borrow_mut().fire = Some(fire);

        let slot_ev = Rc::downgrade(&slot);
        let listener = Listener::attach(&window, "resize", move |_ev| {
            if let Some(slot) = slot_ev.upgrade() {
                let mut s = slot.borrow_mut();
                let wait = s.debounce.trigger(Instant::now());
                s.schedule(wait);
            }
        });

        Some(Self { listener, slot })
    }

    pub fn detach(self) {
        if let Some(l) = self.listener {
            l.detach();
        }
        let mut s = self.slot.borrow_mut();
        s.clear_timer();
        s.debounce.cancel();
        s.fire = None;
    }
}
