use crate::core::{
    base_testimonials, replicate, ElementRegistry, SphereConfig, SphereEngine, SPHERE_ITEM_COUNT,
};
use crate::dom;
use crate::events::{self, Listener, PointerWiring, ResizeWatcher};
use crate::frame::FrameLoop;
use crate::host::{DomHost, DomNode};
use crate::modal;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-instance context shared by the frame loop and every handler.
pub struct SphereState {
    pub engine: SphereEngine,
    pub registry: ElementRegistry<DomNode>,
    pub host: DomHost,
}

pub type SharedSphere = Rc<RefCell<SphereState>>;

impl SphereState {
    pub fn refresh_cursor(&self) {
        let css = self
            .engine
            .config
            .container_css(self.engine.controller.is_dragging());
        self.host.style_container(&css);
    }

    fn teardown_nodes(&mut self) {
        let SphereState { registry, host, .. } = self;
        registry.teardown(host);
    }
}

/// Run `f` against the shared state if it is still alive and not already
/// borrowed (handlers can fire while a frame is on the stack).
pub fn with_state<T>(state: &Weak<RefCell<SphereState>>, f: impl FnOnce(&mut SphereState) -> T) -> Option<T> {
    let rc = state.upgrade()?;
    let mut s = rc.try_borrow_mut().ok()?;
    let out = f(&mut s);
    Some(out)
}

type LoopSlot = Rc<RefCell<Option<FrameLoop>>>;

/// A mounted sphere: its state, loop and every listener it attached.
pub struct SphereWidget {
    state: SharedSphere,
    frame: LoopSlot,
    listeners: Vec<Listener>,
    resize: Option<ResizeWatcher>,
}

impl SphereWidget {
    /// Mount into `#container_id`. `Ok(None)` when the page has no such
    /// container.
    pub fn mount(document: &web::Document, container_id: &str) -> anyhow::Result<Option<Self>> {
        let Some(container_el) = document.get_element_by_id(container_id) else {
            log::info!("[sphere] no #{} on this page", container_id);
            return Ok(None);
        };
        let container: web::HtmlElement = container_el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", container_id, e))?;

        let config = SphereConfig::for_viewport(dom::viewport_width());
        let items = replicate(&base_testimonials(), SPHERE_ITEM_COUNT);
        let engine = SphereEngine::new(config, items.clone(), &mut rand::thread_rng());

        let state: SharedSphere = Rc::new_cyclic(|weak| {
            RefCell::new(SphereState {
                engine,
                registry: ElementRegistry::new(),
                host: DomHost::new(document.clone(), container.clone(), items, weak.clone()),
            })
        });
        state.borrow().refresh_cursor();
        {
            let s = state.borrow();
            log::info!(
                "[sphere] mounted items={} container={:.0}px radius={:.0} mobile={}",
                s.engine.items().len(),
                s.engine.config.container_size,
                s.engine.config.sphere_radius,
                s.engine.config.is_mobile
            );
        }

        let mut listeners = events::wire_pointer_handlers(PointerWiring {
            document: document.clone(),
            container,
            state: Rc::downgrade(&state),
        });
        listeners.extend(modal::wire_close(document));

        let frame: LoopSlot = Rc::new(RefCell::new(Some(FrameLoop::start(state.clone()))));

        let state_resize = Rc::downgrade(&state);
        let frame_resize = Rc::downgrade(&frame);
        let resize = ResizeWatcher::attach(move || {
            if let (Some(state), Some(frame)) = (state_resize.upgrade(), frame_resize.upgrade()) {
                reinitialize(&state, &frame);
            }
        });

        Ok(Some(Self {
            state,
            frame,
            listeners,
            resize,
        }))
    }

    /// Stop the loop, detach every listener and remove every node.
    pub fn teardown(self) {
        let SphereWidget {
            state,
            frame,
            listeners,
            resize,
        } = self;
        if let Some(f) = frame.borrow_mut().take() {
            f.stop();
        }
        if let Some(r) = resize {
            r.detach();
        }
        events::detach_all(listeners);
        state.borrow_mut().teardown_nodes();
        log::info!("[sphere] torn down");
    }
}

/// Rebuild geometry for the current viewport: stop the loop, drop every
/// node, regenerate points, restart.
fn reinitialize(state: &SharedSphere, frame: &LoopSlot) {
    if let Some(f) = frame.borrow_mut().take() {
        f.stop();
    }
    {
        let mut s = state.borrow_mut();
        s.teardown_nodes();
        let config = SphereConfig::for_viewport(dom::viewport_width());
        log::info!(
            "[resize] reinit container={:.0}px radius={:.0} mobile={}",
            config.container_size,
            config.sphere_radius,
            config.is_mobile
        );
        s.engine.reinitialize(config, &mut rand::thread_rng());
        s.refresh_cursor();
    }
    *frame.borrow_mut() = Some(FrameLoop::start(state.clone()));
}
