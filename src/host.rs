use crate::constants::*;
use crate::core::{ElementHost, NodeStyle, PointerKind, PointerTarget, Testimonial, EAGER_IMAGE_COUNT};
use crate::dom;
use crate::events::Listener;
use crate::sphere::{with_state, SphereState};
use instant::Instant;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One rendered tile plus the listeners attached when it was created.
pub struct DomNode {
    element: web::Element,
    listeners: SmallVec<[Listener; 3]>,
}

/// Creates, styles and removes tiles inside the sphere container.
pub struct DomHost {
    document: web::Document,
    container: web::HtmlElement,
    items: Vec<Testimonial>,
    state: Weak<RefCell<SphereState>>,
}

impl DomHost {
    pub fn new(
        document: web::Document,
        container: web::HtmlElement,
        items: Vec<Testimonial>,
        state: Weak<RefCell<SphereState>>,
    ) -> Self {
        Self {
            document,
            container,
            items,
            state,
        }
    }

    pub fn style_container(&self, css: &str) {
        _ = self.container.set_attribute("style", css);
    }

    fn build_element(&self, index: usize) -> Option<web::Element> {
        let item = self.items.get(index)?;
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(NODE_CLASS);
        _ = el.set_attribute(NODE_INDEX_ATTR, &index.to_string());

        let wrapper = self.document.create_element("div").ok()?;
        wrapper.set_class_name(NODE_WRAPPER_CLASS);
        let img = self.document.create_element("img").ok()?;
        _ = img.set_attribute("src", item.src);
        _ = img.set_attribute("alt", item.alt);
        _ = img.set_attribute("loading", if index < EAGER_IMAGE_COUNT { "eager" } else { "lazy" });
        _ = img.set_attribute("draggable", "false");
        wrapper.append_child(&img).ok()?;
        el.append_child(&wrapper).ok()?;
        Some(el)
    }

    fn attach_node_listeners(&self, el: &web::Element, index: usize) -> SmallVec<[Listener; 3]> {
        let mut listeners = SmallVec::new();

        let state = self.state.clone();
        listeners.extend(Listener::attach(el, "pointerenter", move |_ev| {
            with_state(&state, |s| s.engine.set_hovered(Some(index)));
        }));

        let state = self.state.clone();
        listeners.extend(Listener::attach(el, "pointerleave", move |_ev| {
            with_state(&state, |s| s.engine.clear_hovered(index));
        }));

        // Keep the press away from the container so it never starts a drag.
        let state = self.state.clone();
        listeners.extend(Listener::attach(el, "pointerdown", move |ev| {
            ev.stop_propagation();
            let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            with_state(&state, |s| {
                s.engine.controller.pointer_down(
                    PointerTarget::Item(index),
                    dom::pointer_client_pos(pev),
                    PointerKind::from_pointer_type(&pev.pointer_type()),
                    Instant::now(),
                );
            });
        }));

        listeners
    }
}

impl ElementHost for DomHost {
    type Node = DomNode;

    fn create(&mut self, index: usize) -> Option<DomNode> {
        let element = self.build_element(index)?;
        self.container.append_child(&element).ok()?;
        let listeners = self.attach_node_listeners(&element, index);
        Some(DomNode { element, listeners })
    }

    fn update(&mut self, node: &DomNode, style: &NodeStyle) {
        _ = node.element.set_attribute("style", &style.css());
    }

    fn destroy(&mut self, node: DomNode) {
        let DomNode { element, listeners } = node;
        for l in listeners {
            l.detach();
        }
        element.remove();
    }
}
