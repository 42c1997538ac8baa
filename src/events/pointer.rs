use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CURSOR_ID, HIGHLIGHT_X_PROP, HIGHLIGHT_Y_PROP};
use crate::core::input::{self, PointerDrive};
use crate::core::scene::Scene;
use crate::dom;

/// Handles the pointer listeners capture. Both listeners only ever write
/// target fields on the scene; integration happens in the frame tick.
#[derive(Clone)]
pub struct PointerWiring {
    pub scene: Rc<RefCell<Scene>>,
    /// Container the listeners attach to and deflection normalizes against.
    pub root: web::HtmlElement,
    /// Tag elements receiving the gloss highlight properties.
    pub tag_els: Vec<web::HtmlElement>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let root_for_listener = w.root.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let container = dom::element_rect(&w.root);
        w.scene
            .borrow_mut()
            .apply_drive(input::drive(container, pointer));

        // Gloss highlight tracks the raw pointer across each tag face.
        for el in &w.tag_els {
            let p = input::highlight_point(dom::element_rect(el), pointer);
            dom::set_style_property(el, HIGHLIGHT_X_PROP, &format!("{}px", p.x));
            dom::set_style_property(el, HIGHLIGHT_Y_PROP, &format!("{}px", p.y));
        }
    }) as Box<dyn FnMut(_)>);
    _ = root_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &PointerWiring) {
    let scene = w.scene.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        // Relax to neutral; the springs ease the rest of the way over the
        // following frames.
        scene.borrow_mut().apply_drive(PointerDrive::NEUTRAL);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .root
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the custom cursor element glued to the pointer, page-wide.
pub fn wire_cursor_follower(document: &web::Document) {
    let Some(cursor) = document
        .get_element_by_id(CURSOR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("no #{CURSOR_ID} element; cursor follower disabled");
        return;
    };

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        dom::set_style_property(&cursor, "left", &format!("{}px", ev.client_x()));
        dom::set_style_property(&cursor, "top", &format!("{}px", ev.client_y()));
    }) as Box<dyn FnMut(_)>);
    if let Some(win) = web::window() {
        _ = win.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
