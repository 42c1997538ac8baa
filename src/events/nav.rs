use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    ANCHOR_LINK_SELECTOR, ATTR_SLIDE, CAROUSEL_ANCHOR, CAROUSEL_GOTO_EVENT, CAROUSEL_SELECTOR,
    SLIDE_SETTLE_DELAY_MS, YEAR_ID,
};
use crate::dom;

thread_local! {
    /// goTo function of the page-owned carousel, once it registers itself.
    static CAROUSEL_CONTROLLER: RefCell<Option<js_sys::Function>> = RefCell::new(None);
}

/// Register the carousel's goTo function. Until this is called, slide
/// requests fall back to a DOM event the carousel can pick up later.
#[wasm_bindgen]
pub fn set_carousel_controller(go_to: js_sys::Function) {
    CAROUSEL_CONTROLLER.with(|c| *c.borrow_mut() = Some(go_to));
}

/// Route a slide index to the carousel.
#[wasm_bindgen]
pub fn go_to(slide_index: i32) {
    dispatch_slide(slide_index);
}

pub fn dispatch_slide(slide_index: i32) {
    let controller = CAROUSEL_CONTROLLER.with(|c| c.borrow().clone());
    if let Some(go) = controller {
        if let Err(e) = go.call1(&JsValue::NULL, &JsValue::from(slide_index)) {
            log::warn!("carousel goTo({}) threw: {:?}", slide_index, e);
        }
        return;
    }

    // No controller yet; leave a `carousel:goto` event on the carousel root.
    let Some(document) = dom::window_document() else {
        return;
    };
    if let Ok(Some(carousel)) = document.query_selector(CAROUSEL_SELECTOR) {
        let init = web::CustomEventInit::new();
        init.set_detail(&JsValue::from(slide_index));
        if let Ok(event) = web::CustomEvent::new_with_event_init_dict(CAROUSEL_GOTO_EVENT, &init) {
            _ = carousel.dispatch_event(&event);
        }
    }
}

/// Wire every internal anchor to smooth scrolling. Links that also carry a
/// slide index route it to the carousel, with a short delay for the link
/// into the carousel section so the scroll settles first.
pub fn wire_smooth_scroll(document: &web::Document) {
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if href.len() <= 1 {
            // Bare "#" links keep their default behavior.
            continue;
        }
        let Ok(Some(target)) = document.query_selector(&href) else {
            continue;
        };

        let slide = link
            .get_attribute(ATTR_SLIDE)
            .and_then(|v| v.parse::<i32>().ok());
        let into_carousel = href == CAROUSEL_ANCHOR;

        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);

            if let Some(index) = slide {
                if into_carousel {
                    schedule_slide_dispatch(index);
                } else {
                    dispatch_slide(index);
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn schedule_slide_dispatch(index: i32) {
    let Some(win) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || dispatch_slide(index)) as Box<dyn FnMut()>);
    _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        SLIDE_SETTLE_DELAY_MS,
    );
    closure.forget();
}

/// Stamp the current year into the footer.
pub fn stamp_year(document: &web::Document) {
    let year = js_sys::Date::new_0().get_full_year();
    dom::set_text_by_id(document, YEAR_ID, &year.to_string());
}
