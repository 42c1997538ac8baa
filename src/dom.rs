use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::geom::{Rect, SceneGeometry};
use crate::core::scene::parse_f32_or;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current viewport width in CSS pixels; 0 when unavailable.
pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .item(i)
                .and_then(|node| node.dyn_into::<web::Element>().ok())
            {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn set_style_property(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// Read a numeric attribute through the shared fallback parse.
pub fn parse_f32_attr(el: &web::Element, name: &str, fallback: f32) -> f32 {
    parse_f32_or(el.get_attribute(name).as_deref(), fallback)
}

pub fn set_text_by_id(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Live DOM-backed geometry source. Element handles are resolved once at
/// bootstrap; rects are read fresh on every query because the tick moves
/// the elements continuously.
pub struct DomGeometry {
    container: web::Element,
    hook: Option<web::Element>,
    attachments: FnvHashMap<String, web::Element>,
}

impl DomGeometry {
    pub fn new(
        container: web::Element,
        hook: Option<web::Element>,
        attachments: FnvHashMap<String, web::Element>,
    ) -> Self {
        Self {
            container,
            hook,
            attachments,
        }
    }
}

impl SceneGeometry for DomGeometry {
    fn container_rect(&self) -> Option<Rect> {
        Some(element_rect(&self.container))
    }

    fn hook_rect(&self) -> Option<Rect> {
        self.hook.as_ref().map(element_rect)
    }

    fn attachment_rect(&self, id: &str) -> Option<Rect> {
        self.attachments.get(id).map(element_rect)
    }
}
