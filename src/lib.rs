#![cfg(target_arch = "wasm32")]
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;

use crate::constants::{
    ARM_SELECTOR, ATTR_ARM_TARGET, ATTR_DEPTH, ATTR_ID, ATTR_ROTATION, RING_HOOK_SELECTOR,
    ROOT_ID, TAG_HOOK_SELECTOR, TAG_SELECTOR,
};
use crate::core::constants::DEFAULT_DEPTH;
use crate::core::{LayoutTable, Scene, TagSpec};

/// Re-resolve tag anchors on window resize and on every breakpoint flip.
fn wire_viewport_relayout(scene: Rc<RefCell<Scene>>) {
    let Some(window) = web::window() else {
        return;
    };

    let resize_scene = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        resize_scene.borrow_mut().relayout(dom::viewport_width());
    }) as Box<dyn FnMut()>);
    _ = window
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();

    let widths: Vec<f32> = scene.borrow().layout().breakpoint_widths().collect();
    for width in widths {
        let query = format!("(max-width: {}px)", width);
        match window.match_media(&query) {
            Ok(Some(mql)) => {
                let mql_scene = scene.clone();
                let change_closure = Closure::wrap(Box::new(move || {
                    mql_scene.borrow_mut().relayout(dom::viewport_width());
                }) as Box<dyn FnMut()>);
                _ = mql.add_event_listener_with_callback(
                    "change",
                    change_closure.as_ref().unchecked_ref(),
                );
                change_closure.forget();
            }
            _ => log::debug!("matchMedia unavailable for {}", query),
        }
    }
}

struct TagParts {
    specs: Vec<TagSpec>,
    tag_els: Vec<web::HtmlElement>,
    attachments: FnvHashMap<String, web::Element>,
}

fn collect_tags(document: &web::Document) -> TagParts {
    let mut specs: Vec<TagSpec> = Vec::new();
    let mut tag_els = Vec::new();
    let mut attachments = FnvHashMap::default();

    for el in dom::query_all(document, TAG_SELECTOR) {
        let Some(id) = el.get_attribute(ATTR_ID) else {
            log::warn!("tag without {}; skipping", ATTR_ID);
            continue;
        };
        if specs.iter().any(|s| s.id == id) {
            log::warn!("duplicate tag id '{}'; skipping", id);
            continue;
        }
        let Ok(html) = el.dyn_into::<web::HtmlElement>() else {
            log::warn!("tag '{}' is not an HTML element; skipping", id);
            continue;
        };
        let base_rotation_deg = dom::parse_f32_attr(&html, ATTR_ROTATION, 0.0);
        let depth = dom::parse_f32_attr(&html, ATTR_DEPTH, DEFAULT_DEPTH);
        if let Ok(Some(hole)) = html.query_selector(TAG_HOOK_SELECTOR) {
            attachments.insert(id.clone(), hole);
        } else {
            log::debug!("tag '{}' has no {}; its arm is skipped", id, TAG_HOOK_SELECTOR);
        }
        specs.push(TagSpec {
            id,
            base_rotation_deg,
            depth,
        });
        tag_els.push(html);
    }

    TagParts {
        specs,
        tag_els,
        attachments,
    }
}

struct ArmParts {
    arm_els: Vec<web::HtmlElement>,
    arm_targets: Vec<String>,
}

fn collect_arms(document: &web::Document) -> ArmParts {
    let mut arm_els = Vec::new();
    let mut arm_targets = Vec::new();

    for el in dom::query_all(document, ARM_SELECTOR) {
        let Some(target) = el.get_attribute(ATTR_ARM_TARGET) else {
            log::warn!("arm without {}; skipping", ATTR_ARM_TARGET);
            continue;
        };
        let Ok(html) = el.dyn_into::<web::HtmlElement>() else {
            log::warn!("arm for '{}' is not an HTML element; skipping", target);
            continue;
        };
        arm_els.push(html);
        arm_targets.push(target);
    }

    ArmParts {
        arm_els,
        arm_targets,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("keychain-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root_el = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ROOT_ID))?;
    let root: web::HtmlElement = root_el
        .clone()
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not an HTML element", ROOT_ID))?;

    let TagParts {
        specs,
        tag_els,
        attachments,
    } = collect_tags(&document);
    let ArmParts {
        arm_els,
        arm_targets,
    } = collect_arms(&document);

    let ring_hook = document.query_selector(RING_HOOK_SELECTOR).ok().flatten();
    if ring_hook.is_none() {
        log::warn!("no {} element; arms are not drawn", RING_HOOK_SELECTOR);
    }

    let mut scene = Scene::new(specs, LayoutTable::default());
    scene.relayout(dom::viewport_width());
    if scene.is_empty() {
        log::warn!("no {} elements found; scene is static", TAG_SELECTOR);
    }
    log::info!("[scene] tags={} arms={}", scene.len(), arm_els.len());
    let scene = Rc::new(RefCell::new(scene));

    events::pointer::wire_pointer_handlers(events::pointer::PointerWiring {
        scene: scene.clone(),
        root: root.clone(),
        tag_els: tag_els.clone(),
    });
    events::pointer::wire_cursor_follower(&document);
    wire_viewport_relayout(scene.clone());
    events::nav::wire_smooth_scroll(&document);
    events::nav::stamp_year(&document);

    let geometry = dom::DomGeometry::new(root_el, ring_hook, attachments);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        geometry,
        root,
        tag_els,
        arm_els,
        arm_targets,
        poses: Vec::new(),
    }));
    // The loop runs for the page lifetime; the handle is only for tests
    // and embedders that tear the scene down.
    let _running = frame::start_loop(frame_ctx);

    Ok(())
}
