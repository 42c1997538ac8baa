use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::arm::solve_arms;
use crate::core::scene::{Scene, TagPose};
use crate::dom::{self, DomGeometry};

/// Everything the per-frame tick touches: the scene, the live geometry
/// source, and the elements the resulting transforms are written to.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub geometry: DomGeometry,
    /// The tilting container.
    pub root: web::HtmlElement,
    /// Tag elements, parallel to `scene.tag_order()`.
    pub tag_els: Vec<web::HtmlElement>,
    /// Chain arm elements with the tag id each one targets.
    pub arm_els: Vec<web::HtmlElement>,
    pub arm_targets: Vec<String>,
    /// Reused pose buffer.
    pub poses: Vec<TagPose>,
}

impl FrameContext {
    /// One animation frame: springs and tilt integrate, transforms land on
    /// the container and tags, then the arms are re-solved against the
    /// rects those transforms just moved.
    pub fn frame(&mut self) {
        let container = self.scene.borrow_mut().tick(&mut self.poses);

        dom::set_style_property(&self.root, "transform", &container.css_transform());

        for (el, pose) in self.tag_els.iter().zip(&self.poses) {
            dom::set_style_property(el, "transform", &pose.css_transform());
        }

        let arms = solve_arms(&self.geometry, &self.arm_targets);
        for (el, arm) in self.arm_els.iter().zip(arms.iter()) {
            // Unresolvable arm: leave the element as-is this frame.
            let Some(arm) = arm else {
                continue;
            };
            dom::set_style_property(el, "left", &format!("{}px", arm.origin.x));
            dom::set_style_property(el, "top", &format!("{}px", arm.origin.y));
            dom::set_style_property(el, "height", &format!("{}px", arm.length));
            dom::set_style_property(el, "transform", &arm.css_transform());
        }
    }
}

/// Cancellation token for the repeating frame task. The page never cancels
/// it in practice, but the lifecycle is explicit: dropping the handle keeps
/// the loop running, `cancel` stops it after the frame in flight.
#[derive(Clone)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame`, indefinitely,
/// until the returned handle is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        cancelled: Rc::new(Cell::new(false)),
    };
    let loop_handle = handle.clone();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if loop_handle.is_cancelled() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    handle
}
