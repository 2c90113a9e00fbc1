//! Custom cursor: a fast dot and a trailing ring that ease toward the pointer.

use crate::constants::{
    ACTIVE_CLASS, CLICK_CLASS, CURSOR_DOT_CLASS, CURSOR_RING_CLASS, FINE_POINTER_QUERY, HOVER_CLASS,
    INTERACTIVE_SELECTOR,
};
use crate::dom::{self, ElementStyle, JsResultExt};
use crate::frame::FrameTask;
use covasol_core::constants::{CURSOR_DOT_HALF_SIZE, CURSOR_RING_HALF_SIZE};
use covasol_core::geometry::px;
use covasol_core::{CursorTrail, EffectError, EffectsConfig, Result};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct CursorParts {
    dot: web::Element,
    ring: web::Element,
}

impl CursorParts {
    fn set_class(&self, class: &str, on: bool) {
        dom::set_class(&self.dot, class, on);
        dom::set_class(&self.ring, class, on);
    }
}

fn has_fine_pointer(window: &web::Window) -> bool {
    window
        .match_media(FINE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Build the cursor and start its frame task. Returns `None` on coarse
/// (touch) pointers, where the effect is disabled.
pub fn install(
    window: &web::Window,
    document: &web::Document,
    config: &EffectsConfig,
) -> Result<Option<Rc<FrameTask>>> {
    if !has_fine_pointer(window) {
        log::debug!("[cursor] no fine pointer; keeping the system cursor");
        return Ok(None);
    }
    let body = document.body().ok_or_else(|| EffectError::missing("body"))?;
    let parts = CursorParts {
        dot: dom::create_div(document, CURSOR_DOT_CLASS)?,
        ring: dom::create_div(document, CURSOR_RING_CLASS)?,
    };
    body.append_child(&parts.dot).js()?;
    body.append_child(&parts.ring).js()?;
    let dot_style = ElementStyle::require(&parts.dot, CURSOR_DOT_CLASS)?;
    let ring_style = ElementStyle::require(&parts.ring, CURSOR_RING_CLASS)?;

    let trail = Rc::new(RefCell::new(CursorTrail::new(
        config.cursor_dot_follow,
        config.cursor_ring_follow,
        CURSOR_DOT_HALF_SIZE,
        CURSOR_RING_HALF_SIZE,
    )));

    wire_pointer(document, &trail, &parts)?;
    wire_hover(document, &parts)?;
    wire_press(document, &parts)?;

    let stepper = trail.clone();
    let task = Rc::new(FrameTask::start(move || {
        let frame = stepper.borrow_mut().step();
        dot_style.set("left", &px(frame.dot.x));
        dot_style.set("top", &px(frame.dot.y));
        ring_style.set("left", &px(frame.ring.x));
        ring_style.set("top", &px(frame.ring.y));
    })?);
    wire_lifecycle(window, &task)?;
    Ok(Some(task))
}

fn wire_pointer(
    document: &web::Document,
    trail: &Rc<RefCell<CursorTrail>>,
    parts: &CursorParts,
) -> Result<()> {
    let (t, p) = (trail.clone(), parts.clone());
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        if t.borrow_mut().pointer_moved(dom::client_point(&ev)) {
            p.set_class(ACTIVE_CLASS, true);
        }
    })?;

    let (t, p) = (trail.clone(), parts.clone());
    dom::add_listener0(document, "mouseleave", move || {
        t.borrow_mut().pointer_left();
        p.set_class(ACTIVE_CLASS, false);
    })
}

fn wire_hover(document: &web::Document, parts: &CursorParts) -> Result<()> {
    for el in dom::query_all(document, INTERACTIVE_SELECTOR)? {
        let p = parts.clone();
        dom::add_listener0(&el, "mouseenter", move || p.set_class(HOVER_CLASS, true))?;
        let p = parts.clone();
        dom::add_listener0(&el, "mouseleave", move || p.set_class(HOVER_CLASS, false))?;
    }
    Ok(())
}

fn wire_press(document: &web::Document, parts: &CursorParts) -> Result<()> {
    let ring = parts.ring.clone();
    dom::add_listener0(document, "mousedown", move || dom::add_class(&ring, CLICK_CLASS))?;
    let ring = parts.ring.clone();
    dom::add_listener0(document, "mouseup", move || dom::remove_class(&ring, CLICK_CLASS))
}

/// Park the frame task while the page is hidden in the back/forward cache.
fn wire_lifecycle(window: &web::Window, task: &Rc<FrameTask>) -> Result<()> {
    let hidden = task.clone();
    dom::add_listener0(window, "pagehide", move || hidden.stop())?;
    let shown = task.clone();
    dom::add_listener(window, "pageshow", move |ev: web::PageTransitionEvent| {
        if !ev.persisted() {
            return;
        }
        if let Err(e) = shown.resume() {
            log::warn!("[cursor] could not resume trail: {e}");
        }
    })
}
