use crate::constants::{HEADER_ID, SCROLLED_CLASS};
use crate::dom;
use crate::frame::{self, FrameUpdate};
use covasol_core::{FrameGate, HeaderScroll, Result};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct HeaderEffect {
    window: web::Window,
    header: web::Element,
    scroll: HeaderScroll,
    gate: FrameGate,
}

impl FrameUpdate for HeaderEffect {
    fn gate(&mut self) -> &mut FrameGate {
        &mut self.gate
    }

    fn update(&mut self) {
        if let Some(scrolled) = self.scroll.update(dom::scroll_y(&self.window)) {
            dom::set_class(&self.header, SCROLLED_CLASS, scrolled);
        }
    }
}

pub fn install(window: &web::Window, document: &web::Document, threshold: f64) -> Result<()> {
    let header = dom::by_id(document, HEADER_ID)?;
    let effect = Rc::new(RefCell::new(HeaderEffect {
        window: window.clone(),
        header,
        scroll: HeaderScroll::new(threshold),
        gate: FrameGate::default(),
    }));
    // a reload may restore a scrolled position
    effect.borrow_mut().update();
    dom::add_listener0(window, "scroll", move || frame::request_coalesced(&effect))
}
