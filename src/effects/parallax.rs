use crate::constants::{PARALLAX_IMAGES, PARALLAX_WRAPPER};
use crate::dom::{self, ElementStyle};
use crate::frame::{self, FrameUpdate};
use covasol_core::geometry::{parallax_offset, translate_y_px};
use covasol_core::{Debounce, EffectError, FrameGate, Result};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct ParallaxImage {
    style: ElementStyle,
    wrapper: web::Element,
}

struct ParallaxEffect {
    window: web::Window,
    images: Vec<ParallaxImage>,
    max_offset: f64,
    gate: FrameGate,
}

impl FrameUpdate for ParallaxEffect {
    fn gate(&mut self) -> &mut FrameGate {
        &mut self.gate
    }

    fn update(&mut self) {
        let viewport_height = dom::viewport_height(&self.window);
        for img in &self.images {
            let rect = dom::client_rect(&img.wrapper);
            if let Some(offset) = parallax_offset(rect, viewport_height, self.max_offset) {
                img.style.set("transform", &translate_y_px(offset));
            }
        }
    }
}

pub fn install(
    window: &web::Window,
    document: &web::Document,
    max_offset: f64,
    resize_debounce_ms: u32,
) -> Result<()> {
    let images: Vec<ParallaxImage> = dom::require_all(document, PARALLAX_IMAGES)?
        .into_iter()
        .filter_map(|img| {
            let wrapper = img.closest(PARALLAX_WRAPPER).ok().flatten()?;
            let style = ElementStyle::of(&img)?;
            Some(ParallaxImage { style, wrapper })
        })
        .collect();
    if images.is_empty() {
        return Err(EffectError::missing(PARALLAX_WRAPPER));
    }
    log::debug!("[parallax] tracking {} images", images.len());

    let effect = Rc::new(RefCell::new(ParallaxEffect {
        window: window.clone(),
        images,
        max_offset,
        gate: FrameGate::default(),
    }));
    effect.borrow_mut().update();

    let on_scroll = effect.clone();
    dom::add_listener0(window, "scroll", move || {
        frame::request_coalesced(&on_scroll)
    })?;

    let debounce = Rc::new(Cell::new(Debounce::default()));
    dom::add_listener0(window, "resize", move || {
        let mut d = debounce.get();
        let token = d.schedule();
        debounce.set(d);
        let debounce = debounce.clone();
        let effect = effect.clone();
        let fired = dom::set_timeout(resize_debounce_ms, move || {
            if debounce.get().is_current(token) {
                frame::request_coalesced(&effect);
            }
        });
        if let Err(e) = fired {
            log::warn!("[parallax] resize refresh skipped: {e}");
        }
    })
}
