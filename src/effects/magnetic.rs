use crate::constants::MAGNETIC_SELECTOR;
use crate::dom::{self, ElementStyle};
use covasol_core::constants::{MAGNETIC_ENTER_TRANSITION, MAGNETIC_LEAVE_TRANSITION};
use covasol_core::geometry::{magnetic_offset, translate_px};
use covasol_core::Result;
use glam::Vec2;
use web_sys as web;

pub fn install(document: &web::Document, strength: f32) -> Result<()> {
    let elements = dom::require_all(document, MAGNETIC_SELECTOR)?;
    for el in &elements {
        let Some(style) = ElementStyle::of(el) else {
            continue;
        };
        wire_element(el, style, strength)?;
    }
    log::debug!("[magnetic] wired {} elements", elements.len());
    Ok(())
}

fn wire_element(el: &web::Element, style: ElementStyle, strength: f32) -> Result<()> {
    let target = el.clone();
    let on_move = style.clone();
    dom::add_listener(el, "mousemove", move |ev: web::MouseEvent| {
        let offset = magnetic_offset(dom::client_rect(&target), dom::client_point(&ev), strength);
        on_move.set("transform", &translate_px(offset));
    })?;

    let on_enter = style.clone();
    dom::add_listener0(el, "mouseenter", move || {
        on_enter.set("transition", MAGNETIC_ENTER_TRANSITION);
    })?;

    dom::add_listener0(el, "mouseleave", move || {
        style.set("transform", &translate_px(Vec2::ZERO));
        style.set("transition", MAGNETIC_LEAVE_TRANSITION);
    })
}
