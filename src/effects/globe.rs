use crate::constants::{GLOBE_CONTAINER, GLOBE_THROTTLE_MS, GLOBE_WIREFRAME};
use crate::dom::{self, ElementStyle};
use covasol_core::geometry::{globe_tilt, rotate_xy_deg};
use covasol_core::{Result, Throttle};
use web_sys as web;

/// Tilt the hero globe toward the pointer.
pub fn install(window: &web::Window, document: &web::Document, range_deg: f32) -> Result<()> {
    let container = dom::query(document, GLOBE_CONTAINER)?;
    let window = window.clone();
    let mut throttle = Throttle::new(GLOBE_THROTTLE_MS);
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        if !throttle.allow(ev.time_stamp()) {
            return;
        }
        let Some(style) = container
            .query_selector(GLOBE_WIREFRAME)
            .ok()
            .flatten()
            .and_then(|g| ElementStyle::of(&g))
        else {
            return;
        };
        let (x, y) = globe_tilt(dom::client_point(&ev), dom::viewport_size(&window), range_deg);
        style.set("transform", &rotate_xy_deg(x, y));
    })
}
