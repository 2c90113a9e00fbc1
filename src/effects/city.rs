use crate::constants::{CITY_IMAGE, CITY_IMAGE_TRANSFORM, CITY_ITEMS};
use crate::dom::{self, ElementStyle};
use covasol_core::geometry::px;
use covasol_core::Result;
use web_sys as web;

/// Pin each city's preview image to the pointer while hovering its row.
pub fn install(document: &web::Document) -> Result<()> {
    let items = dom::require_all(document, CITY_ITEMS)?;
    let mut wired = 0;
    for item in &items {
        let Some(style) = item
            .query_selector(CITY_IMAGE)
            .ok()
            .flatten()
            .and_then(|img| ElementStyle::of(&img))
        else {
            continue;
        };
        dom::add_listener(item, "mousemove", move |ev: web::MouseEvent| {
            let p = dom::client_point(&ev);
            style.set("left", &px(p.x));
            style.set("top", &px(p.y));
            style.set("transform", CITY_IMAGE_TRANSFORM);
        })?;
        wired += 1;
    }
    log::debug!("[city] wired {wired}/{} items", items.len());
    Ok(())
}
