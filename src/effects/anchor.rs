use crate::constants::{ANCHOR_LINKS, HEADER_ID};
use crate::dom;
use covasol_core::geometry::anchor_scroll_top;
use covasol_core::links::fragment_selector;
use covasol_core::Result;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth-scroll same-page fragment links, stopping just below the fixed
/// header. Unknown fragments keep the browser's default jump.
pub fn install(window: &web::Window, document: &web::Document) -> Result<()> {
    let links = dom::require_all(document, ANCHOR_LINKS)?;
    let header = document
        .get_element_by_id(HEADER_ID)
        .and_then(|h| h.dyn_into::<web::HtmlElement>().ok());

    for link in &links {
        let link_el = link.clone();
        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        dom::add_listener(link, "click", move |ev: web::MouseEvent| {
            let Some(href) = link_el.get_attribute("href") else {
                return;
            };
            let Some(selector) = fragment_selector(&href) else {
                return;
            };
            // an invalid selector falls through like a missing target
            let Ok(Some(target)) = document.query_selector(selector) else {
                return;
            };
            ev.prevent_default();

            let header_height = header
                .as_ref()
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            let top = anchor_scroll_top(
                dom::client_rect(&target).top,
                dom::scroll_y(&window),
                header_height,
            );
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    log::debug!("[anchor] wired {} links", links.len());
    Ok(())
}
