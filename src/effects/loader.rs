use crate::constants::{LOADED_CLASS, PAGE_LOADER};
use crate::dom;
use covasol_core::Result;
use web_sys as web;

/// Fade the page loader out `delay_ms` after the window finishes loading.
pub fn install(window: &web::Window, document: &web::Document, delay_ms: u32) -> Result<()> {
    let loader = dom::query(document, PAGE_LOADER)?;
    let reveal = move || {
        let delayed = loader.clone();
        if let Err(e) = dom::set_timeout(delay_ms, move || dom::add_class(&delayed, LOADED_CLASS)) {
            // never leave the loader covering the page
            log::warn!("[loader] {e}");
            dom::add_class(&loader, LOADED_CLASS);
        }
    };
    if dom::is_loaded(document) {
        reveal();
        return Ok(());
    }
    dom::add_listener0(window, "load", reveal)
}
