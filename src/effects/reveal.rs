use crate::constants::{REVEALED_CLASS, REVEAL_SELECTOR};
use crate::dom;
use crate::observer::{self, ObserverOptions};
use covasol_core::constants::REVEAL_ROOT_MARGIN;
use covasol_core::{Result, RevealTracker};
use web_sys as web;

pub fn install(document: &web::Document, threshold: f64) -> Result<()> {
    let targets = dom::require_all(document, REVEAL_SELECTOR)?;
    let count = targets.len();
    let mut tracker = RevealTracker::new(threshold);
    observer::observe(
        targets,
        ObserverOptions {
            root_margin: REVEAL_ROOT_MARGIN,
            threshold: Some(threshold),
        },
        move |key, entry, observer| {
            if tracker.observe(key, observer::sample(entry)) {
                let target = entry.target();
                dom::add_class(&target, REVEALED_CLASS);
                observer.unobserve(&target);
            }
        },
    )?;
    log::debug!("[reveal] observing {count} elements");
    Ok(())
}
