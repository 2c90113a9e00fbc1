use crate::constants::{DATA_SRC_ATTR, LAZY_IMAGES};
use crate::dom;
use crate::observer::{self, ObserverOptions};
use covasol_core::constants::LAZY_ROOT_MARGIN;
use covasol_core::{LazyLoader, LoadImage, Result};
use web_sys as web;

/// Swap `data-src` into `src` the first time each image nears the viewport.
pub fn install(document: &web::Document) -> Result<()> {
    let images = dom::require_all(document, LAZY_IMAGES)?;
    let count = images.len();
    let mut loader = LazyLoader::default();
    observer::observe(
        images,
        ObserverOptions {
            root_margin: LAZY_ROOT_MARGIN,
            threshold: None,
        },
        move |key, entry, observer| {
            let img = entry.target();
            let deferred = img.get_attribute(DATA_SRC_ATTR);
            let Some(LoadImage { src }) =
                loader.on_intersection(key, entry.is_intersecting(), deferred.as_deref())
            else {
                return;
            };
            if let Err(e) = img.set_attribute("src", &src) {
                log::warn!("[lazy] could not set src {src}: {:?}", e);
            }
            _ = img.remove_attribute(DATA_SRC_ATTR);
            observer.unobserve(&img);
        },
    )?;
    log::debug!("[lazy] observing {count} images");
    Ok(())
}
