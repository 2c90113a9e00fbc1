use crate::dom::JsResultExt;
use covasol_core::{IntersectionSample, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct ObserverOptions<'a> {
    pub root_margin: &'a str,
    pub threshold: Option<f64>,
}

#[inline]
pub fn sample(entry: &web::IntersectionObserverEntry) -> IntersectionSample {
    IntersectionSample {
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
    }
}

/// Watch `targets` against the viewport and hand every entry, together with
/// its key (index into `targets`), to `on_entry`.
pub fn observe<F>(
    targets: Vec<web::Element>,
    options: ObserverOptions<'_>,
    mut on_entry: F,
) -> Result<web::IntersectionObserver>
where
    F: FnMut(usize, &web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
{
    let keyed = targets.clone();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if let Some(key) = keyed.iter().position(|el| *el == target) {
                    on_entry(key, &entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    if let Some(threshold) = options.threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .js()?;
    closure.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(observer)
}
