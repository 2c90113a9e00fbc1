use covasol_core::{EffectError, Rect, Result, StyleTarget};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Bridge for `Result<_, JsValue>` returned by `web-sys` calls.
pub trait JsResultExt<T> {
    fn js(self) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
    #[inline]
    fn js(self) -> Result<T> {
        self.map_err(|e| EffectError::Js(format!("{:?}", e)))
    }
}

#[inline]
pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| EffectError::missing("window"))
}

// ---------------- Look-ups ----------------
pub fn by_id(document: &web::Document, id: &str) -> Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EffectError::missing(format!("#{id}")))
}

pub fn query(document: &web::Document, selector: &str) -> Result<web::Element> {
    document
        .query_selector(selector)
        .js()?
        .ok_or_else(|| EffectError::missing(selector))
}

fn collect_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>> {
    Ok(collect_elements(document.query_selector_all(selector).js()?))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Result<Vec<web::Element>> {
    Ok(collect_elements(root.query_selector_all(selector).js()?))
}

/// Like `query_all`, but an empty match is reported as a missing element.
pub fn require_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>> {
    let found = query_all(document, selector)?;
    if found.is_empty() {
        return Err(EffectError::missing(selector));
    }
    Ok(found)
}

// ---------------- Events ----------------
pub fn add_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .js()?;
    closure.forget();
    Ok(())
}

pub fn add_listener0(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .js()?;
    closure.forget();
    Ok(())
}

pub fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<i32> {
    let cb = Closure::once_into_js(callback);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .js()
}

pub fn request_frame(callback: impl FnOnce() + 'static) -> Result<i32> {
    let cb = Closure::once_into_js(callback);
    window()?.request_animation_frame(cb.unchecked_ref()).js()
}

#[inline]
pub fn is_loaded(document: &web::Document) -> bool {
    document.ready_state() == "complete"
}

/// Resolves once the document has been parsed. Rejects if the
/// `DOMContentLoaded` listener cannot be attached.
pub async fn dom_ready(document: &web::Document) -> Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(
        &mut |resolve: js_sys::Function, reject: js_sys::Function| {
            let cb = Closure::once_into_js(move || {
                _ = resolve.call0(&JsValue::NULL);
            });
            if let Err(e) =
                document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
            {
                _ = reject.call1(&JsValue::NULL, &e);
            }
        },
    );
    JsFuture::from(promise).await.js()?;
    Ok(())
}

// ---------------- Geometry ----------------
#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(width as f32, viewport_height(window) as f32)
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// ---------------- Classes & styles ----------------
#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

pub fn create_div(document: &web::Document, class: &str) -> Result<web::Element> {
    let el = document.create_element("div").js()?;
    el.set_class_name(class);
    Ok(el)
}

/// Inline style of an HTML element.
#[derive(Clone)]
pub struct ElementStyle(web::CssStyleDeclaration);

impl ElementStyle {
    pub fn of(el: &web::Element) -> Option<Self> {
        el.dyn_ref::<web::HtmlElement>().map(|h| Self(h.style()))
    }

    pub fn require(el: &web::Element, what: &str) -> Result<Self> {
        Self::of(el).ok_or_else(|| EffectError::missing(what))
    }

    #[inline]
    pub fn set(&self, name: &str, value: &str) {
        _ = self.0.set_property(name, value);
    }
}

impl StyleTarget for ElementStyle {
    fn css_text(&self) -> String {
        self.0.css_text()
    }

    fn set_css_text(&mut self, text: &str) {
        self.0.set_css_text(text);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.set(name, value);
    }
}
