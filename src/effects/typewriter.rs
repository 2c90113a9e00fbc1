use crate::constants::{TYPEWRITER_ATTR, TYPEWRITER_SELECTOR};
use crate::dom;
use covasol_core::typewriter::parse_speed_ms;
use covasol_core::{Result, TypeWriter};
use web_sys as web;

/// Retype the text of every `[data-typewriter]` element, one character per tick.
pub fn install(document: &web::Document, default_speed_ms: u32) -> Result<()> {
    for el in dom::require_all(document, TYPEWRITER_SELECTOR)? {
        let speed = parse_speed_ms(el.get_attribute(TYPEWRITER_ATTR).as_deref(), default_speed_ms);
        let text = el.text_content().unwrap_or_default();
        el.set_text_content(Some(""));
        tick(el, TypeWriter::new(text), speed);
    }
    Ok(())
}

fn tick(el: web::Element, mut writer: TypeWriter, speed_ms: u32) {
    let Some(typed) = writer.advance() else {
        return;
    };
    el.set_text_content(Some(typed));
    if writer.is_done() {
        return;
    }
    if let Err(e) = dom::set_timeout(speed_ms, move || tick(el, writer, speed_ms)) {
        log::warn!("[typewriter] {e}");
    }
}
