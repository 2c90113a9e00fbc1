use crate::constants::FADE_IN_KEYFRAMES;
use crate::dom::JsResultExt;
use crate::effects::{
    anchor, city, cursor, globe, header, lazy, loader, magnetic, menu, parallax, reveal,
    transition, typewriter,
};
use crate::frame::FrameTask;
use covasol_core::{EffectError, EffectsConfig, Result};
use std::rc::Rc;
use web_sys as web;

/// Attaches every page effect once and keeps the long-lived handles alive.
///
/// Effects are independent: each one is installed on its own and a failure
/// (usually absent markup) only disables that effect.
pub struct UIEffectCoordinator {
    cursor_trail: Option<Rc<FrameTask>>,
}

impl UIEffectCoordinator {
    pub fn install(window: &web::Window, document: &web::Document, config: &EffectsConfig) -> Self {
        if let Err(e) = inject_keyframes(document) {
            log::warn!("[init] keyframes not injected: {e}");
        }

        let mut installed = 0;
        let mut settle = |name: &str, result: Result<()>| match result {
            Ok(()) => installed += 1,
            Err(e) => log_skipped(name, &e),
        };
        let c = config;
        settle("loader", loader::install(window, document, c.loader_delay_ms));
        settle("reveal", reveal::install(document, c.reveal_threshold));
        settle(
            "header",
            header::install(window, document, c.header_scroll_threshold),
        );
        settle("magnetic", magnetic::install(document, c.magnetic_strength));
        settle(
            "transition",
            transition::install(window, document, c.transition_delay_ms),
        );
        settle(
            "parallax",
            parallax::install(
                window,
                document,
                c.parallax_max_offset,
                c.parallax_resize_debounce_ms,
            ),
        );
        settle("city", city::install(document));
        settle("anchor", anchor::install(window, document));
        settle("menu", menu::install(document));
        settle(
            "globe",
            globe::install(window, document, c.globe_tilt_range_deg),
        );
        settle(
            "typewriter",
            typewriter::install(document, c.typewriter_speed_ms),
        );
        settle("lazy", lazy::install(document));

        let cursor_trail = match cursor::install(window, document, c) {
            Ok(task) => {
                installed += usize::from(task.is_some());
                task
            }
            Err(e) => {
                log_skipped("cursor", &e);
                None
            }
        };

        log::info!("Covasol Global Link - The Art of Movement");
        log::info!("[init] {installed} effects initialized");
        Self { cursor_trail }
    }

    pub fn cursor_running(&self) -> bool {
        self.cursor_trail
            .as_ref()
            .map(|t| t.is_running())
            .unwrap_or(false)
    }
}

fn log_skipped(name: &str, e: &EffectError) {
    if e.is_missing_element() {
        log::debug!("[{name}] skipped: {e}");
    } else {
        log::warn!("[{name}] not installed: {e}");
    }
}

/// Read tuning overrides from `<body data-*>` attributes
/// (see `covasol_core::config::OVERRIDE_ATTRS`).
pub fn load_config(document: &web::Document) -> EffectsConfig {
    let body = document.body();
    EffectsConfig::resolve(|attr| body.as_ref().and_then(|b| b.get_attribute(attr)))
}

fn inject_keyframes(document: &web::Document) -> Result<()> {
    let head = document.head().ok_or_else(|| EffectError::missing("head"))?;
    let style = document.create_element("style").js()?;
    style.set_text_content(Some(FADE_IN_KEYFRAMES));
    head.append_child(&style).js()?;
    Ok(())
}
