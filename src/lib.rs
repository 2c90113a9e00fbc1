#![cfg(target_arch = "wasm32")]
use coordinator::UIEffectCoordinator;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod coordinator;
mod dom;
mod effects;
mod frame;
mod observer;

thread_local! {
    // Owns the frame task handles for the lifetime of the page.
    static COORDINATOR: RefCell<Option<UIEffectCoordinator>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("covasol-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // the module may be instantiated before the markup is parsed
    dom::dom_ready(&document).await?;

    let config = coordinator::load_config(&document);
    let coordinator = UIEffectCoordinator::install(&window, &document, &config);
    log::debug!(
        "[init] cursor trail running: {}",
        coordinator.cursor_running()
    );
    COORDINATOR.with(|slot| *slot.borrow_mut() = Some(coordinator));
    Ok(())
}
