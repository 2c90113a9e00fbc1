use crate::dom::{self, JsResultExt};
use covasol_core::{FrameGate, Result};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Effect state refreshed from a scheduled animation frame.
pub trait FrameUpdate {
    fn gate(&mut self) -> &mut FrameGate;
    fn update(&mut self);
}

/// Schedule `state.update()` for the next frame unless one is already pending.
pub fn request_coalesced<S: FrameUpdate + 'static>(state: &Rc<RefCell<S>>) {
    if !state.borrow_mut().gate().request() {
        return;
    }
    let st = state.clone();
    let scheduled = dom::request_frame(move || {
        let mut s = st.borrow_mut();
        s.gate().begin_frame();
        s.update();
    });
    if let Err(e) = scheduled {
        state.borrow_mut().gate().begin_frame();
        log::warn!("[frame] could not schedule update: {e}");
    }
}

struct TaskInner {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TaskInner {
    fn schedule(&self, window: &web::Window) -> Result<()> {
        if self.handle.get().is_some() {
            return Ok(());
        }
        if let Some(tick) = self.tick.borrow().as_ref() {
            let id = window
                .request_animation_frame(tick.as_ref().unchecked_ref())
                .js()?;
            self.handle.set(Some(id));
        }
        Ok(())
    }
}

/// Cooperative per-frame task: runs `step` once per rendered frame and
/// reschedules itself until stopped. Dropping the task stops it.
pub struct FrameTask {
    inner: Rc<TaskInner>,
}

impl FrameTask {
    pub fn start(mut step: impl FnMut() + 'static) -> Result<Self> {
        let window = dom::window()?;
        let inner = Rc::new(TaskInner {
            running: Cell::new(true),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<TaskInner> = Rc::downgrade(&inner);
        let tick_window = window.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.running.get() {
                return;
            }
            step();
            if let Err(e) = inner.schedule(&tick_window) {
                log::warn!("[frame] task stopped: {e}");
                inner.running.set(false);
            }
        }) as Box<dyn FnMut()>));
        inner.schedule(&window)?;
        Ok(Self { inner })
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Cancel the pending frame. Must not be called from inside `step`.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn resume(&self) -> Result<()> {
        if self.inner.running.replace(true) {
            return Ok(());
        }
        self.inner.schedule(&dom::window()?)
    }
}

impl Drop for FrameTask {
    fn drop(&mut self) {
        self.stop();
    }
}
