use crate::constants::{ACTIVE_CLASS, PAGE_TRANSITION, TRANSITION_LINKS};
use crate::dom;
use covasol_core::{LinkClick, PageTransition, Result};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct TransitionEffect {
    window: web::Window,
    overlay: web::Element,
    machine: PageTransition,
}

impl TransitionEffect {
    fn on_click(&mut self, link: &web::Element, ev: &web::MouseEvent) {
        let href = link.get_attribute("href");
        let path = self.window.location().pathname().unwrap_or_default();
        match self.machine.on_link_click(href.as_deref(), &path) {
            LinkClick::PassThrough => {}
            LinkClick::Suppress => ev.prevent_default(),
            LinkClick::Begin { href, delay_ms } => {
                ev.prevent_default();
                dom::add_class(&self.overlay, ACTIVE_CLASS);
                log::debug!("[transition] leaving for {href}");
                let location = self.window.location();
                let target = href.clone();
                let scheduled = dom::set_timeout(delay_ms, move || navigate(&location, &target));
                if let Err(e) = scheduled {
                    log::warn!("[transition] {e}; navigating now");
                    navigate(&self.window.location(), &href);
                }
            }
        }
    }

    fn on_page_show(&mut self, ev: &web::PageTransitionEvent) {
        if self.machine.on_page_show(ev.persisted()) {
            dom::remove_class(&self.overlay, ACTIVE_CLASS);
        }
    }
}

fn navigate(location: &web::Location, href: &str) {
    if let Err(e) = location.set_href(href) {
        log::error!("[transition] navigation to {href} failed: {:?}", e);
    }
}

pub fn install(window: &web::Window, document: &web::Document, delay_ms: u32) -> Result<()> {
    let overlay = dom::query(document, PAGE_TRANSITION)?;
    let links = dom::require_all(document, TRANSITION_LINKS)?;
    let effect = Rc::new(RefCell::new(TransitionEffect {
        window: window.clone(),
        overlay,
        machine: PageTransition::new(delay_ms),
    }));

    for link in &links {
        let effect = effect.clone();
        let link_el = link.clone();
        dom::add_listener(link, "click", move |ev: web::MouseEvent| {
            effect.borrow_mut().on_click(&link_el, &ev);
        })?;
    }

    dom::add_listener(window, "pageshow", move |ev: web::PageTransitionEvent| {
        effect.borrow_mut().on_page_show(&ev);
    })
}
