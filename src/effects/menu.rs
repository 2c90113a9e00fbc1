use crate::constants::{MENU_BARS, MENU_TOGGLE_ID, NAV_ID};
use crate::dom::{self, ElementStyle};
use covasol_core::{MobileMenu, Result};
use web_sys as web;

pub fn install(document: &web::Document) -> Result<()> {
    let toggle = dom::by_id(document, MENU_TOGGLE_ID)?;
    let nav = dom::by_id(document, NAV_ID)?;
    let mut nav_style = ElementStyle::require(&nav, NAV_ID)?;
    let mut menu = MobileMenu::default();

    let button = toggle.clone();
    dom::add_listener0(&toggle, "click", move || {
        let mut bars: Vec<ElementStyle> = dom::query_all_in(&button, MENU_BARS)
            .unwrap_or_default()
            .iter()
            .filter_map(ElementStyle::of)
            .collect();
        let state = menu.toggle(&mut nav_style, &mut bars);
        log::debug!("[menu] {:?}", state);
    })
}
