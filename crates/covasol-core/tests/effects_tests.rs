// Host-side integration tests for the effect state machines, driven the way
// the browser drives them (bursts of scroll events, repeated clicks).

use covasol_core::constants::*;
use covasol_core::geometry::parallax_offset;
use covasol_core::menu::{StyleTarget, NAV_OPEN_STYLES};
use covasol_core::{
    EffectsConfig, FrameGate, HeaderScroll, IntersectionSample, LazyLoader, LinkClick, MenuState,
    MobileMenu, PageTransition, Rect, RevealTracker,
};
/// Inline style with browser semantics: shorthands expand into longhands,
/// reading a shorthand is empty unless every longhand agrees, and `cssText`
/// keeps `!important`.
#[derive(Debug, Default, Clone, PartialEq)]
struct InlineStyle(Vec<(String, String, bool)>);

fn longhands(name: &str) -> Vec<String> {
    let expand = |prefix: &str, parts: &[&str]| -> Vec<String> {
        parts.iter().map(|p| format!("{prefix}-{p}")).collect()
    };
    match name {
        "padding" => expand("padding", &["top", "right", "bottom", "left"]),
        "background" => expand("background", &["color", "image"]),
        "animation" => expand("animation", &["name", "duration"]),
        "gap" => vec!["row-gap".to_string(), "column-gap".to_string()],
        other => vec![other.to_string()],
    }
}

impl InlineStyle {
    fn longhand(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, v, _)| v.as_str())
    }

    fn property(&self, name: &str) -> String {
        let values: Vec<Option<&str>> = longhands(name).iter().map(|l| self.longhand(l)).collect();
        match values.first() {
            Some(Some(first)) if values.iter().all(|v| v == &Some(*first)) => first.to_string(),
            _ => String::new(),
        }
    }
}

impl StyleTarget for InlineStyle {
    fn css_text(&self) -> String {
        self.0
            .iter()
            .map(|(n, v, important)| {
                let priority = if *important { " !important" } else { "" };
                format!("{n}: {v}{priority};")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn set_css_text(&mut self, text: &str) {
        self.0 = text
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(n, v)| {
                let v = v.trim();
                match v.strip_suffix("!important") {
                    Some(rest) => (n.trim().to_string(), rest.trim().to_string(), true),
                    None => (n.trim().to_string(), v.to_string(), false),
                }
            })
            .collect();
    }

    fn set_property(&mut self, name: &str, value: &str) {
        for longhand in longhands(name) {
            match self.0.iter_mut().find(|(n, _, _)| *n == longhand) {
                Some(decl) => *decl = (longhand, value.to_string(), false),
                None => self.0.push((longhand, value.to_string(), false)),
            }
        }
    }
}

#[test]
fn header_state_matches_threshold_for_every_offset() {
    let mut header = HeaderScroll::new(HEADER_SCROLL_THRESHOLD);
    let offsets = [0.0, 10.0, 49.0, 50.0, 51.0, 400.0, 400.0, 49.99, 0.0, 50.0, 50.0];
    for y in offsets {
        header.update(y);
        assert_eq!(header.is_scrolled(), y >= 50.0, "offset {y}");
    }
}

#[test]
fn scroll_burst_coalesces_into_one_header_update() {
    let mut gate = FrameGate::default();
    let mut header = HeaderScroll::new(HEADER_SCROLL_THRESHOLD);
    let mut frames = 0;
    let mut latest = 0.0;
    for y in [10.0, 30.0, 60.0, 90.0, 120.0] {
        latest = y;
        if gate.request() {
            frames += 1;
        }
    }
    // the frame callback reads the scroll offset at render time
    gate.begin_frame();
    assert_eq!(header.update(latest), Some(true));
    assert_eq!(frames, 1);
}

#[test]
fn revealed_elements_survive_scrolling_both_ways() {
    let mut reveal = RevealTracker::new(REVEAL_THRESHOLD);
    let visible = IntersectionSample {
        is_intersecting: true,
        ratio: 0.3,
    };
    let hidden = IntersectionSample {
        is_intersecting: false,
        ratio: 0.0,
    };
    assert!(reveal.observe(0, visible));
    for i in 0..20 {
        let s = if i % 2 == 0 { hidden } else { visible };
        assert!(!reveal.observe(0, s));
        assert!(reveal.is_revealed(0));
    }
}

#[test]
fn menu_round_trip_restores_existing_inline_styles() {
    let mut nav = InlineStyle::default();
    nav.set_property("display", "none");
    nav.set_property("padding", "4px");
    nav.set_property("border", "1px solid red");
    let mut bars = vec![InlineStyle::default(), InlineStyle::default(), InlineStyle::default()];
    bars[1].set_property("opacity", "0.8");
    let nav_before = nav.clone();
    let bars_before = bars.clone();

    let mut menu = MobileMenu::default();
    assert_eq!(menu.toggle(&mut nav, &mut bars), MenuState::Open);
    for (name, value) in NAV_OPEN_STYLES {
        assert_eq!(&nav.property(name), value);
    }
    assert_eq!(menu.toggle(&mut nav, &mut bars), MenuState::Closed);
    assert_eq!(nav, nav_before);
    assert_eq!(bars, bars_before);
}

#[test]
fn menu_survives_many_cycles() {
    let mut nav = InlineStyle::default();
    let mut bars = vec![InlineStyle::default(); 3];
    let mut menu = MobileMenu::default();
    for _ in 0..10 {
        menu.toggle(&mut nav, &mut bars);
        menu.toggle(&mut nav, &mut bars);
    }
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(nav, InlineStyle::default());
}

#[test]
fn menu_round_trip_keeps_longhands_under_overridden_shorthands() {
    let mut nav = InlineStyle::default();
    nav.set_css_text("padding-left: 8px; background-color: #fff !important; display: none;");
    let mut bars = vec![InlineStyle::default(); 3];
    bars[0].set_css_text("transform: none !important; transition: transform 0.2s;");
    let nav_before = nav.clone();
    let bars_before = bars.clone();
    // a shorthand built from partial longhands reads back as unset
    assert_eq!(nav.property("padding"), "");

    let mut menu = MobileMenu::default();
    menu.toggle(&mut nav, &mut bars);
    assert_eq!(nav.longhand("padding-left"), Some("var(--space-2xl)"));
    assert_eq!(
        nav.longhand("background-color"),
        Some("rgba(248, 250, 252, 0.98)")
    );
    assert_eq!(bars[0].longhand("transform"), Some("rotate(45deg) translate(5px, 5px)"));

    menu.toggle(&mut nav, &mut bars);
    assert_eq!(nav, nav_before);
    assert_eq!(
        nav.css_text(),
        "padding-left: 8px; background-color: #fff !important; display: none;"
    );
    assert_eq!(bars, bars_before);
    assert_eq!(
        bars[0].css_text(),
        "transform: none !important; transition: transform 0.2s;"
    );
}

#[test]
fn transition_defers_by_configured_delay() {
    let cfg = EffectsConfig::default();
    let mut t = PageTransition::new(cfg.transition_delay_ms);
    match t.on_link_click(Some("/contact.html"), "/index.html") {
        LinkClick::Begin { href, delay_ms } => {
            assert_eq!(href, "/contact.html");
            assert_eq!(delay_ms, PAGE_TRANSITION_DELAY_MS);
        }
        other => panic!("expected a transition, got {other:?}"),
    }
}

#[test]
fn lazy_images_are_processed_once_across_many_notifications() {
    let mut lazy = LazyLoader::default();
    let mut loads = 0;
    for _ in 0..5 {
        for key in 0..3 {
            if lazy.on_intersection(key, true, Some("img.webp")).is_some() {
                loads += 1;
            }
        }
    }
    assert_eq!(loads, 3);
}

#[test]
fn parallax_sweep_stays_within_half_travel() {
    let viewport = 900.0;
    let half = PARALLAX_MAX_OFFSET / 2.0;
    let mut top = -600.0;
    while top < 1500.0 {
        let wrapper = Rect {
            left: 0.0,
            top,
            width: 800.0,
            height: 500.0,
        };
        match parallax_offset(wrapper, viewport, PARALLAX_MAX_OFFSET) {
            Some(off) => {
                assert!(wrapper.intersects_viewport(viewport));
                assert!(off >= -half && off <= half);
            }
            None => assert!(!wrapper.intersects_viewport(viewport)),
        }
        top += 37.0;
    }
}
