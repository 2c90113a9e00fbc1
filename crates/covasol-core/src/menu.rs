//! Mobile navigation toggle.
//!
//! Opening overrides a batch of inline styles on the nav and on the three
//! hamburger bars. The whole inline declaration of each element is captured
//! first and closing writes it back, so open followed by close is an identity
//! on the inline style of every touched element, including longhands hidden
//! behind an overridden shorthand and `!important` priorities.

use smallvec::SmallVec;

/// Inline style access for one element.
pub trait StyleTarget {
    /// Serialized inline declaration (`style.cssText`).
    fn css_text(&self) -> String;
    fn set_css_text(&mut self, text: &str);
    fn set_property(&mut self, name: &str, value: &str);
}

pub type StyleOverrides = &'static [(&'static str, &'static str)];

pub const NAV_OPEN_STYLES: StyleOverrides = &[
    ("display", "flex"),
    ("flex-direction", "column"),
    ("position", "fixed"),
    ("top", "var(--header-height)"),
    ("left", "0"),
    ("right", "0"),
    ("background", "rgba(248, 250, 252, 0.98)"),
    ("backdrop-filter", "blur(20px)"),
    ("padding", "var(--space-2xl)"),
    ("gap", "var(--space-lg)"),
    ("animation", "fadeIn 0.3s ease"),
];

/// Hamburger bars morphing into an "X": top and bottom rotate, middle fades.
pub const BAR_OPEN_STYLES: [StyleOverrides; 3] = [
    &[("transform", "rotate(45deg) translate(5px, 5px)")],
    &[("opacity", "0")],
    &[("transform", "rotate(-45deg) translate(5px, -5px)")],
];

/// Inline declaration captured before an override batch was applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyleSnapshot {
    css_text: String,
}

impl StyleSnapshot {
    /// Capture the inline declaration, then apply `overrides`.
    pub fn apply<T: StyleTarget + ?Sized>(target: &mut T, overrides: StyleOverrides) -> Self {
        let css_text = target.css_text();
        for &(name, value) in overrides {
            target.set_property(name, value);
        }
        Self { css_text }
    }

    /// Replace the inline declaration with the captured one. Inline changes made
    /// by anyone else since `apply` are discarded too.
    pub fn restore<T: StyleTarget + ?Sized>(self, target: &mut T) {
        target.set_css_text(&self.css_text);
    }

    pub fn css_text(&self) -> &str {
        &self.css_text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Debug, Default)]
enum Menu {
    #[default]
    Closed,
    Open {
        nav: StyleSnapshot,
        bars: SmallVec<[StyleSnapshot; 3]>,
    },
}

#[derive(Debug, Default)]
pub struct MobileMenu {
    menu: Menu,
}

impl MobileMenu {
    pub fn state(&self) -> MenuState {
        match self.menu {
            Menu::Closed => MenuState::Closed,
            Menu::Open { .. } => MenuState::Open,
        }
    }

    /// Flip the menu. Bars beyond the three known ones are left alone.
    pub fn toggle<N, B>(&mut self, nav: &mut N, bars: &mut [B]) -> MenuState
    where
        N: StyleTarget + ?Sized,
        B: StyleTarget,
    {
        match std::mem::take(&mut self.menu) {
            Menu::Closed => {
                let nav_snapshot = StyleSnapshot::apply(nav, NAV_OPEN_STYLES);
                let bar_snapshots = bars
                    .iter_mut()
                    .zip(BAR_OPEN_STYLES)
                    .map(|(bar, overrides)| StyleSnapshot::apply(bar, overrides))
                    .collect();
                self.menu = Menu::Open {
                    nav: nav_snapshot,
                    bars: bar_snapshots,
                };
            }
            Menu::Open {
                nav: nav_snapshot,
                bars: bar_snapshots,
            } => {
                nav_snapshot.restore(nav);
                for (bar, snapshot) in bars.iter_mut().zip(bar_snapshots) {
                    snapshot.restore(bar);
                }
            }
        }
        self.state()
    }
}
