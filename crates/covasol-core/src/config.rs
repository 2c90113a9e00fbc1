//! Effect tuning, grouped so the coordinator can build it once at start-up.

use crate::constants::*;
use crate::error::{ConfigError, Result};
use std::str::FromStr;

/// Page-level overrides, read from attributes on `<body>`.
pub const OVERRIDE_ATTRS: [&str; 7] = [
    "data-loader-delay",
    "data-header-threshold",
    "data-magnetic-strength",
    "data-transition-delay",
    "data-cursor-dot-follow",
    "data-cursor-ring-follow",
    "data-typewriter-speed",
];

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub loader_delay_ms: u32,
    pub reveal_threshold: f64,
    pub header_scroll_threshold: f64,
    pub magnetic_strength: f32,
    pub transition_delay_ms: u32,
    pub parallax_max_offset: f64,
    pub parallax_resize_debounce_ms: u32,
    pub cursor_dot_follow: f32,
    pub cursor_ring_follow: f32,
    pub globe_tilt_range_deg: f32,
    pub typewriter_speed_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            loader_delay_ms: LOADER_REVEAL_DELAY_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            header_scroll_threshold: HEADER_SCROLL_THRESHOLD,
            magnetic_strength: MAGNETIC_STRENGTH,
            transition_delay_ms: PAGE_TRANSITION_DELAY_MS,
            parallax_max_offset: PARALLAX_MAX_OFFSET,
            parallax_resize_debounce_ms: PARALLAX_RESIZE_DEBOUNCE_MS,
            cursor_dot_follow: CURSOR_DOT_FOLLOW,
            cursor_ring_follow: CURSOR_RING_FOLLOW,
            globe_tilt_range_deg: GLOBE_TILT_RANGE_DEG,
            typewriter_speed_ms: TYPEWRITER_DEFAULT_SPEED_MS,
        }
    }
}

impl EffectsConfig {
    /// Apply overrides found through `lookup` (attribute name -> raw value).
    /// Unparsable values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        override_value(&lookup, OVERRIDE_ATTRS[0], &mut self.loader_delay_ms);
        override_value(&lookup, OVERRIDE_ATTRS[1], &mut self.header_scroll_threshold);
        override_value(&lookup, OVERRIDE_ATTRS[2], &mut self.magnetic_strength);
        override_value(&lookup, OVERRIDE_ATTRS[3], &mut self.transition_delay_ms);
        override_value(&lookup, OVERRIDE_ATTRS[4], &mut self.cursor_dot_follow);
        override_value(&lookup, OVERRIDE_ATTRS[5], &mut self.cursor_ring_follow);
        override_value(&lookup, OVERRIDE_ATTRS[6], &mut self.typewriter_speed_ms);
    }

    /// Defaults plus overrides, rejected as a whole when the result does not
    /// validate.
    pub fn from_overrides<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        cfg.apply_overrides(lookup);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Like [`EffectsConfig::from_overrides`], falling back to plain defaults
    /// when the overrides are invalid.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_overrides(lookup).unwrap_or_else(|e| {
            log::warn!("[config] {e}; using defaults");
            Self::default()
        })
    }

    /// Reject values that would break an effect's invariants (e.g. a follow
    /// factor outside (0, 1) never moves or lands on the target).
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("reveal_threshold", self.reveal_threshold, 0.0, 1.0)?;
        check_range(
            "header_scroll_threshold",
            self.header_scroll_threshold,
            0.0,
            f64::MAX,
        )?;
        check_range(
            "magnetic_strength",
            self.magnetic_strength as f64,
            0.0,
            1.0,
        )?;
        check_range(
            "parallax_max_offset",
            self.parallax_max_offset,
            0.0,
            f64::MAX,
        )?;
        check_follow("cursor_dot_follow", self.cursor_dot_follow)?;
        check_follow("cursor_ring_follow", self.cursor_ring_follow)?;
        check_range(
            "globe_tilt_range_deg",
            self.globe_tilt_range_deg as f64,
            0.0,
            180.0,
        )?;
        if self.typewriter_speed_ms == 0 {
            return Err(ConfigError::Zero {
                name: "typewriter_speed_ms",
            });
        }
        Ok(())
    }
}

fn override_value<T, F>(lookup: &F, attr: &str, slot: &mut T)
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(attr) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(v) => *slot = v,
        Err(_) => log::warn!("[config] ignoring {attr}={raw:?}"),
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

fn check_follow(name: &'static str, factor: f32) -> Result<(), ConfigError> {
    if factor > 0.0 && factor < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::NotAFraction {
            name,
            value: factor as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EffectError;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn overrides_replace_defaults() {
        let cfg = EffectsConfig::resolve(lookup(&[
            ("data-transition-delay", "900"),
            ("data-cursor-ring-follow", " 0.2 "),
        ]));
        assert_eq!(cfg.transition_delay_ms, 900);
        assert_eq!(cfg.cursor_ring_follow, 0.2);
        assert_eq!(cfg.loader_delay_ms, LOADER_REVEAL_DELAY_MS);
    }

    #[test]
    fn unparsable_override_is_ignored() {
        let cfg = EffectsConfig::resolve(lookup(&[("data-loader-delay", "soon")]));
        assert_eq!(cfg, EffectsConfig::default());
    }

    #[test]
    fn invalid_override_falls_back_to_defaults() {
        let cfg = EffectsConfig::resolve(lookup(&[
            ("data-transition-delay", "900"),
            ("data-cursor-dot-follow", "3"),
        ]));
        assert_eq!(cfg, EffectsConfig::default());
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(EffectsConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_follow_factor_is_rejected() {
        let cfg = EffectsConfig {
            cursor_ring_follow: 0.0,
            ..EffectsConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::NotAFraction { name, .. }) => assert_eq!(name, "cursor_ring_follow"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn follow_factor_above_one_is_rejected() {
        let cfg = EffectsConfig {
            cursor_dot_follow: 1.5,
            ..EffectsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn follow_factor_of_one_is_rejected() {
        let cfg = EffectsConfig {
            cursor_dot_follow: 1.0,
            ..EffectsConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotAFraction {
                name: "cursor_dot_follow",
                value: 1.0
            })
        );
        let resolved = EffectsConfig::resolve(lookup(&[("data-cursor-dot-follow", "1")]));
        assert_eq!(resolved.cursor_dot_follow, CURSOR_DOT_FOLLOW);
    }

    #[test]
    fn invalid_overrides_surface_as_effect_error() {
        let err = EffectsConfig::from_overrides(lookup(&[("data-typewriter-speed", "0")]))
            .unwrap_err();
        assert_eq!(
            err,
            EffectError::InvalidConfig(ConfigError::Zero {
                name: "typewriter_speed_ms"
            })
        );
        assert!(!err.is_missing_element());
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let cfg = EffectsConfig {
            reveal_threshold: f64::NAN,
            ..EffectsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_typing_speed_is_rejected() {
        let cfg = EffectsConfig {
            typewriter_speed_ms: 0,
            ..EffectsConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Zero {
                name: "typewriter_speed_ms"
            })
        );
    }
}
