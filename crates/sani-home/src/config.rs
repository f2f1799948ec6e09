//! Screen configuration, read from JSON. Every field has a default, so an
//! empty object (or no file at all) yields the reference setup.

use std::path::Path;

use sani_core::{AnimationSpec, Easing, Viewport};
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::ConfigError;
use crate::nav::{HOME, NAV_ITEMS, index_of};
use crate::tabs::TRANSITION;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        let vp = Viewport::base();
        Self {
            width: vp.width,
            height: vp.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingName {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl From<EasingName> for Easing {
    fn from(e: EasingName) -> Self {
        match e {
            EasingName::Linear => Easing::Linear,
            EasingName::EaseIn => Easing::EaseIn,
            EasingName::EaseOut => Easing::EaseOut,
            EasingName::EaseInOut => Easing::EaseInOut,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeConfig {
    pub viewport: ViewportConfig,
    pub initial_tab: String,
    pub transition_ms: u64,
    pub easing: EasingName,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            initial_tab: HOME.to_string(),
            transition_ms: TRANSITION.as_millis() as u64,
            easing: EasingName::default(),
        }
    }
}

impl HomeConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: HomeConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("config: loaded {}", path.display());
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ViewportConfig { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }
        if self.transition_ms == 0 {
            return Err(ConfigError::Invalid("transition_ms must be > 0".into()));
        }
        if index_of(&NAV_ITEMS, &self.initial_tab).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown initial_tab {:?}",
                self.initial_tab
            )));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport.width, self.viewport.height)
    }

    pub fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(
            Duration::from_millis(self.transition_ms),
            self.easing.into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let cfg = HomeConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, HomeConfig::default());
        assert_eq!(cfg.viewport(), Viewport::base());
        assert_eq!(cfg.animation_spec().duration, Duration::from_millis(240));
        assert_eq!(cfg.animation_spec().easing, Easing::EaseInOut);
    }

    #[test]
    fn test_partial_override() {
        let cfg = HomeConfig::from_json_str(
            r#"{ "viewport": { "width": 428 }, "initial_tab": "products", "easing": "linear" }"#,
        )
        .unwrap();
        assert_eq!(cfg.viewport.width, 428.0);
        assert_eq!(cfg.viewport.height, 812.0);
        assert_eq!(cfg.initial_tab, "products");
        assert_eq!(cfg.animation_spec().easing, Easing::Linear);
    }

    #[test]
    fn test_round_trips_through_json_value() {
        let cfg = HomeConfig {
            transition_ms: 120,
            ..HomeConfig::default()
        };
        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["transition_ms"], 120);
        assert_eq!(v["easing"], "ease_in_out");
    }

    #[test]
    fn test_rejects_invalid_values() {
        for bad in [
            r#"{ "viewport": { "width": 0 } }"#,
            r#"{ "viewport": { "height": -5 } }"#,
            r#"{ "transition_ms": 0 }"#,
            r#"{ "initial_tab": "cart" }"#,
        ] {
            assert!(
                matches!(HomeConfig::from_json_str(bad), Err(ConfigError::Invalid(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            HomeConfig::from_json_str(r#"{ "colour": "red" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            HomeConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = HomeConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
