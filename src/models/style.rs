//! Styling inputs for placement
//!
//! `StyleParams` is the narrow set of values the geometry depends on.
//! `TooltipProps` is the full host-facing configuration with the defaults a
//! tooltip component ships with; it derives `StyleParams` for the engine.

use serde::{Deserialize, Serialize};

use crate::placement::NO_ARROW_DISTANCE;

/// Background used when `use_default_styles` is set
pub const DEFAULT_BACKGROUND: &str = "#333";

/// Text colour used when `use_default_styles` is set
pub const DEFAULT_COLOR: &str = "#fff";

fn default_true() -> bool {
    true
}

fn default_arrow_size() -> f64 {
    10.0
}

fn default_direction() -> String {
    "up".to_string()
}

fn default_padding() -> String {
    "10px".to_string()
}

fn default_hover_delay() -> u32 {
    200
}

/// Values that shape the gap between anchor and tip and the arrow triangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleParams {
    /// Draw the arrow pointer
    #[serde(rename = "arrow", alias = "arrowEnabled", default = "default_true")]
    pub arrow_enabled: bool,

    /// Arrow triangle size (border width) in pixels
    #[serde(default = "default_arrow_size")]
    pub arrow_size: f64,

    /// Explicit gap between anchor and tip, overriding the arrow-based default
    #[serde(default)]
    pub distance: Option<f64>,

    /// Inline arrow colour; when unset the colour comes from a stylesheet class
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            arrow_enabled: true,
            arrow_size: default_arrow_size(),
            distance: None,
            background: None,
        }
    }
}

impl StyleParams {
    pub fn without_arrow(mut self) -> Self {
        self.arrow_enabled = false;
        self
    }

    pub fn with_arrow_size(mut self, size: f64) -> Self {
        self.arrow_size = size;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Gap between anchor and tip
    ///
    /// `distance` wins when it is a real number; otherwise the arrow size when
    /// an arrow is drawn, else a small fixed spacing.
    pub fn arrow_spacing(&self) -> f64 {
        match self.distance {
            Some(distance) if distance.is_finite() => distance,
            _ if self.arrow_enabled => self.arrow_size,
            _ => NO_ARROW_DISTANCE,
        }
    }

    /// Inline arrow colour, ignoring empty strings
    pub fn background_color(&self) -> Option<&str> {
        self.background.as_deref().filter(|bg| !bg.trim().is_empty())
    }
}

/// Full tooltip configuration as a host component would receive it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipProps {
    #[serde(default = "default_direction")]
    pub direction: String,

    #[serde(default)]
    pub class_name: String,

    #[serde(default)]
    pub background: String,

    #[serde(default)]
    pub color: String,

    #[serde(default = "default_padding")]
    pub padding: String,

    /// Apply the built-in dark theme instead of `background`/`color`
    #[serde(default)]
    pub use_default_styles: bool,

    #[serde(default = "default_true")]
    pub arrow: bool,

    #[serde(default = "default_arrow_size")]
    pub arrow_size: f64,

    #[serde(default)]
    pub distance: Option<f64>,

    /// Milliseconds between a hover change and the visibility change
    #[serde(default = "default_hover_delay")]
    pub hover_delay: u32,

    /// Keep the tip open while the pointer is over the tip itself
    #[serde(default)]
    pub tip_content_hover: bool,

    /// Show/hide on hover of the anchor
    #[serde(default = "default_true")]
    pub use_hover: bool,

    /// Handler name that shows the tip, e.g. `onFocus`
    #[serde(default)]
    pub event_on: Option<String>,

    /// Handler name that hides the tip
    #[serde(default)]
    pub event_off: Option<String>,

    /// Handler name that toggles the tip; disables hover handling
    #[serde(default)]
    pub event_toggle: Option<String>,

    /// Externally controlled visibility
    #[serde(default)]
    pub is_open: Option<bool>,
}

impl Default for TooltipProps {
    fn default() -> Self {
        Self {
            direction: default_direction(),
            class_name: String::new(),
            background: String::new(),
            color: String::new(),
            padding: default_padding(),
            use_default_styles: false,
            arrow: true,
            arrow_size: default_arrow_size(),
            distance: None,
            hover_delay: default_hover_delay(),
            tip_content_hover: false,
            use_hover: true,
            event_on: None,
            event_off: None,
            event_toggle: None,
            is_open: None,
        }
    }
}

impl TooltipProps {
    /// Effective tip background, if any
    pub fn tip_background(&self) -> Option<&str> {
        if self.use_default_styles {
            Some(DEFAULT_BACKGROUND)
        } else if self.background.is_empty() {
            None
        } else {
            Some(&self.background)
        }
    }

    /// Effective tip text colour, if any
    pub fn tip_color(&self) -> Option<&str> {
        if self.use_default_styles {
            Some(DEFAULT_COLOR)
        } else if self.color.is_empty() {
            None
        } else {
            Some(&self.color)
        }
    }

    /// The subset of props the placement engine consumes
    pub fn style_params(&self) -> StyleParams {
        StyleParams {
            arrow_enabled: self.arrow,
            arrow_size: self.arrow_size,
            distance: self.distance,
            background: self.tip_background().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_spacing_defaults() {
        let style = StyleParams::default();
        assert_eq!(style.arrow_spacing(), 10.0);
        assert_eq!(style.clone().without_arrow().arrow_spacing(), NO_ARROW_DISTANCE);
        assert_eq!(style.with_distance(0.0).arrow_spacing(), 0.0);
    }

    #[test]
    fn test_non_finite_distance_is_ignored() {
        let style = StyleParams::default().with_arrow_size(6.0).with_distance(f64::NAN);
        assert_eq!(style.arrow_spacing(), 6.0);
    }

    #[test]
    fn test_empty_background_is_unset() {
        assert_eq!(StyleParams::default().with_background("").background_color(), None);
        assert_eq!(
            StyleParams::default().with_background("red").background_color(),
            Some("red")
        );
    }

    #[test]
    fn test_default_styles_override_colors() {
        let props = TooltipProps {
            background: "blue".to_string(),
            color: "black".to_string(),
            use_default_styles: true,
            ..TooltipProps::default()
        };
        assert_eq!(props.tip_background(), Some(DEFAULT_BACKGROUND));
        assert_eq!(props.tip_color(), Some(DEFAULT_COLOR));
        assert_eq!(props.style_params().background.as_deref(), Some(DEFAULT_BACKGROUND));
    }

    #[test]
    fn test_style_params_deserialize_with_defaults() {
        let style: StyleParams = serde_json::from_str(r#"{"arrowSize": 8}"#).unwrap();
        assert!(style.arrow_enabled);
        assert_eq!(style.arrow_size, 8.0);
        assert_eq!(style.distance, None);

        let style: StyleParams = serde_json::from_str(r#"{"arrowEnabled": false}"#).unwrap();
        assert!(!style.arrow_enabled);
    }
}
