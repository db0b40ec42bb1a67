//! Inline style records for hosts that render the tip themselves
//!
//! Combines a `PlacementResult` with the visual props (colours, padding)
//! into the complete set of declarations for the tip and arrow elements.

use serde::Serialize;

use crate::models::{Direction, TooltipProps};
use super::arrow::ArrowStyle;
use super::engine::PlacementResult;

const TIP_Z_INDEX: u32 = 1000;
const ARROW_Z_INDEX: u32 = 1001;

/// Class names for the arrow element; the second one lets stylesheets colour
/// the pointing border per side
pub fn arrow_class_name(direction: Direction) -> String {
    format!("react-tooltip-lite-arrow react-tooltip-lite-{}-arrow", direction)
}

/// Class name of the tip element
pub const TIP_CLASS_NAME: &str = "react-tooltip-lite";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipChrome {
    pub class_name: &'static str,
    pub left: f64,
    pub top: f64,
    pub max_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub padding: String,
    pub box_sizing: &'static str,
    pub z_index: u32,
    pub position: &'static str,
    pub display: &'static str,
}

impl TipChrome {
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "left: {}px; top: {}px; max-width: {}px; ",
            self.left,
            self.top,
            self.max_width
        );
        if let Some(width) = self.width {
            css.push_str(&format!("width: {}px; ", width));
        }
        if let Some(background) = &self.background {
            css.push_str(&format!("background: {}; ", background));
        }
        if let Some(color) = &self.color {
            css.push_str(&format!("color: {}; ", color));
        }
        css.push_str(&format!(
            "padding: {}; box-sizing: {}; z-index: {}; position: {}; display: {};",
            self.padding, self.box_sizing, self.z_index, self.position, self.display
        ));
        css
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowChrome {
    pub class_name: String,
    pub style: ArrowStyle,
    pub z_index: u32,
}

impl ArrowChrome {
    pub fn to_css(&self) -> String {
        format!(
            "{} position: absolute; width: 0px; height: 0px; z-index: {};",
            self.style.to_css(),
            self.z_index
        )
    }
}

/// Tip and arrow style records for one placement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipChrome {
    /// Class name of the wrapper around tip and arrow
    pub class_name: String,
    pub tip: TipChrome,
    pub arrow: Option<ArrowChrome>,
}

impl TooltipChrome {
    pub fn new(props: &TooltipProps, placement: &PlacementResult) -> Self {
        let tip = TipChrome {
            class_name: TIP_CLASS_NAME,
            left: placement.tip.left,
            top: placement.tip.top,
            max_width: placement.tip.max_width,
            width: placement.tip.width,
            background: props.tip_background().map(str::to_string),
            color: props.tip_color().map(str::to_string),
            padding: props.padding.clone(),
            box_sizing: "border-box",
            z_index: TIP_Z_INDEX,
            position: "absolute",
            display: "inline-block",
        };

        let arrow = placement.arrow.as_ref().map(|style| ArrowChrome {
            class_name: arrow_class_name(placement.real_direction),
            style: style.clone(),
            z_index: ARROW_Z_INDEX,
        });

        Self {
            class_name: props.class_name.clone(),
            tip,
            arrow,
        }
    }
}
