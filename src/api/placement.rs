//! Placement entry points over serialised measurement snapshots
//!
//! For hosts that measure elements themselves (any framework, workers,
//! server-side layout) and hand the numbers over as plain objects.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::{PlacementError, Result};
use crate::interaction::{EventSource, InteractionConfig, VisibilityEvent};
use crate::models::{
    Direction, DirectionToken, Measurement, StyleParams, TooltipProps, ViewportMetrics,
};
use crate::placement::{
    arrow_style, place, resolve_direction, PlacementResult, TooltipChrome, BODY_PADDING,
};
use super::helpers::{deserialize, deserialize_or_default, serialize, to_js_error};

fn default_direction() -> String {
    "up".to_string()
}

/// One layout pass worth of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    #[serde(default = "default_direction")]
    pub direction: String,
    /// Absent until the tip has been mounted
    #[serde(default)]
    pub tip: Option<Measurement>,
    pub target: Option<Measurement>,
    pub viewport: ViewportMetrics,
    #[serde(default)]
    pub style: StyleParams,
}

impl PlacementRequest {
    fn target(&self) -> Result<&Measurement> {
        self.target.as_ref().ok_or(PlacementError::MissingTarget)
    }

    pub fn compute(&self) -> Result<PlacementResult> {
        let target = self.target()?;
        Ok(place(
            DirectionToken::parse_or_default(&self.direction),
            self.tip.as_ref(),
            target,
            &self.viewport,
            &self.style,
        ))
    }

    /// Resolved side only; without a tip measurement the parsed direction stands
    pub fn resolve(&self) -> Result<Direction> {
        let target = self.target()?;
        let direction = DirectionToken::parse_or_default(&self.direction).direction;
        let Some(tip) = self.tip.as_ref() else {
            return Ok(direction);
        };

        let candidate = self
            .style
            .arrow_enabled
            .then(|| arrow_style(Some(target), direction, &self.style, &self.viewport))
            .flatten();

        Ok(resolve_direction(
            direction,
            tip,
            target,
            &self.viewport,
            &self.style,
            BODY_PADDING,
            candidate.as_ref(),
        ))
    }
}

/// Placement plus rendered chrome for a full props object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRequest {
    #[serde(default)]
    pub props: TooltipProps,
    #[serde(default)]
    pub tip: Option<Measurement>,
    pub target: Option<Measurement>,
    pub viewport: ViewportMetrics,
}

impl TooltipRequest {
    pub fn compute(&self) -> Result<TooltipChrome> {
        let target = self.target.as_ref().ok_or(PlacementError::MissingTarget)?;
        let placement = place(
            DirectionToken::parse_or_default(&self.props.direction),
            self.tip.as_ref(),
            target,
            &self.viewport,
            &self.props.style_params(),
        );
        Ok(TooltipChrome::new(&self.props, &placement))
    }
}

// ============================================================================
// WASM Entry Points
// ============================================================================

/// Compute tip and arrow placement from a `PlacementRequest` object
#[wasm_bindgen(js_name = computePlacement)]
pub fn compute_placement(request_js: JsValue) -> std::result::Result<JsValue, JsValue> {
    let request: PlacementRequest =
        deserialize(request_js, "Failed to deserialize placement request")?;
    let result = request.compute().map_err(to_js_error)?;
    serialize(&result, "Failed to serialize placement result")
}

/// JSON-string variant of `computePlacement`
#[wasm_bindgen(js_name = computePlacementJson)]
pub fn compute_placement_json(request_json: &str) -> std::result::Result<String, JsValue> {
    let request: PlacementRequest = serde_json::from_str(request_json)
        .map_err(|e| to_js_error(PlacementError::Deserialize(e.to_string())))?;
    let result = request.compute().map_err(to_js_error)?;
    serde_json::to_string(&result)
        .map_err(|e| to_js_error(PlacementError::Serialize(e.to_string())))
}

/// Resolve only the side the tip will render on
#[wasm_bindgen(js_name = resolveDirection)]
pub fn resolve_direction_js(request_js: JsValue) -> std::result::Result<String, JsValue> {
    let request: PlacementRequest =
        deserialize(request_js, "Failed to deserialize placement request")?;
    let direction = request.resolve().map_err(to_js_error)?;
    Ok(direction.as_str().to_string())
}

/// Placement plus complete tip/arrow style records from a `TooltipRequest`
#[wasm_bindgen(js_name = computeTooltipChrome)]
pub fn compute_tooltip_chrome(request_js: JsValue) -> std::result::Result<JsValue, JsValue> {
    let request: TooltipRequest = deserialize(request_js, "Failed to deserialize tooltip request")?;
    let chrome = request.compute().map_err(to_js_error)?;
    serialize(&chrome, "Failed to serialize tooltip chrome")
}

/// Map a DOM handler name to a visibility event for the given props
#[wasm_bindgen(js_name = visibilityEventFor)]
pub fn visibility_event_for(
    props_js: JsValue,
    source: &str,
    dom_event: &str,
) -> std::result::Result<JsValue, JsValue> {
    let props: TooltipProps =
        deserialize_or_default(props_js, "Failed to deserialize tooltip props")?;
    let source = match source {
        "tip" => EventSource::Tip,
        _ => EventSource::Target,
    };
    let event: Option<VisibilityEvent> =
        InteractionConfig::from(&props).event_for(source, dom_event);
    serialize(&event, "Failed to serialize visibility event")
}
