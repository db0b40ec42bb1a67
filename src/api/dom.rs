//! Live DOM adapters
//!
//! `DomMetrics` and `DomElement` implement the measurement capabilities on
//! top of web-sys, so browser hosts can pass elements straight in.
//! `getBoundingClientRect` is viewport-relative; the scroll offsets are
//! added here so the engine always sees document coordinates.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::error::{PlacementError, Result};
use crate::models::{Rect, Size, StyleParams, ViewportMetrics};
use crate::placement::{Measurable, MetricsProvider, PlacementEngine, PlacementResult};
use super::helpers::{deserialize_or_default, serialize, to_js_error};

/// Viewport metrics read from the window and document element
pub struct DomMetrics {
    window: Window,
    document: Document,
}

impl DomMetrics {
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| PlacementError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PlacementError::Dom("window has no document".to_string()))?;
        Ok(Self { window, document })
    }
}

impl MetricsProvider for DomMetrics {
    fn viewport(&self) -> ViewportMetrics {
        let root = self.document.document_element();

        // window.scrollX/Y first, then the root element's scroll offsets
        let scroll_left = self
            .window
            .scroll_x()
            .ok()
            .filter(|x| *x != 0.0)
            .or_else(|| root.as_ref().map(|el| el.scroll_left() as f64))
            .unwrap_or(0.0);
        let scroll_top = self
            .window
            .scroll_y()
            .ok()
            .filter(|y| *y != 0.0)
            .or_else(|| root.as_ref().map(|el| el.scroll_top() as f64))
            .unwrap_or(0.0);

        let client_width = root.as_ref().map(|el| el.client_width() as f64).unwrap_or(0.0);
        // Bottom overhang is measured against the window, scrollbar included
        let client_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .or_else(|| root.as_ref().map(|el| el.client_height() as f64))
            .unwrap_or(0.0);

        ViewportMetrics {
            scroll_top,
            scroll_left,
            client_width,
            client_height,
        }
    }
}

/// An element measured in document coordinates
pub struct DomElement {
    element: HtmlElement,
    scroll_left: f64,
    scroll_top: f64,
}

impl DomElement {
    pub fn new(element: HtmlElement, viewport: &ViewportMetrics) -> Self {
        Self {
            element,
            scroll_left: viewport.scroll_left,
            scroll_top: viewport.scroll_top,
        }
    }
}

impl Measurable for DomElement {
    fn bounding_rect(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect::new(
            rect.x() + self.scroll_left,
            rect.y() + self.scroll_top,
            rect.width(),
            rect.height(),
        )
    }

    fn rendered_size(&self) -> Size {
        Size::new(
            self.element.offset_width() as f64,
            self.element.offset_height() as f64,
        )
    }

    fn has_pinned_width(&self) -> bool {
        self.element
            .style()
            .get_property_value("width")
            .map(|width| !width.is_empty())
            .unwrap_or(false)
    }
}

/// Apply the tip part of a placement as inline styles
pub fn apply_tip_position(tip: &HtmlElement, placement: &PlacementResult) -> Result<()> {
    let style = tip.style();
    let set = |property: &str, value: String| {
        style
            .set_property(property, &value)
            .map_err(|e| PlacementError::Dom(format!("{}: {:?}", property, e)))
    };

    set("left", format!("{}px", placement.tip.left))?;
    set("top", format!("{}px", placement.tip.top))?;
    set("max-width", format!("{}px", placement.tip.max_width))?;
    if let Some(width) = placement.tip.width {
        set("width", format!("{}px", width))?;
    }
    Ok(())
}

fn place_elements(
    direction: &str,
    tip: Option<HtmlElement>,
    target: Option<HtmlElement>,
    style: &StyleParams,
) -> Result<PlacementResult> {
    let target = target.ok_or(PlacementError::MissingTarget)?;
    let engine = PlacementEngine::new(DomMetrics::from_window()?);
    let viewport = engine.metrics().viewport();

    let target = DomElement::new(target, &viewport);
    let tip = tip.map(|tip| DomElement::new(tip, &viewport));

    Ok(engine.compute_placement(
        direction,
        tip.as_ref().map(|tip| tip as &dyn Measurable),
        &target,
        style,
    ))
}

/// Measure live elements and compute placement
///
/// Pass `tip = undefined` on the first pass, before the tip is mounted.
#[wasm_bindgen(js_name = placeTooltip)]
pub fn place_tooltip(
    direction: &str,
    tip: Option<HtmlElement>,
    target: Option<HtmlElement>,
    style_js: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    let style: StyleParams =
        deserialize_or_default(style_js, "Failed to deserialize style params")?;
    let placement = place_elements(direction, tip, target, &style).map_err(to_js_error)?;
    crate::wasm_log!("placeTooltip: {} resolved to {}", direction, placement.real_direction);
    serialize(&placement, "Failed to serialize placement result")
}

/// Measure, place and write the tip's position back onto the element
#[wasm_bindgen(js_name = positionTooltip)]
pub fn position_tooltip(
    direction: &str,
    tip: HtmlElement,
    target: Option<HtmlElement>,
    style_js: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    let style: StyleParams =
        deserialize_or_default(style_js, "Failed to deserialize style params")?;
    if tip.offset_width() == 0 || tip.offset_height() == 0 {
        crate::wasm_warn!("positionTooltip: tip has no rendered size, is it mounted?");
    }
    let placement = place_elements(direction, Some(tip.clone()), target, &style)
        .map_err(to_js_error)?;
    apply_tip_position(&tip, &placement).map_err(to_js_error)?;
    serialize(&placement, "Failed to serialize placement result")
}
