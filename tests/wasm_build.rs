//! WASM build test
//!
//! Exercises the DOM adapters against a real document. Run with
//! `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use tooltip_placement::api::{apply_tip_position, position_tooltip, DomElement, DomMetrics};
use tooltip_placement::placement::{Measurable, MetricsProvider, PlacementEngine};
use tooltip_placement::{Direction, StyleParams};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn fixed_element(css: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    element.set_attribute("style", css).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_dom_metrics_reports_client_size() {
    let metrics = DomMetrics::from_window().unwrap();
    let viewport = metrics.viewport();
    assert!(viewport.client_width > 0.0);
    assert!(viewport.client_height > 0.0);
}

#[wasm_bindgen_test]
fn test_dom_metrics_height_follows_window() {
    let window = web_sys::window().unwrap();
    let inner_height = window.inner_height().unwrap().as_f64().unwrap();
    let viewport = DomMetrics::from_window().unwrap().viewport();
    assert_eq!(viewport.client_height, inner_height);
}

#[wasm_bindgen_test]
fn test_dom_element_measurement() {
    let element =
        fixed_element("position: absolute; left: 100px; top: 200px; width: 50px; height: 20px;");
    let viewport = DomMetrics::from_window().unwrap().viewport();
    let measured = DomElement::new(element, &viewport).measure();

    assert_eq!(measured.size.width, 50.0);
    assert_eq!(measured.size.height, 20.0);
    assert_eq!(measured.rect.width, 50.0);
    assert!(measured.has_pinned_width);
}

#[wasm_bindgen_test]
fn test_place_and_apply_live_elements() {
    let target =
        fixed_element("position: absolute; left: 200px; top: 300px; width: 50px; height: 20px;");
    let tip = fixed_element("position: absolute; display: inline-block; height: 40px;");
    tip.set_inner_text("tooltip");

    let engine = PlacementEngine::new(DomMetrics::from_window().unwrap());
    let viewport = engine.metrics().viewport();
    let target = DomElement::new(target, &viewport);
    let tip_element = DomElement::new(tip.clone(), &viewport);

    let placement =
        engine.compute_placement("up", Some(&tip_element), &target, &StyleParams::default());
    assert_eq!(placement.real_direction, Direction::Up);
    assert_eq!(placement.tip.top, 300.0 - 40.0 - 10.0);

    apply_tip_position(&tip, &placement).unwrap();
    assert_eq!(tip.style().get_property_value("top").unwrap(), "250px");
}

#[wasm_bindgen_test]
fn test_position_unrendered_tip_still_applies_styles() {
    let target =
        fixed_element("position: absolute; left: 200px; top: 300px; width: 50px; height: 20px;");
    let tip = fixed_element("display: none;");

    let result = position_tooltip("down", tip.clone(), Some(target), JsValue::UNDEFINED);
    assert!(result.is_ok());
    assert_eq!(tip.style().get_property_value("top").unwrap(), "330px");
}
