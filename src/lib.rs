//! Tooltip Placement WASM Module
//!
//! Positions a floating tip next to an anchor element so it stays inside the
//! scrollable viewport, flipping to the opposite side when the preferred side
//! lacks room, and computes the CSS-triangle arrow pointing back at the
//! anchor. Usable as a plain Rust library or from JavaScript through WASM.

pub mod error;
pub mod models;
pub mod placement;
pub mod interaction;
pub mod api;

// Re-export commonly used types
pub use error::PlacementError;
pub use models::{
    AlignMode, Direction, DirectionToken, Measurement, Rect, Size, StyleParams, TooltipProps,
    ViewportMetrics,
};
pub use placement::{
    ArrowStyle, Measurable, MetricsProvider, PlacementEngine, PlacementResult, TipPosition,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Tooltip placement WASM module initialized");
}
