//! Tooltip placement WASM API
//!
//! JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialisation and error conversion
//! - `placement`: entry points over serialised measurement snapshots
//! - `dom`: entry points that measure live DOM elements through web-sys

pub mod helpers;
pub mod placement;
pub mod dom;

pub use placement::{
    compute_placement, compute_placement_json, compute_tooltip_chrome, resolve_direction_js,
    visibility_event_for, PlacementRequest, TooltipRequest,
};
pub use dom::{apply_tip_position, place_tooltip, position_tooltip, DomElement, DomMetrics};
