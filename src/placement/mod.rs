//! Tooltip placement engine
//!
//! Turns a preferred direction, anchor and tip measurements, viewport
//! metrics and style values into final tip coordinates, the direction that
//! was actually used and the CSS-triangle arrow pointing back at the anchor.
//!
//! Every call is a pure function of its inputs. Nothing is cached between
//! calls; hosts re-run placement after each layout change, typically once
//! before the tip is mounted and once more when it can be measured.
//!
//! # Module Structure
//!
//! - `measure`: the `Measurable` / `MetricsProvider` capabilities
//! - `direction`: flip resolution along the preferred axis
//! - `vertical` / `horizontal`: tip coordinates for the up/down and left/right pairs
//! - `arrow`: border-triangle geometry
//! - `engine`: orchestration and the `PlacementResult`
//! - `chrome`: full inline style records for hosts that render tips directly

pub mod arrow;
pub mod chrome;
pub mod direction;
pub mod engine;
pub mod horizontal;
pub mod measure;
pub mod vertical;

pub use arrow::{arrow_style, ArrowStyle, Border, BorderColor};
pub use chrome::{arrow_class_name, ArrowChrome, TipChrome, TooltipChrome, TIP_CLASS_NAME};
pub use direction::resolve_direction;
pub use engine::{place, PlacementEngine, PlacementResult, TipPosition};
pub use measure::{Measurable, MetricsProvider};

use crate::models::ViewportMetrics;

/// Minimum margin kept between the tip and the viewport edges
pub const BODY_PADDING: f64 = 10.0;

/// Minimum overlap kept between a side tip and its arrow
pub const MIN_ARROW_PADDING: f64 = 5.0;

/// Gap between anchor and tip when no arrow is drawn and no distance is set
pub const NO_ARROW_DISTANCE: f64 = 3.0;

/// Tip `left` used before the tip can be measured, far outside any viewport
pub const OFFSCREEN_LEFT: f64 = -10_000_000.0;

/// Widest the tip may render: the client width minus padding on both sides
///
/// Never drops below `BODY_PADDING`, so a zero-sized viewport still yields
/// a usable positive width.
pub fn tip_max_width(viewport: &ViewportMetrics) -> f64 {
    (viewport.client_width - BODY_PADDING * 2.0).max(BODY_PADDING)
}
