//! Data models for tooltip placement
//!
//! Plain values exchanged between the host and the placement engine.

pub mod direction;
pub mod geometry;
pub mod style;

pub use direction::{AlignMode, Direction, DirectionToken};
pub use geometry::{Measurement, Rect, Size, ViewportMetrics};
pub use style::{StyleParams, TooltipProps};
