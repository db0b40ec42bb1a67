//! Geometry primitives shared by the placement engine
//!
//! All rectangles are in document coordinates: the host has already added
//! the scroll offsets to whatever its layout system reports.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Rendered box size (offset width/height) of an element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Scroll offsets and client dimensions of the scrolling viewport
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportMetrics {
    #[serde(default)]
    pub scroll_top: f64,
    #[serde(default)]
    pub scroll_left: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ViewportMetrics {
    pub fn new(client_width: f64, client_height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            scroll_left: 0.0,
            client_width,
            client_height,
        }
    }

    /// Same viewport scrolled to the given offsets
    pub fn scrolled(mut self, scroll_left: f64, scroll_top: f64) -> Self {
        self.scroll_left = scroll_left;
        self.scroll_top = scroll_top;
        self
    }

    /// Right edge of the visible area in document coordinates
    pub fn right(&self) -> f64 {
        self.scroll_left + self.client_width
    }

    /// Bottom edge of the visible area in document coordinates
    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.client_height
    }
}

/// A one-shot snapshot of an element: where it is and how big it renders
///
/// The engine reads every `Measurable` exactly once per placement and works
/// from these snapshots afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub rect: Rect,
    pub size: Size,
    /// Whether the host already applied an explicit width to this element
    #[serde(default)]
    pub has_pinned_width: bool,
}

impl Measurement {
    /// Snapshot whose rendered size matches its bounding rectangle
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rect,
            size: Size::new(rect.width, rect.height),
            has_pinned_width: false,
        }
    }

    /// Snapshot of an element that has been rendered but not yet positioned
    pub fn sized(width: f64, height: f64) -> Self {
        Self::from_rect(Rect::new(0.0, 0.0, width, height))
    }

    pub fn with_pinned_width(mut self, pinned: bool) -> Self {
        self.has_pinned_width = pinned;
        self
    }
}

/// `Math.round` semantics: halves round towards positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Half of a rendered dimension, rounded the way browsers report it
pub fn half_of(value: f64) -> f64 {
    round_half_up(value / 2.0)
}
