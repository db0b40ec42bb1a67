//! Measurement capabilities the engine borrows from its host
//!
//! The engine never reaches for ambient globals: viewport metrics come from
//! a `MetricsProvider` and element geometry from `Measurable`, so native
//! hosts and tests can feed synthetic snapshots.

use crate::models::{Measurement, Rect, Size, ViewportMetrics};

/// Anything the engine can place a tip against, or place as a tip
pub trait Measurable {
    /// Bounding rectangle in document coordinates
    fn bounding_rect(&self) -> Rect;

    /// Rendered box size (offset width/height)
    fn rendered_size(&self) -> Size;

    /// Whether the host has already applied an explicit width
    fn has_pinned_width(&self) -> bool {
        false
    }

    /// Take a consistent snapshot of all three readings
    fn measure(&self) -> Measurement {
        Measurement {
            rect: self.bounding_rect(),
            size: self.rendered_size(),
            has_pinned_width: self.has_pinned_width(),
        }
    }
}

/// Source of scroll offsets and client dimensions
pub trait MetricsProvider {
    fn viewport(&self) -> ViewportMetrics;
}

impl Measurable for Measurement {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn rendered_size(&self) -> Size {
        self.size
    }

    fn has_pinned_width(&self) -> bool {
        self.has_pinned_width
    }

    fn measure(&self) -> Measurement {
        *self
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn rendered_size(&self) -> Size {
        (**self).rendered_size()
    }

    fn has_pinned_width(&self) -> bool {
        (**self).has_pinned_width()
    }
}

impl MetricsProvider for ViewportMetrics {
    fn viewport(&self) -> ViewportMetrics {
        *self
    }
}

impl<T: MetricsProvider + ?Sized> MetricsProvider for &T {
    fn viewport(&self) -> ViewportMetrics {
        (**self).viewport()
    }
}
