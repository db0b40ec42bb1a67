//! Placement orchestration
//!
//! Parses the direction token, resolves the real side, pins the width while
//! scrolled horizontally, dispatches to the axis positioner and styles the
//! arrow. The single entry point hosts call once per layout pass.

use serde::Serialize;

use crate::models::{Direction, DirectionToken, Measurement, StyleParams, ViewportMetrics};
use super::arrow::{arrow_style, ArrowStyle};
use super::direction::resolve_direction;
use super::horizontal::position_horizontal;
use super::measure::{Measurable, MetricsProvider};
use super::vertical::{position_vertical, Corner};
use super::{tip_max_width, BODY_PADDING, OFFSCREEN_LEFT};

/// Coordinates and width constraints for the tip element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipPosition {
    pub left: f64,
    pub top: f64,
    pub max_width: f64,
    /// Explicit width, only pinned while the document is scrolled horizontally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Everything a host needs to render the tip and its arrow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    pub tip: TipPosition,
    pub arrow: Option<ArrowStyle>,
    /// Side actually used after flip resolution
    pub real_direction: Direction,
}

impl PlacementResult {
    /// True until the tip has been measured at least once
    pub fn is_offscreen(&self) -> bool {
        self.tip.left == OFFSCREEN_LEFT
    }
}

/// Place a tip from already-taken measurement snapshots
///
/// `tip` is `None` before the tip has been mounted; the result then parks
/// the tip off-screen so nothing flashes in the wrong spot.
pub fn place(
    token: DirectionToken,
    tip: Option<&Measurement>,
    target: &Measurement,
    viewport: &ViewportMetrics,
    style: &StyleParams,
) -> PlacementResult {
    let max_width = tip_max_width(viewport);

    let Some(tip) = tip else {
        return PlacementResult {
            tip: TipPosition {
                left: OFFSCREEN_LEFT,
                top: 0.0,
                max_width,
                width: None,
            },
            arrow: style
                .arrow_enabled
                .then(|| arrow_style(Some(target), token.direction, style, viewport))
                .flatten(),
            real_direction: token.direction,
        };
    };

    let candidate_arrow = style
        .arrow_enabled
        .then(|| arrow_style(Some(target), token.direction, style, viewport))
        .flatten();
    let real_direction = resolve_direction(
        token.direction,
        tip,
        target,
        viewport,
        style,
        BODY_PADDING,
        candidate_arrow.as_ref(),
    );

    // Keep the measured width while scrolled sideways instead of reflowing.
    // The first pin gets an extra pixel; an exact width wraps the last word.
    let width = (viewport.scroll_left != 0.0).then(|| {
        let spacer = if tip.has_pinned_width { 0.0 } else { 1.0 };
        tip.size.width.min(max_width) + spacer
    });

    let Corner { left, top } = if real_direction.is_vertical() {
        position_vertical(tip, target, real_direction, token.align, style, viewport)
    } else {
        position_horizontal(tip, target, real_direction, token.align, style, viewport)
    };

    let arrow = style
        .arrow_enabled
        .then(|| arrow_style(Some(target), real_direction, style, viewport))
        .flatten();

    log::debug!(
        "Placed tooltip {} (requested {}) at ({}, {}), max width {}",
        real_direction,
        token,
        left,
        top,
        max_width
    );

    PlacementResult {
        tip: TipPosition { left, top, max_width, width },
        arrow,
        real_direction,
    }
}

/// Placement engine bound to a viewport metrics source
///
/// Reads metrics and measurements fresh on every call; holds no other state.
#[derive(Debug, Clone)]
pub struct PlacementEngine<M: MetricsProvider> {
    metrics: M,
}

impl<M: MetricsProvider> PlacementEngine<M> {
    pub fn new(metrics: M) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Compute tip and arrow placement for one layout pass
    ///
    /// Unknown direction tokens fall back to `up` / `middle` (see
    /// `DirectionToken::parse_or_default`). Hosts call this again once the
    /// tip has been mounted and can be measured.
    pub fn compute_placement(
        &self,
        direction: &str,
        tip: Option<&dyn Measurable>,
        target: &dyn Measurable,
        style: &StyleParams,
    ) -> PlacementResult {
        let viewport = self.metrics.viewport();
        let target = target.measure();
        let tip = tip.map(|tip| tip.measure());

        place(
            DirectionToken::parse_or_default(direction),
            tip.as_ref(),
            &target,
            &viewport,
            style,
        )
    }

    /// Resolve the side ahead of the full placement
    pub fn resolve_direction(
        &self,
        direction: Direction,
        tip: &dyn Measurable,
        target: &dyn Measurable,
        style: &StyleParams,
        body_padding: f64,
        candidate_arrow: Option<&ArrowStyle>,
    ) -> Direction {
        resolve_direction(
            direction,
            &tip.measure(),
            &target.measure(),
            &self.metrics.viewport(),
            style,
            body_padding,
            candidate_arrow,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;
    use std::cell::Cell;

    /// Counts how often it is asked for a rectangle
    struct CountingElement {
        measurement: Measurement,
        reads: Cell<usize>,
    }

    impl Measurable for CountingElement {
        fn bounding_rect(&self) -> Rect {
            self.reads.set(self.reads.get() + 1);
            self.measurement.rect
        }

        fn rendered_size(&self) -> crate::models::Size {
            self.measurement.size
        }
    }

    fn engine() -> PlacementEngine<ViewportMetrics> {
        PlacementEngine::new(ViewportMetrics::new(800.0, 600.0))
    }

    fn anchor() -> Measurement {
        Measurement::from_rect(Rect::new(100.0, 500.0, 50.0, 20.0))
    }

    #[test]
    fn test_up_scenario() {
        let tip = Measurement::sized(120.0, 40.0);
        let result = engine().compute_placement(
            "up",
            Some(&tip),
            &anchor(),
            &StyleParams::default(),
        );

        assert_eq!(result.tip.top, 450.0);
        assert_eq!(result.tip.left, 65.0);
        assert_eq!(result.tip.max_width, 780.0);
        assert_eq!(result.tip.width, None);
        assert_eq!(result.real_direction, Direction::Up);
        assert!(result.arrow.is_some());
    }

    #[test]
    fn test_unmounted_tip_parks_offscreen() {
        let result = engine().compute_placement("down", None, &anchor(), &StyleParams::default());
        assert!(result.is_offscreen());
        assert_eq!(result.real_direction, Direction::Down);
        assert_eq!(result.arrow.unwrap().direction, Direction::Down);
    }

    #[test]
    fn test_arrow_disabled_yields_none() {
        let tip = Measurement::sized(120.0, 40.0);
        let style = StyleParams::default().without_arrow();
        assert!(engine().compute_placement("up", Some(&tip), &anchor(), &style).arrow.is_none());
        assert!(engine().compute_placement("up", None, &anchor(), &style).arrow.is_none());
    }

    #[test]
    fn test_arrow_follows_flipped_direction() {
        let tip = Measurement::sized(120.0, 80.0);
        let near_top = Measurement::from_rect(Rect::new(100.0, 30.0, 50.0, 20.0));
        let result = engine().compute_placement(
            "up-start",
            Some(&tip),
            &near_top,
            &StyleParams::default(),
        );
        assert_eq!(result.real_direction, Direction::Down);
        assert_eq!(result.arrow.unwrap().direction, Direction::Down);
        assert_eq!(result.tip.top, 60.0);
    }

    #[test]
    fn test_width_pinned_while_scrolled_sideways() {
        let engine = PlacementEngine::new(ViewportMetrics::new(800.0, 600.0).scrolled(50.0, 0.0));
        let target = Measurement::from_rect(Rect::new(300.0, 500.0, 50.0, 20.0));

        let first = Measurement::sized(120.0, 40.0);
        let result = engine.compute_placement("up", Some(&first), &target, &StyleParams::default());
        assert_eq!(result.tip.width, Some(121.0));

        let pinned = first.with_pinned_width(true);
        let result =
            engine.compute_placement("up", Some(&pinned), &target, &StyleParams::default());
        assert_eq!(result.tip.width, Some(120.0));

        let wide = Measurement::sized(5000.0, 40.0).with_pinned_width(true);
        let result = engine.compute_placement("up", Some(&wide), &target, &StyleParams::default());
        assert_eq!(result.tip.width, Some(780.0));
    }

    #[test]
    fn test_invalid_token_falls_back_to_up_middle() {
        let tip = Measurement::sized(120.0, 40.0);
        let fallback = engine().compute_placement(
            "diagonal",
            Some(&tip),
            &anchor(),
            &StyleParams::default(),
        );
        let explicit = engine().compute_placement(
            "up-middle",
            Some(&tip),
            &anchor(),
            &StyleParams::default(),
        );
        assert_eq!(fallback, explicit);
    }

    #[test]
    fn test_measures_each_element_once() {
        let target = CountingElement { measurement: anchor(), reads: Cell::new(0) };
        let tip = CountingElement {
            measurement: Measurement::sized(120.0, 40.0),
            reads: Cell::new(0),
        };
        engine().compute_placement("left", Some(&tip), &target, &StyleParams::default());
        assert_eq!(target.reads.get(), 1);
        assert_eq!(tip.reads.get(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let tip = Measurement::sized(120.0, 40.0);
        let result = engine().compute_placement(
            "up",
            Some(&tip),
            &anchor(),
            &StyleParams::default(),
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["realDirection"], "up");
        assert_eq!(value["tip"]["maxWidth"], 780.0);
        assert!(value["tip"].get("width").is_none());
        assert_eq!(value["arrow"]["borderTopWidth"], "10px");
    }
}
