//! Direction resolution
//!
//! Keeps the preferred side when the tip fits there, otherwise flips to the
//! opposite side of the same axis. The axis itself never changes.

use crate::models::{Direction, Measurement, StyleParams, ViewportMetrics};
use super::arrow::ArrowStyle;

/// Space left for the tip on one side of the anchor, after the gap and padding
///
/// Measured from where the tip's leading edge would sit. A candidate arrow
/// computed for `direction` pins that edge to the arrow's outer side.
fn available_room(
    direction: Direction,
    target: &Measurement,
    viewport: &ViewportMetrics,
    style: &StyleParams,
    body_padding: f64,
    arrow: Option<&ArrowStyle>,
) -> f64 {
    let rect = target.rect;
    let spacing = style.arrow_spacing();
    let arrow = arrow.filter(|arrow| arrow.direction == direction);

    match direction {
        Direction::Up => {
            let leading = arrow.map_or(rect.top - spacing, |arrow| arrow.top);
            leading - viewport.scroll_top - body_padding
        }
        Direction::Down => {
            let leading = arrow.map_or(rect.bottom() + spacing, |arrow| {
                arrow.top + style.arrow_size
            });
            viewport.bottom() - leading - body_padding
        }
        Direction::Left => {
            let leading = arrow.map_or(rect.left - spacing, |arrow| arrow.left + 1.0);
            leading - viewport.scroll_left - body_padding
        }
        Direction::Right => {
            let leading = arrow.map_or(rect.right() + spacing, |arrow| {
                arrow.left + style.arrow_size
            });
            viewport.right() - leading - body_padding
        }
    }
}

/// Pick the side the tip is actually rendered on
///
/// Up/down test the tip height against the room above/below the anchor;
/// left/right test the tip width against the room beside it. When neither
/// side fits, the roomier one wins and ties keep `preferred`.
pub fn resolve_direction(
    preferred: Direction,
    tip: &Measurement,
    target: &Measurement,
    viewport: &ViewportMetrics,
    style: &StyleParams,
    body_padding: f64,
    candidate_arrow: Option<&ArrowStyle>,
) -> Direction {
    let needed = if preferred.is_vertical() {
        tip.size.height
    } else {
        tip.size.width
    };

    let preferred_room =
        available_room(preferred, target, viewport, style, body_padding, candidate_arrow);
    if preferred_room >= needed {
        return preferred;
    }

    let opposite = preferred.opposite();
    let opposite_room = available_room(opposite, target, viewport, style, body_padding, None);

    let resolved = if opposite_room >= needed || opposite_room > preferred_room {
        opposite
    } else {
        preferred
    };

    log::debug!(
        "Tooltip needs {} but has {} on {}; {} has {} -> {}",
        needed, preferred_room, preferred, opposite, opposite_room, resolved
    );

    resolved
}
