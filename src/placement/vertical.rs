//! Tip coordinates for the up/down pair
//!
//! `left` follows the align mode across the anchor's width and is then
//! kept between the left and right padding. `top` depends on the side and
//! is pulled back up when the tip would hang past the bottom edge.

use crate::models::geometry::half_of;
use crate::models::{AlignMode, Direction, Measurement, StyleParams, ViewportMetrics};
use super::{tip_max_width, BODY_PADDING};

/// Top-left corner of the tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub left: f64,
    pub top: f64,
}

pub fn position_vertical(
    tip: &Measurement,
    target: &Measurement,
    direction: Direction,
    align: AlignMode,
    style: &StyleParams,
    viewport: &ViewportMetrics,
) -> Corner {
    let spacing = style.arrow_spacing();
    let rect = target.rect;

    let target_left = rect.left;
    let target_right = target_left + target.size.width;
    let half_target_width = half_of(target.size.width);
    let tip_width = tip_max_width(viewport).min(tip.size.width);

    let arrow_center = target_left + half_target_width;
    let arrow_left = arrow_center - style.arrow_size;
    let arrow_right = arrow_center + style.arrow_size;
    let left_floor = BODY_PADDING + viewport.scroll_left;

    let mut left = match align {
        AlignMode::Start if style.arrow_enabled => arrow_left.min(target_left),
        AlignMode::Start => target_left,
        AlignMode::End => {
            let right_edge = if style.arrow_enabled {
                arrow_right.max(target_right)
            } else {
                target_right
            };
            (right_edge - tip_width).max(left_floor)
        }
        AlignMode::Middle => (arrow_center - half_of(tip_width)).max(left_floor),
    };

    // Slide left by the overhang, then floor at the left padding. The tip
    // width is capped at the max width, so both bounds hold together.
    let right_limit = viewport.right() - BODY_PADDING;
    let overhang = left + tip_width - right_limit;
    if overhang > 0.0 {
        left -= overhang;
    }
    left = left.max(left_floor);

    let mut top = match direction {
        Direction::Up => rect.top - (tip.size.height + spacing),
        _ => rect.bottom() + spacing,
    };

    // Only reachable when neither side had room; the top padding wins for
    // tips taller than the viewport
    let bottom_overhang = top + tip.size.height - (viewport.bottom() - BODY_PADDING);
    if bottom_overhang > 0.0 {
        top = (top - bottom_overhang).max(viewport.scroll_top + BODY_PADDING);
    }

    Corner { left, top }
}
