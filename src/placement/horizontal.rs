//! Tip coordinates for the left/right pair
//!
//! `top` follows the align mode along the anchor's height, then a bottom
//! overhang is pulled back up, but never so far that the tip stops lining
//! up with its own arrow. `left` sits beside the anchor and is kept inside
//! the left and right padding when neither side had room for the tip.

use crate::models::geometry::half_of;
use crate::models::{AlignMode, Direction, Measurement, StyleParams, ViewportMetrics};
use super::vertical::Corner;
use super::{tip_max_width, BODY_PADDING, MIN_ARROW_PADDING};

pub fn position_horizontal(
    tip: &Measurement,
    target: &Measurement,
    direction: Direction,
    align: AlignMode,
    style: &StyleParams,
    viewport: &ViewportMetrics,
) -> Corner {
    let spacing = style.arrow_spacing();
    let arrow_padding = if style.arrow_enabled { MIN_ARROW_PADDING } else { 0.0 };
    let rect = target.rect;
    let tip_height = tip.size.height;

    let target_top = rect.top;
    let half_target_height = half_of(target.size.height);
    let arrow_top = target_top + half_target_height - style.arrow_size;
    let arrow_bottom = target_top + half_target_height + style.arrow_size;

    let mut top = match align {
        AlignMode::Start if style.arrow_enabled => target_top.min(arrow_top),
        AlignMode::Start => target_top,
        AlignMode::End => {
            let top_for_bottom_align = rect.bottom() - tip_height;
            if style.arrow_enabled {
                top_for_bottom_align.max(arrow_bottom - tip_height)
            } else {
                top_for_bottom_align
            }
        }
        AlignMode::Middle => {
            let centered = (target_top + half_target_height - half_of(tip_height))
                .max(BODY_PADDING + viewport.scroll_top);
            // keep the tip's top edge above the arrow
            centered.min(arrow_top - arrow_padding)
        }
    };

    // Shift up by the overhang first, then floor at the arrow-padding bound
    let bottom_overhang =
        (top - viewport.scroll_top) + tip_height + BODY_PADDING - viewport.client_height;
    if bottom_overhang > 0.0 {
        top = (top - bottom_overhang).max(arrow_bottom + arrow_padding - tip_height);
    }

    let beside = match direction {
        Direction::Right => rect.right() + spacing,
        _ => rect.left - spacing - tip.size.width,
    };
    let tip_width = tip_max_width(viewport).min(tip.size.width);
    let left = beside
        .min(viewport.right() - BODY_PADDING - tip_width)
        .max(viewport.scroll_left + BODY_PADDING);

    Corner { left, top }
}
