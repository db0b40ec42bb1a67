//! Arrow (callout) geometry
//!
//! The arrow is a zero-sized box whose borders form a CSS triangle. Two
//! sides are transparent; the side facing the anchor carries the colour.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::geometry::half_of;
use crate::models::{Direction, Measurement, StyleParams, ViewportMetrics};
use super::{tip_max_width, BODY_PADDING};

/// Colour of one border of the triangle
#[derive(Debug, Clone, PartialEq)]
pub enum BorderColor {
    Transparent,
    /// Inline colour from `StyleParams::background`
    Color(String),
    /// Only width and style are set; a stylesheet class supplies the colour
    Stylesheet,
}

/// One side of the border triangle
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f64,
    pub color: BorderColor,
}

impl Border {
    /// Shorthand CSS value, e.g. `10px solid transparent`
    fn shorthand(&self) -> Option<String> {
        match &self.color {
            BorderColor::Transparent => Some(format!("{}px solid transparent", self.width)),
            BorderColor::Color(color) => Some(format!("{}px solid {}", self.width, color)),
            BorderColor::Stylesheet => None,
        }
    }
}

/// Position and border triangle for the arrow element
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    /// The side the tip sits on; the coloured border faces the anchor
    pub direction: Direction,
    pub top: f64,
    pub left: f64,
    pub border_top: Option<Border>,
    pub border_right: Option<Border>,
    pub border_bottom: Option<Border>,
    pub border_left: Option<Border>,
}

impl ArrowStyle {
    fn sides(&self) -> [(&'static str, &'static str, &Option<Border>); 4] {
        [
            ("borderTop", "border-top", &self.border_top),
            ("borderRight", "border-right", &self.border_right),
            ("borderBottom", "border-bottom", &self.border_bottom),
            ("borderLeft", "border-left", &self.border_left),
        ]
    }

    /// The border that points at the anchor
    pub fn pointing_border(&self) -> Option<&Border> {
        match self.direction {
            Direction::Up => self.border_top.as_ref(),
            Direction::Down => self.border_bottom.as_ref(),
            Direction::Left => self.border_left.as_ref(),
            Direction::Right => self.border_right.as_ref(),
        }
    }

    /// Inline CSS declarations for the arrow element
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (_, property, border) in self.sides() {
            let Some(border) = border else { continue };
            match border.shorthand() {
                Some(value) => css.push_str(&format!("{}: {}; ", property, value)),
                None => css.push_str(&format!(
                    "{property}-width: {}px; {property}-style: solid; ",
                    border.width
                )),
            }
        }
        css.push_str(&format!("left: {}px; top: {}px;", self.left, self.top));
        css
    }
}

/// Serialises to the same camelCase style object a DOM host spreads onto the element
impl Serialize for ArrowStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (property, _, border) in self.sides() {
            let Some(border) = border else { continue };
            match border.shorthand() {
                Some(value) => map.serialize_entry(property, &value)?,
                None => {
                    map.serialize_entry(
                        &format!("{}Width", property),
                        &format!("{}px", border.width),
                    )?;
                    map.serialize_entry(&format!("{}Style", property), "solid")?;
                }
            }
        }
        map.serialize_entry("top", &self.top)?;
        map.serialize_entry("left", &self.left)?;
        map.end()
    }
}

/// Compute the arrow for a resolved direction
///
/// Returns `None` when the anchor could not be measured.
pub fn arrow_style(
    target: Option<&Measurement>,
    direction: Direction,
    style: &StyleParams,
    viewport: &ViewportMetrics,
) -> Option<ArrowStyle> {
    let target = target?;
    let rect = target.rect;
    let size = style.arrow_size;
    let spacing = style.arrow_spacing();
    let half_height = half_of(target.size.height);
    let half_width = half_of(target.size.width);

    let transparent = || Some(Border { width: size, color: BorderColor::Transparent });
    let pointing = Some(Border {
        width: size,
        color: match style.background_color() {
            Some(color) => BorderColor::Color(color.to_string()),
            None => BorderColor::Stylesheet,
        },
    });

    // Vertical arrows never render past the right padding of the viewport
    let clamped_center_left = || {
        let limit = viewport.scroll_left + tip_max_width(viewport) - BODY_PADDING;
        (rect.left + half_width - size).min(limit)
    };

    let arrow = match direction {
        Direction::Up => ArrowStyle {
            direction,
            top: rect.top - spacing,
            left: clamped_center_left(),
            border_top: pointing,
            border_right: transparent(),
            border_bottom: None,
            border_left: transparent(),
        },
        Direction::Down => ArrowStyle {
            direction,
            top: rect.bottom() + spacing - size,
            left: clamped_center_left(),
            border_top: None,
            border_right: transparent(),
            border_bottom: pointing,
            border_left: transparent(),
        },
        Direction::Right => ArrowStyle {
            direction,
            top: rect.top + half_height - size,
            left: rect.right() + spacing - size,
            border_top: transparent(),
            border_right: pointing,
            border_bottom: transparent(),
            border_left: None,
        },
        Direction::Left => ArrowStyle {
            direction,
            top: rect.top + half_height - size,
            left: rect.left - spacing - 1.0,
            border_top: transparent(),
            border_right: None,
            border_bottom: transparent(),
            border_left: pointing,
        },
    };

    Some(arrow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;

    fn anchor() -> Measurement {
        Measurement::from_rect(Rect::new(100.0, 500.0, 50.0, 20.0))
    }

    fn viewport() -> ViewportMetrics {
        ViewportMetrics::new(800.0, 600.0)
    }

    #[test]
    fn test_missing_target_has_no_arrow() {
        assert!(arrow_style(None, Direction::Up, &StyleParams::default(), &viewport()).is_none());
    }

    #[test]
    fn test_up_arrow_sits_above_anchor_center() {
        let arrow = arrow_style(
            Some(&anchor()),
            Direction::Up,
            &StyleParams::default(),
            &viewport(),
        )
        .unwrap();
        assert_eq!(arrow.left, 100.0 + 25.0 - 10.0);
        assert_eq!(arrow.top, 490.0);
        assert!(arrow.border_bottom.is_none());
        assert_eq!(arrow.border_left.as_ref().unwrap().color, BorderColor::Transparent);
        assert_eq!(arrow.pointing_border().unwrap().color, BorderColor::Stylesheet);
    }

    #[test]
    fn test_down_arrow_overlaps_gap() {
        let arrow = arrow_style(
            Some(&anchor()),
            Direction::Down,
            &StyleParams::default(),
            &viewport(),
        )
        .unwrap();
        assert_eq!(arrow.top, 520.0 + 10.0 - 10.0);
        assert!(arrow.border_top.is_none());
    }

    #[test]
    fn test_side_arrows() {
        let style = StyleParams::default().with_background("#333");
        let right = arrow_style(Some(&anchor()), Direction::Right, &style, &viewport()).unwrap();
        assert_eq!(right.top, 500.0 + 10.0 - 10.0);
        assert_eq!(right.left, 150.0);
        assert_eq!(right.pointing_border().unwrap().color, BorderColor::Color("#333".to_string()));

        let left = arrow_style(Some(&anchor()), Direction::Left, &style, &viewport()).unwrap();
        assert_eq!(left.left, 100.0 - 10.0 - 1.0);
        assert!(left.border_right.is_none());
    }

    #[test]
    fn test_vertical_arrow_clamped_to_viewport_right() {
        let far_right = Measurement::from_rect(Rect::new(900.0, 100.0, 40.0, 20.0));
        let arrow = arrow_style(
            Some(&far_right),
            Direction::Down,
            &StyleParams::default(),
            &viewport(),
        )
        .unwrap();
        assert_eq!(arrow.left, 780.0 - BODY_PADDING);
    }

    #[test]
    fn test_css_rendering_modes() {
        let themed = arrow_style(
            Some(&anchor()),
            Direction::Up,
            &StyleParams::default(),
            &viewport(),
        )
        .unwrap();
        let css = themed.to_css();
        assert!(css.contains("border-top-width: 10px; border-top-style: solid;"));
        assert!(css.contains("border-left: 10px solid transparent;"));
        assert!(css.ends_with("left: 115px; top: 490px;"));

        let inline = arrow_style(
            Some(&anchor()),
            Direction::Up,
            &StyleParams::default().with_background("red"),
            &viewport(),
        )
        .unwrap();
        assert!(inline.to_css().starts_with("border-top: 10px solid red;"));
    }

    #[test]
    fn test_serializes_as_style_object() {
        let arrow = arrow_style(
            Some(&anchor()),
            Direction::Right,
            &StyleParams::default(),
            &viewport(),
        )
        .unwrap();
        let value = serde_json::to_value(&arrow).unwrap();
        assert_eq!(value["borderTop"], "10px solid transparent");
        assert_eq!(value["borderRightWidth"], "10px");
        assert_eq!(value["borderRightStyle"], "solid");
        assert_eq!(value["left"], 150.0);
        assert!(value.get("borderLeft").is_none());
    }
}
