//! Placement directions and cross-axis alignment
//!
//! Hosts describe where they want the tip with a single token such as
//! `"up"`, `"left-start"` or `"down-end"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlacementError;

/// Side of the anchor the tip is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The other side on the same axis
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for the up/down pair
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(PlacementError::InvalidDirectionToken(s.to_string())),
        }
    }
}

/// Sub-placement along the cross axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    Start,
    #[default]
    Middle,
    End,
}

impl AlignMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignMode::Start => "start",
            AlignMode::Middle => "middle",
            AlignMode::End => "end",
        }
    }
}

impl FromStr for AlignMode {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(AlignMode::Start),
            "middle" => Ok(AlignMode::Middle),
            "end" => Ok(AlignMode::End),
            _ => Err(PlacementError::InvalidDirectionToken(s.to_string())),
        }
    }
}

/// A parsed `"<direction>"` or `"<direction>-<align>"` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionToken {
    pub direction: Direction,
    pub align: AlignMode,
}

impl DirectionToken {
    pub fn new(direction: Direction, align: AlignMode) -> Self {
        Self { direction, align }
    }

    /// Strict parse: any unknown direction or align part is an error
    pub fn parse(token: &str) -> Result<Self, PlacementError> {
        let token = token.trim();
        let invalid = || PlacementError::InvalidDirectionToken(token.to_string());

        let (direction, align) = match token.split_once('-') {
            Some((direction, align)) => (direction, Some(align)),
            None => (token, None),
        };

        let direction = direction.parse::<Direction>().map_err(|_| invalid())?;
        let align = match align {
            Some(align) => align.parse::<AlignMode>().map_err(|_| invalid())?,
            None => AlignMode::Middle,
        };

        Ok(Self { direction, align })
    }

    /// Lenient parse used by the engine
    ///
    /// An unknown direction becomes `up`, an unknown align becomes `middle`.
    /// The two parts fall back independently, so `"left-sideways"` still
    /// places on the left.
    pub fn parse_or_default(token: &str) -> Self {
        let trimmed = token.trim();
        let (direction_part, align_part) = match trimmed.split_once('-') {
            Some((direction, align)) => (direction, Some(align)),
            None => (trimmed, None),
        };

        let direction = direction_part.parse::<Direction>().unwrap_or_else(|_| {
            log::warn!("Unknown tooltip direction {:?}, falling back to \"up\"", token);
            Direction::default()
        });

        let align = match align_part {
            Some(align) => align.parse::<AlignMode>().unwrap_or_else(|_| {
                log::warn!("Unknown tooltip alignment in {:?}, falling back to \"middle\"", token);
                AlignMode::default()
            }),
            None => AlignMode::default(),
        };

        Self { direction, align }
    }
}

impl FromStr for DirectionToken {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DirectionToken::parse(s)
    }
}

impl fmt::Display for DirectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.align {
            AlignMode::Middle => write!(f, "{}", self.direction),
            align => write!(f, "{}-{}", self.direction, align.as_str()),
        }
    }
}
