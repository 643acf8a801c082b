//! Categorical element parameters.
//!
//! Each parameter parses from its markup spelling and rejects anything else
//! with [`ElementError::UnknownMode`] at construction time.

use std::{fmt, str::FromStr};

use super::ElementError;

/// Direction of a glyph's value axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl FromStr for Orientation {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "vertical" | "v" => Ok(Orientation::Vertical),
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            _ => Err(ElementError::UnknownMode {
                parameter: "orientation",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// Which half of a symmetric glyph to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Both,
    /// The half below (horizontal) or left of (vertical) the centre
    Low,
    /// The half above (horizontal) or right of (vertical) the centre
    High,
}

impl FromStr for Side {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "both" => Ok(Side::Both),
            "low" | "left" | "bottom" => Ok(Side::Low),
            "high" | "right" | "top" => Ok(Side::High),
            _ => Err(ElementError::UnknownMode {
                parameter: "side",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// Predefined legend anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    OuterNorthEast,
}

impl LegendPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::NorthEast => "north east",
            LegendPosition::NorthWest => "north west",
            LegendPosition::SouthEast => "south east",
            LegendPosition::SouthWest => "south west",
            LegendPosition::OuterNorthEast => "outer north east",
        }
    }
}

impl FromStr for LegendPosition {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "north east" => Ok(LegendPosition::NorthEast),
            "north west" => Ok(LegendPosition::NorthWest),
            "south east" => Ok(LegendPosition::SouthEast),
            "south west" => Ok(LegendPosition::SouthWest),
            "outer north east" => Ok(LegendPosition::OuterNorthEast),
            _ => Err(ElementError::UnknownMode {
                parameter: "legend position",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
