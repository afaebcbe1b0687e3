//! Screen edges that edgebars dock to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Edge of the screen hosting an edgebar.
///
/// Ordering is declaration order and decides the scan order for key lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
    Bottom,
    Top,
}

impl Position {
    /// All positions in scan order.
    pub const ALL: [Position; 4] = [
        Position::Left,
        Position::Right,
        Position::Bottom,
        Position::Top,
    ];

    /// Convert position to its lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Bottom => "bottom",
            Position::Top => "top",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            "bottom" => Ok(Position::Bottom),
            "top" => Ok(Position::Top),
            _ => Err(format!("Unknown position: {}", s)),
        }
    }
}
