use std::fmt;
use std::str::FromStr;

use crate::layout::Line;
use crate::rect::Boundary;
use crate::units::Px;
use crate::Error;

/// How each line is positioned horizontally within its boundary.
///
/// Right alignment is deliberately not a variant: asking for it by name fails with
/// [Error::UnsupportedAlignment] rather than quietly producing some other alignment.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Lines start at the left edge of the boundary
    #[default]
    Left,
    /// Lines are centred on the middle of the boundary
    Center,
}

impl Alignment {
    /// Where the pen starts for `line`. Centring uses truncating integer division, so a
    /// line with an odd amount of slack sits one pixel left of true centre.
    pub fn offset_x(&self, line: &Line<'_>, boundary: &Boundary, space_width: Px) -> Px {
        match self {
            Alignment::Left => boundary.x,
            Alignment::Center => boundary
                .x
                .saturating_add(boundary.width / 2)
                .saturating_sub(line.width(space_width) / 2),
        }
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            other => Err(Error::UnsupportedAlignment(other.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => f.write_str("left"),
            Alignment::Center => f.write_str("center"),
        }
    }
}
