//! The six discrete orientations a probe can hold.

use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orientation of the probe.
///
/// `North`, `South`, `East` and `West` are horizontal; `Up` and `Down` are vertical.
/// Every transition table below is a total `match` over this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    /// `+y`
    North,
    /// `-y`
    South,
    /// `+x`
    East,
    /// `-x`
    West,
    /// `+z`
    Up,
    /// `-z`
    Down,
}

impl Facing {
    /// All six facings.
    pub const ALL: [Facing; 6] = [
        Facing::North,
        Facing::South,
        Facing::East,
        Facing::West,
        Facing::Up,
        Facing::Down,
    ];

    /// The four horizontal facings, in left-turn order starting at `North`.
    pub const HORIZONTAL: [Facing; 4] = [Facing::North, Facing::West, Facing::South, Facing::East];

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Facing::Up | Facing::Down)
    }

    /// Facing after a quarter turn to the left. Vertical facings have no left.
    pub fn left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
            Facing::Up | Facing::Down => self,
        }
    }

    /// Facing after a quarter turn to the right. Vertical facings have no right.
    pub fn right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
            Facing::Up | Facing::Down => self,
        }
    }

    /// Unit displacement of a forward step.
    pub fn forward(self) -> IVec3 {
        match self {
            Facing::North => IVec3::Y,
            Facing::South => IVec3::NEG_Y,
            Facing::East => IVec3::X,
            Facing::West => IVec3::NEG_X,
            Facing::Up => IVec3::Z,
            Facing::Down => IVec3::NEG_Z,
        }
    }

    /// Unit displacement of a backward step (the negated forward vector).
    pub fn backward(self) -> IVec3 {
        -self.forward()
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::South => "SOUTH",
            Facing::East => "EAST",
            Facing::West => "WEST",
            Facing::Up => "UP",
            Facing::Down => "DOWN",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facing {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Facing::ALL
            .into_iter()
            .find(|facing| facing.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                format!("unknown facing `{value}`, expected NORTH, SOUTH, EAST, WEST, UP or DOWN")
            })
    }
}
