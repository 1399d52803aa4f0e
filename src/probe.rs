//! Probe state and the orientation-aware movement it supports.

use crate::error::ProbeError;
use crate::facing::Facing;
use crate::grid::Grid;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Settings for probe construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProbeConfig {
    /// Horizontal facing a vertical turn levels out to when the probe started vertical.
    /// Must be horizontal. Default: `North`.
    pub level_heading: Facing,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            level_heading: Facing::North,
        }
    }
}

/// Formats a coordinate the way visited-path entries are reported, e.g. `(2,3,5)`.
pub fn coord_label(pos: IVec3) -> String {
    format!("({},{},{})", pos.x, pos.y, pos.z)
}

/// A probe moving through a [`Grid`].
///
/// Tracks position, orientation and every cell occupied so far. The position is always
/// a free cell of the grid: moves that would leave the box or enter an obstacle are
/// dropped and leave the probe untouched.
#[derive(Clone, Debug)]
pub struct Probe<'g> {
    grid: &'g Grid,

    /// Current cell.
    position: IVec3,

    /// Current orientation.
    facing: Facing,

    /// Horizontal facing restored when a vertical turn levels the probe out.
    /// Only vertical turns read or write this.
    last_horizontal: Facing,

    /// Every cell occupied, in order, starting with the initial one. Revisits repeat.
    visited: Vec<IVec3>,
}

impl<'g> Probe<'g> {
    /// Places a probe at `position` with the default [`ProbeConfig`].
    pub fn new(grid: &'g Grid, position: IVec3, facing: Facing) -> Result<Self, ProbeError> {
        Self::with_config(grid, position, facing, &ProbeConfig::default())
    }

    /// Places a probe at `position`.
    ///
    /// Only bounds are checked here; callers reject obstacle-occupied starts themselves.
    /// When `facing` is vertical, the level-out memory starts at `config.level_heading`.
    pub fn with_config(
        grid: &'g Grid,
        position: IVec3,
        facing: Facing,
        config: &ProbeConfig,
    ) -> Result<Self, ProbeError> {
        if config.level_heading.is_vertical() {
            return Err(ProbeError::VerticalLevelHeading(config.level_heading));
        }
        if !grid.is_within_bounds(position) {
            return Err(ProbeError::StartOutOfBounds(position));
        }
        let last_horizontal = if facing.is_horizontal() {
            facing
        } else {
            config.level_heading
        };
        Ok(Self {
            grid,
            position,
            facing,
            last_horizontal,
            visited: vec![position],
        })
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn position(&self) -> IVec3 {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn last_horizontal(&self) -> Facing {
        self.last_horizontal
    }

    pub fn visited(&self) -> &[IVec3] {
        &self.visited
    }

    /// The visited path as `(x,y,z)` labels.
    pub fn visited_labels(&self) -> Vec<String> {
        self.visited.iter().copied().map(coord_label).collect()
    }

    /// Steps one cell along the current facing. Returns whether the probe moved.
    pub fn move_forward(&mut self) -> bool {
        self.step(self.facing.forward())
    }

    /// Steps one cell against the current facing. Returns whether the probe moved.
    pub fn move_backward(&mut self) -> bool {
        self.step(self.facing.backward())
    }

    /// Rises one cell (`+z`) regardless of facing.
    pub fn move_up(&mut self) -> bool {
        self.step(IVec3::Z)
    }

    /// Sinks one cell (`-z`) regardless of facing.
    pub fn move_down(&mut self) -> bool {
        self.step(IVec3::NEG_Z)
    }

    pub fn turn_left(&mut self) {
        self.facing = self.facing.left();
    }

    pub fn turn_right(&mut self) {
        self.facing = self.facing.right();
    }

    /// Pitches up. From `Down` this levels out to the remembered horizontal facing.
    pub fn turn_up(&mut self) {
        match self.facing {
            Facing::Up => {}
            Facing::Down => self.facing = self.last_horizontal,
            horizontal => {
                self.last_horizontal = horizontal;
                self.facing = Facing::Up;
            }
        }
    }

    /// Pitches down. From `Up` this levels out to the remembered horizontal facing.
    pub fn turn_down(&mut self) {
        match self.facing {
            Facing::Down => {}
            Facing::Up => self.facing = self.last_horizontal,
            horizontal => {
                self.last_horizontal = horizontal;
                self.facing = Facing::Down;
            }
        }
    }

    /// Performs a single operation.
    pub fn apply(&mut self, op: ProbeOp) {
        match op {
            ProbeOp::MoveForward => {
                self.move_forward();
            }
            ProbeOp::MoveBackward => {
                self.move_backward();
            }
            ProbeOp::MoveUp => {
                self.move_up();
            }
            ProbeOp::MoveDown => {
                self.move_down();
            }
            ProbeOp::TurnLeft => self.turn_left(),
            ProbeOp::TurnRight => self.turn_right(),
            ProbeOp::TurnUp => self.turn_up(),
            ProbeOp::TurnDown => self.turn_down(),
        }
    }

    fn step(&mut self, delta: IVec3) -> bool {
        let candidate = self.position + delta;
        if !self.grid.is_free(candidate) {
            return false;
        }
        self.position = candidate;
        self.visited.push(candidate);
        true
    }
}

/// Operations that can be performed by the probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeOp {
    // --- Movement ---
    /// Step along the current facing (`F`).
    MoveForward,
    /// Step against the current facing (`B`).
    MoveBackward,
    /// Step `+z` regardless of facing. Not bound in the standard table.
    MoveUp,
    /// Step `-z` regardless of facing. Not bound in the standard table.
    MoveDown,

    // --- Rotation ---
    /// Quarter turn left; no-op while vertical (`L`).
    TurnLeft,
    /// Quarter turn right; no-op while vertical (`R`).
    TurnRight,
    /// Pitch up, or level out from `Down` (`U`).
    TurnUp,
    /// Pitch down, or level out from `Up` (`D`).
    TurnDown,
}

impl ProbeOp {
    /// Movement ops can be blocked; rotations never are.
    pub fn is_movement(self) -> bool {
        match self {
            ProbeOp::MoveForward | ProbeOp::MoveBackward | ProbeOp::MoveUp | ProbeOp::MoveDown => {
                true
            }
            ProbeOp::TurnLeft | ProbeOp::TurnRight | ProbeOp::TurnUp | ProbeOp::TurnDown => false,
        }
    }
}
