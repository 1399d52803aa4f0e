//! Output of a run: execution counters, diagnostics and the final probe state.

use crate::facing::Facing;
use crate::grid::GridSize;
use crate::probe::{Probe, coord_label};
use glam::IVec3;
use serde::Serialize;

/// Why a token was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidReason {
    /// Absent, empty, multi-character, or not in the command table.
    UnknownCommand,
}

/// A token the interpreter could not map to an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvalidCommand {
    /// Position of the token in the original command list.
    pub index: usize,

    /// The raw token, `None` if it was absent.
    pub command: Option<String>,

    pub reason: InvalidReason,
}

/// Counters collected over one pass of the command list.
///
/// `executed_commands` always equals `total_commands`: every token is consumed exactly once,
/// whether it moved the probe, was blocked, or was invalid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub total_commands: usize,
    pub executed_commands: usize,
    /// Movement tokens that left the position unchanged.
    pub blocked_moves: usize,
    /// Rejected tokens, in input order.
    pub invalid_commands: Vec<InvalidCommand>,
}

/// Final position and orientation of the probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FinalState {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: Facing,
}

impl FinalState {
    pub fn position(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

/// Everything a caller needs to present a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub final_state: FinalState,

    /// Visited cells as `(x,y,z)` labels, starting with the start cell.
    pub visited: Vec<String>,

    pub execution: ExecutionResult,

    pub grid: GridSize,

    /// One human-readable line derived from the other fields.
    pub summary: String,
}

impl RunReport {
    /// Reads the final state out of `probe` and pairs it with the interpreter's counters.
    pub fn new(probe: &Probe<'_>, execution: ExecutionResult) -> Self {
        let pos = probe.position();
        let final_state = FinalState {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            direction: probe.facing(),
        };
        let grid = probe.grid().size();
        let visited = probe.visited_labels();
        let summary = summary_line(visited.len(), grid, &final_state, &execution);

        Self {
            final_state,
            visited,
            execution,
            grid,
            summary,
        }
    }
}

fn summary_line(
    visited: usize,
    grid: GridSize,
    final_state: &FinalState,
    execution: &ExecutionResult,
) -> String {
    format!(
        "visited {} cells in a {}x{}x{} grid; final {} facing {}; \
         total={} executed={} blocked={} invalid={}",
        visited,
        grid.width,
        grid.height,
        grid.depth,
        coord_label(final_state.position()),
        final_state.direction,
        execution.total_commands,
        execution.executed_commands,
        execution.blocked_moves,
        execution.invalid_commands.len(),
    )
}
