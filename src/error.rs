//! Domain errors raised while setting up a run.
//!
//! Once a [`Probe`](crate::Probe) exists, interpretation never fails: malformed tokens and
//! blocked moves are reported as data in the [`ExecutionResult`](crate::ExecutionResult).

use crate::facing::Facing;
use glam::IVec3;
use thiserror::Error;

/// Business-rule failures that reject a run specification before simulation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// One or more grid dimensions is zero or negative.
    #[error("grid dimensions must be positive (got {width}x{height}x{depth})")]
    NonPositiveDimensions { width: i32, height: i32, depth: i32 },

    /// An obstacle lies outside the grid.
    #[error("obstacle out of bounds: {0}")]
    ObstacleOutOfBounds(IVec3),

    /// The start coordinate lies outside the grid.
    #[error("start position out of bounds: {0}")]
    StartOutOfBounds(IVec3),

    /// The start coordinate is occupied by an obstacle.
    #[error("start position is an obstacle: {0}")]
    StartOnObstacle(IVec3),

    /// No start facing was supplied.
    #[error("direction cannot be null")]
    MissingFacing,

    /// The configured level heading is `UP` or `DOWN`.
    #[error("level heading must be horizontal (got {0})")]
    VerticalLevelHeading(Facing),
}
