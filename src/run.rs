//! Builds a grid and probe from a run specification, executes it, and assembles the report.

use crate::error::ProbeError;
use crate::facing::Facing;
use crate::grid::{Grid, GridSize};
use crate::interpreter::CommandInterpreter;
use crate::probe::{Probe, ProbeConfig};
use crate::report::RunReport;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A cell coordinate as it appears in a run specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl From<Coordinate> for IVec3 {
    fn from(c: Coordinate) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

/// Everything needed for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSpec {
    pub grid: GridSize,

    #[serde(default)]
    pub obstacles: Vec<Coordinate>,

    pub start: Coordinate,

    /// Start facing. `None` is rejected with [`ProbeError::MissingFacing`].
    #[serde(default)]
    pub direction: Option<Facing>,

    /// Command tokens. `None` entries are reported as invalid, never rejected.
    #[serde(default)]
    pub commands: Vec<Option<String>>,

    #[serde(default)]
    pub config: ProbeConfig,
}

impl RunSpec {
    /// A spec with no obstacles and no commands.
    pub fn new(grid: GridSize, start: Coordinate, direction: Facing) -> Self {
        Self {
            grid,
            obstacles: Vec::new(),
            start,
            direction: Some(direction),
            commands: Vec::new(),
            config: ProbeConfig::default(),
        }
    }

    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Coordinate>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    pub fn with_commands<S>(mut self, commands: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        self.commands = commands.into_iter().map(|c| Some(c.into())).collect();
        self
    }

    /// Builds the grid and probe, runs the standard command table, and reports the outcome.
    ///
    /// Checks happen in this order, stopping at the first failure: grid dimensions,
    /// each obstacle, start bounds, start occupancy, start facing.
    pub fn run(&self) -> Result<RunReport, ProbeError> {
        self.run_with(&CommandInterpreter::standard())
    }

    /// Like [`run`](Self::run), with a caller-supplied interpreter.
    #[instrument(
        skip(self, interpreter),
        fields(
            grid = %self.grid.as_ivec3(),
            obstacles = self.obstacles.len(),
            commands = self.commands.len()
        )
    )]
    pub fn run_with(&self, interpreter: &CommandInterpreter) -> Result<RunReport, ProbeError> {
        let grid = self
            .build_grid()
            .inspect_err(|err| warn!(%err, "rejected grid"))?;
        let mut probe = self
            .place_probe(&grid)
            .inspect_err(|err| warn!(%err, "rejected start"))?;

        let commands = self.commands.iter().map(Option::as_deref);
        let execution = interpreter.execute(commands, &mut probe);
        Ok(RunReport::new(&probe, execution))
    }

    fn build_grid(&self) -> Result<Grid, ProbeError> {
        let mut grid = Grid::from_size(self.grid)?;
        for obstacle in &self.obstacles {
            grid.add_obstacle((*obstacle).into())?;
        }
        Ok(grid)
    }

    fn place_probe<'g>(&self, grid: &'g Grid) -> Result<Probe<'g>, ProbeError> {
        let start = IVec3::from(self.start);
        if !grid.is_within_bounds(start) {
            return Err(ProbeError::StartOutOfBounds(start));
        }
        if grid.is_obstacle(start) {
            return Err(ProbeError::StartOnObstacle(start));
        }
        let facing = self.direction.ok_or(ProbeError::MissingFacing)?;
        Probe::with_config(grid, start, facing, &self.config)
    }
}

/// Runs `spec` with the standard command table.
pub fn run(spec: &RunSpec) -> Result<RunReport, ProbeError> {
    spec.run()
}
