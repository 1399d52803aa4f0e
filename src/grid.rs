//! Bounded 3D grid with an obstacle set.

use crate::error::ProbeError;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Grid dimensions as supplied by a caller, before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl GridSize {
    pub fn new(width: i32, height: i32, depth: i32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.width, self.height, self.depth)
    }
}

/// The half-open box `[0, width) x [0, height) x [0, depth)` plus its obstacles.
///
/// Dimensions are fixed at construction. Obstacles are added during setup and only read
/// while a probe is moving.
#[derive(Clone, Debug)]
pub struct Grid {
    size: IVec3,
    obstacles: HashSet<IVec3>,
}

impl Grid {
    /// Creates an empty grid. Fails if any dimension is `<= 0`.
    pub fn new(width: i32, height: i32, depth: i32) -> Result<Self, ProbeError> {
        if width <= 0 || height <= 0 || depth <= 0 {
            return Err(ProbeError::NonPositiveDimensions {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            size: IVec3::new(width, height, depth),
            obstacles: HashSet::new(),
        })
    }

    pub fn from_size(size: GridSize) -> Result<Self, ProbeError> {
        Self::new(size.width, size.height, size.depth)
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.size.x, self.size.y, self.size.z)
    }

    /// True iff every component of `pos` lies in `[0, dimension)` on its axis.
    pub fn is_within_bounds(&self, pos: IVec3) -> bool {
        pos.cmpge(IVec3::ZERO).all() && pos.cmplt(self.size).all()
    }

    /// Marks `pos` as blocked. Adding the same cell twice has no further effect.
    pub fn add_obstacle(&mut self, pos: IVec3) -> Result<(), ProbeError> {
        if !self.is_within_bounds(pos) {
            return Err(ProbeError::ObstacleOutOfBounds(pos));
        }
        self.obstacles.insert(pos);
        Ok(())
    }

    pub fn is_obstacle(&self, pos: IVec3) -> bool {
        self.obstacles.contains(&pos)
    }

    /// A cell a probe may occupy: inside the box and not an obstacle.
    pub fn is_free(&self, pos: IVec3) -> bool {
        self.is_within_bounds(pos) && !self.is_obstacle(pos)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}
