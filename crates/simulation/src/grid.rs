use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{GridConfig, GRID_DEPTH, GRID_WIDTH, MAX_GRID_SIZE};
use crate::placement::Placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub occupied: bool,
}

/// Cell occupancy plus the placements that own it.
///
/// Cells are stored row-major by `z` in a flat vector. Occupancy flags are only
/// flipped inside `place` / `remove_at`, which keeps them in lock-step with
/// `placements`.
#[derive(Resource, Debug, Clone)]
pub struct WorldGrid {
    pub(crate) cells: Vec<Cell>,
    pub(crate) placements: Vec<Placement>,
    pub(crate) next_placement_id: u32,
    config: GridConfig,
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl WorldGrid {
    /// Build an empty grid. Oversized configs fall back to the default size.
    pub fn new(config: GridConfig) -> Self {
        let (config, count) = match config.cell_count() {
            Some(count) => (config, count),
            None => {
                warn!(
                    "Grid {}x{} exceeds {MAX_GRID_SIZE} cells per edge, using {GRID_WIDTH}x{GRID_DEPTH}",
                    config.width, config.depth
                );
                let fallback = GridConfig {
                    cell_size: config.cell_size,
                    ..GridConfig::default()
                };
                (fallback, GRID_WIDTH * GRID_DEPTH)
            }
        };
        Self {
            cells: vec![Cell::default(); count],
            placements: Vec::new(),
            next_placement_id: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.config.depth
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.config.cell_size
    }

    #[inline]
    fn index(&self, x: usize, z: usize) -> usize {
        z * self.config.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, z: i32) -> bool {
        x >= 0 && z >= 0 && (x as usize) < self.config.width && (z as usize) < self.config.depth
    }

    pub fn cell_at(&self, x: i32, z: i32) -> Option<&Cell> {
        if !self.in_bounds(x, z) {
            return None;
        }
        self.cells.get(self.index(x as usize, z as usize))
    }

    /// Out-of-range coordinates are never occupied.
    pub fn is_occupied(&self, x: i32, z: i32) -> bool {
        self.cell_at(x, z).is_some_and(|cell| cell.occupied)
    }

    /// Out-of-range coordinates are ignored.
    pub(crate) fn set_occupied(&mut self, x: i32, z: i32, occupied: bool) {
        if !self.in_bounds(x, z) {
            return;
        }
        let idx = self.index(x as usize, z as usize);
        self.cells[idx].occupied = occupied;
    }

    /// World-space position of a cell's centre on the ground plane.
    pub fn world_position(&self, x: i32, z: i32) -> (f32, f32) {
        (
            x as f32 * self.config.cell_size,
            z as f32 * self.config.cell_size,
        )
    }

    /// Cell whose square (centred on its world position) contains the point.
    pub fn world_to_cell(&self, world_x: f32, world_z: f32) -> Option<(i32, i32)> {
        let gx = (world_x / self.config.cell_size).round() as i32;
        let gz = (world_z / self.config.cell_size).round() as i32;
        self.in_bounds(gx, gz).then_some((gx, gz))
    }

    /// World-space point the grid is centred on.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.config.world_width() / 2.0,
            self.config.world_depth() / 2.0,
        )
    }

    /// Iterate every cell with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, &Cell)> + '_ {
        let width = self.config.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width) as i32, (i / width) as i32, cell))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupied).count()
    }
}
