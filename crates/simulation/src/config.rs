use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const GRID_WIDTH: usize = 100;
pub const GRID_DEPTH: usize = 100;
pub const CELL_SIZE: f32 = 2.0;

/// Visual gap between neighbouring cell tiles. A tile is `CELL_SIZE - CELL_GAP` wide.
pub const CELL_GAP: f32 = 0.2;

/// Largest per-axis pointer travel (pixels) for a press/release to still count as a click.
pub const CLICK_MAX_DISTANCE_PX: f32 = 5.0;
/// Longest press duration (milliseconds) for a press/release to still count as a click.
pub const CLICK_MAX_DURATION_MS: u64 = 200;

/// Largest accepted grid edge length, in cells.
pub const MAX_GRID_SIZE: usize = 1000;

/// Environment variable overriding the grid edge length (square grid).
pub const GRID_SIZE_ENV: &str = "CITY_GRID_SIZE";
/// Environment variable overriding the cell size in world units.
pub const CELL_SIZE_ENV: &str = "CITY_CELL_SIZE";

/// Dimensions of the ground grid. Fixed once the `WorldGrid` is built.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub depth: usize,
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            depth: GRID_DEPTH,
            cell_size: CELL_SIZE,
        }
    }
}

impl GridConfig {
    pub fn square(size: usize, cell_size: f32) -> Self {
        Self {
            width: size,
            depth: size,
            cell_size,
        }
    }

    /// Defaults overridden by `CITY_GRID_SIZE` / `CITY_CELL_SIZE` when they parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(GRID_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if (1..=MAX_GRID_SIZE).contains(&size) => {
                    config.width = size;
                    config.depth = size;
                }
                _ => warn!(
                    "{GRID_SIZE_ENV}={raw:?} is not an integer in 1..={MAX_GRID_SIZE}, keeping {GRID_WIDTH}"
                ),
            }
        }

        if let Some(raw) = lookup(CELL_SIZE_ENV) {
            match raw.trim().parse::<f32>() {
                Ok(size) if size.is_finite() && size > CELL_GAP => config.cell_size = size,
                _ => warn!("{CELL_SIZE_ENV}={raw:?} is not a usable cell size, keeping {CELL_SIZE}"),
            }
        }

        config
    }

    /// Number of cells, or `None` when an edge exceeds `MAX_GRID_SIZE`.
    pub fn cell_count(&self) -> Option<usize> {
        if self.width > MAX_GRID_SIZE || self.depth > MAX_GRID_SIZE {
            return None;
        }
        self.width.checked_mul(self.depth)
    }

    /// World-space extent along X.
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.cell_size
    }

    /// World-space extent along Z.
    pub fn world_depth(&self) -> f32 {
        self.depth as f32 * self.cell_size
    }
}

/// Thresholds separating a click from a camera drag.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub click_max_distance_px: f32,
    pub click_max_duration_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_max_distance_px: CLICK_MAX_DISTANCE_PX,
            click_max_duration_ms: CLICK_MAX_DURATION_MS,
        }
    }
}
