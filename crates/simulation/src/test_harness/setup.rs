//! Builder methods for tool and placement setup in integration tests.

use crate::config::GestureConfig;
use crate::grid::WorldGrid;
use crate::placement::PlacementKind;
use crate::tools::{ActiveTool, ToolType};

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Tools, thresholds, and pre-placed blocks
    // -----------------------------------------------------------------------

    /// Select the active placement tool.
    pub fn with_tool(mut self, tool: ToolType) -> Self {
        self.select_tool(tool);
        self
    }

    /// Override the click/drag thresholds.
    pub fn with_gesture_config(mut self, config: GestureConfig) -> Self {
        self.app.world_mut().insert_resource(config);
        self
    }

    /// Place a block directly on the grid, bypassing pointer input.
    ///
    /// Panics if the footprint is unavailable: setup must describe a valid city.
    pub fn with_placement(mut self, x: i32, z: i32, kind: PlacementKind) -> Self {
        let (size_x, size_z) = match kind {
            PlacementKind::Building => ToolType::Building.footprint(),
            PlacementKind::Road => ToolType::Road.footprint(),
        };
        let placed = self
            .app
            .world_mut()
            .resource_mut::<WorldGrid>()
            .place(x, z, size_x, size_z, kind);
        assert!(placed.is_some(), "setup placement at ({x}, {z}) is blocked");
        self
    }

    /// Switch tools mid-test, as the tool palette would.
    pub fn select_tool(&mut self, tool: ToolType) {
        self.app
            .world_mut()
            .resource_mut::<ActiveTool>()
            .select(tool);
    }
}
