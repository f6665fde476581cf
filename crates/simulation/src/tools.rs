use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::placement::PlacementKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolType {
    #[default]
    Building,
    Road,
}

impl ToolType {
    pub const ALL: [ToolType; 2] = [ToolType::Building, ToolType::Road];

    /// Footprint `(size_x, size_z)` in cells.
    pub fn footprint(self) -> (i32, i32) {
        match self {
            ToolType::Building => (2, 2),
            ToolType::Road => (1, 1),
        }
    }

    pub fn kind(self) -> PlacementKind {
        match self {
            ToolType::Building => PlacementKind::Building,
            ToolType::Road => PlacementKind::Road,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolType::Building => "Building (2x2)",
            ToolType::Road => "Road (1x1)",
        }
    }
}

/// The tool used for the next placement and for the hover preview.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveTool(ToolType);

impl ActiveTool {
    #[inline]
    pub fn current(&self) -> ToolType {
        self.0
    }

    pub fn select(&mut self, tool: ToolType) {
        if self.0 != tool {
            debug!("Tool changed: {:?} -> {:?}", self.0, tool);
        }
        self.0 = tool;
    }
}
