//! Query and update methods for `TestCity`.

use bevy::prelude::*;

use crate::grid::WorldGrid;
use crate::highlight::HoverHighlight;
use crate::interaction::PlacementChanged;
use crate::placement::Placement;
use crate::status::StatusMessage;
use crate::tools::{ActiveTool, ToolType};

use super::{RecordedChanges, TestCity};

impl TestCity {
    // -----------------------------------------------------------------------
    // Updates
    // -----------------------------------------------------------------------

    /// Run N full app updates (every `Update` system runs once per update).
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn grid(&self) -> &WorldGrid {
        self.app.world().resource::<WorldGrid>()
    }

    pub fn placements(&self) -> &[Placement] {
        self.grid().placements()
    }

    pub fn highlight(&self) -> &HoverHighlight {
        self.app.world().resource::<HoverHighlight>()
    }

    pub fn tool(&self) -> ToolType {
        self.app.world().resource::<ActiveTool>().current()
    }

    pub fn status(&self) -> &StatusMessage {
        self.app.world().resource::<StatusMessage>()
    }

    /// Every committed placement/removal, in the order it happened.
    pub fn changes(&self) -> &[PlacementChanged] {
        &self.app.world().resource::<RecordedChanges>().0
    }
}
