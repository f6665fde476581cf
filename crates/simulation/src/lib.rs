use bevy::prelude::*;

pub mod config;
pub mod gesture;
pub mod grid;
pub mod highlight;
pub mod interaction;
pub mod placement;
pub mod sim_rng;
pub mod status;
pub mod tools;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use config::{GestureConfig, GridConfig};
use gesture::PointerGestureClassifier;
use grid::WorldGrid;
use highlight::HoverHighlight;
use interaction::{PlacementChanged, PointerEvent};
use sim_rng::SimRng;
use status::StatusMessage;
use tools::ActiveTool;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // A GridConfig inserted before this plugin (e.g. from the environment) wins.
        let grid = WorldGrid::new(
            app.world()
                .get_resource::<GridConfig>()
                .copied()
                .unwrap_or_default(),
        );
        let grid_config = *grid.config();
        info!(
            "Grid {}x{} cells, cell size {}",
            grid_config.width, grid_config.depth, grid_config.cell_size
        );

        app.insert_resource(grid_config)
            .insert_resource(grid)
            .init_resource::<GestureConfig>()
            .init_resource::<ActiveTool>()
            .init_resource::<PointerGestureClassifier>()
            .init_resource::<HoverHighlight>()
            .init_resource::<StatusMessage>()
            .init_resource::<SimRng>()
            .add_event::<PointerEvent>()
            .add_event::<PlacementChanged>()
            .add_systems(
                Update,
                (
                    interaction::dispatch_pointer_events,
                    interaction::refresh_highlight_on_tool_change
                        .after(interaction::dispatch_pointer_events),
                    status::tick_status_message,
                ),
            );
    }
}
