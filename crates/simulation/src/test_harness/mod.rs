//! # TestCity: headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer. Pointer input
//! is injected as `PointerEvent`s, exactly as the rendering crate emits them.

mod assertions;
mod input;
mod queries;
mod setup;

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;

use crate::config::GridConfig;
use crate::interaction::PlacementChanged;
use crate::SimulationPlugin;

/// Every `PlacementChanged` emitted since the harness was built.
#[derive(Resource, Default)]
pub struct RecordedChanges(pub Vec<PlacementChanged>);

fn record_changes(
    mut events: EventReader<PlacementChanged>,
    mut recorded: ResMut<RecordedChanges>,
) {
    recorded.0.extend(events.read().copied());
}

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up city state, inject pointer input, then call
/// `tick()` and query/assert on the resulting ECS state.
pub struct TestCity {
    app: App,
    /// Virtual pointer clock used for press/release timestamps.
    now: Duration,
}

impl TestCity {
    /// Create a new **empty** city on the default 100x100 grid.
    pub fn new() -> Self {
        Self::with_grid(GridConfig::default())
    }

    /// Create an empty city with a custom grid.
    pub fn with_grid(config: GridConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the config BEFORE SimulationPlugin so the grid is sized from it.
        app.insert_resource(config);
        app.add_plugins(SimulationPlugin);
        app.init_resource::<RecordedChanges>().add_systems(
            Update,
            record_changes.after(crate::interaction::dispatch_pointer_events),
        );

        // Run one update so Startup systems execute.
        app.update();

        Self {
            app,
            now: Duration::from_secs(1),
        }
    }
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}
