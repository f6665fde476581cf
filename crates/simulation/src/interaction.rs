//! Pointer event dispatch: the only path through which input mutates the grid.
//!
//! The rendering crate ray-casts the cursor and emits `PointerEvent`s; this
//! module feeds them, in arrival order, through the gesture classifier,
//! placement validator and hover highlighter, and reports every committed
//! change as a `PlacementChanged` event.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::GestureConfig;
use crate::gesture::{Gesture, PointerGestureClassifier};
use crate::grid::WorldGrid;
use crate::highlight::HoverHighlight;
use crate::placement::Placement;
use crate::status::StatusMessage;
use crate::tools::{ActiveTool, ToolType};

/// Normalized pointer input. `cell` is the grid cell under the pointer, if any.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved {
        cell: Option<(i32, i32)>,
    },
    PrimaryPressed {
        pos: Vec2,
        time: Duration,
    },
    PrimaryReleased {
        pos: Vec2,
        time: Duration,
        cell: Option<(i32, i32)>,
    },
    SecondaryPressed {
        cell: Option<(i32, i32)>,
    },
}

/// Emitted after a placement or removal has been fully committed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementChanged {
    Added(Placement),
    Removed(Placement),
}

/// What a single pointer event did to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Nothing,
    Hovered,
    Dragged,
    Placed(Placement),
    Rejected { tool: ToolType, cell: (i32, i32) },
    Removed(Placement),
}

/// Mutable interaction state threaded through `handle_pointer_event`.
pub struct InteractionState<'a> {
    pub grid: &'a mut WorldGrid,
    pub classifier: &'a mut PointerGestureClassifier,
    pub highlight: &'a mut HoverHighlight,
}

/// Apply one pointer event. Any grid change is complete when this returns.
pub fn handle_pointer_event(
    event: &PointerEvent,
    tool: ToolType,
    config: &GestureConfig,
    state: &mut InteractionState,
) -> PointerOutcome {
    match *event {
        PointerEvent::Moved { cell } => {
            state.highlight.update(state.grid, cell, tool);
            PointerOutcome::Hovered
        }
        PointerEvent::PrimaryPressed { pos, time } => {
            state.classifier.press_primary(pos, time);
            PointerOutcome::Nothing
        }
        PointerEvent::PrimaryReleased { pos, time, cell } => {
            match state.classifier.release_primary(pos, time, config) {
                Some(Gesture::Click) => {}
                Some(_) => return PointerOutcome::Dragged,
                None => return PointerOutcome::Nothing,
            }
            let Some((x, z)) = cell else {
                return PointerOutcome::Nothing;
            };

            let (size_x, size_z) = tool.footprint();
            let outcome = match state.grid.place(x, z, size_x, size_z, tool.kind()) {
                Some(placement) => PointerOutcome::Placed(placement),
                None => PointerOutcome::Rejected { tool, cell: (x, z) },
            };
            state.highlight.clear();
            outcome
        }
        PointerEvent::SecondaryPressed { cell } => {
            let Some((x, z)) = cell else {
                return PointerOutcome::Nothing;
            };
            debug_assert_eq!(state.classifier.secondary(), Gesture::Remove);
            if !state.grid.is_occupied(x, z) {
                return PointerOutcome::Nothing;
            }
            let Some(placement) = state.grid.remove_at(x, z) else {
                return PointerOutcome::Nothing;
            };
            // Freed cells change validity under a stationary pointer.
            if let Some(hovered) = state.highlight.hovered() {
                state.highlight.update(state.grid, Some(hovered), tool);
            }
            PointerOutcome::Removed(placement)
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn dispatch_pointer_events(
    mut events: EventReader<PointerEvent>,
    config: Res<GestureConfig>,
    tool: Res<ActiveTool>,
    mut grid: ResMut<WorldGrid>,
    mut classifier: ResMut<PointerGestureClassifier>,
    mut highlight: ResMut<HoverHighlight>,
    mut status: ResMut<StatusMessage>,
    mut changes: EventWriter<PlacementChanged>,
) {
    if events.is_empty() {
        return;
    }
    let mut state = InteractionState {
        grid: &mut *grid,
        classifier: &mut *classifier,
        highlight: &mut *highlight,
    };

    for event in events.read() {
        match handle_pointer_event(event, tool.current(), &config, &mut state) {
            PointerOutcome::Placed(placement) => {
                info!(
                    "Placed {} #{} at ({}, {})",
                    placement.kind.name(),
                    placement.id.0,
                    placement.origin_x,
                    placement.origin_z
                );
                changes.send(PlacementChanged::Added(placement));
            }
            PointerOutcome::Removed(placement) => {
                info!(
                    "Removed {} #{} at ({}, {})",
                    placement.kind.name(),
                    placement.id.0,
                    placement.origin_x,
                    placement.origin_z
                );
                changes.send(PlacementChanged::Removed(placement));
            }
            PointerOutcome::Rejected { tool, cell } => {
                debug!("Rejected {:?} at {:?}: footprint unavailable", tool, cell);
                status.set(format!("Cannot place {} here", tool.kind().name()), true);
            }
            PointerOutcome::Nothing | PointerOutcome::Hovered | PointerOutcome::Dragged => {}
        }
    }
}

/// Re-evaluate the preview when the tool changes under a stationary pointer.
pub fn refresh_highlight_on_tool_change(
    tool: Res<ActiveTool>,
    grid: Res<WorldGrid>,
    mut highlight: ResMut<HoverHighlight>,
) {
    if !tool.is_changed() {
        return;
    }
    let Some(hovered) = highlight.hovered() else {
        return;
    };
    highlight.update(&grid, Some(hovered), tool.current());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::placement::PlacementKind;

    struct Fixture {
        grid: WorldGrid,
        classifier: PointerGestureClassifier,
        highlight: HoverHighlight,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                grid: WorldGrid::new(GridConfig::square(10, 2.0)),
                classifier: PointerGestureClassifier::default(),
                highlight: HoverHighlight::default(),
            }
        }

        fn send(&mut self, event: PointerEvent, tool: ToolType) -> PointerOutcome {
            let mut state = InteractionState {
                grid: &mut self.grid,
                classifier: &mut self.classifier,
                highlight: &mut self.highlight,
            };
            handle_pointer_event(&event, tool, &GestureConfig::default(), &mut state)
        }

        fn click(&mut self, cell: (i32, i32), tool: ToolType) -> PointerOutcome {
            let pos = Vec2::new(300.0, 200.0);
            self.send(
                PointerEvent::PrimaryPressed {
                    pos,
                    time: Duration::from_millis(1_000),
                },
                tool,
            );
            self.send(
                PointerEvent::PrimaryReleased {
                    pos,
                    time: Duration::from_millis(1_080),
                    cell: Some(cell),
                },
                tool,
            )
        }
    }

    #[test]
    fn test_click_places_with_tool_footprint() {
        let mut fx = Fixture::new();
        let PointerOutcome::Placed(placement) = fx.click((1, 1), ToolType::Building) else {
            panic!("expected a placement");
        };
        assert_eq!((placement.size_x, placement.size_z), (2, 2));
        assert_eq!(placement.kind, PlacementKind::Building);
        assert_eq!(fx.grid.occupied_count(), 4);

        let PointerOutcome::Placed(road) = fx.click((5, 5), ToolType::Road) else {
            panic!("expected a road");
        };
        assert_eq!((road.size_x, road.size_z), (1, 1));
        assert_eq!(fx.grid.occupied_count(), 5);
    }

    #[test]
    fn test_drag_does_not_place() {
        let mut fx = Fixture::new();
        fx.send(
            PointerEvent::PrimaryPressed {
                pos: Vec2::new(100.0, 100.0),
                time: Duration::ZERO,
            },
            ToolType::Road,
        );
        let outcome = fx.send(
            PointerEvent::PrimaryReleased {
                pos: Vec2::new(140.0, 100.0),
                time: Duration::from_millis(90),
                cell: Some((2, 2)),
            },
            ToolType::Road,
        );
        assert_eq!(outcome, PointerOutcome::Dragged);
        assert_eq!(fx.grid.occupied_count(), 0);
    }

    #[test]
    fn test_click_on_occupied_footprint_is_rejected() {
        let mut fx = Fixture::new();
        fx.click((2, 2), ToolType::Road);
        let outcome = fx.click((1, 1), ToolType::Building);
        assert_eq!(
            outcome,
            PointerOutcome::Rejected {
                tool: ToolType::Building,
                cell: (1, 1)
            }
        );
        assert_eq!(fx.grid.occupied_count(), 1);
    }

    #[test]
    fn test_click_off_grid_does_nothing() {
        let mut fx = Fixture::new();
        fx.send(
            PointerEvent::PrimaryPressed {
                pos: Vec2::ZERO,
                time: Duration::ZERO,
            },
            ToolType::Road,
        );
        let outcome = fx.send(
            PointerEvent::PrimaryReleased {
                pos: Vec2::ZERO,
                time: Duration::from_millis(10),
                cell: None,
            },
            ToolType::Road,
        );
        assert_eq!(outcome, PointerOutcome::Nothing);
    }

    #[test]
    fn test_secondary_removes_without_guard() {
        let mut fx = Fixture::new();
        let PointerOutcome::Placed(placed) = fx.click((4, 4), ToolType::Building) else {
            panic!("expected a placement");
        };
        let outcome = fx.send(
            PointerEvent::SecondaryPressed { cell: Some((5, 5)) },
            ToolType::Road,
        );
        assert_eq!(outcome, PointerOutcome::Removed(placed));
        assert_eq!(fx.grid.occupied_count(), 0);

        let outcome = fx.send(
            PointerEvent::SecondaryPressed { cell: Some((5, 5)) },
            ToolType::Road,
        );
        assert_eq!(outcome, PointerOutcome::Nothing);
    }

    #[test]
    fn test_hover_then_click_clears_highlight() {
        let mut fx = Fixture::new();
        fx.send(PointerEvent::Moved { cell: Some((3, 3)) }, ToolType::Building);
        assert_eq!(fx.highlight.cells().len(), 4);
        assert!(fx.highlight.is_valid());

        fx.click((3, 3), ToolType::Building);
        assert!(fx.highlight.is_empty());

        fx.send(PointerEvent::Moved { cell: Some((3, 3)) }, ToolType::Building);
        assert!(!fx.highlight.is_valid());

        fx.send(PointerEvent::Moved { cell: None }, ToolType::Building);
        assert!(fx.highlight.is_empty());
    }

    #[test]
    fn test_removal_under_still_pointer_revalidates_preview() {
        let mut fx = Fixture::new();
        fx.click((5, 5), ToolType::Road);
        fx.send(PointerEvent::Moved { cell: Some((5, 5)) }, ToolType::Road);
        assert!(!fx.highlight.is_valid());

        fx.send(
            PointerEvent::SecondaryPressed { cell: Some((5, 5)) },
            ToolType::Road,
        );
        assert!(fx.highlight.is_valid());
        assert_eq!(fx.highlight.hovered(), Some((5, 5)));
        assert_eq!(fx.highlight.cells(), &[(5, 5)]);
    }
}
