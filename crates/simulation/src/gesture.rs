//! Click-versus-drag discrimination for pointer presses.
//!
//! A primary press followed by a release close in space and time is a click
//! (place); anything else is a camera drag and must not touch the grid.
//! Secondary presses are always an immediate remove gesture.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::GestureConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Drag,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    PressedPrimary { start_pos: Vec2, start_time: Duration },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PointerGestureClassifier {
    state: GestureState,
}

impl PointerGestureClassifier {
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn press_primary(&mut self, pos: Vec2, time: Duration) {
        self.state = GestureState::PressedPrimary {
            start_pos: pos,
            start_time: time,
        };
    }

    /// Classify the release against the recorded press. Returns `None` when no
    /// press was recorded. Always returns to `Idle`.
    pub fn release_primary(
        &mut self,
        pos: Vec2,
        time: Duration,
        config: &GestureConfig,
    ) -> Option<Gesture> {
        let GestureState::PressedPrimary {
            start_pos,
            start_time,
        } = std::mem::take(&mut self.state)
        else {
            return None;
        };

        let dx = (pos.x - start_pos.x).abs();
        let dy = (pos.y - start_pos.y).abs();
        let dt = time.saturating_sub(start_time);

        let still = dx <= config.click_max_distance_px && dy <= config.click_max_distance_px;
        let quick = dt <= Duration::from_millis(config.click_max_duration_ms);

        Some(if still && quick {
            Gesture::Click
        } else {
            Gesture::Drag
        })
    }

    /// Secondary presses carry no drag guard.
    pub fn secondary(&self) -> Gesture {
        Gesture::Remove
    }
}
