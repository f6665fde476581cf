//! Pointer input injection for `TestCity`.
//!
//! Each helper sends the same `PointerEvent`s the rendering crate would and
//! runs one update so the dispatch system has consumed them on return.

use std::time::Duration;

use bevy::prelude::*;

use crate::interaction::PointerEvent;

use super::TestCity;

/// Screen position used when a test does not care where the pointer is.
const SCREEN_POS: Vec2 = Vec2::new(640.0, 360.0);

impl TestCity {
    /// Queue a raw pointer event without running an update.
    pub fn send_pointer(&mut self, event: PointerEvent) {
        self.app.world_mut().send_event(event);
    }

    /// Advance the virtual pointer clock.
    pub fn advance_ms(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
    }

    /// Move the pointer over `cell` (or off the grid).
    pub fn hover(&mut self, cell: Option<(i32, i32)>) {
        self.send_pointer(PointerEvent::Moved { cell });
        self.tick(1);
    }

    /// Press and release the primary button over `cell` within the click thresholds.
    pub fn click(&mut self, x: i32, z: i32) {
        self.press_release(SCREEN_POS, SCREEN_POS, 50, Some((x, z)));
    }

    /// Press at `from`, release at `to` after `held_ms`.
    pub fn press_release(
        &mut self,
        from: Vec2,
        to: Vec2,
        held_ms: u64,
        cell: Option<(i32, i32)>,
    ) {
        self.send_pointer(PointerEvent::PrimaryPressed {
            pos: from,
            time: self.now,
        });
        self.advance_ms(held_ms);
        self.send_pointer(PointerEvent::PrimaryReleased {
            pos: to,
            time: self.now,
            cell,
        });
        self.tick(1);
    }

    /// Secondary-button press over `cell`.
    pub fn right_click(&mut self, x: i32, z: i32) {
        self.send_pointer(PointerEvent::SecondaryPressed {
            cell: Some((x, z)),
        });
        self.tick(1);
    }
}
