use bevy::prelude::*;

/// Where the cursor is this frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorGridPos {
    /// Cursor position in window pixels, `None` off-window or over UI.
    pub screen_pos: Option<Vec2>,
    /// Grid cell under the cursor, `None` off-grid, off-window or over UI.
    pub cell: Option<(i32, i32)>,
}

impl CursorGridPos {
    /// Whether moving from `self` to `next` should be reported as a pointer
    /// move. Any motion counts, even inside one cell, so the preview is
    /// recomputed after a click cleared it.
    pub fn moved_to(&self, next: &CursorGridPos) -> bool {
        self != next
    }
}
