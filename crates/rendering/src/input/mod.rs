//! Input handling for the city builder.
//!
//! - `types`: cursor state resource
//! - `cursor`: ground ray-cast and mouse button -> `PointerEvent` translation
//! - `keyboard`: number-key tool shortcuts

mod cursor;
mod keyboard;
mod types;

#[cfg(test)]
mod tests;

pub use types::CursorGridPos;

pub use cursor::{emit_pointer_buttons, ground_hit, update_cursor_grid_pos, GROUND_PICK_HEIGHT};

pub use keyboard::{keyboard_tool_switch, tool_for_key};
