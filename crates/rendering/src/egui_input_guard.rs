//! Keeps pointer input aimed at the tool palette from reaching the grid.

use bevy_egui::EguiContexts;

/// `true` while the cursor is over an egui area or egui is handling a
/// press. World input systems skip the frame when this holds.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
