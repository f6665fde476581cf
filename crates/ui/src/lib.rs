use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod help_overlay;
pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, (toolbar::toolbar_ui, help_overlay::help_overlay_ui));
    }
}
