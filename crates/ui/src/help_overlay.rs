//! Always-on instructions panel in the top-left corner.

use bevy_egui::{egui, EguiContexts};

pub const TITLE: &str = "City Builder";

/// Control reminders, one per line.
pub const INSTRUCTIONS: [&str; 4] = [
    "Left Click: Place Building",
    "Right Click: Remove Building",
    "Mouse Drag: Rotate Camera",
    "Scroll: Zoom",
];

pub fn help_overlay_ui(mut contexts: EguiContexts) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_premultiplied(0, 0, 0, 180))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(TITLE)
                            .strong()
                            .size(16.0)
                            .color(egui::Color32::WHITE),
                    );
                    for line in INSTRUCTIONS {
                        ui.colored_label(egui::Color32::from_gray(220), line);
                    }
                });
        });
}
