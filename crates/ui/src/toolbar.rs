use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::status::StatusMessage;
use simulation::tools::{ActiveTool, ToolType};

/// Toast text colour for a status line.
pub fn status_color(is_error: bool) -> egui::Color32 {
    if is_error {
        egui::Color32::from_rgb(220, 60, 50)
    } else {
        egui::Color32::from_rgb(60, 200, 80)
    }
}

/// Tool the palette should switch to after a click on `clicked`, if any.
pub fn palette_selection(current: ToolType, clicked: Option<ToolType>) -> Option<ToolType> {
    clicked.filter(|&tool| tool != current)
}

/// Tool palette in the top-right corner and the floating status toast.
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut tool: ResMut<ActiveTool>,
    status: Res<StatusMessage>,
) {
    let current = tool.current();
    let mut clicked = None;

    egui::Area::new(egui::Id::new("tool_palette"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_premultiplied(230, 230, 230, 230))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        for candidate in ToolType::ALL {
                            let label = egui::RichText::new(candidate.label())
                                .strong()
                                .color(egui::Color32::from_gray(30));
                            if ui.selectable_label(candidate == current, label).clicked() {
                                clicked = Some(candidate);
                            }
                        }
                    });
                });
        });

    if let Some(selected) = palette_selection(current, clicked) {
        tool.select(selected);
    }

    if status.active() {
        let color = status_color(status.is_error);
        egui::Area::new(egui::Id::new("status_toast"))
            .fixed_pos(egui::pos2(
                contexts.ctx_mut().screen_rect().center().x - 100.0,
                42.0,
            ))
            .show(contexts.ctx_mut(), |ui| {
                egui::Frame::popup(ui.style())
                    .fill(egui::Color32::from_rgba_premultiplied(30, 30, 30, 220))
                    .show(ui, |ui| {
                        ui.colored_label(color, &status.text);
                    });
            });
    }
}
