use aiforge_core::session::StagePhase;

use crate::app::AiForgeApp;

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        let session = &app.session;
        ui.horizontal(|ui| {
            ui.label(format!("Page: {}", session.shell.page));
            ui.separator();
            ui.label(format!("Lang: {}", session.shell.language));
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", session.viewport.zoom * 100.0));
            ui.separator();
            ui.label(format!(
                "Rotation: {:.0}\u{b0}",
                session.viewport.display_rotation()
            ));
            ui.separator();
            let phase = match session.stage_phase() {
                StagePhase::Idle => "Idle",
                StagePhase::Dragging => "Dragging",
                StagePhase::Scanning => "Scanning",
            };
            ui.label(format!("Stage: {phase}"));
        });

        ui.add_space(2.0);
    });
}
