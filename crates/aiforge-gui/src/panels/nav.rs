use aiforge_core::site::copy;
use aiforge_core::site::Page;

use crate::app::AiForgeApp;

use super::helpers::ACCENT;

/// Site header: brand, page navigation, language toggle and call to action.
pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    let shell = app.session.shell;
    let nav = copy::nav(shell.language);

    egui::TopBottomPanel::top("site_nav")
        .exact_height(48.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    egui::RichText::new(copy::BRAND_NAME)
                        .size(22.0)
                        .strong()
                        .color(ACCENT),
                );
                ui.add_space(24.0);

                for &page in Page::ALL {
                    if ui
                        .selectable_label(shell.page == page, nav.label(page))
                        .clicked()
                    {
                        app.session.shell.navigate(page);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let cta = egui::Button::new(
                        egui::RichText::new(nav.get_started).color(egui::Color32::WHITE),
                    )
                    .fill(ACCENT);
                    if ui.add(cta).clicked() {
                        app.session.shell.navigate(Page::Demo);
                    }
                    if ui.button(nav.switch_language).clicked() {
                        app.session.shell.toggle_language();
                        let lang = app.session.shell.language;
                        app.ui_state.add_log(format!("Language: {lang}"));
                    }
                });
            });
        });
}
