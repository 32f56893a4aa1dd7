use aiforge_core::measurements::{FitPreference, MeasurementField};
use aiforge_core::site::copy;

use crate::app::AiForgeApp;
use crate::panels::helpers::{section_header, MUTED};

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    let demo = copy::demo(app.session.shell.language);

    egui::SidePanel::right("measurements")
        .resizable(false)
        .exact_width(300.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            section_header(ui, demo.bio_scan, None, None);
            ui.add_space(4.0);

            for &field in MeasurementField::ALL {
                let spec = field.spec();
                let mut value = app.session.measurements.get(field);

                ui.label(egui::RichText::new(demo.measurement(field)).color(MUTED));
                let slider = egui::Slider::new(&mut value, spec.min..=spec.max)
                    .step_by(f64::from(spec.step))
                    .suffix(format!(" {}", field.unit()));
                if ui.add(slider).changed() {
                    app.session.set_measurement(field, value);
                }
                ui.add_space(2.0);
            }

            ui.add_space(8.0);
            section_header(ui, demo.fit_preference, None, None);
            ui.horizontal(|ui| {
                let current = app.session.measurements.fit_preference;
                for &fit in FitPreference::ALL {
                    if ui.selectable_label(current == fit, demo.fit(fit)).clicked() {
                        app.session.set_fit(fit);
                    }
                }
            });

            ui.add_space(8.0);
            if ui.button(demo.reset_measurements).clicked() {
                app.session.reset_measurements();
                app.ui_state.add_log("Measurements reset to defaults".into());
            }

            if let Some(garment) = app.session.selected_garment() {
                ui.add_space(16.0);
                ui.separator();
                section_header(ui, demo.checkout_title, None, None);
                ui.label(egui::RichText::new(garment.name).strong());
                ui.label(egui::RichText::new(garment.material).color(MUTED));
                let score = app
                    .session
                    .report()
                    .and_then(|r| r.score_display())
                    .unwrap_or_default();
                ui.label(format!("{} {score}", demo.fit_score));
                if ui
                    .add_enabled(!app.session.is_scanning(), egui::Button::new(demo.order_size))
                    .clicked()
                {
                    app.ui_state
                        .add_log(format!("Order size requested for {}", garment.name));
                }
            }
        });
}
