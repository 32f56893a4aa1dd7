use aiforge_core::catalog::{self, Garment, GarmentCategory, Gender};
use aiforge_core::site::copy;

use crate::app::AiForgeApp;
use crate::panels::helpers::{enum_combo, section_header, ACCENT, MUTED};

const THUMB_SIZE: egui::Vec2 = egui::vec2(64.0, 80.0);

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    let demo = copy::demo(app.session.shell.language);

    egui::SidePanel::left("library")
        .resizable(false)
        .exact_width(300.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            let count = app.session.visible_garments().len().to_string();
            section_header(ui, demo.library, Some(&count), None);

            ui.horizontal(|ui| {
                for &gender in Gender::ALL {
                    if ui
                        .selectable_label(app.session.gender() == gender, demo.gender(gender))
                        .clicked()
                        && app.session.gender() != gender
                    {
                        app.session.set_gender(gender);
                        app.ui_state.add_log(format!("Model: {gender}"));
                    }
                }
            });

            let mut category = app.session.category;
            let options: Vec<Option<GarmentCategory>> = std::iter::once(None)
                .chain(
                    catalog::categories_for(app.session.gender())
                        .into_iter()
                        .map(Some),
                )
                .collect();
            if enum_combo(ui, "category_filter", &mut category, &options, |c| {
                c.map_or_else(|| demo.all_categories.to_string(), |c| c.to_string())
            }) {
                app.session.set_category(category);
            }

            ui.separator();

            let selected = app.session.selected_garment().map(|g| g.id);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Re-read after a possible gender/category change above.
                    for garment in app.session.visible_garments() {
                        if garment_card(ui, garment, selected == Some(garment.id)).clicked() {
                            app.select_garment(garment.id);
                        }
                        ui.add_space(4.0);
                    }
                });
        });
}

fn garment_card(ui: &mut egui::Ui, garment: &Garment, selected: bool) -> egui::Response {
    let mut frame = egui::Frame::group(ui.style()).inner_margin(6.0);
    if selected {
        frame = frame.stroke(egui::Stroke::new(2.0, ACCENT));
    }

    frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(
                    egui::Image::new(garment.image)
                        .fit_to_exact_size(THUMB_SIZE)
                        .corner_radius(6.0),
                );
                ui.vertical(|ui| {
                    ui.strong(garment.name);
                    ui.label(egui::RichText::new(garment.category.to_string()).small());
                    ui.horizontal(|ui| {
                        let [r, g, b] = garment.rgb().unwrap_or([128, 128, 128]);
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter()
                            .circle_filled(rect.center(), 6.0, egui::Color32::from_rgb(r, g, b));
                        ui.painter().circle_stroke(
                            rect.center(),
                            6.0,
                            egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
                        );
                        ui.label(egui::RichText::new(garment.material).small().color(MUTED));
                    });
                });
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
