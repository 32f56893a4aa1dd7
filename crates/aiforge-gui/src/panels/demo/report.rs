use aiforge_core::analysis::FitReport;
use aiforge_core::site::copy;

use crate::app::AiForgeApp;
use crate::panels::helpers::{section_header, text_layout, ACCENT, MUTED};

const FALLBACK_BADGE: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    let lang = app.session.shell.language;
    let demo = copy::demo(lang);

    egui::TopBottomPanel::bottom("fit_report")
        .resizable(false)
        .min_height(96.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            let badge = app
                .session
                .analysis()
                .filter(|a| a.is_fallback() && !app.session.is_analyzing())
                .map(|_| demo.fallback_badge);
            section_header(ui, demo.report_title, badge, None);

            ui.with_layout(text_layout(lang), |ui| {
                if app.session.is_analyzing() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(egui::RichText::new(demo.analyzing).color(MUTED));
                    });
                    return;
                }

                match app.session.report() {
                    None => {
                        ui.label(egui::RichText::new(demo.report_placeholder).color(MUTED));
                    }
                    Some(FitReport::Unparseable { .. }) => {
                        ui.label(egui::RichText::new(demo.unparseable).color(FALLBACK_BADGE));
                    }
                    Some(report) => show_report(ui, &report, demo.fit_score),
                }
            });
            ui.add_space(4.0);
        });
}

fn show_report(ui: &mut egui::Ui, report: &FitReport, score_label: &str) {
    ui.horizontal(|ui| {
        if let Some(score) = report.score_display() {
            egui::Frame::NONE
                .fill(ACCENT)
                .inner_margin(10.0)
                .corner_radius(8.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(score_label)
                                .small()
                                .color(egui::Color32::from_white_alpha(200)),
                        );
                        ui.label(
                            egui::RichText::new(score)
                                .size(26.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                    });
                });
        }
        ui.vertical(|ui| {
            if let Some(insight) = report.insight() {
                ui.label(egui::RichText::new(insight).size(15.0));
            }
            if let Some(value) = report.score_value() {
                ui.add(
                    egui::ProgressBar::new(f32::from(value) / 100.0)
                        .desired_width(240.0)
                        .fill(ACCENT),
                );
            }
        });
    });
}
