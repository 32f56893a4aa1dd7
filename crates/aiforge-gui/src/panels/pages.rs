//! Informational pages: home, pricing, brands and about.

use aiforge_core::site::copy;
use aiforge_core::site::{Language, Page};

use crate::app::AiForgeApp;

use super::helpers::{bullet_list, footer, text_layout, ACCENT, MUTED};

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp, page: Page) {
    let lang = app.session.shell.language;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.with_layout(text_layout(lang), |ui| {
                    ui.set_max_width(960.0);
                    match page {
                        Page::Home => home(ui, app, lang),
                        Page::Pricing => pricing(ui, lang),
                        Page::Brands => brands(ui, lang),
                        Page::About => about(ui, lang),
                        Page::Demo => {}
                    }
                });
                footer(ui, lang);
            });
    });
}

fn hero(ui: &mut egui::Ui, title: &str, desc: &str) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(title).size(36.0).strong());
    ui.add_space(8.0);
    ui.label(egui::RichText::new(desc).size(16.0).color(MUTED));
    ui.add_space(16.0);
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(text).size(24.0).strong());
    ui.add_space(8.0);
}

fn home(ui: &mut egui::Ui, app: &mut AiForgeApp, lang: Language) {
    let home = copy::home(lang);

    ui.label(egui::RichText::new(home.badge).small().color(ACCENT));
    hero(ui, home.hero_title, home.hero_desc);
    if ui
        .add(egui::Button::new(
            egui::RichText::new(home.cta).color(egui::Color32::WHITE),
        )
        .fill(ACCENT))
        .clicked()
    {
        app.session.shell.navigate(Page::Demo);
    }
    ui.add_space(8.0);
    ui.label(egui::RichText::new(home.steps.join("  ")).strong());

    heading(ui, home.collections_title);
    ui.horizontal_wrapped(|ui| {
        for item in copy::COLLECTIONS {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(210.0);
                ui.vertical(|ui| {
                    ui.add(
                        egui::Image::new(item.image)
                            .fit_to_exact_size(egui::vec2(210.0, 260.0))
                            .corner_radius(8.0),
                    );
                    ui.strong(item.title);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(item.gender.to_string()).color(MUTED));
                        ui.label(egui::RichText::new(item.tag).small().color(ACCENT));
                    });
                });
            });
        }
    });

    heading(ui, home.about_title);
    ui.label(home.about_desc);

    heading(ui, home.pricing_title);
    pricing_cards(ui, lang);

    ui.add_space(16.0);
    ui.label(egui::RichText::new(home.closing).size(20.0).strong());
}

fn pricing(ui: &mut egui::Ui, lang: Language) {
    let pricing = copy::pricing(lang);

    hero(ui, pricing.title, pricing.subtitle);
    pricing_cards(ui, lang);

    heading(ui, pricing.security_title);
    ui.label(pricing.security_desc);
    let _ = ui.button(pricing.security_button);
}

fn pricing_cards(ui: &mut egui::Ui, lang: Language) {
    let pricing = copy::pricing(lang);

    ui.columns(pricing.plans.len(), |cols| {
        for (col, plan) in cols.iter_mut().zip(&pricing.plans) {
            let mut frame = egui::Frame::group(col.style()).inner_margin(12.0);
            if plan.popular {
                frame = frame.stroke(egui::Stroke::new(2.0, ACCENT));
            }
            frame.show(col, |ui| {
                if plan.popular {
                    ui.label(
                        egui::RichText::new(pricing.popular_badge)
                            .small()
                            .strong()
                            .color(ACCENT),
                    );
                }
                ui.label(egui::RichText::new(plan.name).size(18.0).strong());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(plan.price).size(26.0).strong());
                    if !plan.custom {
                        ui.label(egui::RichText::new(pricing.per_month).color(MUTED));
                    }
                });
                ui.add_space(6.0);
                bullet_list(ui, &plan.features);
                ui.add_space(6.0);
                let _ = ui.button(plan.button);
            });
        }
    });
}

fn brands(ui: &mut egui::Ui, lang: Language) {
    let brands = copy::brands(lang);

    hero(ui, brands.hero_title, brands.hero_desc);
    ui.horizontal(|ui| {
        let _ = ui.button(brands.schedule_demo);
        let _ = ui.button(brands.view_docs);
    });

    heading(ui, brands.why_title);
    ui.columns(2, |cols| {
        for (i, benefit) in brands.benefits.iter().enumerate() {
            let col = &mut cols[i % 2];
            egui::Frame::group(col.style())
                .inner_margin(10.0)
                .show(col, |ui| {
                    ui.strong(benefit.title);
                    ui.label(egui::RichText::new(benefit.desc).color(MUTED));
                });
        }
    });

    heading(ui, brands.integration_title);
    bullet_list(ui, &brands.integration_points);
    ui.add_space(8.0);
    egui::Frame::canvas(ui.style())
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(egui::RichText::new(copy::WIDGET_SNIPPET).monospace());
        });
}

fn about(ui: &mut egui::Ui, lang: Language) {
    let about = copy::about(lang);

    ui.label(egui::RichText::new(about.eyebrow).small().color(ACCENT));
    heading(ui, about.title);
    for paragraph in &about.paragraphs {
        ui.label(*paragraph);
        ui.add_space(8.0);
    }
    ui.label(egui::RichText::new(about.quote).italics().color(MUTED));

    heading(ui, about.presence_title);
    ui.label(egui::RichText::new(about.hubs).strong());
    bullet_list(ui, &about.offices);
}
