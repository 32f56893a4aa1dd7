use aiforge_core::site::copy;
use aiforge_core::site::Language;

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(79, 70, 229);
pub(crate) const MUTED: egui::Color32 = egui::Color32::from_gray(120);

/// Show a ComboBox for enum selection with localized labels. Returns `true`
/// if the value changed.
pub(crate) fn enum_combo<T: PartialEq + Copy>(
    ui: &mut egui::Ui,
    id: &str,
    current: &mut T,
    options: &[T],
    label: impl Fn(T) -> String,
) -> bool {
    let resp = egui::ComboBox::from_id_salt(id)
        .selected_text(label(*current))
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui
                    .selectable_value(current, choice, label(choice))
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

pub(crate) fn section_header(
    ui: &mut egui::Ui,
    label: &str,
    status: Option<&str>,
    color: Option<egui::Color32>,
) {
    let frame = if let Some(c) = color {
        egui::Frame::NONE
            .fill(c)
            .inner_margin(4.0)
            .corner_radius(2.0)
    } else {
        egui::Frame::NONE.inner_margin(4.0)
    };
    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(label);
            if let Some(s) = status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(s);
                });
            }
        });
    });
}

/// Top-down layout aligned to the reading direction of `lang`.
pub(crate) fn text_layout(lang: Language) -> egui::Layout {
    let align = if lang.is_rtl() {
        egui::Align::Max
    } else {
        egui::Align::Min
    };
    egui::Layout::top_down(align)
}

pub(crate) fn bullet_list(ui: &mut egui::Ui, items: &[&str]) {
    for item in items {
        ui.label(format!("\u{2022} {item}"));
    }
}

pub(crate) fn footer(ui: &mut egui::Ui, lang: Language) {
    let footer = copy::footer(lang);

    ui.add_space(24.0);
    ui.separator();
    ui.with_layout(text_layout(lang), |ui| {
        ui.strong(copy::BRAND_NAME);
        ui.label(egui::RichText::new(footer.tagline).color(MUTED));
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            cols[0].strong(footer.company_heading);
            for link in footer.company_links {
                cols[0].label(link);
            }
            cols[1].strong(footer.support_heading);
            for link in footer.support_links {
                cols[1].label(link);
            }
        });
        ui.add_space(8.0);
        ui.small(format!("\u{a9} {}", footer.rights));
    });
    ui.add_space(8.0);
}
