use aiforge_core::catalog::Garment;
use aiforge_core::session::StagePhase;
use aiforge_core::site::copy;

use crate::app::AiForgeApp;
use crate::panels::helpers::{text_layout, ACCENT, MUTED};

/// Base model photo aspect ratio (width / height).
const MODEL_ASPECT: f32 = 2.0 / 3.0;
/// Narrowest the model gets when seen edge-on, as a fraction of full width.
const MIN_EDGE_WIDTH: f32 = 0.06;
/// Length of one scan-line sweep in seconds.
const SWEEP_SECS: f64 = 1.6;

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    let lang = app.session.shell.language;
    let demo = copy::demo(lang);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.with_layout(text_layout(lang), |ui| {
            ui.label(egui::RichText::new(demo.badge).small().color(ACCENT));
            ui.label(egui::RichText::new(demo.title).size(28.0).strong());
            ui.label(egui::RichText::new(demo.subtitle).color(MUTED));
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let viewport = &mut app.session.viewport;
            if ui
                .add_enabled(viewport.can_zoom_out(), egui::Button::new("\u{2212}"))
                .clicked()
            {
                viewport.zoom_out();
            }
            ui.label(format!("{:.0}%", viewport.zoom * 100.0));
            if ui
                .add_enabled(viewport.can_zoom_in(), egui::Button::new("+"))
                .clicked()
            {
                viewport.zoom_in();
            }
            ui.separator();
            if ui.button(demo.reset_view).clicked() {
                viewport.reset_rotation();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let enabled = app.session.selected_garment().is_some() && !app.session.is_scanning();
                if ui
                    .add_enabled(enabled, egui::Button::new(demo.confirm_size))
                    .clicked()
                {
                    if let Some(garment) = app.session.selected_garment() {
                        app.ui_state
                            .add_log(format!("Size confirmed for {}", garment.name));
                    }
                }
            });
        });
        ui.add_space(6.0);

        let rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(rect, egui::Sense::drag());
        handle_drag(&response, app);

        paint_background(ui, rect);
        paint_model(ui, app, rect);

        if app.session.stage_phase() == StagePhase::Scanning {
            paint_scan(ui, rect, demo.scanning);
        }

        if response.hovered() && !app.session.viewport.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grab);
        } else if app.session.viewport.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    });
}

fn handle_drag(response: &egui::Response, app: &mut AiForgeApp) {
    let viewport = &mut app.session.viewport;
    let pointer_x = response.interact_pointer_pos().map(|p| p.x);

    if response.drag_started() {
        if let Some(x) = pointer_x {
            viewport.pointer_down(x);
        }
    } else if response.dragged() {
        if let Some(x) = pointer_x {
            viewport.pointer_move(x);
        }
    }

    // Release, or the pointer leaving the stage, ends the gesture.
    let left_stage = !response.contains_pointer();
    if response.drag_stopped() || (viewport.is_dragging() && (!response.dragged() || left_stage)) {
        viewport.pointer_up();
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 24.0, egui::Color32::from_gray(241));
}

/// Model rect for the current zoom, centered in `stage`.
fn model_rect(stage: egui::Rect, zoom: f32) -> egui::Rect {
    let height = stage.height() * 0.9 * zoom;
    let size = egui::vec2(height * MODEL_ASPECT, height);
    egui::Rect::from_center_size(stage.center(), size)
}

/// Squash `rect` horizontally to fake a turn around the vertical axis. Past
/// 90 degrees the back is shown as the mirrored front.
fn turned(rect: egui::Rect, rotation_deg: f32) -> (egui::Rect, egui::Rect) {
    let cos = rotation_deg.to_radians().cos();
    let width = rect.width() * cos.abs().max(MIN_EDGE_WIDTH);
    let turned = egui::Rect::from_center_size(rect.center(), egui::vec2(width, rect.height()));
    let uv = if cos >= 0.0 {
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
    } else {
        egui::Rect::from_min_max(egui::pos2(1.0, 0.0), egui::pos2(0.0, 1.0))
    };
    (turned, uv)
}

fn paint_model(ui: &mut egui::Ui, app: &AiForgeApp, stage: egui::Rect) {
    let session = &app.session;
    let rotation = session.viewport.rotation;
    let (model, uv) = turned(model_rect(stage, session.viewport.zoom), rotation);

    let mut clipped = ui.new_child(egui::UiBuilder::new().max_rect(stage));
    clipped.set_clip_rect(stage);
    egui::Image::new(session.gender().base_model_image())
        .uv(uv)
        .corner_radius(16.0)
        .paint_at(&clipped, model);

    if session.show_garment_overlay() {
        if let Some(garment) = session.selected_garment() {
            paint_garment(&clipped, garment, model, uv);
        }
    }
}

fn paint_garment(ui: &egui::Ui, garment: &Garment, model: egui::Rect, uv: egui::Rect) {
    // Torso region of the model photo.
    let torso = egui::Rect::from_center_size(
        model.center() - egui::vec2(0.0, model.height() * 0.08),
        egui::vec2(model.width() * 0.62, model.height() * 0.42),
    );
    egui::Image::new(garment.image)
        .uv(uv)
        .tint(egui::Color32::from_white_alpha(235))
        .corner_radius(12.0)
        .paint_at(ui, torso);

    let [r, g, b] = garment.rgb().unwrap_or([128, 128, 128]);
    ui.painter().rect_stroke(
        torso,
        12.0,
        egui::Stroke::new(2.0, egui::Color32::from_rgb(r, g, b)),
        egui::StrokeKind::Outside,
    );
}

fn paint_scan(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 24.0, egui::Color32::from_black_alpha(90));

    let t = (ui.input(|i| i.time) % SWEEP_SECS / SWEEP_SECS) as f32;
    let y = rect.top() + rect.height() * t;
    painter.line_segment(
        [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
        egui::Stroke::new(3.0, ACCENT),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(22.0),
        egui::Color32::WHITE,
    );
}
