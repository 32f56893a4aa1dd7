//! Fitting-room page: garment library, measurement sliders, model stage and
//! fit report.

mod library;
mod measurements;
mod report;
mod stage;

use crate::app::AiForgeApp;

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    library::show(ctx, app);
    measurements::show(ctx, app);
    report::show(ctx, app);
    stage::show(ctx, app);
}
