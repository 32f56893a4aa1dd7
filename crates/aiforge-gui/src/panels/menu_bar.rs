use std::path::PathBuf;

use aiforge_core::config::ForgeConfig;
use aiforge_core::session::Session;

use crate::app::AiForgeApp;
use crate::messages::WorkerResult;
use crate::workers::send;

pub fn show(ctx: &egui::Context, app: &mut AiForgeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Import Session...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    import_session(ctx, app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui.add(egui::Button::new("Export Session...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    export_session(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Measurements").clicked() {
                    ui.close();
                    app.session.reset_measurements();
                    app.ui_state.add_log("Measurements reset to defaults".into());
                }
                if ui.button("Reset View").clicked() {
                    ui.close();
                    app.session.viewport.reset_rotation();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            import_session(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            export_session(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn pick_toml() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("TOML", &["toml"])
        .add_filter("All files", &["*"])
        .pick_file()
}

fn save_toml(file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("TOML", &["toml"])
        .set_file_name(file_name)
        .save_file()
}

fn import_config(ctx: &egui::Context, app: &mut AiForgeApp) {
    let ctx = ctx.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = pick_toml() else {
            return;
        };
        let result = match ForgeConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { path, config },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to import config {}: {e}", path.display()),
            },
        };
        send(&result_tx, &ctx, result);
    });
}

fn export_config(ctx: &egui::Context, app: &mut AiForgeApp) {
    let ctx = ctx.clone();
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = save_toml("aiforge.toml") {
            let result = match config.save(&path) {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported: {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to export config: {e}"),
                },
            };
            send(&result_tx, &ctx, result);
        }
    });
}

fn import_session(ctx: &egui::Context, app: &mut AiForgeApp) {
    let ctx = ctx.clone();
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = pick_toml() else {
            return;
        };
        let result = match Session::load(&path, &config) {
            Ok(session) => WorkerResult::SessionImported {
                path,
                session: Box::new(session),
            },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to import session {}: {e}", path.display()),
            },
        };
        send(&result_tx, &ctx, result);
    });
}

fn export_session(ctx: &egui::Context, app: &mut AiForgeApp) {
    let ctx = ctx.clone();
    let session = app.session.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = save_toml("aiforge_session.toml") {
            let result = match session.save(&path) {
                Ok(()) => WorkerResult::Log {
                    message: format!("Session exported: {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to export session: {e}"),
                },
            };
            send(&result_tx, &ctx, result);
        }
    });
}
