mod app;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::Path;
use std::sync::Arc;

use aiforge_core::config::ForgeConfig;
use anyhow::Context;
use tracing::{info, warn};

/// Config file picked up from the working directory at startup.
const CONFIG_FILE: &str = "aiforge.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([1024.0, 680.0])
            .with_title("AiForge"),
        ..Default::default()
    };

    eframe::run_native(
        "AiForge",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            if let Some(path) = &config.gui.urdu_font {
                if let Err(e) = install_urdu_font(&cc.egui_ctx, path) {
                    warn!("{e:#}");
                }
            }
            Ok(Box::new(app::AiForgeApp::new(&cc.egui_ctx, config)))
        }),
    )
}

fn load_config(path: &Path) -> ForgeConfig {
    if !path.exists() {
        return ForgeConfig::default();
    }
    match ForgeConfig::load(path) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
            ForgeConfig::default()
        }
    }
}

/// Append a font with Arabic-script coverage to the proportional family so
/// Urdu copy renders.
fn install_urdu_font(ctx: &egui::Context, path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read Urdu font {}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("urdu".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push("urdu".to_owned());
    ctx.set_fonts(fonts);

    info!(path = %path.display(), "Installed Urdu font");
    Ok(())
}
