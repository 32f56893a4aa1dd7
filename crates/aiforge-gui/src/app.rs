use std::sync::mpsc;
use std::time::{Duration, Instant};

use aiforge_core::config::ForgeConfig;
use aiforge_core::session::Session;
use aiforge_core::site::Page;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::UIState;
use crate::workers;

/// Repaint interval while the scanning animation runs.
const SCAN_FRAME: Duration = Duration::from_millis(16);

pub struct AiForgeApp {
    pub cmd_tx: Option<mpsc::Sender<WorkerCommand>>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub config: ForgeConfig,
    pub ui_state: UIState,
}

impl AiForgeApp {
    pub fn new(ctx: &egui::Context, config: ForgeConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let mut ui_state = UIState::default();

        let cmd_tx = match workers::spawn_worker(
            result_tx.clone(),
            ctx.clone(),
            config.analysis.clone(),
        ) {
            Ok(tx) => Some(tx),
            Err(e) => {
                ui_state.add_log(format!("ERROR: failed to start worker: {e}"));
                None
            }
        };

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: Session::new(&config),
            config,
            ui_state,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::AnalysisSettled { token, outcome } => {
                    let fallback = outcome.fallback_reason().map(str::to_string);
                    if self
                        .session
                        .settle_analysis(token, outcome, Instant::now())
                    {
                        match fallback {
                            Some(reason) => self
                                .ui_state
                                .add_log(format!("Analysis unavailable, showing estimate ({reason})")),
                            None => self.ui_state.add_log("Fit analysis received".into()),
                        }
                    }
                }
                WorkerResult::ConfigImported { path, config } => {
                    self.session.apply_config(&config);
                    self.send_command(WorkerCommand::Reconfigure {
                        config: config.analysis.clone(),
                    });
                    self.config = config;
                    self.ui_state
                        .add_log(format!("Config imported: {}", path.display()));
                }
                WorkerResult::SessionImported { path, session } => {
                    self.session.replace_with(*session);
                    self.ui_state
                        .add_log(format!("Session imported: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn send_command(&mut self, cmd: WorkerCommand) {
        let sent = self
            .cmd_tx
            .as_ref()
            .is_some_and(|tx| tx.send(cmd).is_ok());
        if !sent {
            self.ui_state
                .add_log("ERROR: analysis worker is not running".into());
        }
    }

    /// Select a garment and hand its analysis to the worker.
    pub fn select_garment(&mut self, id: &str) {
        if let Some(ticket) = self.session.select_garment(id) {
            self.send_command(WorkerCommand::Analyze { ticket });
        }
    }

    fn advance_scan(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.session.tick(now) {
            ctx.request_repaint();
        }
        if self.session.is_scanning() {
            let next = self
                .session
                .settle_remaining(now)
                .map_or(SCAN_FRAME, |left| left.min(SCAN_FRAME));
            ctx.request_repaint_after(next);
        }
    }
}

impl eframe::App for AiForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.advance_scan(ctx);

        panels::menu_bar::show(ctx, self);
        panels::nav::show(ctx, self);
        panels::status::show(ctx, self);

        match self.session.shell.page {
            Page::Demo => panels::demo::show(ctx, self),
            page => panels::pages::show(ctx, self, page),
        }

        if self.ui_state.show_about {
            egui::Window::new("About AiForge")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("AiForge");
                        ui.label("Virtual Fitting Room");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.label(format!("Provider model: {}", self.config.analysis.model));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
