use std::sync::mpsc;

use aiforge_core::analysis::create_analyzer;
use aiforge_core::config::AnalysisConfig;

use crate::messages::{WorkerCommand, WorkerResult};

use super::analysis;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    config: AnalysisConfig,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("aiforge-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, config);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    config: AnalysisConfig,
) {
    let mut analyzer = create_analyzer(&config);

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Analyze { ticket } => {
                analysis::handle_analyze(&analyzer, ticket, &tx, &ctx);
            }
            WorkerCommand::Reconfigure { config } => {
                analyzer = create_analyzer(&config);
                send_log(&tx, &ctx, format!("Analysis provider: {}", config.model));
            }
        }
    }
}
