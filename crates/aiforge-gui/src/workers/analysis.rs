use std::sync::mpsc;
use std::sync::Arc;

use aiforge_core::analysis::{run_analysis, AnalysisOutcome, FitAnalyzer};
use aiforge_core::session::AnalysisTicket;
use tracing::warn;

use crate::messages::WorkerResult;

use super::{send, send_log};

/// Run `ticket` on its own thread so a slow request never holds up a newer
/// one. The outcome always comes back, stale or not; the session decides.
pub(crate) fn handle_analyze(
    analyzer: &Arc<dyn FitAnalyzer>,
    ticket: AnalysisTicket,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let analyzer = Arc::clone(analyzer);
    let thread_tx = tx.clone();
    let thread_ctx = ctx.clone();

    let spawned = std::thread::Builder::new()
        .name(format!("aiforge-analysis-{}", ticket.token))
        .spawn(move || {
            send_log(
                &thread_tx,
                &thread_ctx,
                format!("Analyzing {}...", ticket.request.garment.name),
            );
            let outcome = run_analysis(analyzer.as_ref(), &ticket.request);
            send(
                &thread_tx,
                &thread_ctx,
                WorkerResult::AnalysisSettled {
                    token: ticket.token,
                    outcome,
                },
            );
        });

    if let Err(e) = spawned {
        // Settle anyway so the stage never stays stuck in a scan.
        warn!(error = %e, "Failed to spawn analysis thread");
        send(
            tx,
            ctx,
            WorkerResult::AnalysisSettled {
                token: ticket.token,
                outcome: AnalysisOutcome::fallback(e.to_string()),
            },
        );
    }
}
