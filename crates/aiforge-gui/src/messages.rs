use std::path::PathBuf;

use aiforge_core::analysis::AnalysisOutcome;
use aiforge_core::config::{AnalysisConfig, ForgeConfig};
use aiforge_core::session::{AnalysisTicket, Session};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Run one fit analysis. Settles with `AnalysisSettled` for the same token.
    Analyze { ticket: AnalysisTicket },

    /// Rebuild the provider client from new settings.
    Reconfigure { config: AnalysisConfig },
}

/// Results sent back to the UI thread.
pub enum WorkerResult {
    AnalysisSettled {
        token: u64,
        outcome: AnalysisOutcome,
    },
    ConfigImported {
        path: PathBuf,
        config: ForgeConfig,
    },
    SessionImported {
        path: PathBuf,
        session: Box<Session>,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
