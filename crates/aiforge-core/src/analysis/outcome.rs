use tracing::{info, warn};

use crate::consts::FALLBACK_ANALYSIS;
use crate::error::ForgeError;

use super::parse::{parse_analysis, FitReport};
use super::{FitAnalyzer, FitRequest};

/// Whether the stored text came from the provider or is the canned fallback.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisStatus {
    Live,
    Fallback { reason: String },
}

/// Settled result of one fit-analysis attempt. Never an error: failures carry
/// the fallback text and the reason in `status`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOutcome {
    pub text: String,
    pub status: AnalysisStatus,
}

impl AnalysisOutcome {
    pub fn live(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: AnalysisStatus::Live,
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            text: FALLBACK_ANALYSIS.to_string(),
            status: AnalysisStatus::Fallback {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.status, AnalysisStatus::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.status {
            AnalysisStatus::Fallback { reason } => Some(reason),
            AnalysisStatus::Live => None,
        }
    }

    pub fn report(&self) -> FitReport {
        parse_analysis(&self.text)
    }
}

/// Run exactly one provider attempt for `request`. Any failure, including an
/// empty reply, yields the fallback outcome.
pub fn run_analysis(analyzer: &dyn FitAnalyzer, request: &FitRequest) -> AnalysisOutcome {
    info!(
        provider = analyzer.name(),
        garment = request.garment.id,
        gender = %request.gender,
        "Requesting fit analysis"
    );

    let result = analyzer.generate(request).and_then(|text| {
        if text.trim().is_empty() {
            Err(ForgeError::EmptyResponse)
        } else {
            Ok(text)
        }
    });

    match result {
        Ok(text) => {
            info!(chars = text.len(), "Fit analysis received");
            AnalysisOutcome::live(text)
        }
        Err(e) => {
            warn!(error = %e, "Fit analysis failed, using fallback");
            AnalysisOutcome::fallback(e.to_string())
        }
    }
}
