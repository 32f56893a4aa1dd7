//! Fit analysis: prompt composition, the outbound provider call and parsing of
//! the provider's free-text reply.

pub mod gemini;
mod outcome;
pub mod parse;
mod prompt;

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::Result;

pub use outcome::{run_analysis, AnalysisOutcome, AnalysisStatus};
pub use parse::{parse_analysis, FitReport};
pub use prompt::FitRequest;

/// A text-generation service able to answer a fit-analysis prompt.
///
/// Implementations return the raw reply text; turning failures into the
/// fallback outcome is done by [`run_analysis`].
pub trait FitAnalyzer: Send + Sync {
    fn name(&self) -> &str;

    fn generate(&self, request: &FitRequest) -> Result<String>;
}

/// Build the configured provider.
pub fn create_analyzer(config: &AnalysisConfig) -> Arc<dyn FitAnalyzer> {
    Arc::new(gemini::GeminiAnalyzer::from_config(config))
}
