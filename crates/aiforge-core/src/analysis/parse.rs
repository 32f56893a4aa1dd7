use serde::Deserialize;

use crate::consts::{ANALYSIS_SEPARATOR, FIT_SCORE_MARKER};

/// Displayable reading of a stored analysis string.
#[derive(Clone, Debug, PartialEq)]
pub enum FitReport {
    /// Insight text plus a score block. `score` is the text shown before `%`.
    Scored { insight: String, score: String },
    /// No separator: the whole reply is the insight and no score is shown.
    InsightOnly(String),
    /// A separator was present but no score could be read after it.
    Unparseable { raw: String },
}

impl FitReport {
    pub fn insight(&self) -> Option<&str> {
        match self {
            Self::Scored { insight, .. } => Some(insight),
            Self::InsightOnly(text) => Some(text),
            Self::Unparseable { .. } => None,
        }
    }

    /// Score text for the score block, e.g. `"87%"`.
    pub fn score_display(&self) -> Option<String> {
        match self {
            Self::Scored { score, .. } => Some(format!("{score}%")),
            _ => None,
        }
    }

    /// Score as an integer when it reads as one in `0..=100`.
    pub fn score_value(&self) -> Option<u8> {
        match self {
            Self::Scored { score, .. } => score.parse::<u8>().ok().filter(|s| *s <= 100),
            _ => None,
        }
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::Unparseable { .. })
    }
}

#[derive(Deserialize)]
struct StructuredFit {
    insight: String,
    fit_score: f64,
}

/// Read an analysis string.
///
/// A JSON object `{"insight": .., "fit_score": ..}` is accepted first; anything
/// else goes through the `insight | Fit Score: N` split.
pub fn parse_analysis(raw: &str) -> FitReport {
    if let Some(report) = parse_structured(raw) {
        return report;
    }

    let Some((left, right)) = raw.split_once(ANALYSIS_SEPARATOR) else {
        return FitReport::InsightOnly(raw.trim().to_string());
    };

    let score = right
        .split_once(FIT_SCORE_MARKER)
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty());

    match score {
        Some(score) => FitReport::Scored {
            insight: left.trim().to_string(),
            score: score.to_string(),
        },
        None => FitReport::Unparseable {
            raw: raw.to_string(),
        },
    }
}

fn parse_structured(raw: &str) -> Option<FitReport> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    let fit: StructuredFit = serde_json::from_str(trimmed).ok()?;
    if !fit.fit_score.is_finite() {
        return None;
    }
    let score = fit.fit_score.round().clamp(0.0, 100.0) as u8;
    Some(FitReport::Scored {
        insight: fit.insight.trim().to_string(),
        score: score.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_rejects_non_object() {
        assert!(parse_structured("Great drape. | Fit Score: 87").is_none());
    }

    #[test]
    fn test_structured_rejects_missing_fields() {
        assert!(parse_structured(r#"{"insight": "ok"}"#).is_none());
    }
}
