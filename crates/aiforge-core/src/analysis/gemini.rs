//! Gemini `generateContent` client.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{ForgeError, Result};

use super::{FitAnalyzer, FitRequest};

/// Longest slice of an error body kept in error messages.
const ERROR_BODY_LIMIT: usize = 300;

pub struct GeminiAnalyzer {
    config: AnalysisConfig,
    api_key: Option<String>,
    agent: ureq::Agent,
}

impl GeminiAnalyzer {
    /// Build from config, reading the API key from the configured environment
    /// variable. A missing key is reported when a request is attempted.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::with_api_key(config, config.api_key())
    }

    pub fn with_api_key(config: &AnalysisConfig, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .build();
        Self {
            config: config.clone(),
            api_key,
            agent,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// JSON request body for `request`.
    pub fn request_body(&self, request: &FitRequest) -> serde_json::Value {
        let mut body = json!({
            "contents": [{
                "parts": [{ "text": request.prompt() }]
            }]
        });
        if self.config.structured_output {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "insight": { "type": "STRING" },
                        "fit_score": { "type": "INTEGER" }
                    },
                    "required": ["insight", "fit_score"]
                }
            });
        }
        body
    }

    fn convert_error(e: ureq::Error) -> ForgeError {
        match e {
            ureq::Error::Status(status, response) => {
                let mut body = response.into_string().unwrap_or_default();
                if body.len() > ERROR_BODY_LIMIT {
                    let mut end = ERROR_BODY_LIMIT;
                    while !body.is_char_boundary(end) {
                        end -= 1;
                    }
                    body.truncate(end);
                }
                ForgeError::Http { status, body }
            }
            other => ForgeError::Transport(other.to_string()),
        }
    }
}

impl FitAnalyzer for GeminiAnalyzer {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn generate(&self, request: &FitRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ForgeError::MissingApiKey(self.config.api_key_env.clone()))?;

        let url = self.url();
        debug!(%url, structured = self.config.structured_output, "POST generateContent");

        let response = self
            .agent
            .post(&url)
            .set("x-goog-api-key", api_key)
            .set("Content-Type", "application/json")
            .send_json(self.request_body(request))
            .map_err(Self::convert_error)?;

        let reply: GenerateContentResponse = response
            .into_json()
            .map_err(|e| ForgeError::MalformedResponse(e.to_string()))?;

        reply.text().ok_or(ForgeError::EmptyResponse)
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_joins_parts() {
        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Good | "},{"text":"Fit Score: 80"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.text().as_deref(), Some("Good | Fit Score: 80"));
    }

    #[test]
    fn test_reply_without_candidates_is_empty() {
        let reply: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(reply.text(), None);
    }
}
