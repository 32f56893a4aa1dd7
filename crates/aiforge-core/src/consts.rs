/// Text stored in place of a failed fit analysis. Shaped like a provider reply
/// so the split parser always yields an insight and a score.
pub const FALLBACK_ANALYSIS: &str = "Neural link verified. Precision fit achieved. | Fit Score: 94";

/// Separator between the insight text and the score block in a legacy reply.
pub const ANALYSIS_SEPARATOR: char = '|';

/// Marker preceding the numeric score in a legacy reply.
pub const FIT_SCORE_MARKER: &str = "Fit Score:";

/// Default zoom range of the model stage.
pub const DEFAULT_ZOOM_MIN: f32 = 0.5;
pub const DEFAULT_ZOOM_MAX: f32 = 3.0;

/// Zoom change applied by one zoom-in/zoom-out press.
pub const DEFAULT_ZOOM_STEP: f32 = 0.2;

/// Degrees of model rotation per pixel of horizontal drag.
pub const DEFAULT_DEGREES_PER_PIXEL: f32 = 0.5;

/// Cosmetic delay after an analysis settles before the scanning overlay clears.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1200;

/// Step shared by all measurement sliders.
pub const MEASUREMENT_STEP: f32 = 0.5;

/// Default text-generation endpoint (Gemini REST API).
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text-generation model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the provider API key.
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
