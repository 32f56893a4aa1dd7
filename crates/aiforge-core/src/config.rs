use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{
    DEFAULT_API_KEY_ENV, DEFAULT_DEGREES_PER_PIXEL, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_TIMEOUT_SECS, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN,
    DEFAULT_ZOOM_STEP,
};
use crate::error::{ForgeError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub gui: GuiConfig,
}

impl ForgeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot drive the app.
    pub fn validate(&self) -> Result<()> {
        self.viewport.validate()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Outbound fit-analysis provider settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Base URL of the generative-language REST API.
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
    /// Ask the provider for a JSON `{insight, fit_score}` reply.
    pub structured_output: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            structured_output: true,
        }
    }
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key from the configured environment variable, if set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_step: f32,
    pub degrees_per_pixel: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_max: DEFAULT_ZOOM_MAX,
            zoom_step: DEFAULT_ZOOM_STEP,
            degrees_per_pixel: DEFAULT_DEGREES_PER_PIXEL,
        }
    }
}

impl ViewportConfig {
    /// Zoom bounds must be finite with `0 < zoom_min <= zoom_max`, and the
    /// step and drag factor finite with a positive step.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ForgeError::InvalidConfig(msg));

        if !(self.zoom_min.is_finite() && self.zoom_max.is_finite()) {
            return invalid(format!(
                "viewport zoom bounds must be finite (zoom_min = {}, zoom_max = {})",
                self.zoom_min, self.zoom_max
            ));
        }
        if self.zoom_min <= 0.0 || self.zoom_min > self.zoom_max {
            return invalid(format!(
                "viewport needs 0 < zoom_min <= zoom_max (zoom_min = {}, zoom_max = {})",
                self.zoom_min, self.zoom_max
            ));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            return invalid(format!(
                "viewport zoom_step must be positive (got {})",
                self.zoom_step
            ));
        }
        if !self.degrees_per_pixel.is_finite() {
            return invalid(format!(
                "viewport degrees_per_pixel must be finite (got {})",
                self.degrees_per_pixel
            ));
        }
        Ok(())
    }

    /// `self` when valid, otherwise the defaults.
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!("{e}; using default viewport limits");
                Self::default()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Delay after an analysis settles before the scanning overlay clears.
    pub settle_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl DemoConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Font file with Arabic-script coverage, used for the Urdu locale.
    pub urdu_font: Option<PathBuf>,
}
