//! Fitting-room session: everything the demo page shows, in one value.
//!
//! The session never performs I/O for the analysis request. Selecting a
//! garment hands back an [`AnalysisTicket`]; the caller runs it wherever it
//! likes and feeds the outcome back with [`Session::settle_analysis`]. Each
//! ticket carries a sequence token and only the newest one is accepted.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{AnalysisOutcome, FitReport, FitRequest};
use crate::catalog::{self, Garment, GarmentCategory, Gender};
use crate::config::ForgeConfig;
use crate::error::Result;
use crate::measurements::{FitPreference, MeasurementField, Measurements};
use crate::site::Shell;
use crate::viewport::Viewport;

/// Scan lifecycle of the model stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    /// Request `token` is outstanding.
    Pending { token: u64 },
    /// Result arrived; the overlay clears at `until`.
    Settling { until: Instant },
}

/// What the stage reports to the UI. Scanning wins over dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagePhase {
    Idle,
    Dragging,
    Scanning,
}

/// A fit-analysis request the caller must run and settle.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisTicket {
    pub token: u64,
    pub request: FitRequest,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    gender: Gender,
    /// `None` is the "All" filter.
    pub category: Option<GarmentCategory>,
    selected: Option<String>,
    pub measurements: Measurements,
    pub viewport: Viewport,
    pub shell: Shell,
    #[serde(skip)]
    analysis: Option<AnalysisOutcome>,
    #[serde(skip)]
    scan: ScanPhase,
    #[serde(skip)]
    next_token: u64,
    #[serde(skip)]
    settle_delay: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ForgeConfig::default())
    }
}

impl Session {
    pub fn new(config: &ForgeConfig) -> Self {
        Self {
            gender: Gender::default(),
            category: None,
            selected: None,
            measurements: Measurements::default(),
            viewport: Viewport::new(config.viewport),
            shell: Shell::default(),
            analysis: None,
            scan: ScanPhase::Idle,
            next_token: 0,
            settle_delay: config.demo.settle_delay(),
        }
    }

    /// Take viewport limits and the settle delay from `config`.
    pub fn apply_config(&mut self, config: &ForgeConfig) {
        self.viewport.set_limits(config.viewport);
        self.settle_delay = config.demo.settle_delay();
    }

    /// Adopt an imported session in place of this one. The token sequence
    /// carries over, so results for requests issued before the import are
    /// stale and can never match a later ticket.
    pub fn replace_with(&mut self, imported: Session) {
        let next_token = self.next_token.max(imported.next_token);
        *self = Session {
            analysis: None,
            scan: ScanPhase::Idle,
            next_token,
            ..imported
        };
        debug!(next_token, "Session replaced");
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn set_measurement(&mut self, field: MeasurementField, value: f32) {
        self.measurements = self.measurements.with(field, value);
    }

    pub fn set_fit(&mut self, fit: FitPreference) {
        self.measurements = self.measurements.with_fit(fit);
    }

    pub fn reset_measurements(&mut self) {
        self.measurements = Measurements::default();
    }

    /// Switch the model gender. A real change clears the selection, the
    /// displayed analysis and any scan, and resets rotation to zero; a late
    /// result for the retired request is discarded.
    pub fn set_gender(&mut self, gender: Gender) {
        if gender == self.gender {
            return;
        }
        info!(from = %self.gender, to = %gender, "Switching model gender");
        self.gender = gender;
        self.selected = None;
        self.analysis = None;
        self.scan = ScanPhase::Idle;
        self.viewport.reset_rotation();
        if self
            .category
            .is_some_and(|c| !catalog::categories_for(gender).contains(&c))
        {
            self.category = None;
        }
    }

    pub fn set_category(&mut self, category: Option<GarmentCategory>) {
        self.category = category;
    }

    /// Library contents for the active gender and category filter.
    pub fn visible_garments(&self) -> Vec<&'static Garment> {
        catalog::filter(self.gender, self.category).collect()
    }

    pub fn selected_garment(&self) -> Option<&'static Garment> {
        self.selected.as_deref().and_then(catalog::find)
    }

    /// Select a garment and start a fit analysis for it.
    ///
    /// Returns `None`, changing nothing, when the id is unknown or the garment
    /// belongs to the other gender.
    pub fn select_garment(&mut self, id: &str) -> Option<AnalysisTicket> {
        let garment = catalog::find(id).filter(|g| g.gender == self.gender)?;

        self.next_token += 1;
        let token = self.next_token;
        self.selected = Some(garment.id.to_string());
        self.scan = ScanPhase::Pending { token };

        info!(garment = garment.id, token, "Garment selected");
        Some(AnalysisTicket {
            token,
            request: FitRequest::new(garment, self.gender, self.measurements),
        })
    }

    /// Store the outcome of request `token` if it is still the current one.
    /// Returns whether it was accepted.
    pub fn settle_analysis(&mut self, token: u64, outcome: AnalysisOutcome, now: Instant) -> bool {
        if self.scan != (ScanPhase::Pending { token }) {
            debug!(token, "Discarding stale analysis result");
            return false;
        }
        self.analysis = Some(outcome);
        self.scan = ScanPhase::Settling {
            until: now + self.settle_delay,
        };
        true
    }

    /// Advance time-based state. Returns true when the scan just ended.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.scan {
            ScanPhase::Settling { until } if now >= until => {
                self.scan = ScanPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn scan_phase(&self) -> ScanPhase {
        self.scan
    }

    pub fn is_scanning(&self) -> bool {
        self.scan != ScanPhase::Idle
    }

    /// Request outstanding, no result yet.
    pub fn is_analyzing(&self) -> bool {
        matches!(self.scan, ScanPhase::Pending { .. })
    }

    pub fn stage_phase(&self) -> StagePhase {
        if self.is_scanning() {
            StagePhase::Scanning
        } else if self.viewport.is_dragging() {
            StagePhase::Dragging
        } else {
            StagePhase::Idle
        }
    }

    /// Time left before the settling overlay clears.
    pub fn settle_remaining(&self, now: Instant) -> Option<Duration> {
        match self.scan {
            ScanPhase::Settling { until } => Some(until.saturating_duration_since(now)),
            _ => None,
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisOutcome> {
        self.analysis.as_ref()
    }

    pub fn report(&self) -> Option<FitReport> {
        self.analysis.as_ref().map(AnalysisOutcome::report)
    }

    /// The garment is drawn over the model only outside a scan.
    pub fn show_garment_overlay(&self) -> bool {
        self.selected.is_some() && !self.is_scanning()
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        info!(path = %path.display(), "Session saved");
        Ok(())
    }

    /// Load a snapshot. Measurements are re-clamped, a selection that does not
    /// match the snapshot's gender is dropped and the viewport takes the
    /// limits from `config`.
    pub fn load(path: &Path, config: &ForgeConfig) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut session: Self = toml::from_str(&text)?;

        session.measurements = session.measurements.clamped();
        session.apply_config(config);
        if session.selected_garment().map(|g| g.gender) != Some(session.gender) {
            session.selected = None;
        }

        info!(path = %path.display(), "Session loaded");
        Ok(session)
    }
}
