use crate::catalog::{Garment, Gender};
use crate::measurements::{format_measurement, Measurements};

/// Everything one fit-analysis call needs, captured at selection time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitRequest {
    pub garment: &'static Garment,
    pub gender: Gender,
    pub measurements: Measurements,
}

impl FitRequest {
    pub fn new(garment: &'static Garment, gender: Gender, measurements: Measurements) -> Self {
        Self {
            garment,
            gender,
            measurements,
        }
    }

    /// Natural-language prompt sent to the provider.
    pub fn prompt(&self) -> String {
        let m = &self.measurements;
        format!(
            "Analyze virtual fit for a {name} ({material}) on a {gender} model with these \
             measurements: Chest {chest}\", Waist {waist}\", Hips {hips}\". \
             Preferred fit: {fit}. Focus on South Asian style norms. \
             Format: [Concise Insight] | Fit Score: [0-100]",
            name = self.garment.name,
            material = self.garment.material,
            gender = self.gender,
            chest = format_measurement(m.chest),
            waist = format_measurement(m.waist),
            hips = format_measurement(m.hips),
            fit = m.fit_preference,
        )
    }
}
