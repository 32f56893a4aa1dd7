use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::MEASUREMENT_STEP;
use crate::error::ForgeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPreference {
    Slim,
    #[default]
    Regular,
    Loose,
}

impl FitPreference {
    pub const ALL: &[Self] = &[Self::Slim, Self::Regular, Self::Loose];
}

impl fmt::Display for FitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slim => write!(f, "slim"),
            Self::Regular => write!(f, "regular"),
            Self::Loose => write!(f, "loose"),
        }
    }
}

impl FromStr for FitPreference {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slim" => Ok(Self::Slim),
            "regular" => Ok(Self::Regular),
            "loose" => Ok(Self::Loose),
            _ => Err(ForgeError::UnknownValue {
                kind: "fit preference",
                value: s.to_string(),
            }),
        }
    }
}

/// One slider-controlled body dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasurementField {
    Chest,
    Waist,
    Hips,
    Height,
    Weight,
    ShoulderWidth,
}

/// Declared range of a measurement slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub field: MeasurementField,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderSpec {
    /// Clamp `value` into range and snap it to the slider step.
    pub fn commit(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        let snapped = self.min + ((value - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl MeasurementField {
    /// Slider display order.
    pub const ALL: &[Self] = &[
        Self::Chest,
        Self::Waist,
        Self::Hips,
        Self::Height,
        Self::Weight,
        Self::ShoulderWidth,
    ];

    pub fn spec(self) -> SliderSpec {
        let (min, max) = match self {
            Self::Chest => (30.0, 60.0),
            Self::Waist => (24.0, 55.0),
            Self::Hips => (30.0, 65.0),
            Self::Height => (140.0, 210.0),
            Self::Weight => (40.0, 150.0),
            Self::ShoulderWidth => (12.0, 24.0),
        };
        SliderSpec {
            field: self,
            min,
            max,
            step: MEASUREMENT_STEP,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Height => "cm",
            Self::Weight => "kg",
            _ => "in",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chest => write!(f, "Chest"),
            Self::Waist => write!(f, "Waist"),
            Self::Hips => write!(f, "Hips"),
            Self::Height => write!(f, "Height"),
            Self::Weight => write!(f, "Weight"),
            Self::ShoulderWidth => write!(f, "Shoulder Width"),
        }
    }
}

/// Body measurements: inches for girths and shoulders, cm for height, kg for
/// weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    pub height: f32,
    pub weight: f32,
    pub chest: f32,
    pub waist: f32,
    pub hips: f32,
    pub shoulder_width: f32,
    pub fit_preference: FitPreference,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            height: 175.0,
            weight: 70.0,
            chest: 38.0,
            waist: 32.0,
            hips: 36.0,
            shoulder_width: 17.0,
            fit_preference: FitPreference::Regular,
        }
    }
}

impl Measurements {
    pub fn get(&self, field: MeasurementField) -> f32 {
        match field {
            MeasurementField::Chest => self.chest,
            MeasurementField::Waist => self.waist,
            MeasurementField::Hips => self.hips,
            MeasurementField::Height => self.height,
            MeasurementField::Weight => self.weight,
            MeasurementField::ShoulderWidth => self.shoulder_width,
        }
    }

    /// Return a copy with one field replaced by the committed (clamped, snapped)
    /// slider value. All other fields are untouched.
    #[must_use]
    pub fn with(self, field: MeasurementField, value: f32) -> Self {
        let value = field.spec().commit(value);
        let mut next = self;
        match field {
            MeasurementField::Chest => next.chest = value,
            MeasurementField::Waist => next.waist = value,
            MeasurementField::Hips => next.hips = value,
            MeasurementField::Height => next.height = value,
            MeasurementField::Weight => next.weight = value,
            MeasurementField::ShoulderWidth => next.shoulder_width = value,
        }
        next
    }

    #[must_use]
    pub fn with_fit(self, fit_preference: FitPreference) -> Self {
        Self {
            fit_preference,
            ..self
        }
    }

    /// Re-commit every field through its slider, e.g. after loading a snapshot.
    #[must_use]
    pub fn clamped(self) -> Self {
        MeasurementField::ALL
            .iter()
            .fold(self, |m, &field| m.with(field, m.get(field)))
    }
}

/// Format a measurement without a trailing `.0` for whole values.
pub fn format_measurement(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
