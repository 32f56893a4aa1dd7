pub mod analyze;
pub mod catalog;
pub mod config;
pub mod page;
pub mod parse;
pub mod prompt;

use aiforge_core::catalog::{Garment, GarmentCategory, Gender};
use aiforge_core::error::ForgeError;
use aiforge_core::measurements::{FitPreference, MeasurementField, Measurements};
use aiforge_core::site::Language;
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Men,
    Women,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Men => Gender::Men,
            GenderArg::Women => Gender::Women,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Shirts,
    ShalwarKameez,
    Kurtas,
    Abayas,
    Trousers,
}

impl From<CategoryArg> for GarmentCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Shirts => GarmentCategory::Shirts,
            CategoryArg::ShalwarKameez => GarmentCategory::ShalwarKameez,
            CategoryArg::Kurtas => GarmentCategory::Kurtas,
            CategoryArg::Abayas => GarmentCategory::Abayas,
            CategoryArg::Trousers => GarmentCategory::Trousers,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FitArg {
    Slim,
    Regular,
    Loose,
}

impl From<FitArg> for FitPreference {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Slim => FitPreference::Slim,
            FitArg::Regular => FitPreference::Regular,
            FitArg::Loose => FitPreference::Loose,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LangArg {
    En,
    Ur,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Language::En,
            LangArg::Ur => Language::Ur,
        }
    }
}

/// Body measurement flags. Values are committed like the demo sliders.
#[derive(Args)]
pub struct MeasurementArgs {
    /// Chest in inches
    #[arg(long, default_value = "38")]
    pub chest: f32,

    /// Waist in inches
    #[arg(long, default_value = "32")]
    pub waist: f32,

    /// Hips in inches
    #[arg(long, default_value = "36")]
    pub hips: f32,

    /// Height in cm
    #[arg(long, default_value = "175")]
    pub height: f32,

    /// Weight in kg
    #[arg(long, default_value = "70")]
    pub weight: f32,

    /// Shoulder width in inches
    #[arg(long, default_value = "17")]
    pub shoulder_width: f32,

    /// Preferred fit
    #[arg(long, value_enum, default_value = "regular")]
    pub fit: FitArg,
}

impl MeasurementArgs {
    pub fn to_measurements(&self) -> Measurements {
        [
            (MeasurementField::Chest, self.chest),
            (MeasurementField::Waist, self.waist),
            (MeasurementField::Hips, self.hips),
            (MeasurementField::Height, self.height),
            (MeasurementField::Weight, self.weight),
            (MeasurementField::ShoulderWidth, self.shoulder_width),
        ]
        .into_iter()
        .fold(Measurements::default(), |m, (field, value)| {
            m.with(field, value)
        })
        .with_fit(self.fit.into())
    }
}

pub fn find_garment(id: &str) -> Result<&'static Garment, ForgeError> {
    aiforge_core::catalog::find(id).ok_or_else(|| ForgeError::UnknownGarment(id.to_string()))
}
