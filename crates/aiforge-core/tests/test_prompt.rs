use aiforge_core::analysis::FitRequest;
use aiforge_core::catalog::{self, Gender};
use aiforge_core::measurements::{FitPreference, MeasurementField, Measurements};

#[test]
fn test_prompt_with_defaults() {
    let garment = catalog::find("m-1").unwrap();
    let request = FitRequest::new(garment, Gender::Men, Measurements::default());
    assert_eq!(
        request.prompt(),
        "Analyze virtual fit for a Charcoal Streetwear Tee (Pima Cotton) on a Men model \
         with these measurements: Chest 38\", Waist 32\", Hips 36\". Preferred fit: regular. \
         Focus on South Asian style norms. Format: [Concise Insight] | Fit Score: [0-100]"
    );
}

#[test]
fn test_prompt_renders_half_steps() {
    let garment = catalog::find("w-1").unwrap();
    let m = Measurements::default()
        .with(MeasurementField::Chest, 36.5)
        .with(MeasurementField::Hips, 40.0)
        .with_fit(FitPreference::Loose);
    let prompt = FitRequest::new(garment, Gender::Women, m).prompt();
    assert!(prompt.contains("Emerald Silk Abaya (Premium Silk)"));
    assert!(prompt.contains("on a Women model"));
    assert!(prompt.contains("Chest 36.5\""));
    assert!(prompt.contains("Hips 40\""));
    assert!(prompt.contains("Preferred fit: loose."));
}
