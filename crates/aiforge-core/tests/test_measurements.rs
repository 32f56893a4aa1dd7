use aiforge_core::measurements::{FitPreference, MeasurementField, Measurements};

#[test]
fn test_defaults() {
    let m = Measurements::default();
    assert_eq!(m.height, 175.0);
    assert_eq!(m.weight, 70.0);
    assert_eq!(m.chest, 38.0);
    assert_eq!(m.waist, 32.0);
    assert_eq!(m.hips, 36.0);
    assert_eq!(m.shoulder_width, 17.0);
    assert_eq!(m.fit_preference, FitPreference::Regular);
}

#[test]
fn test_with_replaces_only_one_field() {
    let before = Measurements::default();
    let after = before.with(MeasurementField::Waist, 34.5);
    assert_eq!(after.waist, 34.5);
    for &field in MeasurementField::ALL {
        if field != MeasurementField::Waist {
            assert_eq!(after.get(field), before.get(field), "{field} changed");
        }
    }
    assert_eq!(after.fit_preference, before.fit_preference);
}

#[test]
fn test_last_commit_wins() {
    let m = Measurements::default()
        .with(MeasurementField::Chest, 40.0)
        .with(MeasurementField::Chest, 42.5);
    assert_eq!(m.chest, 42.5);
}

#[test]
fn test_commit_clamps_to_slider_range() {
    for &field in MeasurementField::ALL {
        let spec = field.spec();
        let low = Measurements::default().with(field, spec.min - 100.0);
        let high = Measurements::default().with(field, spec.max + 100.0);
        assert_eq!(low.get(field), spec.min, "{field} low");
        assert_eq!(high.get(field), spec.max, "{field} high");
    }
}

#[test]
fn test_commit_is_always_in_range() {
    let mut value = -50.0_f32;
    while value < 300.0 {
        for &field in MeasurementField::ALL {
            let stored = Measurements::default().with(field, value).get(field);
            assert!(field.spec().contains(stored), "{field}={stored}");
        }
        value += 3.7;
    }
}

#[test]
fn test_infinite_input_saturates() {
    let m = Measurements::default().with(MeasurementField::Height, f32::INFINITY);
    assert_eq!(m.height, 210.0);
    let m = Measurements::default().with(MeasurementField::Height, f32::NEG_INFINITY);
    assert_eq!(m.height, 140.0);
}

#[test]
fn test_slider_ranges() {
    let ranges: Vec<_> = MeasurementField::ALL
        .iter()
        .map(|f| (f.spec().min, f.spec().max, f.spec().step))
        .collect();
    assert_eq!(
        ranges,
        vec![
            (30.0, 60.0, 0.5),
            (24.0, 55.0, 0.5),
            (30.0, 65.0, 0.5),
            (140.0, 210.0, 0.5),
            (40.0, 150.0, 0.5),
            (12.0, 24.0, 0.5),
        ]
    );
}

#[test]
fn test_units() {
    assert_eq!(MeasurementField::Height.unit(), "cm");
    assert_eq!(MeasurementField::Weight.unit(), "kg");
    assert_eq!(MeasurementField::ShoulderWidth.unit(), "in");
}

#[test]
fn test_with_fit() {
    let m = Measurements::default().with_fit(FitPreference::Loose);
    assert_eq!(m.fit_preference, FitPreference::Loose);
    assert_eq!(m.chest, 38.0);
}

#[test]
fn test_clamped_repairs_out_of_range_values() {
    let m = Measurements {
        chest: 100.0,
        waist: 10.0,
        ..Measurements::default()
    }
    .clamped();
    assert_eq!(m.chest, 60.0);
    assert_eq!(m.waist, 24.0);
    assert_eq!(m.height, 175.0);
}

#[test]
fn test_fit_preference_parse_and_display() {
    for &fit in FitPreference::ALL {
        assert_eq!(fit.to_string().parse::<FitPreference>().unwrap(), fit);
    }
    assert_eq!(FitPreference::Slim.to_string(), "slim");
    assert!("baggy".parse::<FitPreference>().is_err());
}
