use aiforge_core::catalog::{self, GarmentCategory, Gender, GARMENTS};

#[test]
fn test_catalog_has_three_garments_per_gender() {
    assert_eq!(GARMENTS.len(), 6);
    assert_eq!(catalog::filter(Gender::Men, None).count(), 3);
    assert_eq!(catalog::filter(Gender::Women, None).count(), 3);
}

#[test]
fn test_find_known_garment() {
    let g = catalog::find("m-1").unwrap();
    assert_eq!(g.name, "Charcoal Streetwear Tee");
    assert_eq!(g.material, "Pima Cotton");
    assert_eq!(g.gender, Gender::Men);
    assert_eq!(g.category, GarmentCategory::Shirts);
}

#[test]
fn test_find_unknown_garment() {
    assert!(catalog::find("x-9").is_none());
    assert!(catalog::find("").is_none());
}

#[test]
fn test_filter_matches_gender_and_category() {
    let kurtas: Vec<_> = catalog::filter(Gender::Women, Some(GarmentCategory::Kurtas))
        .map(|g| g.id)
        .collect();
    assert_eq!(kurtas, vec!["w-2"]);
}

#[test]
fn test_filter_all_keeps_catalog_order() {
    let ids: Vec<_> = catalog::filter(Gender::Men, None).map(|g| g.id).collect();
    assert_eq!(ids, vec!["m-1", "m-2", "m-3"]);
}

#[test]
fn test_filter_empty_category() {
    assert_eq!(
        catalog::filter(Gender::Men, Some(GarmentCategory::Abayas)).count(),
        0
    );
    assert_eq!(
        catalog::filter(Gender::Women, Some(GarmentCategory::Trousers)).count(),
        0
    );
}

#[test]
fn test_categories_for_gender() {
    assert_eq!(
        catalog::categories_for(Gender::Men),
        vec![
            GarmentCategory::Shirts,
            GarmentCategory::ShalwarKameez,
            GarmentCategory::Kurtas
        ]
    );
    assert_eq!(
        catalog::categories_for(Gender::Women),
        vec![
            GarmentCategory::Shirts,
            GarmentCategory::Kurtas,
            GarmentCategory::Abayas
        ]
    );
}

#[test]
fn test_every_garment_color_parses() {
    for g in GARMENTS {
        assert!(g.rgb().is_some(), "bad color on {}", g.id);
    }
}

#[test]
fn test_category_display_and_parse() {
    assert_eq!(GarmentCategory::ShalwarKameez.to_string(), "Shalwar Kameez");
    assert_eq!(
        "shalwar-kameez".parse::<GarmentCategory>().unwrap(),
        GarmentCategory::ShalwarKameez
    );
    assert_eq!("Kurta".parse::<GarmentCategory>().unwrap(), GarmentCategory::Kurtas);
    assert!("hats".parse::<GarmentCategory>().is_err());
}

#[test]
fn test_gender_parse() {
    assert_eq!("women".parse::<Gender>().unwrap(), Gender::Women);
    assert_eq!("M".parse::<Gender>().unwrap(), Gender::Men);
    assert!("other".parse::<Gender>().is_err());
}

#[test]
fn test_base_model_images_differ() {
    assert_ne!(
        Gender::Men.base_model_image(),
        Gender::Women.base_model_image()
    );
}
