use aiforge_core::site::copy;
use aiforge_core::site::{Language, Page, Shell};

#[test]
fn test_unknown_page_resolves_home() {
    assert_eq!(Page::resolve("checkout"), Page::Home);
    assert_eq!(Page::resolve(""), Page::Home);
    assert_eq!(Page::resolve("Pricing"), Page::Pricing);
}

#[test]
fn test_page_ids_roundtrip() {
    for &page in Page::ALL {
        assert_eq!(page.id().parse::<Page>().unwrap(), page);
    }
}

#[test]
fn test_navigate_to_unknown_lands_home() {
    let mut shell = Shell::default();
    shell.navigate(Page::About);
    shell.navigate_to("nowhere");
    assert_eq!(shell.page, Page::Home);
}

#[test]
fn test_language_toggle() {
    let mut shell = Shell::default();
    assert_eq!(shell.language, Language::En);
    assert!(!shell.language.is_rtl());
    shell.toggle_language();
    assert_eq!(shell.language, Language::Ur);
    assert!(shell.language.is_rtl());
    shell.toggle_language();
    assert_eq!(shell.language, Language::En);
}

#[test]
fn test_language_parse() {
    assert_eq!("Urdu".parse::<Language>().unwrap(), Language::Ur);
    assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    assert!("fr".parse::<Language>().is_err());
}

#[test]
fn test_nav_labels_per_language() {
    assert_eq!(copy::nav(Language::En).label(Page::Demo), "Try Demo");
    assert_eq!(copy::nav(Language::Ur).label(Page::Home), "ہوم");
    assert_eq!(copy::nav(Language::En).switch_language, "Urdu");
    assert_eq!(copy::nav(Language::Ur).switch_language, "English");
}

#[test]
fn test_every_page_has_both_locales() {
    for lang in [Language::En, Language::Ur] {
        for &page in Page::ALL {
            assert!(!copy::nav(lang).label(page).is_empty());
        }
        assert!(!copy::home(lang).hero_title.is_empty());
        assert!(!copy::demo(lang).report_placeholder.is_empty());
        assert!(!copy::brands(lang).hero_title.is_empty());
        assert!(!copy::about(lang).title.is_empty());
        assert!(!copy::footer(lang).rights.is_empty());
    }
    assert_ne!(copy::home(Language::En).cta, copy::home(Language::Ur).cta);
}

#[test]
fn test_pricing_plans() {
    let pricing = copy::pricing(Language::En);
    let names: Vec<_> = pricing.plans.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Starter", "Business", "Enterprise"]);
    assert_eq!(pricing.plans[0].price, "PKR 1,999");
    assert_eq!(pricing.plans[1].price, "PKR 4,999");
    assert!(pricing.plans[1].popular);
    assert!(pricing.plans[2].custom);
    assert_eq!(
        pricing.plans.iter().filter(|p| p.popular).count(),
        1
    );
    assert_eq!(copy::pricing(Language::Ur).title, "سادہ اور شفاف قیمتیں");
}

#[test]
fn test_brand_benefits() {
    let titles: Vec<_> = copy::brands(Language::En)
        .benefits
        .iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Increase Conversion",
            "Slash Returns",
            "Data Insights",
            "Brand Loyalty"
        ]
    );
}

#[test]
fn test_about_offices() {
    let about = copy::about(Language::En);
    assert_eq!(about.title, "A Bridge Between London & Lahore");
    assert_eq!(about.offices[1], "Engineering - Lahore, Pakistan");
}
