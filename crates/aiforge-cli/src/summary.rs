use aiforge_core::analysis::{AnalysisOutcome, FitReport};
use aiforge_core::catalog::Garment;
use aiforge_core::site::copy;
use aiforge_core::site::{Language, Page};
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    score: Style,
    warning: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            score: Style::new().green().bold(),
            warning: Style::new().dim().yellow(),
            dim: Style::new().dim(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}".repeat(title.chars().count().max(16)))
    );
    println!();
}

pub fn print_catalog(garments: &[&Garment]) {
    let s = Styles::new();

    print_title(&s, "AiForge Catalog");
    if garments.is_empty() {
        println!("  {}", s.warning.apply_to("No garments match"));
        println!();
        return;
    }

    println!(
        "  {:<6}{:<30}{:<16}{:<8}{:<20}{}",
        s.label.apply_to("Id"),
        s.label.apply_to("Name"),
        s.label.apply_to("Category"),
        s.label.apply_to("Model"),
        s.label.apply_to("Material"),
        s.label.apply_to("Color"),
    );
    for g in garments {
        println!(
            "  {:<6}{:<30}{:<16}{:<8}{:<20}{}",
            g.id,
            s.value.apply_to(g.name),
            g.category.to_string(),
            g.gender.to_string(),
            g.material,
            s.dim.apply_to(g.color),
        );
    }
    println!();
}

pub fn print_outcome(garment: &Garment, outcome: &AnalysisOutcome) {
    let s = Styles::new();

    print_title(&s, "Fit Integrity Report");
    println!(
        "  {:<10}{}",
        s.label.apply_to("Garment"),
        s.value
            .apply_to(format!("{} ({})", garment.name, garment.material))
    );
    print_report_lines(&s, &outcome.report());
    if let Some(reason) = outcome.fallback_reason() {
        println!(
            "  {:<10}{}",
            s.label.apply_to("Source"),
            s.warning.apply_to(format!("fallback ({reason})"))
        );
    } else {
        println!("  {:<10}{}", s.label.apply_to("Source"), "provider");
    }
    println!();
}

pub fn print_report(report: &FitReport) {
    let s = Styles::new();

    print_title(&s, "Fit Report");
    print_report_lines(&s, report);
    println!();
}

fn print_report_lines(s: &Styles, report: &FitReport) {
    match report {
        FitReport::Unparseable { raw } => {
            println!(
                "  {:<10}{}",
                s.label.apply_to("Insight"),
                s.warning.apply_to("unreadable reply")
            );
            println!("  {:<10}{}", s.label.apply_to("Raw"), s.dim.apply_to(raw));
        }
        _ => {
            if let Some(insight) = report.insight() {
                println!("  {:<10}{}", s.label.apply_to("Insight"), insight);
            }
            match report.score_display() {
                Some(score) => println!(
                    "  {:<10}{}",
                    s.label.apply_to("Fit Score"),
                    s.score.apply_to(score)
                ),
                None => println!(
                    "  {:<10}{}",
                    s.label.apply_to("Fit Score"),
                    s.dim.apply_to("none")
                ),
            }
        }
    }
}

pub fn print_page(page: Page, lang: Language) {
    let s = Styles::new();
    let nav = copy::nav(lang);

    print_title(&s, &format!("{} / {}", copy::BRAND_NAME, nav.label(page)));
    if lang.is_rtl() {
        println!("  {}", s.dim.apply_to("(right-to-left)"));
        println!();
    }

    match page {
        Page::Home => {
            let home = copy::home(lang);
            println!("  {}", s.dim.apply_to(home.badge));
            println!("  {}", s.value.apply_to(home.hero_title));
            println!("  {}", home.hero_desc);
            println!("  [{}]", home.cta);
            println!("  {}", s.dim.apply_to(home.steps.join(" ")));
            println!();
            println!("  {}", s.header.apply_to(home.collections_title));
            for item in copy::COLLECTIONS {
                println!(
                    "    {:<18}{:<8}{}",
                    item.title,
                    item.gender.to_string(),
                    s.dim.apply_to(item.tag)
                );
            }
            println!();
            println!("  {}", s.header.apply_to(home.about_title));
            println!("  {}", home.about_desc);
            println!();
            println!("  {}", s.header.apply_to(home.pricing_title));
            println!("  {}", home.closing);
        }
        Page::Demo => {
            let demo = copy::demo(lang);
            println!("  {}", s.dim.apply_to(demo.badge));
            println!("  {}", s.value.apply_to(demo.title));
            println!("  {}", demo.subtitle);
            println!();
            println!("  {}", s.header.apply_to(demo.bio_scan));
            for &field in aiforge_core::measurements::MeasurementField::ALL {
                let spec = field.spec();
                println!(
                    "    {:<20}{} - {}",
                    demo.measurement(field),
                    spec.min,
                    spec.max
                );
            }
            println!();
            println!("  {}", s.header.apply_to(demo.report_title));
            println!("  {}", s.dim.apply_to(demo.report_placeholder));
        }
        Page::Pricing => {
            let pricing = copy::pricing(lang);
            println!("  {}", s.value.apply_to(pricing.title));
            println!("  {}", pricing.subtitle);
            println!();
            for plan in &pricing.plans {
                let suffix = if plan.custom { "" } else { pricing.per_month };
                let badge = if plan.popular {
                    format!("  {}", s.score.apply_to(pricing.popular_badge))
                } else {
                    String::new()
                };
                println!(
                    "  {}  {}{}{}",
                    s.header.apply_to(plan.name),
                    s.value.apply_to(plan.price),
                    suffix,
                    badge
                );
                for feature in &plan.features {
                    println!("    - {feature}");
                }
                println!("    [{}]", plan.button);
                println!();
            }
            println!("  {}", s.header.apply_to(pricing.security_title));
            println!("  {}", pricing.security_desc);
        }
        Page::Brands => {
            let brands = copy::brands(lang);
            println!("  {}", s.value.apply_to(brands.hero_title));
            println!("  {}", brands.hero_desc);
            println!("  [{}]  [{}]", brands.schedule_demo, brands.view_docs);
            println!();
            println!("  {}", s.header.apply_to(brands.why_title));
            for benefit in &brands.benefits {
                println!("    {:<22}{}", s.value.apply_to(benefit.title), benefit.desc);
            }
            println!();
            println!("  {}", s.header.apply_to(brands.integration_title));
            for point in &brands.integration_points {
                println!("    - {point}");
            }
            println!();
            for line in copy::WIDGET_SNIPPET.lines() {
                println!("    {}", s.dim.apply_to(line));
            }
        }
        Page::About => {
            let about = copy::about(lang);
            println!("  {}", s.dim.apply_to(about.eyebrow));
            println!("  {}", s.value.apply_to(about.title));
            println!();
            for paragraph in &about.paragraphs {
                println!("  {paragraph}");
                println!();
            }
            println!("  {}", s.dim.apply_to(about.quote));
            println!();
            println!("  {}  {}", s.header.apply_to(about.presence_title), about.hubs);
            for office in &about.offices {
                println!("    - {office}");
            }
        }
    }
    println!();
}
