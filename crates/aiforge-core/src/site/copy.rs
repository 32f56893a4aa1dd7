//! Per-page string tables. Every page picks its own table for the active
//! language; there is no per-string fallback between locales.

use crate::catalog::Gender;
use crate::measurements::{FitPreference, MeasurementField};

use super::{Language, Page};

pub const BRAND_NAME: &str = "AiForge";

pub struct NavCopy {
    pub home: &'static str,
    pub demo: &'static str,
    pub pricing: &'static str,
    pub brands: &'static str,
    pub about: &'static str,
    pub get_started: &'static str,
    /// Label of the button that switches to the other locale.
    pub switch_language: &'static str,
}

impl NavCopy {
    pub fn label(&self, page: Page) -> &'static str {
        match page {
            Page::Home => self.home,
            Page::Demo => self.demo,
            Page::Pricing => self.pricing,
            Page::Brands => self.brands,
            Page::About => self.about,
        }
    }
}

static NAV_EN: NavCopy = NavCopy {
    home: "Home",
    demo: "Try Demo",
    pricing: "Pricing",
    brands: "For Brands",
    about: "About",
    get_started: "Get Started",
    switch_language: "Urdu",
};

static NAV_UR: NavCopy = NavCopy {
    home: "ہوم",
    demo: "ڈیمو آزمائیں",
    pricing: "قیمت",
    brands: "برانڈز کے لیے",
    about: "ہمارے بارے میں",
    get_started: "شروع کریں",
    switch_language: "English",
};

pub fn nav(lang: Language) -> &'static NavCopy {
    match lang {
        Language::En => &NAV_EN,
        Language::Ur => &NAV_UR,
    }
}

pub struct FooterCopy {
    pub tagline: &'static str,
    pub company_heading: &'static str,
    pub company_links: [&'static str; 4],
    pub support_heading: &'static str,
    pub support_links: [&'static str; 4],
    pub rights: &'static str,
}

static FOOTER_EN: FooterCopy = FooterCopy {
    tagline: "Revolutionizing fashion with AI-powered virtual fitting. A UK-Pakistan venture launching first in Pakistan.",
    company_heading: "Company",
    company_links: ["About Us", "For Brands", "Careers", "Press Kit"],
    support_heading: "Support",
    support_links: ["Help Center", "Terms of Service", "Privacy Policy", "Contact Us"],
    rights: "AiForge Technologies. All rights reserved. Designed in UK, Powered in Pakistan.",
};

static FOOTER_UR: FooterCopy = FooterCopy {
    tagline: "AI سے چلنے والی ورچوئل فٹنگ کے ساتھ فیشن میں انقلاب۔ برطانیہ اور پاکستان کا مشترکہ منصوبہ، پہلے پاکستان میں۔",
    company_heading: "کمپنی",
    company_links: ["ہمارے بارے میں", "برانڈز کے لیے", "ملازمتیں", "پریس کٹ"],
    support_heading: "مدد",
    support_links: ["ہیلپ سینٹر", "شرائط و ضوابط", "رازداری کی پالیسی", "رابطہ کریں"],
    rights: "AiForge Technologies۔ جملہ حقوق محفوظ ہیں۔ ڈیزائن برطانیہ میں، تیاری پاکستان میں۔",
};

pub fn footer(lang: Language) -> &'static FooterCopy {
    match lang {
        Language::En => &FOOTER_EN,
        Language::Ur => &FOOTER_UR,
    }
}

/// Featured collection tile on the home page.
pub struct CollectionItem {
    pub title: &'static str,
    pub gender: Gender,
    pub image: &'static str,
    pub tag: &'static str,
}

pub static COLLECTIONS: &[CollectionItem] = &[
    CollectionItem {
        title: "Summer Kurtas",
        gender: Gender::Men,
        image: "https://images.unsplash.com/photo-1594938298603-c8148c4dae35?auto=format&fit=crop&w=600&q=80",
        tag: "Hot Seller",
    },
    CollectionItem {
        title: "Silk Abayas",
        gender: Gender::Women,
        image: "https://images.unsplash.com/photo-1621340450512-9c16922a7f5a?auto=format&fit=crop&w=600&q=80",
        tag: "Luxury",
    },
    CollectionItem {
        title: "Oxford Shirts",
        gender: Gender::Men,
        image: "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?auto=format&fit=crop&w=600&q=80",
        tag: "Formal",
    },
    CollectionItem {
        title: "Lawn Collection",
        gender: Gender::Women,
        image: "https://images.unsplash.com/photo-1589156229687-496a31ad1d1f?auto=format&fit=crop&w=600&q=80",
        tag: "Digital Print",
    },
];

pub struct HomeCopy {
    pub badge: &'static str,
    pub hero_title: &'static str,
    pub hero_desc: &'static str,
    pub cta: &'static str,
    pub steps: [&'static str; 4],
    pub collections_title: &'static str,
    pub about_title: &'static str,
    pub about_desc: &'static str,
    pub pricing_title: &'static str,
    pub closing: &'static str,
}

static HOME_EN: HomeCopy = HomeCopy {
    badge: "Launching First in Pakistan",
    hero_title: "Experience Fashion Before You Buy.",
    hero_desc: "The UK-Pakistan pioneer in digital dressing rooms. Use AI to create a unique avatar and try on local styles with pixel-perfect accuracy.",
    cta: "Launch Virtual Try-On",
    steps: ["Drag.", "Drop.", "Dress.", "Done."],
    collections_title: "Browse Try-On Collections",
    about_title: "London Strategy & Lahore Code",
    about_desc: "AiForge unites British fashion visionaries with Pakistani neural engineering. We are digitizing the drapes, fabrics, and fit of South Asian fashion for the world.",
    pricing_title: "Smart SaaS Plans",
    closing: "Ready to eliminate sizing doubts forever?",
};

static HOME_UR: HomeCopy = HomeCopy {
    badge: "سب سے پہلے پاکستان میں",
    hero_title: "خریدنے سے پہلے فیشن کا تجربہ کریں۔",
    hero_desc: "ڈیجیٹل ڈریسنگ رومز میں برطانیہ اور پاکستان کا علمبردار۔ اپنا اوتار بنانے کے لیے AI کا استعمال کریں اور بہترین درستگی کے ساتھ مقامی لباس آزمائیں۔",
    cta: "ورچوئل ٹرائی آن شروع کریں",
    steps: ["کھینچیں۔", "چھوڑیں۔", "پہنیں۔", "مکمل۔"],
    collections_title: "ٹرائی آن کلیکشن دیکھیں",
    about_title: "لندن کی حکمت عملی، لاہور کا کوڈ",
    about_desc: "AiForge برطانوی فیشن ماہرین کو پاکستانی نیورل انجینئرنگ کے ساتھ جوڑتا ہے۔ ہم جنوبی ایشیائی فیشن کے لباس اور کپڑوں کو دنیا کے لیے ڈیجیٹل بنا رہے ہیں۔",
    pricing_title: "اسمارٹ SaaS پلانز",
    closing: "کیا آپ سائز کے شکوک ہمیشہ کے لیے ختم کرنے کے لیے تیار ہیں؟",
};

pub fn home(lang: Language) -> &'static HomeCopy {
    match lang {
        Language::En => &HOME_EN,
        Language::Ur => &HOME_UR,
    }
}

pub struct DemoCopy {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub reset_view: &'static str,
    pub confirm_size: &'static str,
    pub library: &'static str,
    pub all_categories: &'static str,
    pub bio_scan: &'static str,
    pub fit_preference: &'static str,
    pub reset_measurements: &'static str,
    pub report_title: &'static str,
    pub report_placeholder: &'static str,
    pub analyzing: &'static str,
    pub scanning: &'static str,
    pub fit_score: &'static str,
    pub fallback_badge: &'static str,
    pub unparseable: &'static str,
    pub checkout_title: &'static str,
    pub order_size: &'static str,
    pub men: &'static str,
    pub women: &'static str,
    pub chest: &'static str,
    pub waist: &'static str,
    pub hips: &'static str,
    pub height: &'static str,
    pub weight: &'static str,
    pub shoulder_width: &'static str,
    pub slim: &'static str,
    pub regular: &'static str,
    pub loose: &'static str,
}

impl DemoCopy {
    pub fn gender(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Men => self.men,
            Gender::Women => self.women,
        }
    }

    pub fn measurement(&self, field: MeasurementField) -> &'static str {
        match field {
            MeasurementField::Chest => self.chest,
            MeasurementField::Waist => self.waist,
            MeasurementField::Hips => self.hips,
            MeasurementField::Height => self.height,
            MeasurementField::Weight => self.weight,
            MeasurementField::ShoulderWidth => self.shoulder_width,
        }
    }

    pub fn fit(&self, fit: FitPreference) -> &'static str {
        match fit {
            FitPreference::Slim => self.slim,
            FitPreference::Regular => self.regular,
            FitPreference::Loose => self.loose,
        }
    }
}

static DEMO_EN: DemoCopy = DemoCopy {
    badge: "AiForge precision v3.1",
    title: "Virtual Fitting Room",
    subtitle: "Swipe to rotate the model. Select garments from the curated library to see your digital fit.",
    reset_view: "Reset View",
    confirm_size: "Confirm Size",
    library: "Library",
    all_categories: "All",
    bio_scan: "Bio Scan",
    fit_preference: "Preferred Fit",
    reset_measurements: "Reset",
    report_title: "Fit Integrity Report",
    report_placeholder: "Select a garment to generate a custom fit report based on your dimensions.",
    analyzing: "Analyzing neural fabric vectors...",
    scanning: "Neural Fit Analysis",
    fit_score: "Fit Score",
    fallback_badge: "Offline estimate",
    unparseable: "The fit report could not be read. Try selecting the garment again.",
    checkout_title: "Checkout Fit",
    order_size: "Order Size",
    men: "Men",
    women: "Women",
    chest: "Chest (in)",
    waist: "Waist (in)",
    hips: "Hips (in)",
    height: "Height (cm)",
    weight: "Weight (kg)",
    shoulder_width: "Shoulders (in)",
    slim: "Slim",
    regular: "Regular",
    loose: "Loose",
};

static DEMO_UR: DemoCopy = DemoCopy {
    badge: "AiForge پریسیژن v3.1",
    title: "ورچوئل فٹنگ روم",
    subtitle: "ماڈل کو گھمانے کے لیے سوائپ کریں۔ اپنی ڈیجیٹل فٹنگ دیکھنے کے لیے لائبریری سے لباس منتخب کریں۔",
    reset_view: "منظر ری سیٹ کریں",
    confirm_size: "آرڈر کریں",
    library: "لائبریری",
    all_categories: "تمام",
    bio_scan: "بایو اسکین",
    fit_preference: "پسندیدہ فٹنگ",
    reset_measurements: "ری سیٹ",
    report_title: "فٹ رپورٹ",
    report_placeholder: "اپنی پیمائش کی بنیاد پر فٹ رپورٹ حاصل کرنے کے لیے لباس منتخب کریں۔",
    analyzing: "تجزیہ جاری ہے...",
    scanning: "نیورل فٹ تجزیہ",
    fit_score: "فٹ اسکور",
    fallback_badge: "آف لائن اندازہ",
    unparseable: "فٹ رپورٹ پڑھی نہیں جا سکی۔ لباس دوبارہ منتخب کریں۔",
    checkout_title: "چیک آؤٹ",
    order_size: "سائز آرڈر کریں",
    men: "مرد",
    women: "خواتین",
    chest: "سینہ (انچ)",
    waist: "کمر (انچ)",
    hips: "کولہے (انچ)",
    height: "قد (سینٹی میٹر)",
    weight: "وزن (کلو)",
    shoulder_width: "کندھے (انچ)",
    slim: "سلم",
    regular: "ریگولر",
    loose: "ڈھیلا",
};

pub fn demo(lang: Language) -> &'static DemoCopy {
    match lang {
        Language::En => &DEMO_EN,
        Language::Ur => &DEMO_UR,
    }
}

pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 4],
    pub button: &'static str,
    pub popular: bool,
    /// Custom-quoted plans show no per-month suffix.
    pub custom: bool,
}

pub struct PricingCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub plans: [PricingPlan; 3],
    pub per_month: &'static str,
    pub popular_badge: &'static str,
    pub security_title: &'static str,
    pub security_desc: &'static str,
    pub security_button: &'static str,
}

static PRICING_EN: PricingCopy = PricingCopy {
    title: "Simple, Transparent Pricing",
    subtitle: "Scale your boutique or brand with AI. Choose a plan that fits your volume.",
    plans: [
        PricingPlan {
            name: "Starter",
            price: "PKR 1,999",
            features: [
                "100 Active Garments",
                "Standard AI Fitting",
                "Basic Analytics",
                "Web Widget Support",
            ],
            button: "Get Started",
            popular: false,
            custom: false,
        },
        PricingPlan {
            name: "Business",
            price: "PKR 4,999",
            features: [
                "Unlimited Garments",
                "Custom Brand Avatars",
                "Detailed Measurement CRM",
                "Priority Email Support",
            ],
            button: "Try Business",
            popular: true,
            custom: false,
        },
        PricingPlan {
            name: "Enterprise",
            price: "Custom",
            features: [
                "Full API Access",
                "White-label Integration",
                "Dedicated Success Manager",
                "SLA Guarantees",
            ],
            button: "Contact Sales",
            popular: false,
            custom: true,
        },
    ],
    per_month: "/month",
    popular_badge: "Most Popular",
    security_title: "Security & Trust First",
    security_desc: "We process measurement data with 256-bit encryption. No camera access required for avatar generation.",
    security_button: "View Security Whitepaper",
};

static PRICING_UR: PricingCopy = PricingCopy {
    title: "سادہ اور شفاف قیمتیں",
    subtitle: "AI کے ساتھ اپنے بوتیک یا برانڈ کو بڑھائیں۔ اپنی ضرورت کے مطابق پلان منتخب کریں۔",
    plans: [
        PricingPlan {
            name: "اسٹارٹر",
            price: "PKR 1,999",
            features: [
                "100 فعال لباس",
                "اسٹینڈرڈ AI فٹنگ",
                "بنیادی تجزیات",
                "ویب وجیٹ سپورٹ",
            ],
            button: "شروع کریں",
            popular: false,
            custom: false,
        },
        PricingPlan {
            name: "بزنس",
            price: "PKR 4,999",
            features: [
                "لامحدود لباس",
                "کسٹم برانڈ اوتار",
                "تفصیلی پیمائش CRM",
                "ترجیحی سپورٹ",
            ],
            button: "بزنس آزمائیں",
            popular: true,
            custom: false,
        },
        PricingPlan {
            name: "انٹرپرائز",
            price: "کسٹم",
            features: [
                "مکمل API رسائی",
                "وائٹ لیبل انٹیگریشن",
                "سرشار مینیجر",
                "ایس ایل اے ضمانت",
            ],
            button: "رابطہ کریں",
            popular: false,
            custom: true,
        },
    ],
    per_month: "/ماہانہ",
    popular_badge: "سب سے مقبول",
    security_title: "سیکیورٹی اور اعتماد",
    security_desc: "ہم پیمائش کا ڈیٹا 256-بٹ انکرپشن کے ساتھ محفوظ کرتے ہیں۔ اوتار بنانے کے لیے کیمرے کی ضرورت نہیں۔",
    security_button: "سیکیورٹی وائٹ پیپر دیکھیں",
};

pub fn pricing(lang: Language) -> &'static PricingCopy {
    match lang {
        Language::En => &PRICING_EN,
        Language::Ur => &PRICING_UR,
    }
}

pub struct Benefit {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct BrandsCopy {
    pub hero_title: &'static str,
    pub hero_desc: &'static str,
    pub schedule_demo: &'static str,
    pub view_docs: &'static str,
    pub why_title: &'static str,
    pub benefits: [Benefit; 4],
    pub integration_title: &'static str,
    pub integration_points: [&'static str; 4],
}

/// Embed snippet shown on the brands page. Code is not translated.
pub const WIDGET_SNIPPET: &str = r#"<!-- AiForge Widget -->
<script src="https://cdn.aiforge.pk/v1/widget.js"></script>
<script>
  AiForge.init({
    brandId: 'YOUR_BRAND_ID',
    productType: 'kurta',
    sizeChart: 'standard-pk'
  });
</script>
<div id="aiforge-try-on"></div>"#;

static BRANDS_EN: BrandsCopy = BrandsCopy {
    hero_title: "Empower Your Boutique with AI.",
    hero_desc: "Integrate AiForge directly into your Shopify, WooCommerce, or custom website in under 5 minutes. Give your customers the digital dressing room they deserve.",
    schedule_demo: "Schedule a Demo",
    view_docs: "View Integration Docs",
    why_title: "Why the biggest Pakistani brands choose us",
    benefits: [
        Benefit {
            title: "Increase Conversion",
            desc: "Customers are 3x more likely to buy when they see the fit.",
        },
        Benefit {
            title: "Slash Returns",
            desc: "Reduce sizing-related returns by up to 60%.",
        },
        Benefit {
            title: "Data Insights",
            desc: "Understand the average body dimensions of your real buyers.",
        },
        Benefit {
            title: "Brand Loyalty",
            desc: "Build trust with a \"Perfect Fit\" guarantee.",
        },
    ],
    integration_title: "The Integration is Seamless",
    integration_points: [
        "One line of code for your website",
        "Automatic mapping to your size charts",
        "Customizable UI to match your brand",
        "Mobile-optimized out of the box",
    ],
};

static BRANDS_UR: BrandsCopy = BrandsCopy {
    hero_title: "AI کے ساتھ اپنے بوتیک کو مضبوط بنائیں۔",
    hero_desc: "AiForge کو اپنی Shopify، WooCommerce یا کسٹم ویب سائٹ میں 5 منٹ سے کم وقت میں شامل کریں۔ اپنے گاہکوں کو وہ ڈیجیٹل ڈریسنگ روم دیں جس کے وہ حقدار ہیں۔",
    schedule_demo: "ڈیمو بک کریں",
    view_docs: "انٹیگریشن دستاویزات",
    why_title: "پاکستان کے بڑے برانڈز ہمیں کیوں چنتے ہیں",
    benefits: [
        Benefit {
            title: "زیادہ فروخت",
            desc: "فٹنگ دیکھ کر گاہکوں کے خریدنے کا امکان 3 گنا بڑھ جاتا ہے۔",
        },
        Benefit {
            title: "کم واپسیاں",
            desc: "سائز سے متعلق واپسیوں میں 60% تک کمی۔",
        },
        Benefit {
            title: "ڈیٹا بصیرت",
            desc: "اپنے حقیقی خریداروں کی اوسط جسمانی پیمائش جانیں۔",
        },
        Benefit {
            title: "برانڈ وفاداری",
            desc: "\"پرفیکٹ فٹ\" ضمانت کے ساتھ اعتماد قائم کریں۔",
        },
    ],
    integration_title: "انٹیگریشن بالکل آسان ہے",
    integration_points: [
        "آپ کی ویب سائٹ کے لیے کوڈ کی صرف ایک لائن",
        "آپ کے سائز چارٹ سے خودکار مطابقت",
        "آپ کے برانڈ کے مطابق قابل تبدیل UI",
        "موبائل کے لیے پہلے سے موزوں",
    ],
};

pub fn brands(lang: Language) -> &'static BrandsCopy {
    match lang {
        Language::En => &BRANDS_EN,
        Language::Ur => &BRANDS_UR,
    }
}

pub struct AboutCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub paragraphs: [&'static str; 2],
    pub quote: &'static str,
    pub presence_title: &'static str,
    pub hubs: &'static str,
    pub offices: [&'static str; 2],
}

static ABOUT_EN: AboutCopy = AboutCopy {
    eyebrow: "Our Origin Story",
    title: "A Bridge Between London & Lahore",
    paragraphs: [
        "AiForge was founded by a team of fashion designers from London and AI researchers from Lahore. We realized that while global fashion was digitizing fast, South Asian clothing, with its unique drapes, complex embroidery, and specific fitting requirements, was being left behind.",
        "Our mission is simple: To eliminate the \"size anxiety\" of online shopping in Pakistan. Whether it's a slim-fit Kurta or a traditional Abaya, we want every Pakistani to buy clothes that fit perfectly, every time.",
    ],
    quote: "\"We're not just building tech; we're empowering the local textile industry to compete on a global scale.\"",
    presence_title: "AiForge Presence",
    hubs: "2 Global Hubs",
    offices: [
        "Design & Strategy - London, UK",
        "Engineering - Lahore, Pakistan",
    ],
};

static ABOUT_UR: AboutCopy = AboutCopy {
    eyebrow: "ہماری کہانی",
    title: "لندن اور لاہور کے درمیان ایک پل",
    paragraphs: [
        "AiForge کی بنیاد لندن کے فیشن ڈیزائنرز اور لاہور کے AI محققین نے رکھی۔ ہم نے دیکھا کہ عالمی فیشن تیزی سے ڈیجیٹل ہو رہا ہے، مگر جنوبی ایشیائی لباس اپنی منفرد ساخت، پیچیدہ کڑھائی اور خاص فٹنگ کی وجہ سے پیچھے رہ گیا ہے۔",
        "ہمارا مقصد سادہ ہے: پاکستان میں آن لائن خریداری سے سائز کی پریشانی ختم کرنا۔ سلم فٹ کرتا ہو یا روایتی عبایا، ہم چاہتے ہیں کہ ہر پاکستانی ہر بار بالکل فٹ لباس خریدے۔",
    ],
    quote: "\"ہم صرف ٹیکنالوجی نہیں بنا رہے؛ ہم مقامی ٹیکسٹائل صنعت کو عالمی سطح پر مقابلے کے قابل بنا رہے ہیں۔\"",
    presence_title: "AiForge کی موجودگی",
    hubs: "2 عالمی مراکز",
    offices: [
        "ڈیزائن اور حکمت عملی - لندن، برطانیہ",
        "انجینئرنگ - لاہور، پاکستان",
    ],
};

pub fn about(lang: Language) -> &'static AboutCopy {
    match lang {
        Language::En => &ABOUT_EN,
        Language::Ur => &ABOUT_UR,
    }
}
