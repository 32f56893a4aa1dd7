//! Static garment catalog and base model imagery.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForgeError;

/// Model/catalog filter. Not the visitor's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Men,
    Women,
}

impl Gender {
    pub const ALL: &[Self] = &[Self::Men, Self::Women];

    /// Full-length base model photo shown on the stage.
    pub fn base_model_image(self) -> &'static str {
        match self {
            Self::Men => "https://images.unsplash.com/photo-1550131855-057ae8d85271?auto=format&fit=crop&w=1000&q=80",
            Self::Women => "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&w=1000&q=80",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Men => write!(f, "Men"),
            Self::Women => write!(f, "Women"),
        }
    }
}

impl FromStr for Gender {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "men" | "man" | "m" => Ok(Self::Men),
            "women" | "woman" | "w" => Ok(Self::Women),
            _ => Err(ForgeError::UnknownValue {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GarmentCategory {
    Shirts,
    ShalwarKameez,
    Kurtas,
    Abayas,
    Trousers,
}

impl GarmentCategory {
    pub const ALL: &[Self] = &[
        Self::Shirts,
        Self::ShalwarKameez,
        Self::Kurtas,
        Self::Abayas,
        Self::Trousers,
    ];
}

impl fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shirts => write!(f, "Shirts"),
            Self::ShalwarKameez => write!(f, "Shalwar Kameez"),
            Self::Kurtas => write!(f, "Kurtas"),
            Self::Abayas => write!(f, "Abayas"),
            Self::Trousers => write!(f, "Trousers"),
        }
    }
}

impl FromStr for GarmentCategory {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "shirts" | "shirt" => Ok(Self::Shirts),
            "shalwarkameez" | "sk" => Ok(Self::ShalwarKameez),
            "kurtas" | "kurta" => Ok(Self::Kurtas),
            "abayas" | "abaya" => Ok(Self::Abayas),
            "trousers" => Ok(Self::Trousers),
            _ => Err(ForgeError::UnknownValue {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Immutable catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Garment {
    pub id: &'static str,
    pub name: &'static str,
    pub category: GarmentCategory,
    pub gender: Gender,
    pub image: &'static str,
    /// Hex color, `#rrggbb`.
    pub color: &'static str,
    pub material: &'static str,
}

impl Garment {
    /// Parse the hex color into RGB components.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }
}

pub static GARMENTS: &[Garment] = &[
    Garment {
        id: "m-1",
        name: "Charcoal Streetwear Tee",
        category: GarmentCategory::Shirts,
        gender: Gender::Men,
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?auto=format&fit=crop&w=800&q=80",
        color: "#1f2937",
        material: "Pima Cotton",
    },
    Garment {
        id: "m-2",
        name: "Royal Ivory Linen Kurta",
        category: GarmentCategory::Kurtas,
        gender: Gender::Men,
        image: "https://images.unsplash.com/photo-1594938298603-c8148c4dae35?auto=format&fit=crop&w=800&q=80",
        color: "#f8fafc",
        material: "Pure Linen",
    },
    Garment {
        id: "m-3",
        name: "Slate Gray Cotton SK",
        category: GarmentCategory::ShalwarKameez,
        gender: Gender::Men,
        image: "https://images.unsplash.com/photo-1627440301738-958897594998?auto=format&fit=crop&w=800&q=80",
        color: "#4b5563",
        material: "Polished Cotton",
    },
    Garment {
        id: "w-1",
        name: "Emerald Silk Abaya",
        category: GarmentCategory::Abayas,
        gender: Gender::Women,
        image: "https://images.unsplash.com/photo-1621340450512-9c16922a7f5a?auto=format&fit=crop&w=800&q=80",
        color: "#064e3b",
        material: "Premium Silk",
    },
    Garment {
        id: "w-2",
        name: "Blush Lawn Kurti",
        category: GarmentCategory::Kurtas,
        gender: Gender::Women,
        image: "https://images.unsplash.com/photo-1610030469614-22c676239f28?auto=format&fit=crop&w=800&q=80",
        color: "#fb7185",
        material: "Digital Print Lawn",
    },
    Garment {
        id: "w-3",
        name: "Minimal White Essential Tee",
        category: GarmentCategory::Shirts,
        gender: Gender::Women,
        image: "https://images.unsplash.com/photo-1554568218-0f1715e72254?auto=format&fit=crop&w=800&q=80",
        color: "#ffffff",
        material: "Organic Cotton",
    },
];

/// Look up a garment by id.
pub fn find(id: &str) -> Option<&'static Garment> {
    GARMENTS.iter().find(|g| g.id == id)
}

/// Garments matching `gender` and, when given, `category`. `None` matches all
/// categories.
pub fn filter(
    gender: Gender,
    category: Option<GarmentCategory>,
) -> impl Iterator<Item = &'static Garment> {
    GARMENTS
        .iter()
        .filter(move |g| g.gender == gender && category.map_or(true, |c| g.category == c))
}

/// Categories that have at least one garment for `gender`, in catalog order.
pub fn categories_for(gender: Gender) -> Vec<GarmentCategory> {
    GarmentCategory::ALL
        .iter()
        .copied()
        .filter(|c| GARMENTS.iter().any(|g| g.gender == gender && g.category == *c))
        .collect()
}
