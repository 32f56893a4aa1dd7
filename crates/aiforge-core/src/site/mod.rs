//! Navigation shell: which page is shown and which locale is active.

pub mod copy;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForgeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Demo,
    Pricing,
    Brands,
    About,
}

impl Page {
    /// Header navigation order.
    pub const ALL: &[Self] = &[
        Self::Home,
        Self::Demo,
        Self::Pricing,
        Self::Brands,
        Self::About,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Demo => "demo",
            Self::Pricing => "pricing",
            Self::Brands => "brands",
            Self::About => "about",
        }
    }

    /// Page for `name`, or [`Page::Home`] when the name is not recognized.
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ForgeError::UnknownValue {
                kind: "page",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ur,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ur => "ur",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ur,
            Self::Ur => Self::En,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ur)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ur" | "urdu" => Ok(Self::Ur),
            _ => Err(ForgeError::UnknownValue {
                kind: "language",
                value: s.to_string(),
            }),
        }
    }
}

/// Current page and locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shell {
    pub page: Page,
    pub language: Language,
}

impl Shell {
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Navigate by page id; unknown ids land on home.
    pub fn navigate_to(&mut self, name: &str) {
        self.page = Page::resolve(name);
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}
