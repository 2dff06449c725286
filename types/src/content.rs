//! Page content supplied to the landing page.
//!
//! Everything here is read-only once the page is mounted. The engine owns a
//! [`PageContent`] and hands slices of it to the controllers and renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("rating must be between 1 and 5 (got {0})")]
    InvalidRating(u8),
}

/// Star rating, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;
    pub const FIVE: Self = Self(5);

    pub fn new(stars: u8) -> Result<Self, ContentError> {
        if (1..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ContentError::InvalidRating(stars))
        }
    }

    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ContentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    /// Role and company, e.g. "CTO, TechCorp".
    pub title: String,
    pub rating: Rating,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Avatar initials, falling back to the first character of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        match self.avatar.as_deref() {
            Some(avatar) if !avatar.trim().is_empty() => avatar.to_string(),
            _ => self.name.chars().next().map(String::from).unwrap_or_default(),
        }
    }
}

/// A headline number animated by a count-up counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub value: u64,
    pub label: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Zap,
    Rocket,
    Shield,
    Gauge,
    Code,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Anchor (`#features`) or external target.
    pub href: String,
}

impl NavLink {
    /// The section anchor this link scrolls to, if it is an in-page link.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|anchor| !anchor.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub subheading: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaCopy {
    pub headline: String,
    pub subheading: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// The full set of copy and data rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub company_name: String,
    /// Year shown in the footer. `None` means the current year.
    #[serde(default)]
    pub copyright_year: Option<i32>,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
    pub hero: HeroCopy,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub statistics: Vec<Statistic>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    pub cta: CtaCopy,
    #[serde(default)]
    pub footer: Vec<FooterColumn>,
}
