//! Composite homepage document and its sections.
//!
//! Every section struct defaults to its template, so a section that is
//! stored with only some of its fields is completed from the template when
//! it is read.

use super::entity::{FaqItem, ServiceCard, SocialLink, StatCard, Testimonial, WhyChooseCard};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub heading_line1: String,
    pub heading_line1_highlight: String,
    pub heading_line2: String,
    pub heading_line2_highlight: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub trust_label: String,
    pub trusted_companies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesContent {
    pub superheading: String,
    pub heading: String,
    pub description: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub superheading: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub button_text: String,
    pub button_link: String,
    pub stats: Vec<StatCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhyChooseUsContent {
    pub superheading: String,
    pub heading: String,
    pub description: String,
    pub cards: Vec<WhyChooseCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsContent {
    pub superheading: String,
    pub heading: String,
    pub description: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqContent {
    pub superheading: String,
    pub heading: String,
    pub description: String,
    /// Both columns in one list; see `ordering::partition_by_column`.
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub phone2: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactContent {
    pub superheading: String,
    pub heading: String,
    pub description: String,
    pub contact_card_title: String,
    pub contact_info: ContactInfo,
    pub social_links: Vec<SocialLink>,
}

/// The `homepage` document: seven sections stored as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomepageContent {
    pub hero: HeroContent,
    pub services: ServicesContent,
    pub about: AboutContent,
    pub why_choose_us: WhyChooseUsContent,
    pub testimonials: TestimonialsContent,
    pub faq: FaqContent,
    pub contact: ContactContent,
}

/// One replacement section of the homepage document.
///
/// Sections are not stored separately; writing one re-sends the whole
/// homepage with that section swapped in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomepageSection {
    Hero(HeroContent),
    Services(ServicesContent),
    About(AboutContent),
    WhyChooseUs(WhyChooseUsContent),
    Testimonials(TestimonialsContent),
    Faq(FaqContent),
    Contact(ContactContent),
}

impl HomepageSection {
    /// Section names as used in the stored document.
    pub const NAMES: [&'static str; 7] = [
        "hero",
        "services",
        "about",
        "whyChooseUs",
        "testimonials",
        "faq",
        "contact",
    ];

    /// Field name of this section inside the homepage document.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hero(_) => "hero",
            Self::Services(_) => "services",
            Self::About(_) => "about",
            Self::WhyChooseUs(_) => "whyChooseUs",
            Self::Testimonials(_) => "testimonials",
            Self::Faq(_) => "faq",
            Self::Contact(_) => "contact",
        }
    }

    /// Parses a section from its field name and JSON value.
    ///
    /// Missing section fields are filled from the section template.
    pub fn from_json(name: &str, value: serde_json::Value) -> Result<Self, SectionParseError> {
        let section = match name.trim() {
            "hero" => Self::Hero(parse_section(name, value)?),
            "services" => Self::Services(parse_section(name, value)?),
            "about" => Self::About(parse_section(name, value)?),
            "whyChooseUs" => Self::WhyChooseUs(parse_section(name, value)?),
            "testimonials" => Self::Testimonials(parse_section(name, value)?),
            "faq" => Self::Faq(parse_section(name, value)?),
            "contact" => Self::Contact(parse_section(name, value)?),
            other => return Err(SectionParseError::UnknownSection(other.to_string())),
        };
        Ok(section)
    }

    /// Returns `current` with this section replaced and every other section
    /// untouched.
    pub fn apply_to(self, current: &HomepageContent) -> HomepageContent {
        let mut next = current.clone();
        match self {
            Self::Hero(value) => next.hero = value,
            Self::Services(value) => next.services = value,
            Self::About(value) => next.about = value,
            Self::WhyChooseUs(value) => next.why_choose_us = value,
            Self::Testimonials(value) => next.testimonials = value,
            Self::Faq(value) => next.faq = value,
            Self::Contact(value) => next.contact = value,
        }
        next
    }
}

fn parse_section<T: serde::de::DeserializeOwned>(
    name: &str,
    value: serde_json::Value,
) -> Result<T, SectionParseError> {
    serde_json::from_value(value).map_err(|err| SectionParseError::InvalidShape {
        section: name.to_string(),
        message: err.to_string(),
    })
}

/// Error returned by [`HomepageSection::from_json`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionParseError {
    UnknownSection(String),
    InvalidShape { section: String, message: String },
}

impl Display for SectionParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSection(name) => write!(
                f,
                "unknown homepage section `{name}`; expected one of {}",
                HomepageSection::NAMES.join("|")
            ),
            Self::InvalidShape { section, message } => {
                write!(f, "invalid `{section}` section: {message}")
            }
        }
    }
}

impl std::error::Error for SectionParseError {}
