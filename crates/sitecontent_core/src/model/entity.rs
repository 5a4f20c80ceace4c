//! Sub-entity records stored inside page documents.
//!
//! # Invariants
//! - `id` is unique within its list and carries no ordering meaning.
//! - `order` defines display sequence; it may repeat or have gaps.
//! - Every field has a serde default so a partially written entity still
//!   deserializes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An item addressed by a caller-generated id inside a document list.
pub trait SubEntity {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// A sub-entity with an explicit display position.
pub trait Ordered: SubEntity {
    fn order(&self) -> i64;
    fn set_order(&mut self, order: i64);
}

/// Generates a fresh sub-entity id.
///
/// Ids are UUIDv7 strings, so ids minted later sort after earlier ones.
pub fn new_entity_id() -> String {
    Uuid::now_v7().to_string()
}

macro_rules! sub_entity {
    ($($ty:ty),+ $(,)?) => {$(
        impl SubEntity for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    )+};
}

macro_rules! ordered_entity {
    ($($ty:ty),+ $(,)?) => {$(
        sub_entity!($ty);

        impl Ordered for $ty {
            fn order(&self) -> i64 {
                self.order
            }

            fn set_order(&mut self, order: i64) {
                self.order = order;
            }
        }
    )+};
}

ordered_entity!(
    ServiceCard,
    StatCard,
    WhyChooseCard,
    Testimonial,
    FaqItem,
    SocialLink,
    TeamMember,
    BlogPost,
    ServiceBlock,
);
sub_entity!(GlobalLocation);

/// Display column of a FAQ item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqColumn {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceCard {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Renders the title in the accent color.
    pub is_green_title: bool,
    pub learn_more_link: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatCard {
    pub id: String,
    /// Display text, not a number: "320", "9+".
    pub value: String,
    pub label: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhyChooseCard {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub name: String,
    pub title: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub column: FaqColumn,
    /// Position within `column`, not within the whole list.
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub id: String,
    pub icon: String,
    pub alt: String,
    pub href: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
    pub linkedin_url: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Human-formatted publication date ("January 20, 2025").
    pub date: String,
    pub read_time: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_excerpt: Option<String>,
    pub image: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceBlock {
    pub id: String,
    pub superheading: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub image_src: String,
    pub image_alt: String,
    /// Image on the left, text on the right.
    pub is_reversed: bool,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationDesignation {
    #[serde(rename = "type")]
    pub kind: String,
    /// CSS color of the marker badge.
    pub color: String,
}

/// Map marker on the global presence page.
///
/// Markers have no `order`; they render in list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalLocation {
    pub id: String,
    pub name: String,
    pub designations: Vec<LocationDesignation>,
    /// Horizontal position on the map, percent of width.
    pub x: f64,
    /// Vertical position on the map, percent of height.
    pub y: f64,
}
