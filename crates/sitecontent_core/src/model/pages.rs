//! Standalone page documents.

use super::entity::{BlogPost, GlobalLocation, ServiceBlock, TeamMember};
use serde::{Deserialize, Serialize};

/// The `aboutPage` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutPageContent {
    pub page_title: String,
    pub page_description: String,

    pub about_superheading: String,
    pub about_heading: String,
    pub about_description: String,
    pub about_button_text: String,
    pub about_button_link: String,
    pub about_image: String,
    /// Variant of `about_image` for the light theme.
    pub about_image_light: String,

    pub story_superheading: String,
    pub story_heading: String,
    pub story_paragraphs: Vec<String>,

    pub team_superheading: String,
    pub team_heading: String,
    pub team_description: String,
    pub team_members: Vec<TeamMember>,
}

/// The `blogPage` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPageContent {
    pub page_title: String,
    pub page_description: String,
    pub posts: Vec<BlogPost>,
}

impl BlogPageContent {
    /// Finds a post by its URL slug.
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }
}

/// The `servicesPage` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesPageContent {
    pub page_title: String,
    pub page_breadcrumb: String,
    pub page_description: String,
    pub blocks: Vec<ServiceBlock>,
}

/// The `globalPresencePage` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalPresencePageContent {
    pub page_title: String,
    pub page_description: String,
    pub locations: Vec<GlobalLocation>,
}

/// The `joinPage` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinPageContent {
    pub page_title: String,
    pub page_description: String,
    pub form_title: String,
    pub form_description: String,
    pub success_title: String,
    pub success_message: String,
    pub success_button_text: String,
    pub success_button_link: String,
}
