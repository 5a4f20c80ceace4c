//! Typed page documents and the closed document key namespace.
//!
//! # Responsibility
//! - Define the shape of every page document and its sub-entities.
//! - Tie each document type to its storage key.
//!
//! # Invariants
//! - The key set is closed: six documents, no more are ever addressed.
//! - `T::default()` for a document type is that document's template.

pub mod entity;
pub mod homepage;
pub mod pages;

use homepage::HomepageContent;
use pages::{
    AboutPageContent, BlogPageContent, GlobalPresencePageContent, JoinPageContent,
    ServicesPageContent,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storage key of one page document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentKey {
    Homepage,
    AboutPage,
    BlogPage,
    ServicesPage,
    GlobalPresencePage,
    JoinPage,
}

impl DocumentKey {
    /// Every known document key, in a fixed order.
    pub const ALL: [DocumentKey; 6] = [
        Self::Homepage,
        Self::AboutPage,
        Self::BlogPage,
        Self::ServicesPage,
        Self::GlobalPresencePage,
        Self::JoinPage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::AboutPage => "aboutPage",
            Self::BlogPage => "blogPage",
            Self::ServicesPage => "servicesPage",
            Self::GlobalPresencePage => "globalPresencePage",
            Self::JoinPage => "joinPage",
        }
    }
}

impl Display for DocumentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string outside the document key namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDocumentKey(pub String);

impl Display for UnknownDocumentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown document key `{}`", self.0)
    }
}

impl std::error::Error for UnknownDocumentKey {}

impl FromStr for DocumentKey {
    type Err = UnknownDocumentKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| UnknownDocumentKey(trimmed.to_string()))
    }
}

/// A page document type bound to its storage key.
pub trait ContentDocument:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Send + Sync + 'static
{
    const KEY: DocumentKey;

    /// The complete fallback value for this document.
    fn template() -> Self {
        Self::default()
    }

    fn into_page(self) -> PageContent;

    /// Unwraps `page` when it holds this document type.
    fn from_page(page: PageContent) -> Option<Self>;

    fn from_site(site: &SiteContent) -> &Self;
}

/// One merged document of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Homepage(Box<HomepageContent>),
    AboutPage(Box<AboutPageContent>),
    BlogPage(Box<BlogPageContent>),
    ServicesPage(Box<ServicesPageContent>),
    GlobalPresencePage(Box<GlobalPresencePageContent>),
    JoinPage(Box<JoinPageContent>),
}

impl PageContent {
    pub fn key(&self) -> DocumentKey {
        match self {
            Self::Homepage(_) => DocumentKey::Homepage,
            Self::AboutPage(_) => DocumentKey::AboutPage,
            Self::BlogPage(_) => DocumentKey::BlogPage,
            Self::ServicesPage(_) => DocumentKey::ServicesPage,
            Self::GlobalPresencePage(_) => DocumentKey::GlobalPresencePage,
            Self::JoinPage(_) => DocumentKey::JoinPage,
        }
    }

    /// The template document stored under `key`.
    pub fn template(key: DocumentKey) -> Self {
        match key {
            DocumentKey::Homepage => HomepageContent::template().into_page(),
            DocumentKey::AboutPage => AboutPageContent::template().into_page(),
            DocumentKey::BlogPage => BlogPageContent::template().into_page(),
            DocumentKey::ServicesPage => ServicesPageContent::template().into_page(),
            DocumentKey::GlobalPresencePage => GlobalPresencePageContent::template().into_page(),
            DocumentKey::JoinPage => JoinPageContent::template().into_page(),
        }
    }

    /// Serializes the document to the JSON value written to the store.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Homepage(doc) => serde_json::to_value(doc),
            Self::AboutPage(doc) => serde_json::to_value(doc),
            Self::BlogPage(doc) => serde_json::to_value(doc),
            Self::ServicesPage(doc) => serde_json::to_value(doc),
            Self::GlobalPresencePage(doc) => serde_json::to_value(doc),
            Self::JoinPage(doc) => serde_json::to_value(doc),
        }
    }

    /// Returns the typed document when it is of type `T`.
    pub fn downcast<T: ContentDocument>(self) -> Option<T> {
        T::from_page(self)
    }
}

/// Merged snapshots of every page document.
///
/// `SiteContent::default()` is the full template set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    pub homepage: HomepageContent,
    pub about_page: AboutPageContent,
    pub blog_page: BlogPageContent,
    pub services_page: ServicesPageContent,
    pub global_presence_page: GlobalPresencePageContent,
    pub join_page: JoinPageContent,
}

impl SiteContent {
    /// Typed access to one document.
    pub fn get<T: ContentDocument>(&self) -> &T {
        T::from_site(self)
    }

    /// Owned copy of the document stored under `key`.
    pub fn page(&self, key: DocumentKey) -> PageContent {
        match key {
            DocumentKey::Homepage => self.homepage.clone().into_page(),
            DocumentKey::AboutPage => self.about_page.clone().into_page(),
            DocumentKey::BlogPage => self.blog_page.clone().into_page(),
            DocumentKey::ServicesPage => self.services_page.clone().into_page(),
            DocumentKey::GlobalPresencePage => self.global_presence_page.clone().into_page(),
            DocumentKey::JoinPage => self.join_page.clone().into_page(),
        }
    }

    /// Replaces the document `page` belongs to.
    pub fn apply(&mut self, page: PageContent) {
        match page {
            PageContent::Homepage(doc) => self.homepage = *doc,
            PageContent::AboutPage(doc) => self.about_page = *doc,
            PageContent::BlogPage(doc) => self.blog_page = *doc,
            PageContent::ServicesPage(doc) => self.services_page = *doc,
            PageContent::GlobalPresencePage(doc) => self.global_presence_page = *doc,
            PageContent::JoinPage(doc) => self.join_page = *doc,
        }
    }
}

macro_rules! content_document {
    ($ty:ty, $key:ident, $field:ident) => {
        impl ContentDocument for $ty {
            const KEY: DocumentKey = DocumentKey::$key;

            fn into_page(self) -> PageContent {
                PageContent::$key(Box::new(self))
            }

            fn from_page(page: PageContent) -> Option<Self> {
                match page {
                    PageContent::$key(doc) => Some(*doc),
                    _ => None,
                }
            }

            fn from_site(site: &SiteContent) -> &Self {
                &site.$field
            }
        }
    };
}

content_document!(HomepageContent, Homepage, homepage);
content_document!(AboutPageContent, AboutPage, about_page);
content_document!(BlogPageContent, BlogPage, blog_page);
content_document!(ServicesPageContent, ServicesPage, services_page);
content_document!(GlobalPresencePageContent, GlobalPresencePage, global_presence_page);
content_document!(JoinPageContent, JoinPage, join_page);

#[cfg(test)]
mod tests {
    use super::{DocumentKey, PageContent, SiteContent};
    use crate::model::pages::JoinPageContent;

    #[test]
    fn document_keys_round_trip_through_strings() {
        for key in DocumentKey::ALL {
            assert_eq!(key.as_str().parse::<DocumentKey>().unwrap(), key);
        }
        assert!("contactPage".parse::<DocumentKey>().is_err());
    }

    #[test]
    fn site_content_apply_replaces_only_matching_document() {
        let mut site = SiteContent::default();
        let mut join = JoinPageContent::default();
        join.page_title = "Careers".to_string();

        site.apply(PageContent::JoinPage(Box::new(join.clone())));
        assert_eq!(site.join_page, join);
        assert_eq!(site.about_page, SiteContent::default().about_page);
    }

    #[test]
    fn downcast_checks_the_document_key() {
        let page = PageContent::template(DocumentKey::JoinPage);
        assert!(page.clone().downcast::<JoinPageContent>().is_some());
        assert!(page
            .downcast::<crate::model::pages::BlogPageContent>()
            .is_none());
    }
}
