//! Navigable routes of the application.
//!
//! Routes are the only navigation state the client produces: the sign-in
//! page, the dashboard, and one listing page per [`FileCategory`], each
//! optionally carrying a `q` search parameter.

use std::fmt;

use url::form_urlencoded;
use url::Url;

use super::error::{FiledeckError, Result};

/// Base used to resolve relative paths with the `url` parser.
const ROUTE_BASE: &str = "http://filedeck.local/";

/// Name of the search query parameter.
pub const SEARCH_PARAM: &str = "q";

/// File listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Documents,
    Images,
    Media,
    Others,
}

impl FileCategory {
    pub const ALL: [Self; 4] = [Self::Documents, Self::Images, Self::Media, Self::Others];

    /// Path segment of the listing page.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Images => "images",
            Self::Media => "media",
            Self::Others => "others",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Page part of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    SignIn,
    Dashboard,
    Category(FileCategory),
}

impl Page {
    /// Path without query string.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::SignIn => "/sign-in".to_string(),
            Self::Dashboard => "/".to_string(),
            Self::Category(category) => format!("/{}", category.slug()),
        }
    }
}

/// A page plus an optional search parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub page: Page,
    pub query: Option<String>,
}

impl Route {
    #[must_use]
    pub const fn new(page: Page) -> Self {
        Self { page, query: None }
    }

    #[must_use]
    pub const fn sign_in() -> Self {
        Self::new(Page::SignIn)
    }

    #[must_use]
    pub const fn dashboard() -> Self {
        Self::new(Page::Dashboard)
    }

    /// Listing page for `category` carrying `query` as its search parameter.
    #[must_use]
    pub fn category(category: FileCategory, query: impl Into<String>) -> Self {
        Self {
            page: Page::Category(category),
            query: Some(query.into()),
        }
    }

    /// Same page with the search parameter removed.
    #[must_use]
    pub const fn without_query(&self) -> Self {
        Self::new(self.page)
    }

    /// Parses a path such as `/images?q=cat` into a route.
    ///
    /// An empty `q` parameter is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`FiledeckError::Route`] if the path is malformed or names an
    /// unknown page.
    pub fn parse(input: &str) -> Result<Self> {
        let base = Url::parse(ROUTE_BASE).map_err(|e| FiledeckError::Route(e.to_string()))?;
        let url = base
            .join(input.trim())
            .map_err(|e| FiledeckError::Route(format!("{input}: {e}")))?;

        let segment = url.path().trim_matches('/');
        let page = match segment {
            "" => Page::Dashboard,
            "sign-in" => Page::SignIn,
            other => FileCategory::from_slug(other)
                .map(Page::Category)
                .ok_or_else(|| FiledeckError::Route(format!("unknown page: {input}")))?,
        };

        let query = url
            .query_pairs()
            .find(|(key, _)| key == SEARCH_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        Ok(Self { page, query })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.page.path())?;
        if let Some(query) = &self.query {
            let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
            write!(f, "?{SEARCH_PARAM}={encoded}")?;
        }
        Ok(())
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::dashboard()
    }
}
