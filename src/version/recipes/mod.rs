//! Recipe implementations for every tracked upstream page
//!
//! Each recipe pairs one URL with an extractor that knows where that page
//! prints its current version. The extractors are deliberately literal: when
//! a page changes shape the extractor returns `None` and the target reports
//! a not-found error instead of a wrong version.

pub mod github;
pub mod pages;
pub mod xiph;

use std::sync::Arc;

use scraper::Html;
use tracing::debug;

use crate::version::error::RecipeError;
use crate::version::http::{FetchOptions, PageFetcher};
use crate::version::recipe::{Recipe, RecipeTable};

/// User agent for pages that reject non-browser clients
pub const BROWSER_USER_AGENT: &str = "Mozilla/72 (X11; Linux i686)";

/// Short user agent accepted by the remaining picky pages
pub const SHORT_USER_AGENT: &str = "Mozilla/72";

/// Pulls a version string out of a parsed page
pub type Extractor = fn(&Html) -> Option<String>;

/// Recipe that fetches one page and runs an extractor over it
pub struct PageRecipe {
    fetcher: Arc<PageFetcher>,
    url: String,
    options: FetchOptions,
    extract: Extractor,
}

impl PageRecipe {
    pub fn new(fetcher: Arc<PageFetcher>, url: impl Into<String>, extract: Extractor) -> Self {
        Self {
            fetcher,
            url: url.into(),
            options: FetchOptions::default(),
            extract,
        }
    }

    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.options.user_agent = Some(user_agent);
        self
    }

    pub fn with_cookies(mut self) -> Self {
        self.options.cookies = true;
        self
    }

    fn extract_from(&self, body: &str) -> Option<String> {
        let doc = Html::parse_document(body);
        (self.extract)(&doc).filter(|version| !version.is_empty())
    }
}

#[async_trait::async_trait]
impl Recipe for PageRecipe {
    async fn latest_version(&self) -> Result<String, RecipeError> {
        let body = self.fetcher.fetch(&self.url, &self.options).await?;

        let version = self
            .extract_from(&body)
            .ok_or_else(|| RecipeError::NotFound(self.url.clone()))?;

        debug!("{} reports version {}", self.url, version);
        Ok(version)
    }
}

/// Build the recipe table covering every built-in target
pub fn default_recipes(fetcher: Arc<PageFetcher>) -> RecipeTable {
    let mut table = RecipeTable::new();
    github::register(&mut table, &fetcher);
    xiph::register(&mut table, &fetcher);
    pages::register(&mut table, &fetcher);
    table
}
