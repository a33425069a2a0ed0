//! The character catalog as seen by the rest of the app.
//!
//! [`CatalogSource`] is the single capability the search controller needs:
//! fetch one page of characters for a name filter. The production
//! implementation is [`GraphqlCatalog`]; tests script their own sources.

pub mod graphql;

pub use graphql::GraphqlCatalog;

use futures::future::BoxFuture;
use serde::Serialize;
use thiserror::Error;

/// One page request: a 1-based page number and a name substring.
///
/// An empty `name` asks for the unfiltered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub page: u32,
    pub name: String,
}

impl FilterQuery {
    pub fn new(page: u32, name: impl Into<String>) -> Self {
        Self {
            page,
            name: name.into(),
        }
    }
}

/// A character as listed in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub episode_count: usize,
}

/// One page of results plus the total page count for the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub items: Vec<ResultItem>,
    pub total_pages: u32,
}

impl Page {
    /// The page reported when nothing matches the filter.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Why a page could not be fetched.
///
/// Every variant is shown to the user the same way; the distinction exists
/// for the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with status {0}")]
    Http(u16),

    #[error("catalog reported an error: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Anything that can serve pages of characters.
///
/// Returned futures own everything they need, so they can be handed to
/// [`Command::perform`](mselect_core::Command::perform) directly.
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch_page(&self, query: &FilterQuery) -> BoxFuture<'static, Result<Page, FetchError>>;
}
