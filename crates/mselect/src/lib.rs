//! **mselect**: a terminal multi-select search over the Rick and Morty
//! character catalog.
//!
//! Typing three or more characters filters the catalog by name, scrolling
//! to the end of the dropdown loads the next page, and picked characters
//! collect as removable chips above the input. The binary prints the final
//! selection to stdout.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Domain types, the [`CatalogSource`] seam and the GraphQL client |
//! | [`search_select`] | The search-and-select controller as a component |
//! | [`app`] | Top-level [`Model`](mselect_core::Model) wiring input and layout |
//! | [`layout`] | Control and dropdown regions for drawing and hit testing |
//! | [`config`] | Command-line arguments and their validation |
//! | [`output`] | Printing the selection |

pub mod app;
pub mod catalog;
pub mod config;
pub mod layout;
pub mod output;
pub mod search_select;

pub use app::{App, AppFlags};
pub use catalog::{CatalogSource, FetchError, FilterQuery, GraphqlCatalog, Page, ResultItem};
pub use config::{Cli, Config, ConfigError};
pub use output::{format_selection, OutputFormat};
pub use search_select::{SearchSelect, Selected};
