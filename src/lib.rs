//! RecipeBook - recipe widgets for chat hosts
//!
//! Two parts share this crate: the catalog behind the `search_dishes` and
//! `get_recipe` host tools with the widget resources they render into, and
//! the post-build inliner that folds each hashed widget bundle's JS and CSS
//! into its HTML entry point so the host can load it as a single document.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod widget;

// Re-exports for convenience
pub use application::{Catalog, InlineOptions, InlineReport, InlineUseCase, SearchQuery};
pub use config::Config;
pub use domain::services::{mount_id, render_document};
pub use domain::value_objects::WidgetResource;
pub use error::{RecipeBookError, RecipeBookResult};
