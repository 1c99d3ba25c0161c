//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InlineUseCase` - Rewrites a widget build into self-contained HTML
//! - `Catalog` - The `search_dishes` / `get_recipe` host tools
//! - `WidgetResourceLoader` - Serves compiled widget HTML by resource URI

pub mod catalog;
pub mod inline;
pub mod resources;

pub use catalog::{
    tool_specs, Catalog, SearchQuery, ToolSpec, DEFAULT_MAX_RESULTS, GET_RECIPE_TOOL,
    SEARCH_DISHES_TOOL,
};
pub use inline::{InlineOptions, InlineReport, InlineUseCase, InlinedFile};
pub use resources::{WidgetDocument, WidgetResourceLoader};
