//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{Catalog, InlineUseCase, WidgetResourceLoader};
use crate::config::Config;
use crate::infrastructure::{demo_menu, LocalFs};

/// Type alias for the concrete InlineUseCase
pub type ConcreteInlineUseCase = InlineUseCase<LocalFs>;

/// Type alias for the concrete widget loader
pub type ConcreteWidgetLoader = WidgetResourceLoader<LocalFs>;

/// Create an inline use case honoring the configured write mode
pub fn create_inline_use_case(config: &Config) -> ConcreteInlineUseCase {
    InlineUseCase::new(LocalFs::with_atomic_writes(config.inline.atomic_writes))
}

/// Catalog over the static demo menu
pub fn create_catalog() -> Catalog {
    Catalog::new(demo_menu())
}

/// Widget loader reading from `dist_dir`, or the configured dist directory
pub fn create_widget_loader(config: &Config, dist_dir: Option<&Path>) -> ConcreteWidgetLoader {
    let dir = dist_dir.unwrap_or(config.widgets.dist_dir.as_path());
    WidgetResourceLoader::new(LocalFs::new(), dir)
}
