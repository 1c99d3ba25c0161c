//! Widget Resource Value Object
//!
//! UI resources the host loads for tool output templates.

use std::fmt;
use std::str::FromStr;

/// A compiled widget the host can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetResource {
    DishGallery,
    RecipeCard,
}

impl WidgetResource {
    /// MIME type the host expects for widget HTML
    pub const MIME: &'static str = "text/html+skybridge";

    pub fn uri(self) -> &'static str {
        match self {
            WidgetResource::DishGallery => "ui://dish-gallery",
            WidgetResource::RecipeCard => "ui://recipe-card",
        }
    }

    /// Stem of the built HTML file under the dist directory.
    ///
    /// Both widgets currently ship in the same bundle.
    pub fn dist_name(self) -> &'static str {
        match self {
            WidgetResource::DishGallery | WidgetResource::RecipeCard => "index",
        }
    }

    pub fn all() -> [WidgetResource; 2] {
        [WidgetResource::DishGallery, WidgetResource::RecipeCard]
    }
}

impl fmt::Display for WidgetResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl FromStr for WidgetResource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gallery" | "dish-gallery" | "ui://dish-gallery" => Ok(WidgetResource::DishGallery),
            "recipe" | "recipe-card" | "ui://recipe-card" => Ok(WidgetResource::RecipeCard),
            other => Err(format!(
                "unknown widget '{}': expected 'gallery' or 'recipe'",
                other
            )),
        }
    }
}
