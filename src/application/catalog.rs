//! Catalog Use Case
//!
//! The two host tools the widgets render: `search_dishes` feeds the dish
//! gallery, `get_recipe` feeds the recipe card. Their return values are the
//! widget props, unchanged.

use crate::domain::entities::{GalleryProps, MenuItem, RecipeLookup, RecipeNotFound, RecipeProps};
use crate::domain::value_objects::WidgetResource;

/// Default cap on gallery results
pub const DEFAULT_MAX_RESULTS: usize = 12;

/// Host tool names and the UI resource each one renders into
pub const SEARCH_DISHES_TOOL: &str = "search_dishes";
pub const GET_RECIPE_TOOL: &str = "get_recipe";

/// Tool descriptor advertised to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub output_template: WidgetResource,
}

/// The tools this catalog exposes
pub fn tool_specs() -> [ToolSpec; 2] {
    [
        ToolSpec {
            name: SEARCH_DISHES_TOOL,
            description: "Find dishes by simple text/filters and return a clickable gallery.",
            output_template: WidgetResource::DishGallery,
        },
        ToolSpec {
            name: GET_RECIPE_TOOL,
            description:
                "Return full recipe (ingredients, steps, nutrition, benefits) for a dish id.",
            output_template: WidgetResource::RecipeCard,
        },
    ]
}

/// Filters for `search_dishes`
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Case-insensitive title substring
    pub query: Option<String>,
    /// Keep dishes using any of these ingredients
    pub ingredients: Vec<String>,
    /// Accepted for the tool signature; not applied
    pub diet: Option<String>,
    /// Accepted for the tool signature; not applied
    pub cuisine: Option<String>,
    pub max_results: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: None,
            ingredients: Vec::new(),
            diet: None,
            cuisine: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchQuery {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Static recipe catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// `search_dishes`: filter, truncate, and project to gallery cards
    pub fn search_dishes(&self, search: &SearchQuery) -> GalleryProps {
        let query = search
            .query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        let wanted: Vec<String> = search
            .ingredients
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let items: Vec<_> = self
            .items
            .iter()
            .filter(|item| match &query {
                Some(q) => item.title.to_lowercase().contains(q.as_str()),
                None => true,
            })
            .filter(|item| wanted.is_empty() || item.uses_any_ingredient(&wanted))
            .take(search.max_results)
            .map(MenuItem::summary)
            .collect();

        GalleryProps {
            content: format!("Found {} dishes.", items.len()),
            items,
        }
    }

    /// `get_recipe`: full recipe, or the not-found shape for unknown ids
    pub fn get_recipe(&self, recipe_id: &str) -> RecipeLookup {
        match self.items.iter().find(|item| item.id == recipe_id) {
            Some(item) => RecipeLookup::Found(RecipeProps::from_item(item)),
            None => RecipeLookup::NotFound(RecipeNotFound::new(recipe_id)),
        }
    }
}
