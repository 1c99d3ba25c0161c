//! Recipe catalog entities
//!
//! Menu records plus the JSON shapes the host tools return. The tool output
//! is handed to the widget verbatim as its props, so field names follow the
//! widget's wire format (`imageUrl`, `quickFacts`, `protein_g`).

use serde::{Deserialize, Serialize};

/// Headline numbers shown on a gallery card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kcal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub qty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub kcal: u32,
    pub protein_g: u32,
    pub carb_g: u32,
    pub fat_g: u32,
}

/// Full recipe body behind a menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetails {
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub nutrition: Nutrition,
    pub benefits: Vec<String>,
    pub tags: Vec<String>,
    pub image_url: String,
}

/// One dish on the static menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub quick_facts: QuickFacts,
    pub details: RecipeDetails,
}

impl MenuItem {
    /// Card-sized projection used by the gallery
    pub fn summary(&self) -> DishSummary {
        DishSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            image_url: Some(self.image_url.clone()),
            quick_facts: Some(self.quick_facts.clone()),
        }
    }

    /// True when any ingredient name, lower-cased, is in `wanted`
    pub fn uses_any_ingredient(&self, wanted: &[String]) -> bool {
        self.details
            .ingredients
            .iter()
            .any(|ing| wanted.contains(&ing.name.to_lowercase()))
    }
}

/// A gallery card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishSummary {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_facts: Option<QuickFacts>,
}

/// Props for the dish gallery widget (`search_dishes` output)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryProps {
    #[serde(default)]
    pub items: Vec<DishSummary>,
    #[serde(default)]
    pub content: String,
}

/// Props for the recipe card widget (`get_recipe` output)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeProps {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub nutrition: Nutrition,
    pub benefits: Vec<String>,
    pub tags: Vec<String>,
    pub content: String,
}

impl RecipeProps {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image_url: item.details.image_url.clone(),
            ingredients: item.details.ingredients.clone(),
            steps: item.details.steps.clone(),
            nutrition: item.details.nutrition,
            benefits: item.details.benefits.clone(),
            tags: item.details.tags.clone(),
            content: format!("Recipe for {}", item.title),
        }
    }
}

/// Returned in place of a recipe when the id is unknown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeNotFound {
    pub content: String,
    pub error: String,
    pub recipe_id: String,
}

impl RecipeNotFound {
    pub fn new(recipe_id: impl Into<String>) -> Self {
        Self {
            content: "Recipe not found.".to_string(),
            error: "not_found".to_string(),
            recipe_id: recipe_id.into(),
        }
    }
}

/// `get_recipe` result; serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecipeLookup {
    Found(RecipeProps),
    NotFound(RecipeNotFound),
}

impl RecipeLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, RecipeLookup::Found(_))
    }
}
