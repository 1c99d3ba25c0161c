//! Domain Entities
//!
//! Core business objects with identity.

pub mod recipe;
pub mod triplet;

pub use recipe::{
    DishSummary, GalleryProps, Ingredient, MenuItem, Nutrition, QuickFacts, RecipeDetails,
    RecipeLookup, RecipeNotFound, RecipeProps,
};
pub use triplet::{AssetTriplet, SiblingContent};
