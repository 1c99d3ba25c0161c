//! Dish card actions and text

use serde_json::json;

use crate::application::GET_RECIPE_TOOL;
use crate::domain::entities::DishSummary;

use super::bridge::{BridgeOutcome, HostEnvironment};

/// `type` field of the message posted when a dish is added
pub const SELECT_MESSAGE_TYPE: &str = "select";

const MISSING: &str = "—";

/// "View Recipe": ask the host to run `get_recipe` for this dish
pub fn view_recipe(env: &HostEnvironment, dish: &DishSummary) -> BridgeOutcome {
    env.call_tool(GET_RECIPE_TOOL, json!({ "recipe_id": dish.id }))
}

/// "Add": tell the host this dish was selected
pub fn add(env: &HostEnvironment, dish: &DishSummary) -> BridgeOutcome {
    env.post_message(json!({
        "type": SELECT_MESSAGE_TYPE,
        "id": dish.id,
        "title": dish.title,
    }))
}

/// One-line calorie and protein summary, `—` where a value is missing
pub fn quick_facts_line(dish: &DishSummary) -> String {
    let facts = dish.quick_facts.as_ref();
    let kcal = facts
        .and_then(|f| f.kcal)
        .map_or_else(|| MISSING.to_string(), |v| v.to_string());
    let protein = facts
        .and_then(|f| f.protein_g)
        .map_or_else(|| MISSING.to_string(), |v| v.to_string());
    format!("{kcal} kcal • {protein}g protein")
}
