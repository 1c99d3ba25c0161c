use anyhow::Result;
use serde::Serialize;

use recipebook::application::SearchQuery;
use recipebook::presentation::factory;

pub struct SearchArgs {
    pub query: Option<String>,
    pub ingredients: Vec<String>,
    pub diet: Option<String>,
    pub cuisine: Option<String>,
    pub max_results: usize,
}

pub fn cmd_search(args: SearchArgs, json: bool) -> Result<()> {
    let search = SearchQuery {
        query: args.query,
        ingredients: args.ingredients,
        diet: args.diet,
        cuisine: args.cuisine,
        max_results: args.max_results,
    };

    let props = factory::create_catalog().search_dishes(&search);
    print_props(&props, json)
}

/// An unknown id still prints the not-found props and exits 0.
pub fn cmd_recipe(id: &str, json: bool) -> Result<()> {
    let lookup = factory::create_catalog().get_recipe(id);
    print_props(&lookup, json)
}

/// Tool output is the widget's props; print it as-is.
fn print_props<T: Serialize>(props: &T, json: bool) -> Result<()> {
    if json {
        crate::ui::json::emit(serde_json::to_value(props)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(props)?);
    }
    Ok(())
}
