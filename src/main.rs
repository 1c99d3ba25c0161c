//! RecipeBook CLI
//!
//! Usage: recipebook <COMMAND>
//!
//! Commands:
//!   inline  Embed JS/CSS into hashed widget HTML
//!   search  Find dishes (search_dishes tool output)
//!   recipe  Full recipe for a dish (get_recipe tool output)
//!   widget  Print a compiled widget resource

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use recipebook::presentation::{Cli, Commands};

use commands::catalog::SearchArgs;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inline { dir, dry_run } => {
            commands::inline::cmd_inline(dir, dry_run, cli.json, cli.verbose, cli.color)
        }
        Commands::Search {
            query,
            ingredients,
            diet,
            cuisine,
            max_results,
        } => commands::catalog::cmd_search(
            SearchArgs {
                query,
                ingredients,
                diet,
                cuisine,
                max_results,
            },
            cli.json,
        ),
        Commands::Recipe { id } => commands::catalog::cmd_recipe(&id, cli.json),
        Commands::Widget { resource, dist } => {
            commands::widget::cmd_widget(resource, dist, cli.json)
        }
    }
}
