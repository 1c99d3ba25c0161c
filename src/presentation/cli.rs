//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::DEFAULT_MAX_RESULTS;
use crate::domain::value_objects::WidgetResource;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// RecipeBook - recipe widgets for chat hosts and their asset inliner
#[derive(Parser, Debug)]
#[command(name = "recipebook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Embed each hashed HTML file's JS and CSS so it loads standalone
    Inline {
        /// Build output directory (defaults to the configured asset dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Find dishes and print gallery props
    Search {
        /// Case-insensitive title substring
        #[arg(short, long)]
        query: Option<String>,

        /// Ingredient name (can be specified multiple times)
        #[arg(short, long = "ingredient", value_name = "NAME")]
        ingredients: Vec<String>,

        /// Diet filter (accepted, not applied)
        #[arg(long)]
        diet: Option<String>,

        /// Cuisine filter (accepted, not applied)
        #[arg(long)]
        cuisine: Option<String>,

        /// Maximum number of dishes returned
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },

    /// Print the full recipe for a dish id
    Recipe {
        /// Dish id (e.g. r1)
        id: String,
    },

    /// Print a compiled widget resource
    Widget {
        /// Widget to load: gallery or recipe
        resource: WidgetResource,

        /// Widget dist directory (defaults to the configured dist dir)
        #[arg(long)]
        dist: Option<PathBuf>,
    },
}
