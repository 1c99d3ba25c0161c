//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `theme` - Colors and icons shared by every human-readable output
//!
//! ## Usage
//!
//! ```ignore
//! use recipebook::presentation::factory;
//!
//! let use_case = factory::create_inline_use_case(&config);
//! let report = use_case.execute(&options, &events)?;
//! ```

pub mod cli;
pub mod factory;
pub mod theme;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_catalog, create_inline_use_case, create_widget_loader};
