pub mod context;
pub mod error;
pub mod json;
pub mod terminal;

pub use recipebook::presentation::theme;
