//! Catalog data sources

mod menu;

pub use menu::demo_menu;
