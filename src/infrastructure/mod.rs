//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system implementation
//! - `events/` - Inline event sinks (console, NDJSON)
//! - `catalog/` - The static demo menu

pub mod catalog;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use catalog::demo_menu;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
