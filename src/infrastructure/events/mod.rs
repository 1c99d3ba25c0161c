//! Event Sinks
//!
//! Implementations of `InlineEventSink` for the terminal and for NDJSON.

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
