//! Inline Use Case Module
//!
//! Rewrites a widget build directory into self-contained HTML documents.

mod options;
mod result;
mod use_case;

pub use options::InlineOptions;
pub use result::{InlineReport, InlinedFile};
pub use use_case::InlineUseCase;
