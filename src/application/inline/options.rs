//! Inline Options
//!
//! Configuration types for inline operations.

use std::path::PathBuf;

/// Options for the inline use case
#[derive(Debug, Clone)]
pub struct InlineOptions {
    /// Flat directory holding the widget build output
    pub dir: PathBuf,
    /// Render and report, but write nothing
    pub dry_run: bool,
}

impl InlineOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
