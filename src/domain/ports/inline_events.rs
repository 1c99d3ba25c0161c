//! Inline Event Port
//!
//! Observable interface for the inlining pipeline.
//! Drives human-readable progress lines and NDJSON event streams.

use std::fmt;
use std::path::PathBuf;

/// Which sibling source of a triplet an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingKind {
    Js,
    Css,
}

impl SiblingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SiblingKind::Js => "js",
            SiblingKind::Css => "css",
        }
    }
}

impl fmt::Display for SiblingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiblingKind::Js => write!(f, "JS"),
            SiblingKind::Css => write!(f, "CSS"),
        }
    }
}

/// Event emitted while inlining an asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEvent {
    /// Run started
    Started { dir: PathBuf, dry_run: bool },

    /// Candidate HTML entry points found
    Discovered { count: usize },

    /// Sibling source present
    SiblingFound {
        kind: SiblingKind,
        path: PathBuf,
        bytes: usize,
    },

    /// Sibling source absent; its block will be empty
    SiblingMissing { kind: SiblingKind, path: PathBuf },

    /// Hashed HTML rewritten
    FileInlined {
        index: usize,
        path: PathBuf,
        changed: bool,
    },

    /// Unhashed alias rewritten with the same document
    AliasMirrored { index: usize, path: PathBuf },

    /// Run completed
    Completed {
        inlined_count: usize,
        alias_count: usize,
        dry_run: bool,
    },
}

/// Trait for receiving inline events
///
/// Implementations:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait InlineEventSink {
    /// Handle an inline event
    fn on_event(&self, event: InlineEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl<T: InlineEventSink + ?Sized> InlineEventSink for &T {
    fn on_event(&self, event: InlineEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl InlineEventSink for NoopEventSink {
    fn on_event(&self, _event: InlineEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
