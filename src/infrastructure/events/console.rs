//! Console Event Sink
//!
//! Human-readable progress lines for the inline pass. Observability only;
//! nothing parses this stream.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{InlineEvent, InlineEventSink};
use crate::presentation::theme::{self, Icon};

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn stdout(verbosity: Verbosity, color: bool, unicode: bool) -> Self {
        Self::with_writer(io::stdout(), verbosity, color, unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbosity: Verbosity,
        color: bool,
        unicode: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color,
            unicode,
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.render(self.color, self.unicode)
    }

    fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn render(&self, event: InlineEvent) -> Option<String> {
        if self.quiet() && !matches!(event, InlineEvent::Completed { .. }) {
            return None;
        }
        match event {
            InlineEvent::Started { dir, dry_run } => {
                let suffix = if dry_run { " (dry run)" } else { "" };
                Some(format!("Inlining widget assets in {}{}", dir.display(), suffix))
            }

            InlineEvent::Discovered { count } => {
                Some(format!("Found {} HTML file(s) to inline", count))
            }

            InlineEvent::SiblingFound { kind, path, bytes } => Some(format!(
                "  {} {} {} ({} bytes)",
                self.icon(Icon::Success),
                kind,
                file_name(&path),
                bytes
            )),

            InlineEvent::SiblingMissing { kind, path } => Some(format!(
                "  {} {} {} not found, embedding empty block",
                self.icon(Icon::Warning),
                kind,
                file_name(&path)
            )),

            InlineEvent::FileInlined { path, changed, .. } => {
                let note = if changed {
                    String::new()
                } else {
                    theme::dim(" (unchanged)", self.color)
                };
                Some(format!(
                    "{} Inlined {}{}",
                    self.icon(Icon::Success),
                    path.display(),
                    note
                ))
            }

            InlineEvent::AliasMirrored { path, .. } => {
                Some(format!(
                    "  {} Updated alias {}",
                    self.icon(Icon::Arrow),
                    path.display()
                ))
            }

            InlineEvent::Completed {
                inlined_count,
                alias_count,
                dry_run,
            } => {
                let verb = if dry_run { "would inline" } else { "inlined" };
                Some(format!(
                    "Done: {} {} file(s), {} alias(es) updated",
                    verb, inlined_count, alias_count
                ))
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl InlineEventSink for ConsoleEventSink {
    fn on_event(&self, event: InlineEvent) {
        if let Some(text) = self.render(event) {
            self.line(text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        !self.quiet()
    }
}
