//! JSON Event Sink
//!
//! Outputs inline events as NDJSON for CI/automation consumption.

use crate::domain::ports::{InlineEvent, InlineEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl InlineEventSink for JsonEventSink {
    fn on_event(&self, event: InlineEvent) {
        let json = match event {
            InlineEvent::Started { dir, dry_run } => {
                serde_json::json!({
                    "event": "start",
                    "command": "inline",
                    "dir": dir.display().to_string(),
                    "dry_run": dry_run,
                })
            }

            InlineEvent::Discovered { count } => {
                serde_json::json!({
                    "event": "discovered",
                    "command": "inline",
                    "count": count,
                })
            }

            InlineEvent::SiblingFound { kind, path, bytes } => {
                serde_json::json!({
                    "event": "sibling_found",
                    "command": "inline",
                    "kind": kind.as_str(),
                    "path": path.display().to_string(),
                    "bytes": bytes,
                })
            }

            InlineEvent::SiblingMissing { kind, path } => {
                serde_json::json!({
                    "event": "sibling_missing",
                    "command": "inline",
                    "kind": kind.as_str(),
                    "path": path.display().to_string(),
                })
            }

            InlineEvent::FileInlined {
                index,
                path,
                changed,
            } => {
                serde_json::json!({
                    "event": "item_written",
                    "command": "inline",
                    "index": index,
                    "path": path.display().to_string(),
                    "changed": changed,
                })
            }

            InlineEvent::AliasMirrored { index, path } => {
                serde_json::json!({
                    "event": "alias_written",
                    "command": "inline",
                    "index": index,
                    "path": path.display().to_string(),
                })
            }

            InlineEvent::Completed {
                inlined_count,
                alias_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "inline",
                    "status": "success",
                    "inlined": inlined_count,
                    "aliases": alias_count,
                    "dry_run": dry_run,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SiblingKind;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(InlineEvent::Started {
            dir: PathBuf::from("ui-widget/dist"),
            dry_run: false,
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["command"], "inline");
        assert_eq!(events[0]["dir"], "ui-widget/dist");
        assert_eq!(events[0]["dry_run"], false);
    }

    #[test]
    fn json_sink_outputs_sibling_events() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(InlineEvent::SiblingFound {
            kind: SiblingKind::Js,
            path: PathBuf::from("foo-ab12.js"),
            bytes: 14,
        });
        sink.on_event(InlineEvent::SiblingMissing {
            kind: SiblingKind::Css,
            path: PathBuf::from("foo-ab12.css"),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "sibling_found");
        assert_eq!(events[0]["kind"], "js");
        assert_eq!(events[0]["bytes"], 14);
        assert_eq!(events[1]["event"], "sibling_missing");
        assert_eq!(events[1]["kind"], "css");
        assert_eq!(events[1]["path"], "foo-ab12.css");
    }

    #[test]
    fn json_sink_outputs_write_events() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(InlineEvent::FileInlined {
            index: 0,
            path: PathBuf::from("foo-ab12.html"),
            changed: true,
        });
        sink.on_event(InlineEvent::AliasMirrored {
            index: 0,
            path: PathBuf::from("foo.html"),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "item_written");
        assert_eq!(events[0]["changed"], true);
        assert_eq!(events[1]["event"], "alias_written");
        assert_eq!(events[1]["path"], "foo.html");
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(InlineEvent::Completed {
            inlined_count: 2,
            alias_count: 1,
            dry_run: true,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["status"], "success");
        assert_eq!(events[0]["inlined"], 2);
        assert_eq!(events[0]["aliases"], 1);
        assert_eq!(events[0]["dry_run"], true);
    }

    #[test]
    fn json_sink_writes_one_object_per_line() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(InlineEvent::Discovered { count: 3 });
        sink.on_event(InlineEvent::Discovered { count: 0 });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn json_sink_wants_detailed_events() {
        let (writer, _) = TestWriter::new();
        assert!(JsonEventSink::with_writer(writer).wants_detailed_events());
    }
}
