//! Inline Use Case
//!
//! Orchestrates one pass over an asset directory:
//! discover → resolve → load siblings → render → write back.

use std::path::Path;

use crate::domain::entities::{AssetTriplet, SiblingContent};
use crate::domain::ports::{FileSystem, InlineEvent, InlineEventSink, SiblingKind};
use crate::domain::services::{render_document, resolve_triplet, select_targets};
use crate::domain::value_objects::ContentHash;
use crate::error::{RecipeBookError, RecipeBookResult};

use super::options::InlineOptions;
use super::result::{InlineReport, InlinedFile};

/// Inline use case
///
/// Triplets are independent: nothing computed for one file feeds another.
/// The first read or write failure aborts the run; later files are not touched.
pub struct InlineUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> InlineUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Run the pipeline, reporting progress to `events`
    pub fn execute(
        &self,
        options: &InlineOptions,
        events: &dyn InlineEventSink,
    ) -> RecipeBookResult<InlineReport> {
        let dir = options.dir.as_path();
        let detailed = events.wants_detailed_events();

        events.on_event(InlineEvent::Started {
            dir: dir.to_path_buf(),
            dry_run: options.dry_run,
        });

        let candidates = self.discover(dir)?;
        events.on_event(InlineEvent::Discovered {
            count: candidates.len(),
        });

        let mut report = InlineReport::new();
        report.discovered = candidates.len();
        report.dry_run = options.dry_run;

        for (index, file_name) in candidates.iter().enumerate() {
            let Some(triplet) = resolve_triplet(dir, file_name) else {
                report.skipped.push(file_name.clone());
                continue;
            };

            let siblings = self.load_siblings(&triplet, events, detailed)?;
            let document = render_document(
                triplet.base_name(),
                siblings.js_or_empty(),
                siblings.css_or_empty(),
            );
            let inlined = self.write_back(index, triplet, &siblings, &document, options, events)?;
            report.inlined.push(inlined);
        }

        events.on_event(InlineEvent::Completed {
            inlined_count: report.inlined.len(),
            alias_count: report.alias_count(),
            dry_run: options.dry_run,
        });

        Ok(report)
    }

    /// List the directory and keep hashed HTML entry points
    pub fn discover(&self, dir: &Path) -> RecipeBookResult<Vec<String>> {
        let names = self
            .fs
            .list_dir(dir)
            .map_err(|e| RecipeBookError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e.into_io(),
            })?;
        Ok(select_targets(names))
    }

    /// Read the JS and CSS siblings; absent files become `None`.
    ///
    /// Bytes that are not UTF-8 are replaced, never rejected.
    pub fn load_siblings(
        &self,
        triplet: &AssetTriplet,
        events: &dyn InlineEventSink,
        detailed: bool,
    ) -> RecipeBookResult<SiblingContent> {
        Ok(SiblingContent {
            js: self.load_sibling(&triplet.js_path(), SiblingKind::Js, events, detailed)?,
            css: self.load_sibling(&triplet.css_path(), SiblingKind::Css, events, detailed)?,
        })
    }

    fn load_sibling(
        &self,
        path: &Path,
        kind: SiblingKind,
        events: &dyn InlineEventSink,
        detailed: bool,
    ) -> RecipeBookResult<Option<String>> {
        if !self.fs.exists(path) {
            if detailed {
                events.on_event(InlineEvent::SiblingMissing {
                    kind,
                    path: path.to_path_buf(),
                });
            }
            return Ok(None);
        }

        let content = self.fs.read_lossy(path).map_err(|e| RecipeBookError::Read {
            path: path.to_path_buf(),
            source: e.into_io(),
        })?;
        if detailed {
            events.on_event(InlineEvent::SiblingFound {
                kind,
                path: path.to_path_buf(),
                bytes: content.len(),
            });
        }
        Ok(Some(content))
    }

    fn write_back(
        &self,
        index: usize,
        triplet: AssetTriplet,
        siblings: &SiblingContent,
        document: &str,
        options: &InlineOptions,
        events: &dyn InlineEventSink,
    ) -> RecipeBookResult<InlinedFile> {
        let html_path = triplet.html_path();
        let content_hash = ContentHash::from_content(document);
        let changed = self
            .fs
            .read(&html_path)
            .map(|previous| ContentHash::from_content(&previous) != content_hash)
            .unwrap_or(true);

        if !options.dry_run {
            self.write(&html_path, document)?;
        }
        events.on_event(InlineEvent::FileInlined {
            index,
            path: html_path,
            changed,
        });

        let alias_path = triplet.alias_path();
        let alias = if self.fs.exists(&alias_path) {
            if !options.dry_run {
                self.write(&alias_path, document)?;
            }
            events.on_event(InlineEvent::AliasMirrored {
                index,
                path: alias_path.clone(),
            });
            Some(alias_path)
        } else {
            None
        };

        Ok(InlinedFile {
            js_found: siblings.js.is_some(),
            css_found: siblings.css.is_some(),
            triplet,
            alias,
            content_hash,
            changed,
        })
    }

    fn write(&self, path: &Path, content: &str) -> RecipeBookResult<()> {
        self.fs
            .write(path, content)
            .map_err(|e| RecipeBookError::Write {
                path: path.to_path_buf(),
                source: e.into_io(),
            })
    }
}
