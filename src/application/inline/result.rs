//! Inline result types

use std::path::PathBuf;

use crate::domain::entities::AssetTriplet;
use crate::domain::value_objects::ContentHash;

/// One entry point that was rendered (and written, unless dry run)
#[derive(Debug, Clone)]
pub struct InlinedFile {
    pub triplet: AssetTriplet,
    /// Whether `<stem>.js` existed
    pub js_found: bool,
    /// Whether `<stem>.css` existed
    pub css_found: bool,
    /// Alias rewritten alongside the hashed file
    pub alias: Option<PathBuf>,
    /// Digest of the rendered document
    pub content_hash: ContentHash,
    /// False when the hashed file already held exactly this document
    pub changed: bool,
}

/// Result of an inline run
#[derive(Debug, Clone, Default)]
pub struct InlineReport {
    /// Number of names that passed discovery
    pub discovered: usize,
    /// Rendered entry points, in processing order
    pub inlined: Vec<InlinedFile>,
    /// Discovered names that did not resolve to a triplet
    pub skipped: Vec<String>,
    pub dry_run: bool,
}

impl InlineReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias_count(&self) -> usize {
        self.inlined.iter().filter(|f| f.alias.is_some()).count()
    }

    pub fn changed_count(&self) -> usize {
        self.inlined.iter().filter(|f| f.changed).count()
    }

    /// Every path the run rewrote (hashed files, then their aliases)
    pub fn written_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for file in &self.inlined {
            paths.push(file.triplet.html_path());
            if let Some(alias) = &file.alias {
                paths.push(alias.clone());
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AssetHash;

    fn inlined(base: &str, alias: bool, changed: bool) -> InlinedFile {
        let triplet = AssetTriplet::new("dist", base, AssetHash::parse("ab12").unwrap());
        InlinedFile {
            alias: alias.then(|| triplet.alias_path()),
            triplet,
            js_found: true,
            css_found: true,
            content_hash: ContentHash::from_content(base),
            changed,
        }
    }

    #[test]
    fn counts_aliases_and_changes() {
        let mut report = InlineReport::new();
        report.inlined.push(inlined("a", true, true));
        report.inlined.push(inlined("b", false, false));

        assert_eq!(report.alias_count(), 1);
        assert_eq!(report.changed_count(), 1);
    }

    #[test]
    fn written_paths_lists_alias_after_hashed_file() {
        let mut report = InlineReport::new();
        report.inlined.push(inlined("a", true, true));

        assert_eq!(
            report.written_paths(),
            vec![PathBuf::from("dist/a-ab12.html"), PathBuf::from("dist/a.html")]
        );
    }
}
