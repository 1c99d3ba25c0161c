//! Asset Triplet Entity
//!
//! The HTML/JS/CSS file group a widget build emits under one base name and
//! fingerprint: `<base>-<hash>.html`, `<base>-<hash>.js`, `<base>-<hash>.css`.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::AssetHash;

/// A widget's hashed build outputs inside one flat asset directory.
///
/// Identified by `(base_name, hash)`. Paths are derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTriplet {
    dir: PathBuf,
    base_name: String,
    hash: AssetHash,
}

impl AssetTriplet {
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>, hash: AssetHash) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
            hash,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn hash(&self) -> &AssetHash {
        &self.hash
    }

    /// `<base>-<hash>`
    pub fn stem(&self) -> String {
        format!("{}-{}", self.base_name, self.hash)
    }

    /// `<base>-<hash>.html`
    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.stem())
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(self.html_file_name())
    }

    pub fn js_path(&self) -> PathBuf {
        self.dir.join(format!("{}.js", self.stem()))
    }

    pub fn css_path(&self) -> PathBuf {
        self.dir.join(format!("{}.css", self.stem()))
    }

    /// Unhashed entry point kept in sync with the hashed one, if it exists.
    pub fn alias_path(&self) -> PathBuf {
        self.dir.join(format!("{}.html", self.base_name))
    }

    /// Id of the container element the widget mounts into
    pub fn root_id(&self) -> String {
        crate::domain::services::mount_id(&self.base_name)
    }
}

/// Raw sibling sources observed for one triplet.
///
/// `None` means the file was absent; it renders as an empty block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiblingContent {
    pub js: Option<String>,
    pub css: Option<String>,
}

impl SiblingContent {
    pub fn js_or_empty(&self) -> &str {
        self.js.as_deref().unwrap_or("")
    }

    pub fn css_or_empty(&self) -> &str {
        self.css.as_deref().unwrap_or("")
    }
}
