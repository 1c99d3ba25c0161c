//! Widget Resource Use Case
//!
//! Serves the compiled widget HTML for a UI resource URI.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::WidgetResource;
use crate::error::{RecipeBookError, RecipeBookResult};

/// Loaded widget document, ready to hand to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDocument {
    pub resource: WidgetResource,
    pub path: PathBuf,
    pub mime: &'static str,
    pub html: String,
}

pub struct WidgetResourceLoader<FS>
where
    FS: FileSystem,
{
    fs: FS,
    dist_dir: PathBuf,
}

impl<FS> WidgetResourceLoader<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dist_dir: dist_dir.into(),
        }
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Where the widget's built HTML is expected
    pub fn path_for(&self, resource: WidgetResource) -> PathBuf {
        self.dist_dir.join(format!("{}.html", resource.dist_name()))
    }

    /// Read the built HTML; a missing build is `WidgetNotFound`
    pub fn load(&self, resource: WidgetResource) -> RecipeBookResult<WidgetDocument> {
        let path = self.path_for(resource);
        if !self.fs.exists(&path) {
            return Err(RecipeBookError::WidgetNotFound { path });
        }

        let html = self.fs.read(&path).map_err(|e| RecipeBookError::Read {
            path: path.clone(),
            source: e.into_io(),
        })?;

        Ok(WidgetDocument {
            resource,
            path,
            mime: WidgetResource::MIME,
            html,
        })
    }
}
