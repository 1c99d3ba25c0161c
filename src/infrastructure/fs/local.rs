//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes replace files atomically (temp file in the same directory, then
/// rename) unless atomic writes are turned off.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    atomic_writes: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFs {
    /// Create a new LocalFs instance with atomic writes
    pub fn new() -> Self {
        Self {
            atomic_writes: true,
        }
    }

    pub fn with_atomic_writes(atomic_writes: bool) -> Self {
        Self { atomic_writes }
    }

    pub fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }

    fn write_atomic(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(e, path))?;
        tmp.flush().map_err(|e| FsError::from_io(e, path))?;

        // Keep the mode of the file being replaced; temp files start out private.
        if let Ok(meta) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| FsError::from_io(e, path))?;
        }

        tmp.persist(path)
            .map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn read_lossy(&self, path: &Path) -> FsResult<String> {
        let bytes = std::fs::read(path).map_err(|e| FsError::from_io(e, path))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.atomic_writes {
            self.write_atomic(path, content)
        } else {
            std::fs::write(path, content).map_err(|e| FsError::from_io(e, path))
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(e, path))?;
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}
