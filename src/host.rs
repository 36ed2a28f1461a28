//! Capabilities the picker borrows from its surroundings.
//!
//! The core never renders anything and never talks to an editor directly. It
//! asks a [`Filesystem`] about paths and a [`HostSurface`] to confirm, notify,
//! open, or reveal.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Synchronous filesystem access used by suggestions, resolution, and creation.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    /// Entry names of `path`, sorted.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;
    fn create_dir(&self, path: &Path, recursive: bool) -> io::Result<()>;
    /// Creates `path` empty, truncating anything already there.
    fn write_empty_file(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }

    fn create_dir(&self, path: &Path, recursive: bool) -> io::Result<()> {
        if recursive {
            fs::create_dir_all(path)
        } else {
            fs::create_dir(path)
        }
    }

    fn write_empty_file(&self, path: &Path) -> io::Result<()> {
        fs::write(path, b"")
    }
}

/// Answer to an overwrite prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
    Dismissed,
}

/// Editor-side surface: dialogs, notifications, and document handling.
pub trait HostSurface {
    fn confirm(&mut self, message: &str) -> ConfirmChoice;
    fn notify(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
    /// Opens `path` in the document surface. Failures are reported to the user.
    fn open_document(&mut self, path: &Path) -> Result<()>;
    /// Reveals `path` in a tree view. Callers ignore failures.
    fn reveal(&mut self, path: &Path) -> Result<()>;
}
