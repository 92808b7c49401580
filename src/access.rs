//! Directory and file access for the scanner.
//!
//! The walker only sees the traits defined here. `LocalDirectory` and
//! `LocalFile` back them with the file system; the pickers decide which
//! directory a scan starts from.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use dialoguer::Input;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::AppError;

/// A readable file.
pub trait FileHandle {
    fn read_text(&self) -> io::Result<String>;
}

/// A listable directory.
pub trait DirectoryHandle {
    fn entries(&self) -> io::Result<Vec<Entry>>;
}

/// Chooses the root directory of a scan. `Ok(None)` means the user cancelled.
pub trait DirectoryPicker {
    fn pick_directory(&self) -> Result<Option<Box<dyn DirectoryHandle>>, AppError>;
}

pub enum EntryHandle {
    File(Box<dyn FileHandle>),
    Directory(Box<dyn DirectoryHandle>),
    Other,
}

pub struct Entry {
    pub name: String,
    pub handle: EntryHandle,
}

impl Entry {
    pub fn file(name: impl Into<String>, handle: impl FileHandle + 'static) -> Self {
        Entry { name: name.into(), handle: EntryHandle::File(Box::new(handle)) }
    }

    pub fn directory(name: impl Into<String>, handle: impl DirectoryHandle + 'static) -> Self {
        Entry { name: name.into(), handle: EntryHandle::Directory(Box::new(handle)) }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Entry { name: name.into(), handle: EntryHandle::Other }
    }
}

#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FileHandle for LocalFile {
    fn read_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

#[derive(Debug, Clone)]
pub struct LocalDirectory {
    path: PathBuf,
}

impl LocalDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DirectoryHandle for LocalDirectory {
    fn entries(&self) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        let walker =
            WalkDir::new(&self.path).min_depth(1).max_depth(1).sort_by_file_name().into_iter();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Depth 0 is this directory itself: it could not be read at all.
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    debug!("Skipping {:?}: {}", err.path(), err);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry.file_type();
            if file_type.is_dir() {
                entries.push(Entry::directory(name, LocalDirectory::new(entry.into_path())));
            } else if file_type.is_file() {
                entries.push(Entry::file(name, LocalFile::new(entry.into_path())));
            } else {
                entries.push(Entry::other(name));
            }
        }
        Ok(entries)
    }
}

/// Picks a directory given up front, e.g. on the command line.
#[derive(Debug, Clone)]
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DirectoryPicker for PathPicker {
    fn pick_directory(&self) -> Result<Option<Box<dyn DirectoryHandle>>, AppError> {
        if !self.path.is_dir() {
            return Err(AppError::NotADirectory(self.path.clone()));
        }
        Ok(Some(Box::new(LocalDirectory::new(self.path.clone()))))
    }
}

/// Asks for a directory on the terminal. An empty answer cancels.
#[derive(Debug, Clone, Default)]
pub struct PromptPicker;

impl DirectoryPicker for PromptPicker {
    fn pick_directory(&self) -> Result<Option<Box<dyn DirectoryHandle>>, AppError> {
        if !io::stdin().is_terminal() {
            return Err(AppError::CapabilityUnsupported(
                "Choosing a directory interactively needs a terminal; pass a PATH or --current instead."
                    .to_string(),
            ));
        }

        let answer = Input::<String>::new()
            .with_prompt("Project directory (leave empty to cancel)")
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        PathPicker::new(answer).pick_directory()
    }
}
