//! Directory enumeration and file classification
//!
//! The browser only ever looks at one directory at a time. [`FileSystem`]
//! is the seam between the UI state machine and the OS so the state machine
//! can be driven from tests without touching the real disk.

use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Name of the synthetic entry that leads to the parent directory
pub const PARENT_ENTRY: &str = "..";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    /// Devices, sockets, dangling links. Listed but never entered.
    Other,
}

impl EntryKind {
    fn from_metadata(meta: &fs::Metadata) -> Self {
        let ty = meta.file_type();
        if ty.is_dir() {
            EntryKind::Directory
        } else if ty.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// A single row of the directory listing.
///
/// `name` is for display and may be lossy; the on-disk name is kept
/// separately and is what every filesystem call receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    os_name: OsString,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Entry {
            os_name: OsString::from(&name),
            name,
            kind,
        }
    }

    /// Entry for a name read from disk, which need not be valid UTF-8
    pub fn from_os_name(os_name: OsString, kind: EntryKind) -> Self {
        Entry {
            name: os_name.to_string_lossy().into_owned(),
            kind,
            os_name,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::File)
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    /// The `..` entry pinned to the top of every listing
    pub fn parent() -> Self {
        Self::directory(PARENT_ENTRY)
    }

    pub fn os_name(&self) -> &OsStr {
        &self.os_name
    }
}

/// Access to the directory the browser is currently showing.
///
/// Names passed to [`stat`](FileSystem::stat) and
/// [`change_directory`](FileSystem::change_directory) are relative to
/// [`current_dir`](FileSystem::current_dir).
pub trait FileSystem {
    fn current_dir(&self) -> &Path;

    /// Entries of the current directory in no particular order.
    /// Hidden entries and `..` are not included.
    fn list_directory(&self) -> Result<Vec<Entry>>;

    fn stat(&self, name: &OsStr) -> Result<EntryKind>;

    /// Move into `name`; on failure the current directory is unchanged
    fn change_directory(&mut self, name: &OsStr) -> Result<()>;
}

/// [`FileSystem`] backed by the real disk.
///
/// Keeps its own working directory instead of calling `chdir`, starting
/// from the process working directory.
#[derive(Debug, Clone)]
pub struct OsFileSystem {
    cwd: PathBuf,
}

impl OsFileSystem {
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Self::at(cwd)
    }

    pub fn at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cwd = fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
        if !cwd.is_dir() {
            return Err(Error::NotADirectory(cwd));
        }
        Ok(OsFileSystem { cwd })
    }
}

impl FileSystem for OsFileSystem {
    fn current_dir(&self) -> &Path {
        &self.cwd
    }

    fn list_directory(&self) -> Result<Vec<Entry>> {
        let read_dir = fs::read_dir(&self.cwd).map_err(|e| Error::io(&self.cwd, e))?;

        let mut entries = Vec::new();
        for dirent in read_dir {
            let dirent = match dirent {
                Ok(d) => d,
                Err(e) => {
                    debug!(dir = %self.cwd.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let name = dirent.file_name();
            if name.as_encoded_bytes().starts_with(b".") {
                continue;
            }
            // Follow symlinks so a link to a directory is enterable
            let kind = fs::metadata(dirent.path())
                .map(|m| EntryKind::from_metadata(&m))
                .unwrap_or(EntryKind::Other);
            entries.push(Entry::from_os_name(name, kind));
        }

        trace!(dir = %self.cwd.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }

    fn stat(&self, name: &OsStr) -> Result<EntryKind> {
        let path = self.cwd.join(name);
        fs::metadata(&path)
            .map(|m| EntryKind::from_metadata(&m))
            .map_err(|e| Error::io(path, e))
    }

    fn change_directory(&mut self, name: &OsStr) -> Result<()> {
        let joined = self.cwd.join(name);
        let target = fs::canonicalize(&joined).map_err(|e| Error::io(&joined, e))?;
        if !target.is_dir() {
            return Err(Error::NotADirectory(target));
        }
        // An unreadable directory would leave an empty, misleading listing
        fs::read_dir(&target).map_err(|e| Error::io(&target, e))?;

        debug!(from = %self.cwd.display(), to = %target.display(), "changed directory");
        self.cwd = target;
        Ok(())
    }
}
