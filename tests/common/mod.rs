// In-memory doubles for driving the app without a disk or a terminal

#![allow(dead_code)]

use ctag::error::{Error, Result};
use ctag::filesystem::{Entry, EntryKind, FileSystem, PARENT_ENTRY};
use ctag::tags::{TagReader, TrackTags};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::Cell;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

/// A fake directory tree rooted at `/`
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    cwd: PathBuf,
    dirs: FxHashMap<PathBuf, Vec<Entry>>,
    locked: FxHashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        MemoryFileSystem {
            cwd: cwd.into(),
            dirs: FxHashMap::default(),
            locked: FxHashSet::default(),
        }
    }

    /// Add a directory and its entries. Subdirectory entries should be
    /// added with their own `dir` call to be enterable.
    pub fn dir(mut self, path: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        self.dirs.insert(path.into(), entries);
        self
    }

    /// Make a directory refuse `change_directory`
    pub fn locked(mut self, path: impl Into<PathBuf>) -> Self {
        self.locked.insert(path.into());
        self
    }

    fn resolve(&self, name: &OsStr) -> PathBuf {
        if name == PARENT_ENTRY {
            self.cwd.parent().unwrap_or(&self.cwd).to_path_buf()
        } else {
            self.cwd.join(name)
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn current_dir(&self) -> &Path {
        &self.cwd
    }

    fn list_directory(&self) -> Result<Vec<Entry>> {
        self.dirs.get(&self.cwd).cloned().ok_or_else(|| Error::Io {
            path: self.cwd.clone(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }

    fn stat(&self, name: &OsStr) -> Result<EntryKind> {
        if name == PARENT_ENTRY || self.dirs.contains_key(&self.cwd.join(name)) {
            return Ok(EntryKind::Directory);
        }
        self.dirs
            .get(&self.cwd)
            .and_then(|entries| entries.iter().find(|e| e.os_name() == name))
            .map(|e| e.kind)
            .ok_or_else(|| Error::Io {
                path: self.cwd.join(name),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }

    fn change_directory(&mut self, name: &OsStr) -> Result<()> {
        let target = self.resolve(name);
        if self.locked.contains(&target) {
            return Err(Error::Io {
                path: target,
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        if !self.dirs.contains_key(&target) {
            return Err(Error::NotADirectory(target));
        }
        self.cwd = target;
        Ok(())
    }
}

/// Tag reader serving canned tags and counting reads
#[derive(Debug, Default)]
pub struct StubTagReader {
    tags: FxHashMap<PathBuf, TrackTags>,
    reads: Cell<usize>,
}

impl StubTagReader {
    pub fn with(mut self, path: impl Into<PathBuf>, tags: TrackTags) -> Self {
        self.tags.insert(path.into(), tags);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TagReader for StubTagReader {
    fn load_or_create_tag(&self, path: &Path) -> Option<TrackTags> {
        self.reads.set(self.reads.get() + 1);
        self.tags.get(path).cloned()
    }
}

impl TagReader for &StubTagReader {
    fn load_or_create_tag(&self, path: &Path) -> Option<TrackTags> {
        (**self).load_or_create_tag(path)
    }
}

pub fn titled(title: &str) -> TrackTags {
    TrackTags {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// `/music` with a couple of albums, some loose files and a locked folder
pub fn music_library() -> MemoryFileSystem {
    MemoryFileSystem::new("/music")
        .dir("/", vec![Entry::directory("music")])
        .dir(
            "/music",
            vec![
                Entry::file("track.mp3"),
                Entry::directory("albums"),
                Entry::file("notes.txt"),
                Entry::directory("private"),
                Entry::new("fifo", EntryKind::Other),
            ],
        )
        .dir(
            "/music/albums",
            vec![Entry::file("b.mp3"), Entry::file("a.mp3"), Entry::file("c.mp3")],
        )
        .dir("/music/private", vec![Entry::file("secret.mp3")])
        .locked("/music/private")
}
