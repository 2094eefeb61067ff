//! Tag metadata for media files shown in the editor pane

use std::path::Path;
use tracing::debug;

/// Extensions the editor pane knows how to read
const MEDIA_EXTENSIONS: &[&str] = &["mp3"];

/// Whether `name` has a recognized media extension (ASCII case-insensitive)
pub fn is_media_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MEDIA_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Human-readable text frames of a track. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub track: Option<String>,
    pub genre: Option<String>,
}

impl TrackTags {
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Frames other than the title, in display order, skipping absent ones
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Artist", &self.artist),
            ("Album", &self.album),
            ("Year", &self.year),
            ("Track", &self.track),
            ("Genre", &self.genre),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == TrackTags::default()
    }
}

/// Source of tag metadata for a file.
///
/// `None` means the file could not be opened at all; a file without a tag
/// yields an empty [`TrackTags`] instead.
pub trait TagReader {
    fn load_or_create_tag(&self, path: &Path) -> Option<TrackTags>;
}

/// Reads ID3v2 tags with the `id3` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3TagReader;

impl TagReader for Id3TagReader {
    fn load_or_create_tag(&self, path: &Path) -> Option<TrackTags> {
        use id3::{ErrorKind, Tag, TagLike};

        let tag = match Tag::read_from_path(path) {
            Ok(tag) => tag,
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
                debug!(path = %path.display(), "no tag present, using an empty one");
                Tag::new()
            }
            Err(e) => match e.kind {
                ErrorKind::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "file vanished before tag read");
                    return None;
                }
                _ => {
                    // Partially parsed tags are still worth showing
                    debug!(path = %path.display(), error = %e, "unreadable tag");
                    e.partial_tag.unwrap_or_else(Tag::new)
                }
            },
        };

        Some(TrackTags {
            title: tag.title().map(str::to_string),
            artist: tag.artist().map(str::to_string),
            album: tag.album().map(str::to_string),
            year: tag.year().map(|y| y.to_string()),
            track: tag.track().map(|t| t.to_string()),
            genre: tag.genre().map(str::to_string),
        })
    }
}
