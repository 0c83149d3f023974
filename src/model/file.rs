use crate::foundation::core::Field;
use crate::model::extra::Extra;
use crate::model::media::Media;
use crate::model::timing::{Rate, TimeCode};

/// Handle of a [`File`] inside a document's [`FileArena`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FileId(pub usize);

/// An encoded media file referenced by clips.
///
/// The first occurrence of a file in a document is its definition; later
/// occurrences repeat only the `id` attribute. Both decode to the same
/// arena entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct File {
    /// Document-unique identifier (`id` attribute).
    #[serde(default)]
    pub id: Option<String>,
    /// File name.
    #[serde(default)]
    pub name: Field<String>,
    /// Location as a `file://` URL; never resolved.
    #[serde(default)]
    pub path_url: Field<String>,
    /// Time scale of the file (required on a definition).
    pub rate: Rate,
    /// Duration in frames.
    #[serde(default)]
    pub duration: Field<i64>,
    /// Source timecode.
    #[serde(default)]
    pub timecode: Field<TimeCode>,
    /// Media characteristics.
    #[serde(default)]
    pub media: Field<Media>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Owner of every [`File`] in a document.
///
/// Clips hold a [`FileId`] instead of a copy, so a file shared by several
/// clips exists exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileArena {
    files: Vec<File>,
}

impl FileArena {
    /// Empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return its handle. Ids are not checked for uniqueness here.
    pub fn insert(&mut self, file: File) -> FileId {
        self.files.push(file);
        FileId(self.files.len() - 1)
    }

    /// File behind a handle.
    pub fn get(&self, id: FileId) -> Option<&File> {
        self.files.get(id.0)
    }

    /// Mutable file behind a handle.
    pub fn get_mut(&mut self, id: FileId) -> Option<&mut File> {
        self.files.get_mut(id.0)
    }

    /// Handle of the file whose `id` attribute equals `id`.
    pub fn find(&self, id: &str) -> Option<FileId> {
        self.files
            .iter()
            .position(|f| f.id.as_deref() == Some(id))
            .map(FileId)
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the arena holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &File)> {
        self.files.iter().enumerate().map(|(i, f)| (FileId(i), f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/file.rs"]
mod tests;
