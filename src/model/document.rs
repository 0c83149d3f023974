use crate::model::clip::Clip;
use crate::model::extra::Extra;
use crate::model::file::{File, FileArena, FileId};
use crate::model::sequence::Sequence;
use crate::schema::version::SchemaVersion;

/// The top-level object of an `xmeml` document.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Value of the root `version` attribute.
    pub version: i64,
    /// Every file referenced anywhere in the document.
    #[serde(default)]
    pub files: FileArena,
    /// The clip or sequence the document describes, if any.
    #[serde(default)]
    pub payload: Option<Payload>,
    /// Root children that are neither a clip nor a sequence (`project`, `bin`, ...).
    #[serde(default)]
    pub extra: Extra,
}

/// Content of a document.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// A single browser clip.
    Clip(Clip),
    /// A sequence.
    Sequence(Sequence),
}

impl Document {
    /// Empty document of the given version.
    pub fn new(version: i64) -> Self {
        Self {
            version,
            files: FileArena::new(),
            payload: None,
            extra: Extra::default(),
        }
    }

    /// Schema revision classification of [`Document::version`].
    pub fn schema_version(&self) -> SchemaVersion {
        SchemaVersion::from_number(self.version)
    }

    /// File whose `id` attribute equals `id`.
    pub fn file(&self, id: &str) -> Option<&File> {
        self.files.find(id).and_then(|h| self.files.get(h))
    }

    /// File behind a handle held by a clip or sequence.
    pub fn resolve_file(&self, id: FileId) -> Option<&File> {
        self.files.get(id)
    }

    /// The payload sequence, if the document describes one.
    pub fn sequence(&self) -> Option<&Sequence> {
        match &self.payload {
            Some(Payload::Sequence(s)) => Some(s),
            _ => None,
        }
    }

    /// The payload clip, if the document describes one.
    pub fn clip(&self) -> Option<&Clip> {
        match &self.payload {
            Some(Payload::Clip(c)) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/document.rs"]
mod tests;
