use crate::foundation::core::Field;
use crate::model::annotations::{Comments, FilmData, Labels, LoggingInfo, Marker};
use crate::model::clip::ClipItem;
use crate::model::extra::Extra;
use crate::model::file::FileId;
use crate::model::media::Media;
use crate::model::timing::{Rate, TimeCode};

/// A layered composition of tracks.
///
/// Sequences form a tree: a sequence may contain sub-sequences directly or
/// through a [`ClipItem`] of a compound clip, never a sequence that is one of
/// its own ancestors.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sequence {
    /// `id` attribute.
    #[serde(default)]
    pub id: Option<String>,
    /// Editor-assigned identity.
    #[serde(default)]
    pub uuid: Field<uuid::Uuid>,
    /// How a sequence referenced from several places reacts to edits.
    #[serde(default)]
    pub update_behavior: Field<String>,
    /// Sequence name.
    #[serde(default)]
    pub name: Field<String>,
    /// Duration in frames.
    #[serde(default)]
    pub duration: Field<i64>,
    /// Time scale of every frame value of the sequence.
    #[serde(default)]
    pub rate: Field<Rate>,
    /// In point.
    #[serde(default)]
    pub in_point: Field<i64>,
    /// Out point.
    #[serde(default)]
    pub out_point: Field<i64>,
    /// Starting timecode.
    #[serde(default)]
    pub timecode: Field<TimeCode>,
    /// Video and audio tracks.
    #[serde(default)]
    pub media: Field<Media>,
    /// Markers.
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Labels.
    #[serde(default)]
    pub labels: Field<Labels>,
    /// Comments.
    #[serde(default)]
    pub comments: Field<Comments>,
    /// Id of the master clip.
    #[serde(default)]
    pub master_clip_id: Field<String>,
    /// Whether the sequence is a master clip.
    #[serde(default)]
    pub is_master_clip: Field<bool>,
    /// Logging information.
    #[serde(default)]
    pub logging_info: Field<LoggingInfo>,
    /// Film metadata.
    #[serde(default)]
    pub film_data: Field<FilmData>,
    /// Media file.
    #[serde(default)]
    pub file: Field<FileId>,
    /// Pixel aspect ratio token, e.g. `square` or `NTSC-601`.
    #[serde(default)]
    pub pixel_aspect_ratio: Field<String>,
    /// Directly nested sequences.
    #[serde(default)]
    pub sequences: Vec<Sequence>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

impl Sequence {
    /// Every clip item of the sequence, video tracks first, in track order.
    ///
    /// Clip items of nested sequences are not included.
    pub fn clip_items(&self) -> impl Iterator<Item = &ClipItem> {
        self.media
            .value()
            .into_iter()
            .flat_map(|m| m.tracks())
            .flat_map(|t| t.clip_items.iter())
    }

    /// Depth of the deepest sequence below this one, counting this one as 1.
    pub fn nesting_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((seq, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let compound = seq
                .clip_items()
                .filter_map(|c| c.sequence.value())
                .map(|s| &**s);
            stack.extend(seq.sequences.iter().chain(compound).map(|s| (s, depth + 1)));
        }
        deepest
    }
}

/// An ordered lane of clip items.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Clip items in timeline order.
    #[serde(default)]
    pub clip_items: Vec<ClipItem>,
    /// Enabled flag.
    #[serde(default)]
    pub enabled: Field<bool>,
    /// Locked flag.
    #[serde(default)]
    pub locked: Field<bool>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

#[cfg(test)]
#[path = "../../tests/unit/model/sequence.rs"]
mod tests;
