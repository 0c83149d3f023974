use crate::foundation::core::Field;
use crate::model::extra::Extra;

/// A named point or range in a clip or sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Marker {
    /// Marker name.
    #[serde(default)]
    pub name: Field<String>,
    /// Free-form comment.
    #[serde(default)]
    pub comment: Field<String>,
    /// Start frame.
    #[serde(default)]
    pub in_point: Field<i64>,
    /// End frame, `-1` for a point marker.
    #[serde(default)]
    pub out_point: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Logging metadata captured at ingest.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoggingInfo {
    /// Description.
    #[serde(default)]
    pub description: Field<String>,
    /// Scene.
    #[serde(default)]
    pub scene: Field<String>,
    /// Shot/take.
    #[serde(default)]
    pub shot_take: Field<String>,
    /// Log note.
    #[serde(default)]
    pub log_note: Field<String>,
    /// Marked as a good take.
    #[serde(default)]
    pub good: Field<bool>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Label and Label 2 of a clip or sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Labels {
    /// Label.
    #[serde(default)]
    pub label: Field<String>,
    /// Label 2.
    #[serde(default)]
    pub label2: Field<String>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Browser comment columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Comments {
    /// Master comment 1.
    #[serde(default)]
    pub master_comment_1: Field<String>,
    /// Master comment 2.
    #[serde(default)]
    pub master_comment_2: Field<String>,
    /// Master comment 3.
    #[serde(default)]
    pub master_comment_3: Field<String>,
    /// Master comment 4.
    #[serde(default)]
    pub master_comment_4: Field<String>,
    /// Clip comment A.
    #[serde(default)]
    pub clip_comment_a: Field<String>,
    /// Clip comment B.
    #[serde(default)]
    pub clip_comment_b: Field<String>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Which track of the source media a clip draws from.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceTrack {
    /// `video` or `audio`.
    #[serde(default)]
    pub media_type: Field<String>,
    /// 1-based track index in the source.
    #[serde(default)]
    pub track_index: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Offsets of a subclip into its master clip.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubClipInfo {
    /// Offset from the master clip start.
    #[serde(default)]
    pub start_offset: Field<i64>,
    /// Offset from the master clip end.
    #[serde(default)]
    pub end_offset: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Cinema Tools film metadata; its content is kept opaque in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilmData {
    /// Preserved content.
    #[serde(default)]
    pub extra: Extra,
}
