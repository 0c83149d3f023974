use crate::foundation::core::Field;
use crate::model::annotations::{
    Comments, Labels, LoggingInfo, Marker, SourceTrack, SubClipInfo,
};
use crate::model::effect::Filter;
use crate::model::extra::Extra;
use crate::model::file::FileId;
use crate::model::media::Media;
use crate::model::sequence::Sequence;
use crate::model::timing::{Rate, TimeCode};

/// How a clip is blended with the layers beneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeMode {
    /// `normal`
    #[default]
    Normal,
    /// `add`
    Add,
    /// `subtract`
    Subtract,
    /// `difference`
    Difference,
    /// `multiply`
    Multiply,
    /// `screen`
    Screen,
    /// `texturize`
    Texturize,
    /// `hardlight`
    HardLight,
    /// `softlight`
    SoftLight,
    /// `darken`
    Darken,
    /// `lighten`
    Lighten,
    /// `mask`
    Mask,
    /// `lumamask`
    LumaMask,
    /// A token outside the documented vocabulary, kept verbatim.
    Other(String),
}

impl CompositeMode {
    const KNOWN: [(&'static str, CompositeMode); 13] = [
        ("normal", Self::Normal),
        ("add", Self::Add),
        ("subtract", Self::Subtract),
        ("difference", Self::Difference),
        ("multiply", Self::Multiply),
        ("screen", Self::Screen),
        ("texturize", Self::Texturize),
        ("hardlight", Self::HardLight),
        ("softlight", Self::SoftLight),
        ("darken", Self::Darken),
        ("lighten", Self::Lighten),
        ("mask", Self::Mask),
        ("lumamask", Self::LumaMask),
    ];

    /// Map a wire token; unknown tokens become [`CompositeMode::Other`].
    pub fn parse(token: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, m)| m.clone())
            .unwrap_or_else(|| Self::Other(token.to_owned()))
    }

    /// Wire token.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(token) => token,
            known => Self::KNOWN
                .iter()
                .find(|(_, m)| m == known)
                .map(|(t, _)| *t)
                .unwrap_or_default(),
        }
    }

    /// Whether the mode is part of the documented vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// How the alpha channel of a clip is interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaType {
    /// `none`
    #[default]
    None,
    /// `straight`
    Straight,
    /// `white` (premultiplied against white)
    White,
    /// `black` (premultiplied against black)
    Black,
    /// A token outside the documented vocabulary, kept verbatim.
    Other(String),
}

impl AlphaType {
    /// Map a wire token; unknown tokens become [`AlphaType::Other`].
    pub fn parse(token: &str) -> Self {
        match token {
            "none" => Self::None,
            "straight" => Self::Straight,
            "white" => Self::White,
            "black" => Self::Black,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire token.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Straight => "straight",
            Self::White => "white",
            Self::Black => "black",
            Self::Other(token) => token,
        }
    }

    /// Whether the type is part of the documented vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Relationship between clip items that move together (A/V sync groups).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Link {
    /// `id` of the linked clip item.
    #[serde(default)]
    pub link_clip_ref: Field<String>,
    /// `video` or `audio`.
    #[serde(default)]
    pub media_type: Field<String>,
    /// 1-based track of the linked item.
    #[serde(default)]
    pub track_index: Field<i64>,
    /// 1-based position of the linked item in its track.
    #[serde(default)]
    pub clip_index: Field<i64>,
    /// Group of a linked stereo pair.
    #[serde(default)]
    pub group_index: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// A browser-level clip.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Clip {
    /// `id` attribute.
    #[serde(default)]
    pub id: Option<String>,
    /// Clip name.
    #[serde(default)]
    pub name: Field<String>,
    /// Duration in frames.
    #[serde(default)]
    pub duration: Field<i64>,
    /// Time scale of every frame value of the clip.
    #[serde(default)]
    pub rate: Field<Rate>,
    /// In point.
    #[serde(default)]
    pub in_point: Field<i64>,
    /// Out point.
    #[serde(default)]
    pub out_point: Field<i64>,
    /// Id of the master clip this clip derives from.
    #[serde(default)]
    pub master_clip_id: Field<String>,
    /// Whether the clip is itself a master clip.
    #[serde(default)]
    pub is_master_clip: Field<bool>,
    /// Enabled flag.
    #[serde(default)]
    pub enabled: Field<bool>,
    /// Clip media and its tracks.
    #[serde(default)]
    pub media: Field<Media>,
    /// Markers.
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Anamorphic flag.
    #[serde(default)]
    pub anamorphic: Field<bool>,
    /// Alpha interpretation.
    #[serde(default)]
    pub alpha_type: Field<AlphaType>,
    /// Invert the alpha channel.
    #[serde(default)]
    pub alpha_reverse: Field<bool>,
    /// Labels.
    #[serde(default)]
    pub labels: Field<Labels>,
    /// Comments.
    #[serde(default)]
    pub comments: Field<Comments>,
    /// Source tracks.
    #[serde(default)]
    pub source_tracks: Vec<SourceTrack>,
    /// Blend mode.
    #[serde(default)]
    pub composite_mode: Field<CompositeMode>,
    /// Subclip offsets.
    #[serde(default)]
    pub subclip_info: Field<SubClipInfo>,
    /// Filters.
    #[serde(default)]
    pub filters: Vec<Filter>,
    /// Hold a single frame.
    #[serde(default)]
    pub still_frame: Field<bool>,
    /// Frame held when `still_frame` is set.
    #[serde(default)]
    pub still_frame_offset: Field<i64>,
    /// Start offset.
    #[serde(default)]
    pub start_offset: Field<i64>,
    /// End offset.
    #[serde(default)]
    pub end_offset: Field<i64>,
    /// Media file.
    #[serde(default)]
    pub file: Field<FileId>,
    /// Logging information.
    #[serde(default)]
    pub logging_info: Field<LoggingInfo>,
    /// Timecode.
    #[serde(default)]
    pub timecode: Field<TimeCode>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// A clip placed on a track.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClipItem {
    /// `id` attribute, the target of [`Link::link_clip_ref`].
    #[serde(default)]
    pub id: Option<String>,
    /// Clip name.
    #[serde(default)]
    pub name: Field<String>,
    /// Duration of the source in frames.
    #[serde(default)]
    pub duration: Field<i64>,
    /// Time scale of every frame value of the item.
    #[serde(default)]
    pub rate: Field<Rate>,
    /// Source in point.
    #[serde(default)]
    pub in_point: Field<i64>,
    /// Source out point.
    #[serde(default)]
    pub out_point: Field<i64>,
    /// Id of the master clip.
    #[serde(default)]
    pub master_clip_id: Field<String>,
    /// Whether the item is a master clip.
    #[serde(default)]
    pub is_master_clip: Field<bool>,
    /// Enabled flag.
    #[serde(default)]
    pub enabled: Field<bool>,
    /// Timeline start.
    #[serde(default)]
    pub start: Field<i64>,
    /// Timeline end.
    #[serde(default)]
    pub end: Field<i64>,
    /// Links to the other items of its sync group.
    #[serde(default)]
    pub links: Vec<Link>,
    /// Sync offset.
    #[serde(default)]
    pub sync_offset: Field<i64>,
    /// Logging information.
    #[serde(default)]
    pub logging_info: Field<LoggingInfo>,
    /// Media file.
    #[serde(default)]
    pub file: Field<FileId>,
    /// Timecode.
    #[serde(default)]
    pub timecode: Field<TimeCode>,
    /// Markers.
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Anamorphic flag.
    #[serde(default)]
    pub anamorphic: Field<bool>,
    /// Alpha interpretation.
    #[serde(default)]
    pub alpha_type: Field<AlphaType>,
    /// Invert the alpha channel.
    #[serde(default)]
    pub alpha_reverse: Field<bool>,
    /// Labels.
    #[serde(default)]
    pub labels: Field<Labels>,
    /// Comments.
    #[serde(default)]
    pub comments: Field<Comments>,
    /// Source tracks.
    #[serde(default)]
    pub source_tracks: Vec<SourceTrack>,
    /// Blend mode.
    #[serde(default)]
    pub composite_mode: Field<CompositeMode>,
    /// Subclip offsets.
    #[serde(default)]
    pub subclip_info: Field<SubClipInfo>,
    /// Filters.
    #[serde(default)]
    pub filters: Vec<Filter>,
    /// Hold a single frame.
    #[serde(default)]
    pub still_frame: Field<bool>,
    /// Frame held when `still_frame` is set.
    #[serde(default)]
    pub still_frame_offset: Field<i64>,
    /// Nested sequence of a compound clip.
    #[serde(default)]
    pub sequence: Field<Box<Sequence>>,
    /// Start offset.
    #[serde(default)]
    pub start_offset: Field<i64>,
    /// End offset.
    #[serde(default)]
    pub end_offset: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

impl ClipItem {
    /// Timeline length, `end - start`, when both are known and the
    /// difference fits in an `i64`.
    pub fn timeline_len(&self) -> Option<i64> {
        self.end.value()?.checked_sub(*self.start.value()?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/clip.rs"]
mod tests;
