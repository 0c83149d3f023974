use crate::foundation::core::Field;
use crate::model::extra::Extra;
use crate::model::sequence::Track;
use crate::model::timing::Rate;

/// Audio/video description of a clip, file or sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Media {
    /// Video part.
    #[serde(default)]
    pub video: Field<Video>,
    /// Audio part.
    #[serde(default)]
    pub audio: Field<Audio>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

impl Media {
    /// All tracks, video first, in document order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        let video = self.video.value().map(|v| v.tracks.as_slice()).unwrap_or_default();
        let audio = self.audio.value().map(|a| a.tracks.as_slice()).unwrap_or_default();
        video.iter().chain(audio)
    }
}

/// Video media characteristics and tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Video {
    /// Duration in frames.
    #[serde(default)]
    pub duration: Field<i64>,
    /// Frame geometry and codec.
    #[serde(default)]
    pub sample_characteristics: Field<SampleCharacteristics>,
    /// Sequence video format.
    #[serde(default)]
    pub format: Field<Format>,
    /// Video tracks, bottom layer first.
    #[serde(default)]
    pub tracks: Vec<Track>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Audio media characteristics, channel layout and tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Audio {
    /// Sequence audio format.
    #[serde(default)]
    pub format: Field<Format>,
    /// Output channel grouping.
    #[serde(default)]
    pub outputs: Field<Outputs>,
    /// In point in frames.
    #[serde(default)]
    pub in_point: Field<i64>,
    /// Out point in frames.
    #[serde(default)]
    pub out_point: Field<i64>,
    /// Number of channels.
    #[serde(default)]
    pub channel_count: Field<i64>,
    /// Sample depth and rate.
    #[serde(default)]
    pub sample_characteristics: Field<SampleCharacteristics>,
    /// Number of audio tracks in the source.
    #[serde(default)]
    pub track_count: Field<i64>,
    /// Time scale of `in_point`, `out_point` and `duration`.
    #[serde(default)]
    pub rate: Field<Rate>,
    /// Duration in frames.
    #[serde(default)]
    pub duration: Field<i64>,
    /// Audio tracks.
    #[serde(default)]
    pub tracks: Vec<Track>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Media geometry, sampling and codec.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SampleCharacteristics {
    /// Frame rate of the media.
    #[serde(default)]
    pub rate: Field<Rate>,
    /// Frame width in pixels.
    #[serde(default)]
    pub width: Field<i64>,
    /// Frame height in pixels.
    #[serde(default)]
    pub height: Field<i64>,
    /// Anamorphic flag.
    #[serde(default)]
    pub anamorphic: Field<bool>,
    /// Named pixel aspect ratio (`square`, `NTSC-601`, ...).
    #[serde(default)]
    pub pixel_aspect_ratio: Field<String>,
    /// `none`, `upper` or `lower`.
    #[serde(default)]
    pub field_dominance: Field<String>,
    /// Bits per pixel.
    #[serde(default)]
    pub color_depth: Field<i64>,
    /// Compression codec.
    #[serde(default)]
    pub codec: Field<Codec>,
    /// Audio bits per sample.
    #[serde(default)]
    pub depth: Field<i64>,
    /// Audio sample rate in Hz.
    #[serde(default)]
    pub sample_rate: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Track format of a sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Format {
    /// Format characteristics.
    #[serde(default)]
    pub sample_characteristics: Field<SampleCharacteristics>,
    /// Application data attached to the format.
    #[serde(default)]
    pub app_specific_data: Field<AppSpecificData>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Codec description.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Codec {
    /// Codec display name.
    #[serde(default)]
    pub name: Field<String>,
    /// Codec settings.
    #[serde(default)]
    pub app_specific_data: Field<AppSpecificData>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Audio output channel groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Outputs {
    /// Output groups.
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// A group of output channels.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    /// Group index.
    #[serde(default)]
    pub index: Field<i64>,
    /// Number of channels in the group.
    #[serde(default)]
    pub num_channels: Field<i64>,
    /// Downmix level.
    #[serde(default)]
    pub downmix: Field<i64>,
    /// Channels of the group.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Output device index of a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    /// Device channel index.
    #[serde(default)]
    pub index: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Application-specific payload; the `data` subtree stays in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppSpecificData {
    /// Application name.
    #[serde(default)]
    pub app_name: Field<String>,
    /// Application vendor.
    #[serde(default)]
    pub app_manufacturer: Field<String>,
    /// Application version.
    #[serde(default)]
    pub app_version: Field<String>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}
