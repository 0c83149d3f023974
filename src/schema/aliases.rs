/// Entity kinds whose children are matched through the alias table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    /// `xmeml`
    Document,
    /// `sequence`
    Sequence,
    /// `clip`
    Clip,
    /// `clipitem`
    ClipItem,
    /// `track`
    Track,
    /// `media`
    Media,
    /// `video`
    Video,
    /// `audio`
    Audio,
    /// `file`
    File,
    /// `rate`
    Rate,
    /// `timecode`
    TimeCode,
    /// `marker`
    Marker,
    /// `logginginfo`
    LoggingInfo,
    /// `labels`
    Labels,
    /// `comments`
    Comments,
    /// `sourcetrack`
    SourceTrack,
    /// `subclipinfo`
    SubClipInfo,
    /// `filmdata`
    FilmData,
    /// `link`
    Link,
    /// `samplecharacteristics`
    SampleCharacteristics,
    /// `format`
    Format,
    /// `codec`
    Codec,
    /// `outputs`
    Outputs,
    /// `group`
    Group,
    /// `channel`
    Channel,
    /// `appspecificdata`
    AppSpecificData,
    /// `filter`
    Filter,
    /// `effect`
    Effect,
    /// `parameter`
    Parameter,
    /// `valuelist`
    ValueList,
    /// `valueentry`
    ValueEntry,
    /// `keyframe`
    KeyFrame,
    /// `inbez` / `outbez`
    BezierHandle,
    /// `interpolation`
    Interpolation,
    /// `value`
    Value,
}

/// Accepted spellings of one field, canonical first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aliases {
    /// Tag the encoder writes.
    pub canonical: &'static str,
    /// Older spellings still accepted on input, in matching order.
    pub legacy: &'static [&'static str],
}

impl Aliases {
    /// Every accepted tag, in matching order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical).chain(self.legacy.iter().copied())
    }

    /// Whether `tag` spells this field.
    pub fn accepts(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }
}

const LEGACY: &[(Entity, &str, &[&str])] = &[
    (Entity::Sequence, "logginginfo", &["descriptionlogginginfo"]),
    (Entity::Clip, "logginginfo", &["descriptionlogginginfo"]),
    (Entity::ClipItem, "logginginfo", &["descriptionlogginginfo"]),
    (Entity::ClipItem, "subclipinfo", &["sublipinfo"]),
    (Entity::Sequence, "pixelaspectratio", &["pixelAspectRatio"]),
    (Entity::Sequence, "comments", &["comment"]),
    (Entity::Link, "linkclipref", &["linkclippref"]),
];

/// Spellings of `canonical` inside `entity`.
///
/// Fields without a historical variant accept only their canonical tag.
pub fn aliases(entity: Entity, canonical: &'static str) -> Aliases {
    let legacy = LEGACY
        .iter()
        .find(|(e, tag, _)| *e == entity && *tag == canonical)
        .map(|(_, _, legacy)| *legacy)
        .unwrap_or_default();
    Aliases { canonical, legacy }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/aliases.rs"]
mod tests;
