use crate::foundation::core::Field;
use crate::model::extra::Extra;

/// Time scale used to read the integer time values of its parent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rate {
    /// Frames per second, rounded (required).
    pub timebase: i64,
    /// Whether the real rate is `timebase * 1000/1001`.
    #[serde(default)]
    pub ntsc: Field<bool>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

impl Rate {
    /// Rate with the given timebase and no NTSC flag.
    pub fn new(timebase: i64) -> Self {
        Self {
            timebase,
            ..Self::default()
        }
    }

    /// Effective frames per second, honoring the NTSC pull-down.
    pub fn fps(&self) -> f64 {
        let base = self.timebase as f64;
        if self.ntsc.get() {
            base * 1000.0 / 1001.0
        } else {
            base
        }
    }
}

/// Timecode of a clip, sequence or file.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeCode {
    /// Rate the timecode counts in.
    #[serde(default)]
    pub rate: Field<Rate>,
    /// Display form, e.g. `01:00:00:00`.
    #[serde(default)]
    pub string: Field<String>,
    /// Frame number the timecode denotes.
    #[serde(default)]
    pub frame: Field<i64>,
    /// Origin of the timecode (`source`, `auxiliary1`, ...).
    #[serde(default)]
    pub source: Field<String>,
    /// `DF` or `NDF`.
    #[serde(default)]
    pub display_format: Field<String>,
    /// Field index for interlaced material.
    #[serde(default)]
    pub field: Field<i64>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}
