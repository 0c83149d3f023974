/// Classification of the root `version` attribute.
///
/// The number only labels the document. Decoding accepts the union of every
/// revision's vocabulary whatever the label says.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SchemaVersion {
    /// Revision 1.
    V1,
    /// Revision 2.
    V2,
    /// Revision 3.
    V3,
    /// Revision 4.
    V4,
    /// Revision 5.
    V5,
    /// Any other number.
    Unknown(i64),
}

impl SchemaVersion {
    /// Classify a version number.
    pub fn from_number(n: i64) -> Self {
        match n {
            1 => Self::V1,
            2 => Self::V2,
            3 => Self::V3,
            4 => Self::V4,
            5 => Self::V5,
            other => Self::Unknown(other),
        }
    }

    /// The version number.
    pub fn number(self) -> i64 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
            Self::V4 => 4,
            Self::V5 => 5,
            Self::Unknown(n) => n,
        }
    }

    /// Whether this is one of the documented revisions.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/version.rs"]
mod tests;
