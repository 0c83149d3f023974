use crate::foundation::core::{Field, parse_bool, parse_int};
use crate::model::extra::Extra;

/// The polymorphic `value` leaf of a parameter or keyframe.
///
/// The element carries no type tag: the same slot holds a number, a boolean,
/// a color or a position depending on the owning parameter. Everything is
/// stored as raw text and the caller picks the projection it knows to be
/// valid. Projections never fail and never disagree with each other on
/// purpose; they are purely syntactic.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Value {
    /// Character data of the element, verbatim.
    #[serde(default)]
    pub data: String,
    /// `red` channel, raw.
    #[serde(default)]
    pub red: Field<String>,
    /// `green` channel, raw.
    #[serde(default)]
    pub green: Field<String>,
    /// `blue` channel, raw.
    #[serde(default)]
    pub blue: Field<String>,
    /// `alpha` channel, raw.
    #[serde(default)]
    pub alpha: Field<String>,
    /// Horizontal component, raw.
    #[serde(default)]
    pub horiz: Field<String>,
    /// Vertical component, raw.
    #[serde(default)]
    pub vert: Field<String>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Color projection of a [`Value`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorValue {
    /// Red channel.
    pub red: i64,
    /// Blue channel.
    pub blue: i64,
    /// Green channel.
    pub green: i64,
    /// Alpha channel.
    pub alpha: i64,
}

/// Two-dimensional projection of a [`Value`] or bezier handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PositionValue {
    /// Horizontal component.
    pub horiz: i64,
    /// Vertical component.
    pub vert: i64,
}

impl Value {
    /// Value holding only character data.
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// Value holding only color channels.
    pub fn color(color: ColorValue) -> Self {
        Self {
            red: Field::Present(color.red.to_string()),
            green: Field::Present(color.green.to_string()),
            blue: Field::Present(color.blue.to_string()),
            alpha: Field::Present(color.alpha.to_string()),
            ..Self::default()
        }
    }

    /// Value holding only a position.
    pub fn position(position: PositionValue) -> Self {
        Self {
            horiz: Field::Present(position.horiz.to_string()),
            vert: Field::Present(position.vert.to_string()),
            ..Self::default()
        }
    }

    /// Character data as a base-10 integer; `0` when it does not parse.
    pub fn as_number(&self) -> i64 {
        parse_int(&self.data).unwrap_or(0)
    }

    /// Character data as `TRUE`/`FALSE`; `false` when it does not parse.
    pub fn as_boolean(&self) -> bool {
        parse_bool(&self.data).unwrap_or(false)
    }

    /// The four color channels; missing or malformed channels read as `0`.
    pub fn as_color(&self) -> ColorValue {
        ColorValue {
            red: component(&self.red),
            blue: component(&self.blue),
            green: component(&self.green),
            alpha: component(&self.alpha),
        }
    }

    /// The two position components; missing or malformed ones read as `0`.
    pub fn as_position(&self) -> PositionValue {
        PositionValue {
            horiz: component(&self.horiz),
            vert: component(&self.vert),
        }
    }
}

pub(crate) fn component(raw: &Field<String>) -> i64 {
    raw.value().and_then(|s| parse_int(s)).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/model/value.rs"]
mod tests;
