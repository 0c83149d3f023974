use crate::foundation::core::Field;
use crate::model::extra::Extra;
use crate::model::media::AppSpecificData;
use crate::model::value::{PositionValue, Value, component};

/// An effect applied to a clip, with its activation range.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Filter {
    /// Enabled flag.
    #[serde(default)]
    pub enabled: Field<bool>,
    /// First frame the filter applies to.
    #[serde(default)]
    pub start: Field<i64>,
    /// Last frame the filter applies to.
    #[serde(default)]
    pub end: Field<i64>,
    /// The effect itself.
    #[serde(default)]
    pub effect: Field<Effect>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// A named effect with its parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Effect {
    /// Display name.
    #[serde(default)]
    pub name: Field<String>,
    /// Identifier of the effect implementation.
    #[serde(default)]
    pub effect_id: Field<String>,
    /// Category shown in the effect browser.
    #[serde(default)]
    pub effect_category: Field<String>,
    /// `filter`, `transition`, `generator`, ...
    #[serde(default)]
    pub effect_type: Field<String>,
    /// `video` or `audio`.
    #[serde(default)]
    pub media_type: Field<String>,
    /// Parameters, in document order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

impl Effect {
    /// First parameter whose `parameterid` equals `id`.
    pub fn parameter(&self, id: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.parameter_id.value().map(String::as_str) == Some(id))
    }
}

/// One controllable input of an [`Effect`].
///
/// The meaning of [`Parameter::value`] depends on the parameter: a slider
/// reads it with [`Value::as_number`], a checkbox with [`Value::as_boolean`],
/// and so on. Nothing in the document says which.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// Stable identifier within the effect.
    #[serde(default)]
    pub parameter_id: Field<String>,
    /// Display name.
    #[serde(default)]
    pub name: Field<String>,
    /// Lower bound of a numeric parameter.
    #[serde(default)]
    pub value_min: Field<i64>,
    /// Upper bound of a numeric parameter.
    #[serde(default)]
    pub value_max: Field<i64>,
    /// Choices of a popup parameter.
    #[serde(default)]
    pub value_list: Field<ValueList>,
    /// Static value.
    #[serde(default)]
    pub value: Field<Value>,
    /// Animation keyframes.
    #[serde(default)]
    pub keyframes: Vec<KeyFrame>,
    /// Default interpolation between keyframes.
    #[serde(default)]
    pub interpolation: Field<Interpolation>,
    /// Editor-specific settings.
    #[serde(default)]
    pub app_specific_data: Field<AppSpecificData>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

impl Parameter {
    /// `(when, value)` of every keyframe that carries both.
    ///
    /// Falls back to the static value at frame 0 when there are no keyframes.
    pub fn value_at_keyframes(&self) -> Vec<(i64, &Value)> {
        if self.keyframes.is_empty() {
            return self.value.value().map(|v| vec![(0, v)]).unwrap_or_default();
        }
        self.keyframes
            .iter()
            .filter_map(|k| Some((*k.when.value()?, k.value.value()?)))
            .collect()
    }
}

/// Choices of a popup parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValueList {
    /// Entries in display order.
    #[serde(default)]
    pub entries: Vec<ValueEntry>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// A `valueentry` of a [`ValueList`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValueEntry {
    /// Label.
    #[serde(default)]
    pub name: Field<String>,
    /// Value selected by this entry.
    #[serde(default)]
    pub value: Field<Value>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// A parameter value pinned to a frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyFrame {
    /// Frame, relative to the owning filter.
    #[serde(default)]
    pub when: Field<i64>,
    /// Value at `when`.
    #[serde(default)]
    pub value: Field<Value>,
    /// Interpolation leaving this keyframe.
    #[serde(default)]
    pub interpolation: Field<Interpolation>,
    /// Incoming ease.
    #[serde(default)]
    pub in_scale: Field<String>,
    /// Outgoing ease.
    #[serde(default)]
    pub out_scale: Field<String>,
    /// Incoming bezier handle.
    #[serde(default)]
    pub in_bez: Field<BezierHandle>,
    /// Outgoing bezier handle.
    #[serde(default)]
    pub out_bez: Field<BezierHandle>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

/// Control point of a bezier keyframe, kept as raw text.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BezierHandle {
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

impl BezierHandle {
    /// Components as integers; missing or malformed ones read as `0`.
    pub fn as_position(&self) -> PositionValue {
        PositionValue {
            horiz: component(&self.horiz),
            vert: component(&self.vert),
        }
    }
}

/// Interpolation mode, e.g. `FCPCurve` or `linear`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Interpolation {
    /// Mode name.
    #[serde(default)]
    pub name: Field<String>,
    /// Unrecognized content.
    #[serde(default)]
    pub extra: Extra,
}

#[cfg(test)]
#[path = "../../tests/unit/model/effect.rs"]
mod tests;
