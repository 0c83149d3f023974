use crate::xml::tree::Element;

/// Content the decoder did not recognize, kept so it can be written back.
///
/// Holds editor-specific extensions and tags from newer schema revisions.
/// Preserved elements are re-emitted after the known fields of their parent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extra {
    /// Unrecognized attributes, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    /// Unrecognized child elements, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
    /// Character data between the child elements, concatenated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Markup found on known text-only fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leaves: Vec<LeafExtra>,
}

impl Extra {
    /// Whether nothing was preserved.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
            && self.elements.is_empty()
            && self.text.is_empty()
            && self.leaves.is_empty()
    }
}

/// Attributes and child elements carried by a known text-only field, such as
/// the `unit` in `<duration unit="f">5</duration>`.
///
/// Merged back into the field's element when it is written.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeafExtra {
    /// Canonical tag of the field.
    pub tag: String,
    /// Attributes of the field element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    /// Child elements of the field element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
}
