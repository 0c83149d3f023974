/// Knobs for [`crate::decode_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest allowed sequence nesting; the payload sequence is depth 1.
    pub max_depth: usize,
    /// Deepest allowed element nesting in the raw markup.
    pub max_element_depth: usize,
    /// Reject malformed optional fields instead of defaulting them.
    pub strict: bool,
    /// Keep unrecognized child elements and attributes for re-emission.
    pub preserve_unknown: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_element_depth: 1024,
            strict: false,
            preserve_unknown: true,
        }
    }
}

/// Knobs for [`crate::encode_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level; `0` writes everything on one line.
    pub indent: usize,
    /// Emit the XML declaration and `<!DOCTYPE xmeml>` header.
    pub declaration: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}
