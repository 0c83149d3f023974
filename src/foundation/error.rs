use std::fmt;

/// Convenience result type used across the crate.
pub type XmemlResult<T> = Result<T, XmemlError>;

/// One step of a [`FieldPath`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathElem {
    /// A child element, by tag name.
    Tag(String),
    /// Position of a repeated child among its siblings of the same field.
    Index(usize),
    /// An attribute of the preceding element.
    Attr(String),
}

/// Location of an element inside a document, rendered as
/// `xmeml.sequence.media.video.track[0].clipitem[1]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathElem>);

impl FieldPath {
    /// Path consisting of a single root tag.
    pub fn root(tag: &str) -> Self {
        Self(vec![PathElem::Tag(tag.to_owned())])
    }

    /// Extend the path with a child element.
    pub fn child(&self, tag: &str) -> Self {
        let mut elems = self.0.clone();
        elems.push(PathElem::Tag(tag.to_owned()));
        Self(elems)
    }

    /// Extend the path with the `index`-th occurrence of a repeated child.
    pub fn indexed(&self, tag: &str, index: usize) -> Self {
        let mut elems = self.0.clone();
        elems.push(PathElem::Tag(tag.to_owned()));
        elems.push(PathElem::Index(index));
        Self(elems)
    }

    /// Extend the path with an attribute of the current element.
    pub fn attr(&self, name: &str) -> Self {
        let mut elems = self.0.clone();
        elems.push(PathElem::Attr(name.to_owned()));
        Self(elems)
    }

    /// Path steps, outermost first.
    pub fn elems(&self) -> &[PathElem] {
        &self.0
    }

    /// Whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, elem) in self.0.iter().enumerate() {
            match elem {
                PathElem::Tag(tag) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(tag)?;
                }
                PathElem::Index(index) => write!(f, "[{index}]")?,
                PathElem::Attr(name) => write!(f, "@{name}")?,
            }
        }
        Ok(())
    }
}

/// Decode failures. Encoding never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum XmemlError {
    /// The input is not well-formed markup, or is not an XMEML document at all.
    #[error("malformed xml: {message}")]
    MalformedXml {
        /// Tokenizer diagnostic.
        message: String,
    },

    /// A required field is missing or fails its grammar.
    #[error("malformed field at {path}: {message}")]
    MalformedField {
        /// Location of the offending element or attribute.
        path: FieldPath,
        /// What was wrong with it.
        message: String,
    },

    /// Nesting exceeded the configured ceiling.
    #[error("excessive nesting at {path}: depth {depth} exceeds limit {limit}")]
    ExcessiveNesting {
        /// Location of the element that crossed the limit.
        path: FieldPath,
        /// Depth reached.
        depth: usize,
        /// Configured ceiling.
        limit: usize,
    },
}

impl XmemlError {
    /// Build a [`XmemlError::MalformedXml`] value.
    pub fn malformed_xml(msg: impl Into<String>) -> Self {
        Self::MalformedXml {
            message: msg.into(),
        }
    }

    /// Build a [`XmemlError::MalformedField`] value.
    pub fn malformed_field(path: &FieldPath, msg: impl Into<String>) -> Self {
        Self::MalformedField {
            path: path.clone(),
            message: msg.into(),
        }
    }

    /// Build a [`XmemlError::ExcessiveNesting`] value.
    pub fn excessive_nesting(path: &FieldPath, depth: usize, limit: usize) -> Self {
        Self::ExcessiveNesting {
            path: path.clone(),
            depth,
            limit,
        }
    }

    /// Location of the failure, when the error carries one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::MalformedXml { .. } => None,
            Self::MalformedField { path, .. } | Self::ExcessiveNesting { path, .. } => Some(path),
        }
    }
}

impl From<quick_xml::Error> for XmemlError {
    fn from(e: quick_xml::Error) -> Self {
        Self::malformed_xml(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for XmemlError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::malformed_xml(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
