/// Tri-state wrapper for every optional element of the format.
///
/// A round-tripping encoder has to tell apart an element that was never in
/// the source (`Absent`) from one that was written with no content
/// (`Empty`, e.g. `<name/>`). Callers that only need the effective value use
/// [`Field::get`], which collapses both to the type's zero value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field<T> {
    /// The element does not occur in the document.
    Absent,
    /// The element occurs with no content.
    Empty,
    /// The element occurs with a value.
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Field<T> {
    /// Whether the element does not occur.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the element occurs with no content.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the element occurs with a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Empty => None,
        }
    }

    /// Mutably borrow the value, if present.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Empty => None,
        }
    }

    /// Take the value, if present.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Empty => None,
        }
    }

    /// Convert `&Field<T>` to `Field<&T>`.
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Empty => Field::Empty,
            Self::Present(v) => Field::Present(v),
        }
    }

    /// Map the present value, keeping the absent/empty state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Empty => Field::Empty,
            Self::Present(v) => Field::Present(f(v)),
        }
    }

    /// `Some` becomes present, `None` becomes absent.
    pub fn from_option(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Self::Present)
    }

    /// Replace the field with a present value.
    pub fn set(&mut self, value: T) {
        *self = Self::Present(value);
    }
}

impl<T: Clone + Default> Field<T> {
    /// Effective value: the present value, or the zero value when absent or empty.
    pub fn get(&self) -> T {
        self.value().cloned().unwrap_or_default()
    }
}

impl<T> From<T> for Field<T> {
    fn from(v: T) -> Self {
        Self::Present(v)
    }
}

/// Base-10 integer grammar shared by every numeric element.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Boolean grammar: `TRUE` / `FALSE`, case-insensitive.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub(crate) fn format_bool(b: bool) -> &'static str {
    if b { "TRUE" } else { "FALSE" }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
