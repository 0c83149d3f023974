//! Schema revisions and the tag alias table.
//!
//! Every historical revision decodes into the same model; the differences
//! between revisions are spelling variants of a handful of tags, listed in
//! [`aliases`].

pub(crate) mod aliases;
pub(crate) mod version;
