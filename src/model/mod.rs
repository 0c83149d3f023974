//! Canonical entity graph shared by every schema revision.

pub(crate) mod annotations;
pub(crate) mod clip;
pub(crate) mod document;
pub(crate) mod effect;
pub(crate) mod extra;
pub(crate) mod file;
pub(crate) mod media;
pub(crate) mod sequence;
pub(crate) mod timing;
pub(crate) mod value;
