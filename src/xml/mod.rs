//! Generic element tree over `quick-xml`.
//!
//! The codec only ever sees [`Element`] values; bytes come in through
//! [`parse`] and go out through [`write`].

pub(crate) mod reader;
pub(crate) mod tree;
pub(crate) mod writer;

pub(crate) use reader::parse;
pub(crate) use writer::write;
