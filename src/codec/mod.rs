//! Conversion between element trees and the typed [`Document`].

pub(crate) mod children;
pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod nesting;

use crate::foundation::error::XmemlResult;
use crate::foundation::options::{DecodeOptions, EncodeOptions};
use crate::model::document::Document;

/// Decode a document with [`DecodeOptions::default`].
pub fn decode(bytes: &[u8]) -> XmemlResult<Document> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode a document.
///
/// Decoding is all-or-nothing: on error no partial document is returned.
/// Missing or malformed optional fields never fail (outside strict mode);
/// required fields, file id conflicts, sequence cycles and excessive nesting
/// do.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_with(bytes: &[u8], opts: &DecodeOptions) -> XmemlResult<Document> {
    let root = crate::xml::parse(bytes, opts.max_element_depth)?;
    let doc = decode::Decoder::new(opts).document(&root)?;
    tracing::debug!(
        version = doc.version,
        files = doc.files.len(),
        "decoded document"
    );
    Ok(doc)
}

/// Encode a document with [`EncodeOptions::default`].
pub fn encode(doc: &Document) -> Vec<u8> {
    encode_with(doc, &EncodeOptions::default())
}

/// Encode a document. Total: every [`Document`] has an encoding.
#[tracing::instrument(skip(doc), fields(version = doc.version))]
pub fn encode_with(doc: &Document, opts: &EncodeOptions) -> Vec<u8> {
    let root = encode::Encoder::new(&doc.files).document(doc);
    crate::xml::write(&root, opts)
}
