//! Typed model and codec for XMEML, the XML interchange format non-linear
//! video editors use to exchange timelines.
//!
//! A document decodes into a [`Document`]: plain owned data with every
//! optional element wrapped in a tri-state [`Field`], every media file held
//! once in a [`FileArena`], and every parameter value kept as a polymorphic
//! [`Value`] the caller projects as needed. [`encode`] writes it back.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: bytes -> generic element tree (`quick-xml`, iterative, depth-guarded)
//! 2. **Decode**: element tree -> [`Document`], accepting every historical tag spelling
//! 3. **Encode**: [`Document`] -> element tree, canonical spellings and order
//! 4. **Write**: element tree -> bytes, with declaration and doctype
//!
//! ```
//! let doc = xmeml::decode(br#"<xmeml version="5"><clip><duration>188</duration></clip></xmeml>"#)?;
//! assert_eq!(doc.clip().map(|c| c.duration.get()), Some(188));
//! let bytes = xmeml::encode(&doc);
//! assert_eq!(xmeml::decode(&bytes)?, doc);
//! # Ok::<(), xmeml::XmemlError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod foundation;
mod model;
mod schema;
mod xml;

pub use codec::{decode, decode_with, encode, encode_with};
pub use foundation::core::Field;
pub use foundation::error::{FieldPath, PathElem, XmemlError, XmemlResult};
pub use foundation::options::{DecodeOptions, EncodeOptions};
pub use model::annotations::{
    Comments, FilmData, Labels, LoggingInfo, Marker, SourceTrack, SubClipInfo,
};
pub use model::clip::{AlphaType, Clip, ClipItem, CompositeMode, Link};
pub use model::document::{Document, Payload};
pub use model::effect::{
    BezierHandle, Effect, Filter, Interpolation, KeyFrame, Parameter, ValueEntry, ValueList,
};
pub use model::extra::{Extra, LeafExtra};
pub use model::file::{File, FileArena, FileId};
pub use model::media::{
    AppSpecificData, Audio, Channel, Codec, Format, Group, Media, Outputs, SampleCharacteristics,
    Video,
};
pub use model::sequence::{Sequence, Track};
pub use model::timing::{Rate, TimeCode};
pub use model::value::{ColorValue, PositionValue, Value};
pub use schema::aliases::{Aliases, Entity, aliases};
pub use schema::version::SchemaVersion;
pub use xml::tree::{Element, Node};
