//! Sequence nesting, walked with an explicit stack.
//!
//! Nested sequences are located and checked before any of them is decoded,
//! then decoded innermost first; the encoder builds them innermost first as
//! well. Neither direction recurses from one sequence level into the next,
//! so the nesting limit is enforced regardless of the thread's stack size.

use std::collections::HashSet;
use std::ptr;

use crate::codec::children::{Children, Match};
use crate::foundation::core::Field;
use crate::foundation::error::{FieldPath, XmemlError, XmemlResult};
use crate::model::clip::{Clip, ClipItem};
use crate::model::document::{Document, Payload};
use crate::model::file::{FileArena, FileId};
use crate::model::media::Media;
use crate::model::sequence::Sequence;
use crate::schema::aliases::Entity;
use crate::xml::tree::Element;

/// Element kinds on the way from one sequence to the next.
#[derive(Clone, Copy, Debug)]
enum Scope {
    Clip,
    Sequence,
    ClipItem,
    File,
    Media,
    Video,
    Audio,
    Track,
}

struct Found<'a> {
    m: Match<'a>,
    depth: usize,
    parent: Option<usize>,
}

/// Every `<sequence>` element the decoder will visit, outer before inner.
///
/// Fails with [`XmemlError::ExcessiveNesting`] when a sequence sits deeper
/// than `max_depth`, and with [`XmemlError::MalformedField`] when a sequence
/// repeats the `id` of one of its ancestors.
pub(crate) fn scan(root: &Element, max_depth: usize) -> XmemlResult<Vec<Match<'_>>> {
    let mut found: Vec<Found<'_>> = Vec::new();
    let mut c = Children::new(Entity::Document, root, FieldPath::root("xmeml"));
    let mut next = Vec::new();
    if let Some(m) = c.take("clip") {
        next.push((Scope::Clip, m));
    }
    if let Some(m) = c.take("sequence") {
        next.push((Scope::Sequence, m));
    }
    let mut stack: Vec<(Scope, Match<'_>, Option<usize>)> =
        next.into_iter().rev().map(|(s, m)| (s, m, None)).collect();

    while let Some((scope, m, mut owner)) = stack.pop() {
        let mut next: Vec<(Scope, Match<'_>)> = Vec::new();
        match scope {
            Scope::Sequence => {
                owner = Some(enter(&mut found, &m, owner, max_depth)?);
                let mut c = Children::new(Entity::Sequence, m.el, m.path);
                next.extend(c.take("media").map(|m| (Scope::Media, m)));
                next.extend(c.take("file").map(|m| (Scope::File, m)));
                next.extend(c.take_all("sequence").into_iter().map(|m| (Scope::Sequence, m)));
            }
            Scope::Clip => {
                let mut c = Children::new(Entity::Clip, m.el, m.path);
                next.extend(c.take("media").map(|m| (Scope::Media, m)));
                next.extend(c.take("file").map(|m| (Scope::File, m)));
            }
            Scope::ClipItem => {
                let mut c = Children::new(Entity::ClipItem, m.el, m.path);
                next.extend(c.take("file").map(|m| (Scope::File, m)));
                next.extend(
                    c.take("sequence")
                        .filter(|m| !m.el.is_bare())
                        .map(|m| (Scope::Sequence, m)),
                );
            }
            Scope::File => {
                if !m.el.children.is_empty() {
                    let mut c = Children::new(Entity::File, m.el, m.path);
                    next.extend(c.take("media").map(|m| (Scope::Media, m)));
                }
            }
            Scope::Media => {
                let mut c = Children::new(Entity::Media, m.el, m.path);
                next.extend(c.take("video").map(|m| (Scope::Video, m)));
                next.extend(c.take("audio").map(|m| (Scope::Audio, m)));
            }
            Scope::Video | Scope::Audio => {
                let entity = match scope {
                    Scope::Video => Entity::Video,
                    _ => Entity::Audio,
                };
                let mut c = Children::new(entity, m.el, m.path);
                next.extend(c.take_all("track").into_iter().map(|m| (Scope::Track, m)));
            }
            Scope::Track => {
                let mut c = Children::new(Entity::Track, m.el, m.path);
                next.extend(c.take_all("clipitem").into_iter().map(|m| (Scope::ClipItem, m)));
            }
        }
        stack.extend(next.into_iter().rev().map(|(s, m)| (s, m, owner)));
    }

    Ok(found.into_iter().map(|f| f.m).collect())
}

fn enter<'a>(
    found: &mut Vec<Found<'a>>,
    m: &Match<'a>,
    parent: Option<usize>,
    max_depth: usize,
) -> XmemlResult<usize> {
    let depth = parent
        .and_then(|i| found.get(i))
        .map_or(1, |p| p.depth + 1);
    if depth > max_depth {
        return Err(XmemlError::excessive_nesting(&m.path, depth, max_depth));
    }
    if let Some(id) = m.el.attr("id") {
        let mut up = parent;
        while let Some(ancestor) = up.and_then(|i| found.get(i)) {
            if ancestor.m.el.attr("id") == Some(id) {
                return Err(XmemlError::malformed_field(
                    &m.path,
                    format!("sequence {id:?} is nested inside itself"),
                ));
            }
            up = ancestor.parent;
        }
    }
    found.push(Found {
        m: m.clone(),
        depth,
        parent,
    });
    Ok(found.len() - 1)
}

/// What the encoder needs to know before writing anything.
pub(crate) struct Plan<'d> {
    /// Every sequence in writing order, outer before inner.
    pub(crate) sequences: Vec<&'d Sequence>,
    /// File fields written as the full definition: the first occurrence of
    /// each identified file in writing order.
    pub(crate) definitions: HashSet<*const Field<FileId>>,
}

#[derive(Clone, Copy)]
enum Visit<'d> {
    Sequence(&'d Sequence),
    Clip(&'d Clip),
    ClipItem(&'d ClipItem),
    Media(&'d Media),
    File(&'d Field<FileId>),
}

/// Walk a document in the encoder's field order.
pub(crate) fn plan(doc: &Document) -> Plan<'_> {
    let files: &FileArena = &doc.files;
    let mut plan = Plan {
        sequences: Vec::new(),
        definitions: HashSet::new(),
    };
    let mut defined: HashSet<FileId> = HashSet::new();
    let mut stack = match &doc.payload {
        Some(Payload::Clip(clip)) => vec![Visit::Clip(clip)],
        Some(Payload::Sequence(seq)) => vec![Visit::Sequence(seq)],
        None => Vec::new(),
    };

    while let Some(visit) = stack.pop() {
        let mut next: Vec<Visit<'_>> = Vec::new();
        match visit {
            Visit::Sequence(s) => {
                plan.sequences.push(s);
                next.extend(s.media.value().map(Visit::Media));
                next.push(Visit::File(&s.file));
                next.extend(s.sequences.iter().map(Visit::Sequence));
            }
            Visit::Clip(c) => {
                next.extend(c.media.value().map(Visit::Media));
                next.push(Visit::File(&c.file));
            }
            Visit::ClipItem(c) => {
                next.push(Visit::File(&c.file));
                next.extend(c.sequence.value().map(|s| Visit::Sequence(&**s)));
            }
            Visit::Media(m) => {
                next.extend(
                    m.tracks()
                        .flat_map(|t| t.clip_items.iter())
                        .map(Visit::ClipItem),
                );
            }
            Visit::File(field) => {
                let Some(&handle) = field.value() else {
                    continue;
                };
                let Some(file) = files.get(handle) else {
                    continue;
                };
                if file.id.is_some() {
                    if !defined.insert(handle) {
                        continue;
                    }
                    plan.definitions.insert(ptr::from_ref(field));
                }
                next.extend(file.media.value().map(Visit::Media));
            }
        }
        stack.extend(next.into_iter().rev());
    }
    plan
}

#[cfg(test)]
#[path = "../../tests/unit/codec/nesting.rs"]
mod tests;
