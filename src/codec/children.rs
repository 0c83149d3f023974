use crate::foundation::error::FieldPath;
use crate::schema::aliases::{Entity, aliases};
use crate::xml::tree::{Element, Node};

/// A child element claimed for a field, with its location in the document.
#[derive(Clone, Debug)]
pub(crate) struct Match<'a> {
    pub(crate) el: &'a Element,
    pub(crate) path: FieldPath,
}

/// Child nodes of one entity, claimed field by field.
///
/// Whatever is still unclaimed after every field has been taken is the
/// entity's unknown content.
pub(crate) struct Children<'a> {
    entity: Entity,
    path: FieldPath,
    slots: Vec<Option<&'a Element>>,
    text: Vec<&'a str>,
    leaves: Vec<(&'static str, &'a Element)>,
}

/// Unclaimed content of an entity.
pub(crate) struct Rest<'a> {
    pub(crate) elements: Vec<&'a Element>,
    pub(crate) text: Vec<&'a str>,
    /// Leaf fields that carried attributes or child elements, by canonical tag.
    pub(crate) leaves: Vec<(&'static str, &'a Element)>,
}

impl Rest<'_> {
    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.text.is_empty() && self.leaves.is_empty()
    }
}

impl<'a> Children<'a> {
    pub(crate) fn new(entity: Entity, el: &'a Element, path: FieldPath) -> Self {
        let mut slots = Vec::new();
        let mut text = Vec::new();
        for node in &el.children {
            match node {
                Node::Element(child) => slots.push(Some(child)),
                Node::Text(t) => text.push(t.as_str()),
            }
        }
        Self {
            entity,
            path,
            slots,
            text,
            leaves: Vec::new(),
        }
    }

    pub(crate) fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Claim the first child spelling `canonical`. Aliases are tried in order.
    pub(crate) fn take(&mut self, canonical: &'static str) -> Option<Match<'a>> {
        let spellings = aliases(self.entity, canonical);
        for tag in spellings.tags() {
            let Some(slot) = self
                .slots
                .iter_mut()
                .find(|s| s.is_some_and(|el| el.name == tag))
            else {
                continue;
            };
            let el = slot.take()?;
            if tag != canonical {
                tracing::trace!(entity = ?self.entity, tag, canonical, "legacy tag");
            }
            return Some(Match {
                el,
                path: self.path.child(tag),
            });
        }
        None
    }

    /// Like [`Children::take`] for a text-only field. Attributes and child
    /// elements found on it are remembered as unknown content.
    pub(crate) fn take_leaf(&mut self, canonical: &'static str) -> Option<Match<'a>> {
        let m = self.take(canonical)?;
        if !m.el.attributes.is_empty() || m.el.elements().next().is_some() {
            self.leaves.push((canonical, m.el));
        }
        Some(m)
    }

    /// Claim every child spelling `canonical`, in document order.
    pub(crate) fn take_all(&mut self, canonical: &'static str) -> Vec<Match<'a>> {
        let spellings = aliases(self.entity, canonical);
        let mut out = Vec::new();
        for slot in &mut self.slots {
            let Some(el) = slot.filter(|el| spellings.accepts(&el.name)) else {
                continue;
            };
            *slot = None;
            out.push(Match {
                el,
                path: self.path.indexed(&el.name, out.len()),
            });
        }
        out
    }

    /// Claim the character data between child elements.
    pub(crate) fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text).concat()
    }

    /// Content no field claimed, in document order.
    pub(crate) fn rest(self) -> Rest<'a> {
        Rest {
            elements: self.slots.into_iter().flatten().collect(),
            text: self.text,
            leaves: self.leaves,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/children.rs"]
mod tests;
