use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::foundation::options::EncodeOptions;
use crate::xml::tree::{Element, Node};

/// Serialize a tree. Total: every [`Element`] has a textual form.
///
/// Elements that carry text are written on one line with their whole subtree,
/// so indentation never leaks into character data.
pub(crate) fn write(root: &Element, opts: &EncodeOptions) -> Vec<u8> {
    let mut writer = Writer::new(Vec::new());
    if let Err(e) = write_document(&mut writer, root, opts) {
        tracing::error!(%e, "writing into memory failed");
    }
    writer.into_inner()
}

enum Step<'a> {
    Open(&'a Element, Layout),
    Text(&'a str),
    Close(&'a Element, Option<usize>, bool),
}

#[derive(Clone, Copy)]
enum Layout {
    /// On its own line at this nesting level.
    Block(usize),
    Inline,
}

fn write_document(
    w: &mut Writer<Vec<u8>>,
    root: &Element,
    opts: &EncodeOptions,
) -> io::Result<()> {
    let pretty = opts.indent > 0;
    if opts.declaration {
        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        w.get_mut().push(b'\n');
        w.write_event(Event::DocType(BytesText::from_escaped("xmeml")))?;
        w.get_mut().push(b'\n');
    }

    let first = if pretty { Layout::Block(0) } else { Layout::Inline };
    let mut stack = vec![Step::Open(root, first)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Open(el, layout) => {
                let (pad, newline) = match layout {
                    Layout::Block(depth) => (Some(depth * opts.indent), true),
                    Layout::Inline => (None, false),
                };
                if let Some(n) = pad {
                    indent(w, n);
                }
                if el.children.is_empty() {
                    w.write_event(Event::Empty(start_tag(el)))?;
                    if newline {
                        w.get_mut().push(b'\n');
                    }
                    continue;
                }
                w.write_event(Event::Start(start_tag(el)))?;
                match layout {
                    Layout::Block(depth) if !el.has_text() => {
                        w.get_mut().push(b'\n');
                        stack.push(Step::Close(el, pad, true));
                        stack.extend(el.children.iter().rev().filter_map(|n| match n {
                            Node::Element(c) => Some(Step::Open(c, Layout::Block(depth + 1))),
                            Node::Text(_) => None,
                        }));
                    }
                    _ => {
                        stack.push(Step::Close(el, None, newline));
                        stack.extend(el.children.iter().rev().map(|n| match n {
                            Node::Element(c) => Step::Open(c, Layout::Inline),
                            Node::Text(t) => Step::Text(t),
                        }));
                    }
                }
            }
            Step::Text(t) => w.write_event(Event::Text(BytesText::new(t)))?,
            Step::Close(el, pad, newline) => {
                if let Some(n) = pad {
                    indent(w, n);
                }
                w.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
                if newline {
                    w.get_mut().push(b'\n');
                }
            }
        }
    }
    Ok(())
}

fn start_tag(el: &Element) -> BytesStart<'_> {
    let mut start = BytesStart::new(el.name.as_str());
    for (k, v) in &el.attributes {
        start.push_attribute((k.as_str(), v.as_str()));
    }
    start
}

fn indent(w: &mut Writer<Vec<u8>>, n: usize) {
    w.get_mut().extend(std::iter::repeat_n(b' ', n));
}

#[cfg(test)]
#[path = "../../tests/unit/xml/writer.rs"]
mod tests;
