use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::foundation::error::{FieldPath, XmemlError, XmemlResult};
use crate::xml::tree::{Element, Node};

/// Parse a complete document into its root element.
///
/// The tree is built with an explicit stack, so hostile nesting is reported as
/// [`XmemlError::ExcessiveNesting`] instead of exhausting the call stack.
/// Declarations, doctypes, comments and processing instructions are skipped;
/// whitespace-only text is dropped, other text is kept verbatim.
pub(crate) fn parse(bytes: &[u8], max_depth: usize) -> XmemlResult<Element> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            XmemlError::malformed_xml(format!("at byte {}: {e}", reader.buffer_position()))
        })?;
        match event {
            Event::Start(start) => {
                check_depth(&stack, &start, max_depth)?;
                if root.is_some() {
                    return Err(XmemlError::malformed_xml(
                        "document has more than one root element",
                    ));
                }
                stack.push(open_element(&start)?);
            }
            Event::Empty(start) => {
                check_depth(&stack, &start, max_depth)?;
                let el = open_element(&start)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| XmemlError::malformed_xml("unexpected closing tag"))?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                let text = std::str::from_utf8(&raw)
                    .map_err(|e| XmemlError::malformed_xml(format!("cdata is not utf-8: {e}")))?;
                push_text(&mut stack, text)?;
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
            Event::Eof => break,
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(XmemlError::malformed_xml(format!(
            "unexpected end of input: <{}> is never closed",
            open.name
        )));
    }
    root.ok_or_else(|| XmemlError::malformed_xml("document has no root element"))
}

fn open_element(start: &BytesStart<'_>) -> XmemlResult<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| XmemlError::malformed_xml(format!("tag name is not utf-8: {e}")))?
        .to_owned();
    let mut el = Element::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| XmemlError::malformed_xml(format!("attribute name is not utf-8: {e}")))?
            .to_owned();
        let value = attr.unescape_value()?.into_owned();
        el.set_attr(key, value);
    }
    Ok(el)
}

fn check_depth(stack: &[Element], start: &BytesStart<'_>, max_depth: usize) -> XmemlResult<()> {
    let depth = stack.len() + 1;
    if depth <= max_depth {
        return Ok(());
    }
    let mut path = FieldPath::default();
    for el in stack {
        path = path.child(&el.name);
    }
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    Err(XmemlError::excessive_nesting(
        &path.child(&name),
        depth,
        max_depth,
    ))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> XmemlResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.push(el),
        None => {
            if root.is_some() {
                return Err(XmemlError::malformed_xml(
                    "document has more than one root element",
                ));
            }
            *root = Some(el);
        }
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> XmemlResult<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text.to_owned()));
            Ok(())
        }
        None => Err(XmemlError::malformed_xml("text outside of the root element")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/xml/reader.rs"]
mod tests;
