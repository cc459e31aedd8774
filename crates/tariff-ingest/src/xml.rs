//! Minimal namespace-agnostic XML element tree.
//!
//! The tariff feeds use vendor namespaces inconsistently across extracts, so
//! every lookup here goes by local name only. Documents are small enough
//! (single-digit megabytes) that materializing the tree is simpler and safer
//! than streaming lookups against deeply nested rate structures.

use std::collections::BTreeMap;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::IngestError;

#[derive(Debug, Clone, Default)]
pub struct XmlElement {
    /// Local element name, namespace prefix stripped.
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    /// Concatenated text content of this element (not descendants).
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Attribute value by local name; empty string when absent.
    pub fn attr(&self, name: &str) -> &str {
        self.attributes.get(name).map(String::as_str).unwrap_or("")
    }

    /// First descendant with the given local name, depth-first. Does not
    /// match the element itself.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant with the given local name, in document order.
    pub fn descendants(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Text content of the first direct child with the given local name.
    pub fn child_text(&self, name: &str) -> &str {
        self.children
            .iter()
            .find(|child| child.name == name)
            .map(|child| child.text.as_str())
            .unwrap_or("")
    }
}

/// Parse a whole XML file into an element tree.
pub fn read_xml_tree(path: &Path) -> Result<XmlElement, IngestError> {
    let mut reader = Reader::from_file(path)?;
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(start) => stack.push(element_from_start(&start)),
            Event::Empty(start) => {
                let element = element_from_start(&start);
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text.unescape().unwrap_or_default());
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            _ => {}
        }
        buf.clear();
    }

    root.ok_or(IngestError::NoRootElement)
}

fn element_from_start(start: &BytesStart<'_>) -> XmlElement {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut attributes = BTreeMap::new();
    for attr in start.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map(|value| value.into_owned())
            .unwrap_or_default();
        attributes.insert(key, value);
    }
    XmlElement {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    }
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    }
}
