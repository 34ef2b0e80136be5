//! Parsed XML metadata documents
//!
//! The flatteners need random access to an element's ancestor chain, its
//! `type` attribute, and its leading text, so metadata records are parsed
//! into a small element tree rather than streamed. Namespaces are resolved
//! while reading; each element keeps its namespace URI and local name.

use crate::domain::errors::FolioError;
use crate::domain::result::Result;
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

/// One element of a parsed metadata document
#[derive(Debug, Clone)]
pub struct XmlElement {
    /// Namespace URI the element's tag is bound to, if any
    pub ns: Option<String>,

    /// Local part of the tag name
    pub local: String,

    /// Value of the element's `type` attribute, if present
    pub type_attr: Option<String>,

    /// Text between the start tag and the first child element. Entities are
    /// unescaped; surrounding whitespace is preserved.
    pub text: String,

    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// First direct child with the given namespace URI and local name
    pub fn child(&self, ns: &str, local: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|c| c.local == local && c.ns.as_deref() == Some(ns))
    }
}

/// A parsed metadata document
#[derive(Debug, Clone)]
pub struct XmlDocument {
    /// The document root element
    pub root: XmlElement,
}

impl XmlDocument {
    /// Parses an XML string into an element tree
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Parse` for malformed input or a document with no
    /// root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut seen_child: Vec<bool> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let (resolve, event) = reader
                .read_resolved_event()
                .map_err(|e| FolioError::Parse(e.to_string()))?;
            match event {
                Event::Start(e) => {
                    if let Some(flag) = seen_child.last_mut() {
                        *flag = true;
                    }
                    stack.push(element_from_start(&resolve, &e)?);
                    seen_child.push(false);
                }
                Event::Empty(e) => {
                    if let Some(flag) = seen_child.last_mut() {
                        *flag = true;
                    }
                    let element = element_from_start(&resolve, &e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| FolioError::Parse("unbalanced end tag".to_string()))?;
                    seen_child.pop();
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(t) => {
                    if let (Some(element), Some(false)) = (stack.last_mut(), seen_child.last()) {
                        let text = t
                            .unescape()
                            .map_err(|e| FolioError::Parse(e.to_string()))?;
                        element.text.push_str(&text);
                    }
                }
                Event::CData(t) => {
                    if let (Some(element), Some(false)) = (stack.last_mut(), seen_child.last()) {
                        element
                            .text
                            .push_str(&String::from_utf8_lossy(&t.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(FolioError::Parse("unclosed element".to_string()));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| FolioError::Parse("document has no root element".to_string()))
    }

    /// Looks up a nested element by a root-relative path of local names
    /// within one namespace, taking the first match at each step
    pub fn find_path(&self, ns: &str, path: &[&str]) -> Option<&XmlElement> {
        let mut current = &self.root;
        for segment in path {
            current = current.child(ns, segment)?;
        }
        Some(current)
    }
}

fn element_from_start(
    resolve: &ResolveResult<'_>,
    start: &quick_xml::events::BytesStart<'_>,
) -> Result<XmlElement> {
    let ns = match resolve {
        ResolveResult::Bound(namespace) => {
            Some(String::from_utf8_lossy(namespace.as_ref()).into_owned())
        }
        _ => None,
    };
    let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let type_attr = match start
        .try_get_attribute("type")
        .map_err(|e| FolioError::Parse(e.to_string()))?
    {
        Some(attr) => Some(
            attr.unescape_value()
                .map_err(|e| FolioError::Parse(e.to_string()))?
                .into_owned(),
        ),
        None => None,
    };

    Ok(XmlElement {
        ns,
        local,
        type_attr,
        text: String::new(),
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(FolioError::Parse(
            "multiple root elements in document".to_string(),
        ));
    }
    Ok(())
}
