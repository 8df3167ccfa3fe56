//! Minimal DOM model and the capabilities the renderer needs from a host page.
//!
//! The renderer builds an owned [`Node`] tree first and only then hands it to a
//! [`Container`], so a failure while building never leaves half a table on screen.

use std::collections::BTreeMap;

use hrms_business::UserListResult;

/// An element or a text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Element holding a single text node.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Direct children that are elements with the given tag.
    pub fn child_elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter_map(move |child| match child {
            Node::Element(el) if el.tag == tag => Some(el),
            _ => None,
        })
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants, like `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// All elements with `tag` in document order, this node included.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(tag, &mut found);
        found
    }

    fn walk<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let Self::Element(el) = self {
            if el.tag == tag {
                found.push(el);
            }
            for child in &el.children {
                child.walk(tag, found);
            }
        }
    }

    /// Serializes the tree as HTML, escaping text and attribute values.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                if let Some(class) = el.class {
                    out.push_str(" class=\"");
                    out.push_str(&escape_html(class));
                    out.push('"');
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(el.tag);
                out.push('>');
            }
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The element output is rendered into.
pub trait Container {
    /// Removes every child.
    fn clear(&mut self);

    /// Appends `node` as the last child.
    fn append(&mut self, node: &Node) -> UserListResult<()>;

    /// Clears, then appends `node`.
    fn replace_with(&mut self, node: &Node) -> UserListResult<()> {
        self.clear();
        self.append(node)
    }
}

impl<C: Container + ?Sized> Container for &mut C {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append(&mut self, node: &Node) -> UserListResult<()> {
        (**self).append(node)
    }
}

/// Looks up containers by element id.
pub trait Document {
    type Container<'a>: Container
    where
        Self: 'a;

    fn container_by_id(&mut self, id: &str) -> Option<Self::Container<'_>>;
}

/// In-process container; keeps its children as [`Node`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    children: Vec<Node>,
}

impl MemoryContainer {
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Inner HTML of the container.
    pub fn to_html(&self) -> String {
        self.children.iter().map(Node::to_html).collect()
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        self.children
            .iter()
            .flat_map(|child| child.find_all(tag))
            .collect()
    }
}

impl Container for MemoryContainer {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, node: &Node) -> UserListResult<()> {
        self.children.push(node.clone());
        Ok(())
    }
}

/// In-process document holding named containers.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    containers: BTreeMap<String, MemoryContainer>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with one empty container called `id`.
    pub fn with_container(id: &str) -> Self {
        let mut doc = Self::new();
        doc.insert_container(id, MemoryContainer::default());
        doc
    }

    pub fn insert_container(&mut self, id: &str, container: MemoryContainer) {
        self.containers.insert(id.to_owned(), container);
    }

    pub fn container(&self, id: &str) -> Option<&MemoryContainer> {
        self.containers.get(id)
    }
}

impl Document for MemoryDocument {
    type Container<'a> = &'a mut MemoryContainer;

    fn container_by_id(&mut self, id: &str) -> Option<Self::Container<'_>> {
        self.containers.get_mut(id)
    }
}
