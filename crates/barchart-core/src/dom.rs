// File: crates/barchart-core/src/dom.rs
// Summary: Minimal arena-backed element tree standing in for the page the chart is mounted into.
// Notes:
// - Only what the chart needs: elements, ordered attributes, text, simple selectors.
// - Nodes are never removed, so a `NodeId` stays valid for the document's lifetime.

use crate::error::{ChartError, Result};
use crate::format::escape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Parsed simple selector: `tag`, `#id`, `.class`, `tag#id` or `tag.class`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
}

impl Selector {
    /// Selector matching every element with tag `name`.
    pub fn tag(name: &str) -> Self {
        Self { tag: Some(name.to_ascii_lowercase()), id: None, class: None }
    }

    pub fn parse(src: &str) -> Result<Self> {
        let invalid = || ChartError::InvalidSelector { selector: src.to_string() };
        let s = src.trim();
        if s.is_empty() {
            return Err(invalid());
        }
        let split = s.find(['#', '.']).unwrap_or(s.len());
        let (tag, rest) = s.split_at(split);
        let tag = if tag.is_empty() {
            None
        } else if is_ident(tag) {
            Some(tag.to_ascii_lowercase())
        } else {
            return Err(invalid());
        };

        let (mut id, mut class) = (None, None);
        if !rest.is_empty() {
            let (marker, name) = rest.split_at(1);
            if !is_ident(name) {
                return Err(invalid());
            }
            match marker {
                "#" => id = Some(name.to_string()),
                _ => class = Some(name.to_string()),
            }
        }
        Ok(Self { tag, id, class })
    }

    pub fn tag_name(&self) -> Option<&str> { self.tag.as_deref() }
    pub fn id(&self) -> Option<&str> { self.id.as_deref() }
    pub fn class(&self) -> Option<&str> { self.class.as_deref() }

    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if attr_of(el, "id") != Some(id.as_str()) {
                return false;
            }
        }
        if let Some(class) = &self.class {
            let has = attr_of(el, "class").map(|c| c.split_whitespace().any(|c| c == class)).unwrap_or(false);
            if !has {
                return false;
            }
        }
        true
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn attr_of<'e>(el: &'e Element, name: &str) -> Option<&'e str> {
    el.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

/// Element tree with a single root.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    /// Empty document whose root element is `root_tag`.
    pub fn with_root(root_tag: &str) -> Self {
        let root = Element { tag: root_tag.to_string(), attrs: Vec::new(), text: None, parent: None, children: Vec::new() };
        Self { nodes: vec![root] }
    }

    /// Page skeleton `html > (head > meta, title) + body > div#container_id`.
    pub fn page(container_id: &str) -> Self {
        let (mut doc, body) = Self::skeleton();
        let container = doc.append_element(body, "div");
        doc.set_attr(container, "id", container_id);
        doc
    }

    /// Page skeleton with a container that `selector` matches: its tag (`div`
    /// when none), id and class. Nothing is added when the skeleton already
    /// matches, as for `body`.
    pub fn page_for(selector: &Selector) -> Self {
        let (mut doc, body) = Self::skeleton();
        let root = doc.root();
        if selector.matches(&doc.nodes[root.0]) || !doc.query_all_within(root, selector).is_empty() {
            return doc;
        }
        let container = doc.append_element(body, selector.tag_name().unwrap_or("div"));
        if let Some(id) = selector.id() {
            doc.set_attr(container, "id", id);
        }
        if let Some(class) = selector.class() {
            doc.set_attr(container, "class", class);
        }
        doc
    }

    fn skeleton() -> (Self, NodeId) {
        let mut doc = Self::with_root("html");
        let root = doc.root();
        let head = doc.append_element(root, "head");
        let meta = doc.append_element(head, "meta");
        doc.set_attr(meta, "charset", "utf-8");
        let title = doc.append_element(head, "title");
        doc.set_text(title, "Bar chart");
        let body = doc.append_element(root, "body");
        (doc, body)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a new element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element { tag: tag.to_string(), attrs: Vec::new(), text: None, parent: Some(parent), children: Vec::new() });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Set an attribute, overwriting in place when it already exists.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attrs = &mut self.nodes[node.0].attrs;
        match attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => attrs.push((name.to_string(), value)),
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0].text = Some(text.into());
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        attr_of(&self.nodes[node.0], name)
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Descendants of `scope` (excluding `scope`) matching `selector`, in document order.
    pub fn query_all_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if selector.matches(&self.nodes[id.0]) {
                out.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// First element in document order (root included) matching `selector`.
    pub fn query(&self, selector: &str) -> Result<Option<NodeId>> {
        let sel = Selector::parse(selector)?;
        let root = self.root();
        if sel.matches(&self.nodes[root.0]) {
            return Ok(Some(root));
        }
        Ok(self.query_all_within(root, &sel).into_iter().next())
    }

    /// Number of elements in the whole document matching `selector`.
    pub fn count(&self, selector: &str) -> Result<usize> {
        let sel = Selector::parse(selector)?;
        let root = self.root();
        let own = usize::from(sel.matches(&self.nodes[root.0]));
        Ok(own + self.query_all_within(root, &sel).len())
    }

    /// Serialize the whole document as an HTML page.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.write_node(self.root(), 0, &mut out);
        out
    }

    /// Serialize `node` and its subtree.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, 0, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let el = &self.nodes[node.0];
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&el.tag);
        for (k, v) in &el.attrs {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            out.push_str(&escape(v));
            out.push('"');
        }
        out.push('>');
        if el.tag.eq_ignore_ascii_case("meta") {
            out.push('\n');
            return;
        }
        if let Some(text) = &el.text {
            out.push_str(&escape(text));
        }
        if !el.children.is_empty() {
            out.push('\n');
            for &child in &el.children {
                self.write_node(child, depth + 1, out);
            }
            out.push_str(&indent);
        }
        out.push_str("</");
        out.push_str(&el.tag);
        out.push_str(">\n");
    }
}
