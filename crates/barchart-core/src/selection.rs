// File: crates/barchart-core/src/selection.rs
// Summary: Data-binding selections over a `Document`: select, append, attr, and data joins by index.
// Notes:
// - A join splits bound data into update (existing element), enter (missing
//   element) and exit (surplus element) groups. Rendering only uses enter.
// - Operations on an empty selection are no-ops, as with the browser library.

use crate::dom::{Document, NodeId, Selector};
use crate::error::Result;
use crate::format;

/// Value that can be written as an attribute literal.
pub trait AttrValue {
    fn to_attr(&self) -> String;
}

impl AttrValue for f64 {
    fn to_attr(&self) -> String { format::number(*self) }
}

impl AttrValue for i32 {
    fn to_attr(&self) -> String { self.to_string() }
}

impl AttrValue for usize {
    fn to_attr(&self) -> String { self.to_string() }
}

impl AttrValue for &str {
    fn to_attr(&self) -> String { (*self).to_string() }
}

impl AttrValue for String {
    fn to_attr(&self) -> String { self.clone() }
}

impl Document {
    /// Select the first element matching `selector`. The selection is empty if nothing matches.
    pub fn select(&mut self, selector: &str) -> Result<Selection<'_>> {
        let found = self.query(selector)?;
        Ok(Selection { doc: self, nodes: found.into_iter().collect() })
    }

    /// Selection holding exactly `node`.
    pub fn selection(&mut self, node: NodeId) -> Selection<'_> {
        Selection { doc: self, nodes: vec![node] }
    }
}

/// Flat selection of elements.
pub struct Selection<'a> {
    doc: &'a mut Document,
    nodes: Vec<NodeId>,
}

impl<'a> Selection<'a> {
    pub fn nodes(&self) -> &[NodeId] { &self.nodes }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn len(&self) -> usize { self.nodes.len() }

    /// First selected element, if any.
    pub fn node(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Append a `tag` child to every selected element; selects the new children.
    pub fn append(self, tag: &str) -> Selection<'a> {
        let Selection { doc, nodes } = self;
        let created = nodes.iter().map(|&parent| doc.append_element(parent, tag)).collect();
        Selection { doc, nodes: created }
    }

    pub fn attr(self, name: &str, value: impl AttrValue) -> Self {
        let value = value.to_attr();
        for &n in &self.nodes {
            self.doc.set_attr(n, name, value.clone());
        }
        self
    }

    /// Group descendants matching `selector` under each selected element.
    pub fn select_all(self, selector: Selector) -> GroupedSelection<'a> {
        let Selection { doc, nodes } = self;
        let groups = nodes
            .into_iter()
            .map(|parent| Group { parent, nodes: doc.query_all_within(parent, &selector) })
            .collect();
        GroupedSelection { doc, groups }
    }
}

#[derive(Clone, Debug)]
struct Group {
    parent: NodeId,
    nodes: Vec<NodeId>,
}

/// Elements grouped by the parent they were selected under.
pub struct GroupedSelection<'a> {
    doc: &'a mut Document,
    groups: Vec<Group>,
}

impl<'a> GroupedSelection<'a> {
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.nodes.len()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Bind `data` to each group, pairing the i-th datum with the i-th element.
    pub fn data<'d, T>(self, data: &'d [T]) -> Join<'a, 'd, T> {
        Join { doc: self.doc, data, groups: self.groups }
    }
}

/// Result of binding data to a grouped selection.
pub struct Join<'a, 'd, T> {
    doc: &'a mut Document,
    data: &'d [T],
    groups: Vec<Group>,
}

impl<'a, 'd, T> Join<'a, 'd, T> {
    /// Data with an existing element.
    pub fn update_len(&self) -> usize {
        self.groups.iter().map(|g| g.nodes.len().min(self.data.len())).sum()
    }

    /// Data without an element yet.
    pub fn enter_len(&self) -> usize {
        self.groups.iter().map(|g| self.data.len().saturating_sub(g.nodes.len())).sum()
    }

    /// Elements without a datum.
    pub fn exit_len(&self) -> usize {
        self.groups.iter().map(|g| g.nodes.len().saturating_sub(self.data.len())).sum()
    }

    /// Placeholders for data with no matching element.
    pub fn enter(self) -> EnterSelection<'a, 'd, T> {
        let n = self.data.len();
        let slots = self
            .groups
            .iter()
            .flat_map(|g| (g.nodes.len()..n).map(move |i| (g.parent, i)))
            .collect();
        EnterSelection { doc: self.doc, data: self.data, slots }
    }
}

/// Placeholders awaiting materialization: (parent, data index).
pub struct EnterSelection<'a, 'd, T> {
    doc: &'a mut Document,
    data: &'d [T],
    slots: Vec<(NodeId, usize)>,
}

impl<'a, 'd, T> EnterSelection<'a, 'd, T> {
    pub fn len(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Materialize one `tag` element per placeholder, in data order.
    pub fn append(self, tag: &str) -> BoundSelection<'a, 'd, T> {
        let EnterSelection { doc, data, slots } = self;
        let bound = slots.into_iter().map(|(parent, i)| (doc.append_element(parent, tag), i)).collect();
        BoundSelection { doc, data, bound }
    }
}

/// Elements each carrying a datum and its index.
pub struct BoundSelection<'a, 'd, T> {
    doc: &'a mut Document,
    data: &'d [T],
    bound: Vec<(NodeId, usize)>,
}

impl<'a, 'd, T> BoundSelection<'a, 'd, T> {
    pub fn len(&self) -> usize { self.bound.len() }
    pub fn is_empty(&self) -> bool { self.bound.is_empty() }

    pub fn nodes(&self) -> Vec<NodeId> {
        self.bound.iter().map(|&(n, _)| n).collect()
    }

    /// Same value on every element.
    pub fn attr(self, name: &str, value: impl AttrValue) -> Self {
        let value = value.to_attr();
        for &(n, _) in &self.bound {
            self.doc.set_attr(n, name, value.clone());
        }
        self
    }

    /// Per-element value computed from (datum, index).
    pub fn attr_with<V, F>(self, name: &str, f: F) -> Self
    where
        V: AttrValue,
        F: Fn(&T, usize) -> V,
    {
        for &(n, i) in &self.bound {
            let v = f(&self.data[i], i).to_attr();
            self.doc.set_attr(n, name, v);
        }
        self
    }
}
