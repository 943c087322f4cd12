//! The read-only tree interface the collector walks.

use dom::{NodeKind, NodeRef};

/// Node kinds the collector distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Document node; an always-rendered inline container without a tag.
    Document,
    Element,
    Text,
    /// Comments, processing instructions and anything else without rendered content.
    Comment,
}

/// A view onto one node of an immutable DOM.
///
/// Implementations must be cheap to clone: the collector clones children while recursing.
/// Tag names are compared ASCII case-insensitively, so implementations need not lower-case them.
pub trait TreeNode: Clone {
    fn node_type(&self) -> NodeType;

    /// Tag name of an element, `None` for every other node type.
    fn tag_name(&self) -> Option<&str>;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Children in document order.
    fn child_nodes(&self) -> impl Iterator<Item = Self>;

    fn parent_node(&self) -> Option<Self>;

    /// Raw character data of a text node.
    fn character_data(&self) -> Option<&str>;
}

impl TreeNode for NodeRef<'_> {
    fn node_type(&self) -> NodeType {
        match self.kind() {
            NodeKind::Document => NodeType::Document,
            NodeKind::Element { .. } => NodeType::Element,
            NodeKind::Text { .. } => NodeType::Text,
            NodeKind::Comment { .. } => NodeType::Comment,
        }
    }

    fn tag_name(&self) -> Option<&str> {
        self.tag()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attr(name)
    }

    fn child_nodes(&self) -> impl Iterator<Item = Self> {
        self.children()
    }

    fn parent_node(&self) -> Option<Self> {
        self.parent()
    }

    fn character_data(&self) -> Option<&str> {
        match self.kind() {
            NodeKind::Text { text } => Some(text.as_str()),
            NodeKind::Document | NodeKind::Element { .. } | NodeKind::Comment { .. } => None,
        }
    }
}
