use anyhow::{Result, anyhow};
use core::fmt;
use indextree::{Arena, NodeId};
use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Document,
    Element { tag: String },
    Text { text: String },
    Comment { text: String },
}

#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
}

/// An immutable-after-construction document tree.
///
/// Nodes live in an [`indextree::Arena`]; the document node is created up front and
/// everything else hangs below it. Tag and attribute names are stored lower-cased.
pub struct Dom {
    pub(crate) arena: Arena<DomNode>,
    root: NodeId,
}

impl Dom {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(DomNode::default());
        Self { arena, root }
    }

    /// The document node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            dom: self,
            id: self.root,
            data: self.arena[self.root].get(),
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Look up a node, returning `None` for ids that do not belong to this tree.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        let node = self.arena.get(id)?;
        if node.is_removed() {
            return None;
        }
        Some(NodeRef {
            dom: self,
            id,
            data: node.get(),
        })
    }

    /// Number of nodes in the tree, the document node included.
    pub fn node_count(&self) -> usize {
        self.arena.iter().filter(|node| !node.is_removed()).count()
    }

    /// First element in tree order whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeRef<'_>> {
        self.root()
            .descendants()
            .find(|node| node.is_element() && node.attr("id") == Some(id))
    }

    /// All elements with the given tag name, in tree order.
    pub fn elements_by_tag(&self, tag: &str) -> impl Iterator<Item = NodeRef<'_>> + use<'_> {
        let tag = tag.to_ascii_lowercase();
        self.root()
            .descendants()
            .filter(move |node| node.tag() == Some(tag.as_str()))
    }

    /// Append a new element as the last child of `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` is not a node of this tree.
    pub fn append_element<I, K, V>(&mut self, parent: NodeId, tag: &str, attrs: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let attrs = attrs
            .into_iter()
            .map(|(name, value)| (name.into().to_ascii_lowercase(), value.into()))
            .collect();
        self.append(
            parent,
            DomNode {
                kind: NodeKind::Element {
                    tag: tag.to_ascii_lowercase(),
                },
                attrs,
            },
        )
    }

    /// Append a text node as the last child of `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` is not a node of this tree.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> Result<NodeId> {
        self.append(
            parent,
            DomNode {
                kind: NodeKind::Text { text: text.into() },
                attrs: SmallVec::new(),
            },
        )
    }

    /// Append a comment node as the last child of `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` is not a node of this tree.
    pub fn append_comment(&mut self, parent: NodeId, text: impl Into<String>) -> Result<NodeId> {
        self.append(
            parent,
            DomNode {
                kind: NodeKind::Comment { text: text.into() },
                attrs: SmallVec::new(),
            },
        )
    }

    fn append(&mut self, parent: NodeId, node: DomNode) -> Result<NodeId> {
        if self.node(parent).is_none() {
            return Err(anyhow!("parent {parent:?} is not part of this DOM"));
        }
        let child = self.arena.new_node(node);
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|err| anyhow!("failed to append {child:?} to {parent:?}: {err}"))?;
        Ok(child)
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed, copyable view of a single node.
#[derive(Clone, Copy)]
pub struct NodeRef<'dom> {
    dom: &'dom Dom,
    id: NodeId,
    data: &'dom DomNode,
}

impl<'dom> NodeRef<'dom> {
    pub fn kind(self) -> &'dom NodeKind {
        &self.data.kind
    }

    pub fn is_element(self) -> bool {
        matches!(self.data.kind, NodeKind::Element { .. })
    }

    /// Lower-case tag name, for elements only.
    pub fn tag(self) -> Option<&'dom str> {
        match &self.data.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Attribute value by name; names compare ASCII case-insensitively.
    pub fn attr(self, name: &str) -> Option<&'dom str> {
        self.data
            .attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn attrs(self) -> &'dom [(String, String)] {
        &self.data.attrs
    }

    pub fn parent(self) -> Option<Self> {
        let parent = self.dom.arena.get(self.id)?.parent()?;
        self.dom.node(parent)
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'dom>> + 'dom {
        let dom = self.dom;
        self.id
            .children(&dom.arena)
            .filter_map(move |child| dom.node(child))
    }

    /// This node and everything below it, in tree order.
    pub fn descendants(self) -> impl Iterator<Item = NodeRef<'dom>> + 'dom {
        let dom = self.dom;
        self.id
            .descendants(&dom.arena)
            .filter_map(move |node| dom.node(node))
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("id", &self.id)
            .field("node", self.data)
            .finish()
    }
}

