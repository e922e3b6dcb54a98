//! Node storage for the trie.
//!
//! Nodes live in an arena owned by the `Trie`. A node owns its children only
//! through the arena: the `children` map and the `parent` link are both
//! `NodeId` indices, so the parent back-reference never owns anything. Slots
//! freed by pruning are recycled through a free list.

use std::collections::BTreeMap;
use std::fmt;

/// Index of a node inside its trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);
}

/// Internal node type.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<V> {
    /// Edge label from the parent, `None` for the root
    pub symbol: Option<char>,

    /// Payload; present exactly when this node ends a stored word
    pub value: Option<V>,

    /// Parent back-reference, `None` for the root
    pub parent: Option<NodeId>,

    /// Children in ascending symbol order
    pub children: BTreeMap<char, NodeId>,
}

impl<V> TrieNode<V> {
    /// Creates the root node
    pub fn root() -> Self {
        TrieNode {
            symbol: None,
            value: None,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    /// Creates an empty child reached from `parent` through `symbol`
    pub fn child(symbol: char, parent: NodeId) -> Self {
        TrieNode {
            symbol: Some(symbol),
            value: None,
            parent: Some(parent),
            children: BTreeMap::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Stores `value`, returning the one it replaced
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    pub fn clear_value(&mut self) -> Option<V> {
        self.value.take()
    }

    /// A node that can be pruned: no payload and nothing below it
    pub fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

/// Slot arena holding every node of one trie.
#[derive(Debug, Clone)]
pub(crate) struct Arena<V> {
    slots: Vec<Option<TrieNode<V>>>,
    free: Vec<usize>,
}

impl<V> Arena<V> {
    /// Creates an arena holding only the root
    pub fn new() -> Self {
        Arena {
            slots: vec![Some(TrieNode::root())],
            free: Vec::new(),
        }
    }

    pub fn node(&self, id: NodeId) -> &TrieNode<V> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {}", id.0),
        }
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TrieNode<V> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {}", id.0),
        }
    }

    /// Number of live nodes, root included
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Follows `symbol` from `id`, if such an edge exists
    pub fn child(&self, id: NodeId, symbol: char) -> Option<NodeId> {
        self.node(id).children.get(&symbol).copied()
    }

    /// Follows every symbol of `key` from the root
    pub fn walk(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(NodeId::ROOT, |id, symbol| self.child(id, symbol))
    }

    /// Returns the child of `parent` for `symbol`, creating and linking it if absent
    pub fn get_or_create_child(&mut self, parent: NodeId, symbol: char) -> NodeId {
        if let Some(id) = self.child(parent, symbol) {
            return id;
        }

        let node = TrieNode::child(symbol, parent);
        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };
        self.node_mut(parent).children.insert(symbol, id);
        tracing::trace!(?symbol, node = id.0, parent = parent.0, "created node");
        id
    }

    /// Unlinks the child of `parent` for `symbol` and frees its slot.
    ///
    /// The child must be vacant.
    pub fn remove_child(&mut self, parent: NodeId, symbol: char) -> Option<TrieNode<V>> {
        let id = self.node_mut(parent).children.remove(&symbol)?;
        debug_assert!(self.node(id).is_vacant(), "pruned a node that was still in use");
        let node = self.slots[id.0].take();
        self.free.push(id.0);
        tracing::trace!(?symbol, node = id.0, parent = parent.0, "pruned node");
        node
    }

    /// Drops every node except a fresh root
    pub fn clear(&mut self) {
        self.slots.clear();
        self.slots.push(Some(TrieNode::root()));
        self.free.clear();
    }

    /// Rebuilds the key spelled by the path from the root to `id`
    pub fn path_of(&self, id: NodeId) -> String {
        let mut symbols = Vec::new();
        let mut current = self.node(id);
        while let (Some(symbol), Some(parent)) = (current.symbol, current.parent) {
            symbols.push(symbol);
            current = self.node(parent);
        }
        symbols.iter().rev().collect()
    }
}

/// A borrowed handle to one node of a trie, as returned by
/// [`Trie::search`](crate::Trie::search).
///
/// The handle borrows the trie, so the node cannot be pruned while it is held.
pub struct NodeRef<'a, V> {
    arena: &'a Arena<V>,
    id: NodeId,
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(arena: &'a Arena<V>, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    fn node(&self) -> &'a TrieNode<V> {
        self.arena.node(self.id)
    }

    /// The arena index of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The symbol on the edge into this node, `None` for the root.
    pub fn symbol(&self) -> Option<char> {
        self.node().symbol
    }

    /// The payload, if this node ends a stored word.
    pub fn value(&self) -> Option<&'a V> {
        self.node().value.as_ref()
    }

    /// Whether this node ends a stored word.
    pub fn has_value(&self) -> bool {
        self.node().has_value()
    }

    pub fn has_children(&self) -> bool {
        self.node().has_children()
    }

    pub fn child_count(&self) -> usize {
        self.node().child_count()
    }

    /// Whether this is the root of its trie.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, V>> {
        self.node().parent.map(|id| NodeRef::new(self.arena, id))
    }

    /// The child reached through `symbol`, if any.
    pub fn child(&self, symbol: char) -> Option<NodeRef<'a, V>> {
        self.arena
            .child(self.id, symbol)
            .map(|id| NodeRef::new(self.arena, id))
    }

    /// The children in ascending symbol order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, V>> + 'a {
        let arena = self.arena;
        self.node()
            .children
            .values()
            .map(move |&id| NodeRef::new(arena, id))
    }

    /// The key spelled by the path from the root to this node.
    pub fn prefix(&self) -> String {
        self.arena.path_of(self.id)
    }
}

impl<'a, V> Clone for NodeRef<'a, V> {
    fn clone(&self) -> Self {
        NodeRef {
            arena: self.arena,
            id: self.id,
        }
    }
}

impl<'a, V> Copy for NodeRef<'a, V> {}

impl<'a, V: fmt::Debug> fmt::Debug for NodeRef<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("symbol", &self.symbol())
            .field("value", &self.value())
            .field("children", &self.child_count())
            .finish()
    }
}
