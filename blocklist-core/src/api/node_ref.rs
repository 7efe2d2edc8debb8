//! Handle to an element of a BlockList.

use core::{
    fmt,
    ptr::{self, NonNull},
};

use crate::internals::node::Node;

/// NodeRef
///
/// An opaque handle naming one element of a BlockList, as obtained from `Cursor::node` or `BlockList::node_at`.
///
/// The handle is never dereferenced: `BlockList::remove_node` only compares it against the nodes of its own chain. A
/// handle from another list is therefore harmlessly rejected.
///
/// #   Warning
///
/// A handle is only meaningful until its element is removed. The memory of a removed node may be reused by a later
/// insertion; a stale handle then names the new node if, and only if, it also refers to the very same block.
pub struct NodeRef<'a, B: ?Sized> {
    node: NonNull<Node<'a, B>>,
    block: &'a B,
}

impl<'a, B: ?Sized> NodeRef<'a, B> {
    /// Returns the block held by the element.
    pub fn block(&self) -> &'a B { self.block }

    /// Creates a handle to `node`.
    pub(crate) fn new(node: &Node<'a, B>) -> Self { Self { node: NonNull::from(node), block: node.block } }

    /// Returns whether `node` is the element named by this handle.
    pub(crate) fn names(&self, node: &Node<'a, B>) -> bool {
        node.is(self.node.as_ptr()) && ptr::eq(node.block, self.block)
    }
}

impl<'a, B: ?Sized> Clone for NodeRef<'a, B> {
    fn clone(&self) -> Self { *self }
}

impl<'a, B: ?Sized> Copy for NodeRef<'a, B> {}

impl<'a, B: ?Sized> PartialEq for NodeRef<'a, B> {
    fn eq(&self, other: &Self) -> bool { self.node == other.node }
}

impl<'a, B: ?Sized> Eq for NodeRef<'a, B> {}

impl<'a, B: ?Sized + fmt::Debug> fmt::Debug for NodeRef<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("node", &self.node)
            .field("block", &self.block)
            .finish()
    }
}

// mod tests
