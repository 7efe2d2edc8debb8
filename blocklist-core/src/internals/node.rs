//! Link of the chain of a BlockList.

use alloc::boxed::Box;

use core::ptr::NonNull;

/// Link to a Node, possibly null.
///
/// The head slot of a BlockList and the `next` field of every Node are Links. Each Node is owned by exactly one Link,
/// either the list's head or its predecessor's `next`; any other pointer to a Node, such as the list's tail, is
/// non-owning.
pub(crate) type Link<'a, B> = Option<NonNull<Node<'a, B>>>;

/// Node.
///
/// A Node holds a borrowed block, and owns the remainder of the chain.
///
/// Nodes are only ever accessed through the raw pointers returned by `allocate`, so that moving a Link never
/// invalidates another pointer to the same Node.
pub(crate) struct Node<'a, B: ?Sized> {
    //  The block tracked by this node.
    pub(crate) block: &'a B,
    //  The next node, if any.
    pub(crate) next: Link<'a, B>,
}

impl<'a, B: ?Sized> Node<'a, B> {
    /// Allocates a Node, linked to `next`.
    ///
    /// The Node must eventually be released by `deallocate`.
    pub(crate) fn allocate(block: &'a B, next: Link<'a, B>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { block, next })))
    }

    /// Deallocates a Node, returning its block.
    ///
    /// #   Safety
    ///
    /// -   Assumes `node` was returned by `allocate`, and was not deallocated since.
    /// -   Assumes `node` is no longer reachable from any Link.
    pub(crate) unsafe fn deallocate(node: NonNull<Self>) -> &'a B {
        //  Safety:
        //  -   `node` was allocated by `Box::new`, as per pre-condition.
        let node = Box::from_raw(node.as_ptr());

        node.block
    }

    /// Returns the next node, if any.
    pub(crate) fn next(&self) -> Option<&Self> {
        //  Safety:
        //  -   `self` is part of a live chain, and the successor is owned by `self`, hence outlives the borrow.
        unsafe { resolve(self.next) }
    }

    /// Returns whether `self` is the node `other` points to.
    pub(crate) fn is(&self, other: *const Self) -> bool { core::ptr::eq(self, other) }
}

/// Resolves a Link into a reference.
///
/// #   Safety
///
/// -   Assumes the node, if any, is live for `'l`.
/// -   Assumes the node is not mutated for `'l`.
pub(crate) unsafe fn resolve<'l, 'a, B: ?Sized>(link: Link<'a, B>) -> Option<&'l Node<'a, B>> {
    match link {
        Some(node) => Some(&*node.as_ptr()),
        None => None,
    }
}

/// Releases a chain, one node at a time.
///
/// #   Safety
///
/// -   Assumes `link` owns the chain, and that no other Link refers to any of its nodes.
pub(crate) unsafe fn release<B: ?Sized>(mut link: Link<'_, B>) {
    while let Some(node) = link {
        link = (*node.as_ptr()).next;

        Node::deallocate(node);
    }
}

// mod tests
