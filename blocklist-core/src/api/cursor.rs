//! Forward traversal of a BlockList.

use core::iter::FusedIterator;

use crate::internals::node::Node;

use super::{Error, NodeRef};

/// Cursor
///
/// A single-pass, forward-only traversal over the blocks of a BlockList, starting at its head.
///
/// A Cursor is either active, positioned on an element, or exhausted. Exhaustion is terminal: a fresh Cursor must be
/// requested from the list to traverse it again.
///
/// The Cursor borrows the list, hence the list cannot be mutated while a Cursor is alive.
pub struct Cursor<'l, 'a, B: ?Sized> {
    current: Option<&'l Node<'a, B>>,
    remaining: usize,
}

impl<'l, 'a, B: ?Sized> Cursor<'l, 'a, B> {
    /// Returns whether the cursor is positioned on an element.
    pub fn has_next(&self) -> bool { self.current.is_some() }

    /// Returns the block at the current position, and advances to its successor.
    ///
    /// Returns `Error::NoSuchElement` if the cursor is exhausted.
    pub fn next_block(&mut self) -> Result<&'a B, Error> {
        let node = self.current.ok_or(Error::NoSuchElement)?;

        debug_assert!(self.remaining > 0);

        self.current = node.next();
        self.remaining -= 1;

        Ok(node.block)
    }

    /// Returns a handle to the element at the current position, if any.
    ///
    /// The handle names the element the next call to `next_block` yields, and may later be passed to
    /// `BlockList::remove_node`.
    pub fn node(&self) -> Option<NodeRef<'a, B>> { self.current.map(NodeRef::new) }

    /// Creates a Cursor positioned on `head`, followed by `remaining - 1` elements.
    pub(crate) fn new(head: Option<&'l Node<'a, B>>, remaining: usize) -> Self {
        debug_assert_eq!(head.is_none(), remaining == 0);

        Self { current: head, remaining }
    }
}

impl<'l, 'a, B: ?Sized> Clone for Cursor<'l, 'a, B> {
    fn clone(&self) -> Self { Self { current: self.current, remaining: self.remaining } }
}

impl<'l, 'a, B: ?Sized> Iterator for Cursor<'l, 'a, B> {
    type Item = &'a B;

    fn next(&mut self) -> Option<&'a B> { self.next_block().ok() }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'l, 'a, B: ?Sized> ExactSizeIterator for Cursor<'l, 'a, B> {}

impl<'l, 'a, B: ?Sized> FusedIterator for Cursor<'l, 'a, B> {}

// mod tests
