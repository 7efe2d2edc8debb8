//! Ordered list of memory blocks.
//!
//! The BlockList is the bookkeeping structure of an allocator simulator, such as its free-list or its allocated-list.
//!
//! The list owns its chain of nodes: the head slot owns the first node, and each node owns its successor. A non-owning
//! pointer to the last node provides O(1) appends.
//!
//! All links are raw pointers, as in llmalloc's block lists: nodes are allocated once and never moved, hence the tail
//! pointer remains valid whichever link owns the last node.
//!
//! Blocks themselves are borrowed, never owned, and are compared by identity.

use alloc::{boxed::Box, string::String};

use core::{
    fmt::{self, Write},
    iter::{self, FromIterator},
    marker::PhantomData,
    ptr,
};

use tracing::{debug, trace};

use crate::internals::node::{self, Link, Node};

use super::{Configuration, Cursor, DefaultConfiguration, Error, NodeRef};

/// BlockList
///
/// An ordered sequence of borrowed blocks, with O(1) insertion at both ends, O(1) removal at the front, and O(index)
/// access elsewhere.
///
/// Blocks are compared by identity: `index_of`, `remove_block` and `remove_node` look for the very same block, not for
/// an equal one.
///
/// The list is neither `Send` nor `Sync`; it is intended for single-threaded bookkeeping.
pub struct BlockList<'a, B: ?Sized> {
    //  Owns the first node, and transitively the whole chain.
    head: Link<'a, B>,
    //  Last node of the chain, non-owning; None if and only if `head` is None.
    tail: Link<'a, B>,
    //  Number of nodes reachable from `head`.
    len: usize,
    //  The chain is owned, for the purpose of drop-check.
    _chain: PhantomData<Box<Node<'a, B>>>,
}

impl<'a, B: ?Sized> BlockList<'a, B> {
    /// Creates an empty list.
    pub const fn new() -> Self { Self { head: None, tail: None, len: 0, _chain: PhantomData } }

    /// Returns the number of blocks in the list.
    pub fn len(&self) -> usize { self.len }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the first block, if any.
    pub fn first(&self) -> Option<&'a B> { self.first_node().map(|head| head.block) }

    /// Returns the last block, if any.
    pub fn last(&self) -> Option<&'a B> {
        //  Safety:
        //  -   `tail` points to the last node of the chain, which is owned by `self` and borrowed immutably.
        let tail = unsafe { node::resolve(self.tail) };

        tail.map(|tail| tail.block)
    }

    /// Inserts `block` at `index`, shifting the block at `index`, and all following, by one position.
    ///
    /// Inserting at either 0 or `len()` is O(1), otherwise it is O(index).
    ///
    /// Returns `Error::IndexOutOfRange` if `index > len()`, in which case the list is unchanged.
    pub fn insert_at(&mut self, index: usize, block: &'a B) -> Result<(), Error> {
        if index > self.len {
            debug!(index, len = self.len, "insertion index out of range");
            return Err(Error::IndexOutOfRange { index, len: self.len });
        }

        self.link(index, block);

        Ok(())
    }

    /// Inserts `block` at the front of the list, in O(1).
    pub fn insert_first(&mut self, block: &'a B) { self.link(0, block); }

    /// Inserts `block` at the back of the list, in O(1).
    pub fn insert_last(&mut self, block: &'a B) { self.link(self.len, block); }

    /// Returns the block at `index`.
    ///
    /// Returns `Error::IndexOutOfRange` if `index >= len()`.
    pub fn block_at(&self, index: usize) -> Result<&'a B, Error> { self.node(index).map(|node| node.block) }

    /// Returns a handle to the element at `index`, suitable for `remove_node`.
    ///
    /// Returns `Error::IndexOutOfRange` if `index >= len()`.
    pub fn node_at(&self, index: usize) -> Result<NodeRef<'a, B>, Error> { self.node(index).map(NodeRef::new) }

    /// Returns the index of the first occurrence of `block`, or None if it is not in the list.
    ///
    /// Occurrences are determined by identity, not equality.
    pub fn index_of(&self, block: &B) -> Option<usize> {
        self.nodes().position(|node| ptr::eq(node.block, block))
    }

    /// Removes the block at `index`, and returns it.
    ///
    /// Removing the first block is O(1), otherwise it is O(index). In particular, removing the last block is O(len), as
    /// nodes have no link to their predecessor.
    ///
    /// Returns `Error::IndexOutOfRange` if `index >= len()`, in which case the list is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<&'a B, Error> {
        let out_of_range = Error::IndexOutOfRange { index, len: self.len };

        if index >= self.len {
            debug!(index, len = self.len, "removal index out of range");
            return Err(out_of_range);
        }

        let block = self.unlink(index).ok_or(out_of_range)?;

        self.len -= 1;

        trace!(index, len = self.len, "removed block");

        Ok(block)
    }

    /// Removes the first occurrence of `block`, and returns the index it occupied.
    ///
    /// Returns `Error::BlockNotFound` if `block` is not in the list, in which case the list is unchanged.
    pub fn remove_block(&mut self, block: &B) -> Result<usize, Error> {
        let index = match self.index_of(block) {
            Some(index) => index,
            None => {
                debug!(len = self.len, "block to remove not found");
                return Err(Error::BlockNotFound);
            },
        };

        self.remove_at(index)?;

        Ok(index)
    }

    /// Removes the element named by `node`, and returns its block.
    ///
    /// The handle must have been obtained from this list, and its element must not have been removed since. The
    /// membership of the handle is checked in O(len).
    ///
    /// Returns `Error::NodeNotFound` if `node` does not name an element of the list, in which case the list is
    /// unchanged.
    pub fn remove_node(&mut self, node: NodeRef<'a, B>) -> Result<&'a B, Error> {
        let index = match self.nodes().position(|candidate| node.names(candidate)) {
            Some(index) => index,
            None => {
                debug!(len = self.len, "node to remove not found");
                return Err(Error::NodeNotFound);
            },
        };

        self.remove_at(index)
    }

    /// Removes all blocks.
    pub fn clear(&mut self) {
        //  Safety:
        //  -   `head` owns the chain, and is reset below along with `tail`.
        unsafe { node::release(self.head.take()) };

        self.tail = None;
        self.len = 0;

        trace!("cleared");
    }

    /// Returns a Cursor positioned on the first block.
    pub fn cursor(&self) -> Cursor<'_, 'a, B> { Cursor::new(self.first_node(), self.len) }

    /// Returns an iterator over the blocks, in order.
    ///
    /// Equivalent to `cursor()`.
    pub fn iter(&self) -> Cursor<'_, 'a, B> { self.cursor() }

    /// Renders the blocks, in order, according to `C`.
    pub fn describe_with<C>(&self) -> String
        where
            B: fmt::Display,
            C: Configuration,
    {
        let mut result = String::new();

        //  Writing into a String never fails, but a block's `Display` may; the rendering is then truncated.
        let _ = self.render::<C, _>(&mut result);

        result
    }

    /// Renders the blocks, in order, separated by a space; or `()` if empty.
    pub fn describe(&self) -> String
        where
            B: fmt::Display,
    {
        self.describe_with::<DefaultConfiguration>()
    }
}

impl<'a, B: ?Sized> Default for BlockList<'a, B> {
    fn default() -> Self { Self::new() }
}

impl<'a, B: ?Sized> Drop for BlockList<'a, B> {
    fn drop(&mut self) {
        //  Safety:
        //  -   `head` owns the chain.
        unsafe { node::release(self.head.take()) };
    }
}

impl<'a, B: ?Sized + fmt::Debug> fmt::Debug for BlockList<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_list().entries(self.iter()).finish() }
}

impl<'a, B: ?Sized + fmt::Display> fmt::Display for BlockList<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.render::<DefaultConfiguration, _>(f) }
}

impl<'a, B: ?Sized> Extend<&'a B> for BlockList<'a, B> {
    fn extend<I: IntoIterator<Item = &'a B>>(&mut self, blocks: I) {
        for block in blocks {
            self.insert_last(block);
        }
    }
}

impl<'a, B: ?Sized> FromIterator<&'a B> for BlockList<'a, B> {
    fn from_iter<I: IntoIterator<Item = &'a B>>(blocks: I) -> Self {
        let mut list = Self::new();
        list.extend(blocks);
        list
    }
}

impl<'l, 'a, B: ?Sized> IntoIterator for &'l BlockList<'a, B> {
    type Item = &'a B;
    type IntoIter = Cursor<'l, 'a, B>;

    fn into_iter(self) -> Self::IntoIter { self.cursor() }
}

//
//  Implementation
//

impl<'a, B: ?Sized> BlockList<'a, B> {
    //  Links a new node holding `block` at `index`.
    //
    //  Requires `index <= self.len`.
    fn link(&mut self, index: usize, block: &'a B) {
        debug_assert!(index <= self.len);

        let previous = match index {
            0 => None,
            _ if index == self.len => self.tail,
            _ => self.node_ptr(index - 1),
        };

        debug_assert_eq!(index == 0, previous.is_none());

        let node = match previous {
            None => {
                let node = Node::allocate(block, self.head);
                self.head = Some(node);
                node
            },
            //  Safety:
            //  -   `previous` is a node of the chain, owned by `self` and borrowed mutably.
            Some(previous) => unsafe {
                let node = Node::allocate(block, (*previous.as_ptr()).next);
                (*previous.as_ptr()).next = Some(node);
                node
            },
        };

        //  Safety:
        //  -   `node` was just allocated, and is owned by `self`.
        if unsafe { (*node.as_ptr()).next.is_none() } {
            self.tail = Some(node);
        }

        self.len += 1;

        trace!(index, len = self.len, "inserted block");
    }

    //  Unlinks, and deallocates, the node at `index`, returning its block.
    fn unlink(&mut self, index: usize) -> Option<&'a B> {
        let previous = match index.checked_sub(1) {
            None => None,
            Some(previous) => Some(self.node_ptr(previous)?),
        };

        let removed = match previous {
            None => {
                let removed = self.head?;

                //  Safety:
                //  -   `removed` is the head of the chain, owned by `self` and borrowed mutably.
                self.head = unsafe { (*removed.as_ptr()).next };

                removed
            },
            //  Safety:
            //  -   `previous` and its successor are nodes of the chain, owned by `self` and borrowed mutably.
            Some(previous) => unsafe {
                let removed = (*previous.as_ptr()).next?;
                (*previous.as_ptr()).next = (*removed.as_ptr()).next;
                removed
            },
        };

        if self.tail == Some(removed) {
            self.tail = previous;
        }

        //  Safety:
        //  -   `removed` was allocated by `Node::allocate`, and is no longer reachable from the chain.
        Some(unsafe { Node::deallocate(removed) })
    }

    //  Returns the first node, if any.
    fn first_node(&self) -> Option<&Node<'a, B>> {
        //  Safety:
        //  -   `head` owns the chain, which is borrowed immutably.
        unsafe { node::resolve(self.head) }
    }

    //  Returns a pointer to the node at `index`, if any.
    fn node_ptr(&self, index: usize) -> Link<'a, B> {
        let mut current = self.head;

        for _ in 0..index {
            //  Safety:
            //  -   `current` is a node of the chain, owned by `self`.
            current = unsafe { (*current?.as_ptr()).next };
        }

        current
    }

    //  Returns the node at `index`, if `index < self.len`.
    fn node(&self, index: usize) -> Result<&Node<'a, B>, Error> {
        let out_of_range = Error::IndexOutOfRange { index, len: self.len };

        if index >= self.len {
            debug!(index, len = self.len, "access index out of range");
            return Err(out_of_range);
        }

        self.nodes().nth(index).ok_or(out_of_range)
    }

    //  Returns an iterator over the nodes of the chain, bounded by `self.len`.
    fn nodes(&self) -> impl Iterator<Item = &Node<'a, B>> {
        iter::successors(self.first_node(), |node| node.next()).take(self.len)
    }

    //  Writes the blocks into `out`, according to `C`.
    fn render<C, W>(&self, out: &mut W) -> fmt::Result
        where
            B: fmt::Display,
            C: Configuration,
            W: Write,
    {
        if self.is_empty() {
            return out.write_str(C::EMPTY);
        }

        for (index, block) in self.iter().enumerate() {
            if index > 0 {
                out.write_str(C::SEPARATOR)?;
            }

            write!(out, "{}", block)?;
        }

        Ok(())
    }
}

// mod tests
