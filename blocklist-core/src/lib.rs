#![no_std]

#![deny(missing_docs)]

//! Bookkeeping of memory blocks for an allocator simulator.
//!
//! blocklist-core provides the ordered list underlying a simple free-list or allocated-list. It contains:
//! -   A `BlockList`, a singly-linked list of borrowed block references, with O(1) access at both ends.
//! -   A `Cursor`, a forward-only single-pass traversal over a `BlockList`.
//! -   A `MemoryBlock` descriptor, for callers which do not bring their own.
//!
//! Blocks are compared by identity, not by value: two distinct blocks with identical fields are distinct entries.
//!
//! ```
//! use blocklist_core::{BlockList, MemoryBlock};
//!
//! let (a, b, c) = (MemoryBlock::new(0, 16), MemoryBlock::new(16, 32), MemoryBlock::new(48, 16));
//!
//! let mut list = BlockList::new();
//! list.insert_last(&a);
//! list.insert_last(&b);
//! list.insert_first(&c);
//!
//! assert_eq!("(48, 16) (0, 16) (16, 32)", list.describe());
//!
//! list.remove_at(1).unwrap();
//!
//! assert_eq!(Some(1), list.index_of(&b));
//! assert_eq!(None, list.index_of(&a));
//! ```

extern crate alloc;

mod api;
mod internals;

pub use api::*;
