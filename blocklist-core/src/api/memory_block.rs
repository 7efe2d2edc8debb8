//! Description of a tracked memory region.

use core::fmt;

/// MemoryBlock
///
/// A contiguous region of `length` bytes starting at `base_address`.
///
/// A BlockList compares blocks by identity, so two MemoryBlocks with identical fields remain distinct entries.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MemoryBlock {
    base_address: usize,
    length: usize,
}

impl MemoryBlock {
    /// Creates a new instance.
    pub const fn new(base_address: usize, length: usize) -> Self { Self { base_address, length } }

    /// Returns the address of the first byte of the block.
    pub const fn base_address(&self) -> usize { self.base_address }

    /// Returns the length of the block, in bytes.
    pub const fn length(&self) -> usize { self.length }

    /// Returns the address one past the last byte of the block.
    ///
    /// Saturates at `usize::MAX`.
    pub const fn end_address(&self) -> usize { self.base_address.saturating_add(self.length) }

    /// Returns whether `address` lies within the block.
    pub const fn contains(&self, address: usize) -> bool {
        self.base_address <= address && address < self.end_address()
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.base_address, self.length)
    }
}

#[cfg(test)]
mod tests {

use alloc::string::ToString;

use super::*;

#[test]
fn memory_block_accessors() {
    let block = MemoryBlock::new(100, 20);

    assert_eq!(100, block.base_address());
    assert_eq!(20, block.length());
    assert_eq!(120, block.end_address());
}

#[test]
fn memory_block_end_address_saturates() {
    let block = MemoryBlock::new(usize::MAX - 1, 8);

    assert_eq!(usize::MAX, block.end_address());
}

#[test]
fn memory_block_contains() {
    let block = MemoryBlock::new(100, 20);

    assert!(!block.contains(99));
    assert!(block.contains(100));
    assert!(block.contains(119));
    assert!(!block.contains(120));

    assert!(!MemoryBlock::new(100, 0).contains(100));
}

#[test]
fn memory_block_display() {
    assert_eq!("(100, 20)", MemoryBlock::new(100, 20).to_string());
}

} // mod tests
