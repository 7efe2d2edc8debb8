//! A fixture of memory blocks.

use std::ops;

use blocklist_core::MemoryBlock;

/// Blocks
///
/// Owns a number of MemoryBlocks, to be borrowed by a `BlockList`.
///
/// #   Example
///
/// ```
/// use blocklist_core::BlockList;
/// use blocklist_test::Blocks;
///
/// let blocks = Blocks::identical(2);
///
/// let list: BlockList<'_, _> = blocks.iter().collect();
///
/// //  Equal, yet distinct.
/// assert_eq!(blocks[0], blocks[1]);
/// assert_eq!(Some(1), list.index_of(&blocks[1]));
/// ```
#[derive(Debug, Clone)]
pub struct Blocks(Vec<MemoryBlock>);

impl Blocks {
    /// The length of each block of the fixture.
    pub const BLOCK_LENGTH: usize = 16;

    /// Creates `count` adjacent blocks, each with a distinct base address.
    pub fn distinct(count: usize) -> Self {
        let blocks = (0..count)
            .map(|i| MemoryBlock::new(i * Self::BLOCK_LENGTH, Self::BLOCK_LENGTH))
            .collect();

        Self(blocks)
    }

    /// Creates `count` blocks, all with the same base address and length.
    pub fn identical(count: usize) -> Self {
        Self(vec!(MemoryBlock::new(0, Self::BLOCK_LENGTH); count))
    }
}

impl ops::Deref for Blocks {
    type Target = [MemoryBlock];

    fn deref(&self) -> &Self::Target { &self.0 }
}

// mod tests
