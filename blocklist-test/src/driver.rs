//! A test-runner for flushing out structural defects of BlockList.

use rand::{Rng, SeedableRng, rngs::StdRng};

use blocklist_core::{BlockList, MemoryBlock};

use super::Model;

/// Operation
///
/// An operation applied by the Driver. Blocks are designated by their index in the Driver's pool.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Operation {
    /// `insert_at(index, pool[block])`.
    InsertAt {
        /// Position of insertion.
        index: usize,
        /// Index of the block in the pool.
        block: usize,
    },
    /// `insert_first(pool[block])`.
    InsertFirst {
        /// Index of the block in the pool.
        block: usize,
    },
    /// `insert_last(pool[block])`.
    InsertLast {
        /// Index of the block in the pool.
        block: usize,
    },
    /// `block_at(index)`.
    BlockAt {
        /// Position of the block.
        index: usize,
    },
    /// `index_of(pool[block])`.
    IndexOf {
        /// Index of the block in the pool.
        block: usize,
    },
    /// `remove_at(index)`.
    RemoveAt {
        /// Position of the block.
        index: usize,
    },
    /// `remove_block(pool[block])`.
    RemoveBlock {
        /// Index of the block in the pool.
        block: usize,
    },
    /// `remove_node(node_at(index))`.
    RemoveNode {
        /// Position of the node.
        index: usize,
    },
}

/// Driver
///
/// Driver applies a stream of pseudo-random operations to both a `BlockList` and a `Model`, and asserts after each
/// operation that both produced the same result and hold the same blocks, in the same order.
///
/// The stream is fully determined by the seed, so that any failure can be replayed.
///
/// #   Example
///
/// ```
/// use blocklist_test::{Blocks, Driver};
///
/// let pool = Blocks::identical(8);
///
/// let mut driver = Driver::new(42, &pool);
/// driver.run(1_000);
///
/// assert_eq!(driver.list().len(), driver.model().len());
/// ```
pub struct Driver<'a> {
    rng: StdRng,
    pool: &'a [MemoryBlock],
    list: BlockList<'a, MemoryBlock>,
    model: Model<'a, MemoryBlock>,
}

impl<'a> Driver<'a> {
    /// Creates a Driver drawing blocks from `pool`.
    ///
    /// #   Panics
    ///
    /// -   If `pool` is empty.
    pub fn new(seed: u64, pool: &'a [MemoryBlock]) -> Self {
        assert!(!pool.is_empty(), "Cannot drive a list without blocks");

        let rng = StdRng::seed_from_u64(seed);

        Self { rng, pool, list: BlockList::new(), model: Model::new() }
    }

    /// Returns the list under test.
    pub fn list(&self) -> &BlockList<'a, MemoryBlock> { &self.list }

    /// Returns the reference model.
    pub fn model(&self) -> &Model<'a, MemoryBlock> { &self.model }

    /// Generates, then applies, `steps` operations.
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            let operation = self.generate();
            self.apply(operation);
        }
    }

    /// Generates a random operation.
    ///
    /// Indices may exceed the current length by up to 2, to exercise out-of-range failures. Insertions are favored
    /// while the list is short, removals once it grows long.
    pub fn generate(&mut self) -> Operation {
        let len = self.model.len();

        let index = self.rng.gen_range(0..len + 2);
        let block = self.rng.gen_range(0..self.pool.len());

        let grow = len < self.pool.len() || self.rng.gen_bool(0.3);

        match (grow, self.rng.gen_range(0..4)) {
            (true, 0) => Operation::InsertAt { index, block },
            (true, 1) => Operation::InsertFirst { block },
            (true, 2) => Operation::InsertLast { block },
            (true, _) => Operation::IndexOf { block },
            (false, 0) => Operation::RemoveAt { index },
            (false, 1) => Operation::RemoveBlock { block },
            (false, 2) => Operation::RemoveNode { index },
            (false, _) => Operation::BlockAt { index },
        }
    }

    /// Applies `operation` to both the list and the model, then checks them.
    ///
    /// #   Panics
    ///
    /// -   If the list and the model disagree.
    pub fn apply(&mut self, operation: Operation) {
        let pool = self.pool;

        match operation {
            Operation::InsertAt { index, block } => {
                let block = &pool[block];
                assert_eq!(self.model.insert_at(index, block), self.list.insert_at(index, block), "{:?}", operation);
            },
            Operation::InsertFirst { block } => {
                self.model.insert_first(&pool[block]);
                self.list.insert_first(&pool[block]);
            },
            Operation::InsertLast { block } => {
                self.model.insert_last(&pool[block]);
                self.list.insert_last(&pool[block]);
            },
            Operation::BlockAt { index } => {
                let expected = self.model.block_at(index).map(address);
                assert_eq!(expected, self.list.block_at(index).map(address), "{:?}", operation);
            },
            Operation::IndexOf { block } => {
                let block = &pool[block];
                assert_eq!(self.model.index_of(block), self.list.index_of(block), "{:?}", operation);
            },
            Operation::RemoveAt { index } => {
                let expected = self.model.remove_at(index).map(address);
                assert_eq!(expected, self.list.remove_at(index).map(address), "{:?}", operation);
            },
            Operation::RemoveBlock { block } => {
                let block = &pool[block];
                assert_eq!(self.model.remove_block(block), self.list.remove_block(block), "{:?}", operation);
            },
            Operation::RemoveNode { index } => {
                let expected = self.model.remove_at(index).map(address);
                let actual = self.list.node_at(index).and_then(|node| self.list.remove_node(node)).map(address);
                assert_eq!(expected, actual, "{:?}", operation);
            },
        }

        self.check();
    }

    /// Checks that the list and the model hold the same blocks, in the same order.
    ///
    /// #   Panics
    ///
    /// -   If the list and the model disagree.
    pub fn check(&self) {
        let expected: Vec<_> = self.model.blocks().iter().map(|block| address(block)).collect();
        let actual: Vec<_> = self.list.iter().map(address).collect();

        assert_eq!(expected, actual);
        assert_eq!(self.model.len(), self.list.len());
        assert_eq!(self.model.len(), self.list.cursor().len());
        assert_eq!(self.model.is_empty(), self.list.is_empty());
        assert_eq!(self.model.first().map(address), self.list.first().map(address));
        assert_eq!(self.model.last().map(address), self.list.last().map(address));
        assert_eq!(self.model.describe(), self.list.describe());
    }
}

//
//  Implementation
//

//  Blocks are compared by identity, hence by address.
fn address(block: &MemoryBlock) -> *const MemoryBlock { block as *const _ }

// mod tests
