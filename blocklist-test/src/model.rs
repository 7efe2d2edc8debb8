//! A reference implementation of BlockList.

use std::{fmt, ptr};

use blocklist_core::{Configuration, DefaultConfiguration, Error};

/// Model
///
/// A `Vec` of block references, offering the operations of `BlockList` with identical results and errors.
///
/// The Model favors obviousness over performance; it is the oracle against which `BlockList` is checked.
#[derive(Debug)]
pub struct Model<'a, B: ?Sized> {
    blocks: Vec<&'a B>,
}

impl<'a, B: ?Sized> Model<'a, B> {
    /// Creates an empty model.
    pub fn new() -> Self { Self { blocks: vec!() } }

    /// Returns the blocks, in order.
    pub fn blocks(&self) -> &[&'a B] { &self.blocks }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize { self.blocks.len() }

    /// Returns whether the model is empty.
    pub fn is_empty(&self) -> bool { self.blocks.is_empty() }

    /// Returns the first block, if any.
    pub fn first(&self) -> Option<&'a B> { self.blocks.first().copied() }

    /// Returns the last block, if any.
    pub fn last(&self) -> Option<&'a B> { self.blocks.last().copied() }

    /// See `BlockList::insert_at`.
    pub fn insert_at(&mut self, index: usize, block: &'a B) -> Result<(), Error> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }

        self.blocks.insert(index, block);

        Ok(())
    }

    /// See `BlockList::insert_first`.
    pub fn insert_first(&mut self, block: &'a B) { self.blocks.insert(0, block); }

    /// See `BlockList::insert_last`.
    pub fn insert_last(&mut self, block: &'a B) { self.blocks.push(block); }

    /// See `BlockList::block_at`.
    pub fn block_at(&self, index: usize) -> Result<&'a B, Error> {
        self.blocks.get(index).copied().ok_or_else(|| self.out_of_range(index))
    }

    /// See `BlockList::index_of`.
    pub fn index_of(&self, block: &B) -> Option<usize> {
        self.blocks.iter().position(|candidate| ptr::eq(*candidate, block))
    }

    /// See `BlockList::remove_at`.
    pub fn remove_at(&mut self, index: usize) -> Result<&'a B, Error> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }

        Ok(self.blocks.remove(index))
    }

    /// See `BlockList::remove_block`.
    pub fn remove_block(&mut self, block: &B) -> Result<usize, Error> {
        let index = self.index_of(block).ok_or(Error::BlockNotFound)?;

        self.blocks.remove(index);

        Ok(index)
    }

    /// See `BlockList::describe`.
    pub fn describe(&self) -> String
        where
            B: fmt::Display,
    {
        if self.blocks.is_empty() {
            return DefaultConfiguration::EMPTY.to_string();
        }

        self.blocks
            .iter()
            .map(|block| block.to_string())
            .collect::<Vec<_>>()
            .join(DefaultConfiguration::SEPARATOR)
    }

    fn out_of_range(&self, index: usize) -> Error { Error::IndexOutOfRange { index, len: self.len() } }
}

impl<'a, B: ?Sized> Default for Model<'a, B> {
    fn default() -> Self { Self::new() }
}

// mod tests
