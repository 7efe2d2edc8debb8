//! Failures of BlockList and Cursor operations.

use thiserror::Error;

/// Error
///
/// All errors are reported before any mutation: on error, the list is unchanged.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// An index argument lies outside the range accepted by the operation.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The index requested.
        index: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },
    /// No entry of the list refers to the requested block.
    #[error("block is not in the list")]
    BlockNotFound,
    /// The node handle does not name an element of the list.
    #[error("node is not in the list")]
    NodeNotFound,
    /// The cursor was advanced past its last element.
    #[error("cursor is exhausted")]
    NoSuchElement,
}

#[cfg(test)]
mod tests {

use alloc::string::ToString;

use super::*;

#[test]
fn error_display() {
    assert_eq!("index 3 is out of range for a list of length 2", Error::IndexOutOfRange { index: 3, len: 2 }.to_string());
    assert_eq!("block is not in the list", Error::BlockNotFound.to_string());
    assert_eq!("node is not in the list", Error::NodeNotFound.to_string());
    assert_eq!("cursor is exhausted", Error::NoSuchElement.to_string());
}

} // mod tests
