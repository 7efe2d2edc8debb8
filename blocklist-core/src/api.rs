//! The API of blocklist-core.

mod block_list;
mod configuration;
mod cursor;
mod error;
mod memory_block;
mod node_ref;

pub use block_list::BlockList;
pub use configuration::{Configuration, DefaultConfiguration};
pub use cursor::Cursor;
pub use error::Error;
pub use memory_block::MemoryBlock;
pub use node_ref::NodeRef;
