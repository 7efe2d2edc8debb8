//! Test utilities for blocklist-core.
//!
//! -   `Blocks`: a fixture of memory blocks, with distinct or identical fields.
//! -   `Model`: a reference implementation of `BlockList`, backed by a `Vec`.
//! -   `Driver`: a test-runner applying random operations to both a `BlockList` and a `Model`, in lockstep.

mod blocks;
mod driver;
mod model;

pub use blocks::Blocks;
pub use driver::{Driver, Operation};
pub use model::Model;

/// Installs a `tracing` subscriber printing to the test output, filtered by `RUST_LOG`.
///
/// May be called any number of times; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
