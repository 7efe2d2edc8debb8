//! The internals of blocklist-core.
//!
//! The internals hold the chain itself; the API types only ever hand out blocks and opaque handles.

pub(crate) mod node;
