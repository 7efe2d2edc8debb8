//! The configuration of the textual rendering of a BlockList.
//!
//! A BlockList renders as the textual forms of its blocks, in order, joined by a separator; an empty list renders as a
//! distinguished marker instead.

/// Configuration
///
/// The Configuration allows adjusting the rendering of `BlockList::describe_with`.
pub trait Configuration {
    /// The rendering of an empty list.
    const EMPTY: &'static str;

    /// The separator between two consecutive blocks.
    const SEPARATOR: &'static str;
}

/// DefaultConfiguration
///
/// The rendering used by `BlockList::describe` and `Display`: blocks separated by a single space, `()` if empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultConfiguration;

impl Configuration for DefaultConfiguration {
    const EMPTY: &'static str = "()";
    const SEPARATOR: &'static str = " ";
}
