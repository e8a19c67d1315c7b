//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the classification core and the systems that feed it.

mod reference;

pub use reference::ReferenceSource;
