//! Adapters layer: Concrete implementations of ports.
//!
//! - `json`: WHO reference tables read from a directory of JSON exports
//! - `memory`: reference tables held in memory

pub mod json;
pub mod memory;

pub use json::{JsonDirectorySource, JsonSourceError};
pub use memory::InMemorySource;
