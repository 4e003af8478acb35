//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Exploration document persistence (file, in-memory)

pub mod storage;

pub use storage::{FileExplorationStorage, InMemoryExplorationStorage};
