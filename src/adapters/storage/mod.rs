//! Storage Adapters
//!
//! Implementations of the ExplorationStorage port.
//!
//! ## Available Adapters
//!
//! - **FileExplorationStorage** - Stores the document as a JSON file on disk
//! - **InMemoryExplorationStorage** - Stores the document in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileExplorationStorage, InMemoryExplorationStorage};
//!
//! // Production: file-based storage
//! let storage = FileExplorationStorage::new("./data", "beyondstreams-exploration");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryExplorationStorage::new();
//! ```

mod file_exploration_storage;
mod in_memory_exploration_storage;

pub use file_exploration_storage::FileExplorationStorage;
pub use in_memory_exploration_storage::InMemoryExplorationStorage;
