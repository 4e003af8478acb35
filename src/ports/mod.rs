//! Ports - interfaces between the application core and the outside world.
//!
//! - `ExplorationStorage` - persists the exploration document between visits

mod exploration_storage;

pub use exploration_storage::{ExplorationStorage, StorageError};
