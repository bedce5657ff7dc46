// Taskman - in-memory task collection with snapshot persistence and live subscriptions

pub mod filter;
pub mod snapshot;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use filter::TaskFilter;
pub use snapshot::{FileSnapshot, MemorySnapshot, STORAGE_KEY, Snapshot};
pub use store::{SubscriberId, TaskStore};
pub use task::{Priority, Status, Task, TaskDraft, TaskPatch};
