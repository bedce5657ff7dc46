// In-memory task store with snapshot persistence and live list broadcast

use crate::filter::TaskFilter;
use crate::snapshot::Snapshot;
use crate::task::{Task, TaskDraft, TaskPatch};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Handle identifying a registered subscriber. Release it with
/// [`TaskStore::unsubscribe`]; the store never drops subscribers on its own.
pub type SubscriberId = u64;

type SubscriberFn = Box<dyn FnMut(&[Task])>;

/// Owns the canonical task collection.
///
/// Tasks are held in insertion order. Every mutation persists the full
/// collection through the snapshot adapter and then delivers the full current
/// list to each subscriber, synchronously and in registration order. The
/// in-memory collection is the source of truth for the session; persistence is
/// best-effort and its failures are logged, never surfaced.
pub struct TaskStore {
    tasks: Vec<Task>,
    snapshot: Box<dyn Snapshot>,
    subscribers: Vec<(SubscriberId, SubscriberFn)>,
    next_subscriber: SubscriberId,
}

impl TaskStore {
    /// Build a store over the given snapshot adapter.
    ///
    /// Never fails: an absent snapshot means an empty collection, and an
    /// unreadable or malformed one is logged and treated the same way.
    pub fn new(snapshot: Box<dyn Snapshot>) -> Self {
        let tasks = match snapshot.load() {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Task>>(&bytes) {
                Ok(tasks) => {
                    debug!(count = tasks.len(), "Loaded tasks from snapshot");
                    tasks
                }
                Err(e) => {
                    warn!(error = %e, "Stored snapshot is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read snapshot, starting empty");
                Vec::new()
            }
        };

        Self {
            tasks,
            snapshot,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Current collection, as a snapshot (not a live view).
    pub fn get_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Linear lookup by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Create a task from the draft, assigning a fresh id and `created_at`,
    /// and append it to the collection.
    pub fn create(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            status: draft.status,
            created_at: Utc::now(),
        };

        self.tasks.push(task.clone());
        self.persist();
        self.publish();

        task
    }

    /// Merge the patch onto the task with the given id, in place.
    ///
    /// Returns false with no side effect if the id is unknown. `id` and
    /// `created_at` cannot be changed through a patch.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        task.apply(patch);
        self.persist();
        self.publish();
        true
    }

    /// Remove the task with the given id. Returns false with no side effect
    /// if the id is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };

        self.tasks.remove(index);
        self.persist();
        self.publish();
        true
    }

    /// Tasks matching the filter, in collection order. Pure: mutates nothing
    /// and does not republish the live list.
    pub fn filter(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
    }

    /// Register a subscriber for the live list. After every mutation the
    /// callback receives the full current collection. The caller must
    /// [`unsubscribe`](Self::unsubscribe) when no longer interested.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&[Task]) + 'static,
    {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Release a subscription. Returns false if the handle was unknown or
    /// already released.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() < before
    }

    /// Serialize the full collection and write it through the adapter.
    /// Failures are logged; the in-memory mutation stands regardless.
    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.tasks) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to serialize task collection");
                return;
            }
        };

        match self.snapshot.save(&bytes) {
            Ok(()) => debug!(count = self.tasks.len(), "Task snapshot written"),
            Err(e) => warn!(error = %e, "Failed to write task snapshot"),
        }
    }

    /// Deliver the full current list to every subscriber, in registration
    /// order, within the mutating call.
    fn publish(&mut self) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.tasks);
        }
    }
}

/// Unique task id: UUIDv7 carries a millisecond timestamp plus random bits,
/// so ids are unique within (and across) process lifetimes.
fn generate_id() -> String {
    format!("task_{}", Uuid::now_v7().simple())
}
