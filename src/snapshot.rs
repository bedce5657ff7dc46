// Persistence adapters for the serialized task collection

use eyre::{Context, Result};
use fs2::FileExt;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Fixed key the task collection is persisted under.
pub const STORAGE_KEY: &str = "task_manager_tasks";

/// Capability interface for the persisted snapshot: a single value under a
/// fixed key. `load` returns `None` when no snapshot has been written yet.
///
/// The store treats both operations as best-effort; implementations report
/// failures through `Result` and never need to retry or roll back.
pub trait Snapshot {
    fn load(&self) -> Result<Option<Vec<u8>>>;
    fn save(&self, bytes: &[u8]) -> Result<()>;
}

/// File-backed snapshot: the collection lives in `<dir>/task_manager_tasks.json`.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    /// Create the directory if needed and bind the snapshot file inside it.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).context("Failed to create snapshot directory")?;
        Ok(Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Snapshot for FileSnapshot {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path).context("Failed to read snapshot file")?;
        Ok(Some(bytes))
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .context("Failed to open snapshot file for writing")?;

        // Exclusive lock for the duration of the write; released on drop
        file.lock_exclusive().context("Failed to acquire file lock")?;

        file.write_all(bytes)?;
        file.sync_all()?;

        Ok(())
    }
}

/// In-memory snapshot for tests and demos. Clones share the same buffer, so a
/// fresh store handed a clone sees what a previous store persisted.
#[derive(Clone, Default)]
pub struct MemorySnapshot {
    buf: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the buffer with pre-existing content, as if a prior session had
    /// persisted it.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: Rc::new(RefCell::new(Some(bytes.into()))),
        }
    }
}

impl Snapshot for MemorySnapshot {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.buf.borrow().clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        *self.buf.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}
