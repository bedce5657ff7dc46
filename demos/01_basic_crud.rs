//! Example 01: Basic CRUD Operations
//!
//! This example demonstrates creating, reading, updating, and deleting tasks
//! against a file-backed store.
//!
//! Run with: cargo run --example 01_basic_crud

use chrono::{TimeZone, Utc};
use eyre::Result;
use taskman::{FileSnapshot, Priority, Status, TaskDraft, TaskPatch, TaskStore};

fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;

    println!("Taskman Basic CRUD Example");
    println!("==========================\n");
    println!("Store path: {}\n", temp_dir.path().display());

    let snapshot = FileSnapshot::open(temp_dir.path())?;
    let mut store = TaskStore::new(Box::new(snapshot));

    // CREATE: Add a new task
    println!("1. CREATE - Adding a new task...");
    let task = store.create(TaskDraft {
        title: "Buy milk".to_string(),
        description: "2% low-fat, 1 gallon".to_string(),
        due_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        priority: Priority::Low,
        status: Status::Pending,
    });
    println!("   Created task with ID: {}\n", task.id);

    // READ: Retrieve the task
    println!("2. READ - Retrieving the task...");
    match store.get_by_id(&task.id) {
        Some(task) => {
            println!("   Found task:");
            println!("   - Title: {}", task.title);
            println!("   - Priority: {}", task.priority);
            println!("   - Status: {}", task.status);
        }
        None => println!("   Task not found!"),
    }
    println!();

    // UPDATE: Mark it completed (only the supplied field changes)
    println!("3. UPDATE - Marking the task completed...");
    let ok = store.update(
        &task.id,
        TaskPatch {
            status: Some(Status::Completed),
            ..Default::default()
        },
    );
    println!("   Update succeeded: {}", ok);
    println!("   Status is now: {}\n", store.get_by_id(&task.id).unwrap().status);

    // DELETE: Remove the task
    println!("4. DELETE - Removing the task...");
    let ok = store.delete(&task.id);
    println!("   Delete succeeded: {}", ok);
    println!("   Tasks remaining: {}", store.get_all().len());

    Ok(())
}
