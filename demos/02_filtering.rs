//! Example 02: Filtering
//!
//! This example demonstrates querying the task collection by priority and
//! status, including the "All" sentinel used by UI filter controls.
//!
//! Run with: cargo run --example 02_filtering

use chrono::{Duration, Utc};
use eyre::Result;
use taskman::{MemorySnapshot, Priority, Status, TaskDraft, TaskFilter, TaskStore};

fn main() -> Result<()> {
    println!("Taskman Filtering Example");
    println!("=========================\n");

    let mut store = TaskStore::new(Box::new(MemorySnapshot::new()));

    // Create sample tasks
    println!("Creating sample tasks...\n");
    let samples = [
        ("Ship release", Priority::High, Status::Completed),
        ("Fix login bug", Priority::High, Status::Pending),
        ("Update docs", Priority::Low, Status::Completed),
        ("Plan sprint", Priority::Medium, Status::InProgress),
    ];
    for (title, priority, status) in samples {
        store.create(TaskDraft {
            title: title.to_string(),
            description: format!("Details for: {title}"),
            due_date: Utc::now() + Duration::days(7),
            priority,
            status,
        });
    }

    // Filter by a single dimension
    println!("1. High-priority tasks:");
    let filter = TaskFilter::any().with_priority(Priority::High);
    for task in store.filter(&filter) {
        println!("   - {} [{}]", task.title, task.status);
    }
    println!();

    // Conjunction of both dimensions
    println!("2. High-priority AND completed:");
    let filter = TaskFilter::any()
        .with_priority(Priority::High)
        .with_status(Status::Completed);
    for task in store.filter(&filter) {
        println!("   - {}", task.title);
    }
    println!();

    // UI-style labels, where "All" means no constraint
    println!("3. From labels (priority=All, status=Completed):");
    let filter = TaskFilter::from_labels(Some("All"), Some("Completed"))?;
    for task in store.filter(&filter) {
        println!("   - {} [{}]", task.title, task.priority);
    }
    println!();

    println!("Filtering never mutates: {} tasks still in the store", store.get_all().len());

    Ok(())
}
