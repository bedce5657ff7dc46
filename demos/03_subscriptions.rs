//! Example 03: Live List Subscriptions
//!
//! This example demonstrates the broadcast mechanism: after every mutation,
//! each subscriber receives the full current task list, synchronously and in
//! registration order. Subscriptions are released explicitly.
//!
//! Run with: cargo run --example 03_subscriptions

use chrono::{Duration, Utc};
use eyre::Result;
use taskman::{MemorySnapshot, Priority, Status, TaskDraft, TaskStore};

fn main() -> Result<()> {
    println!("Taskman Subscriptions Example");
    println!("=============================\n");

    let mut store = TaskStore::new(Box::new(MemorySnapshot::new()));

    // Two independent subscribers, like two UI components watching the list
    let list_view = store.subscribe(|tasks| {
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        println!("   [list view]  {} task(s): {:?}", tasks.len(), titles);
    });
    let counter = store.subscribe(|tasks| {
        let pending = tasks.iter().filter(|t| t.status == Status::Pending).count();
        println!("   [counter]    {} pending", pending);
    });

    println!("1. Creating two tasks (each mutation broadcasts the full list):");
    let first = store.create(TaskDraft {
        title: "Water plants".to_string(),
        description: "The ficus and both ferns".to_string(),
        due_date: Utc::now() + Duration::days(1),
        priority: Priority::Low,
        status: Status::Pending,
    });
    store.create(TaskDraft {
        title: "Book flights".to_string(),
        description: "Outbound Friday, return Sunday".to_string(),
        due_date: Utc::now() + Duration::days(14),
        priority: Priority::High,
        status: Status::Pending,
    });
    println!();

    println!("2. Releasing the list view subscription, then deleting a task:");
    store.unsubscribe(list_view);
    store.delete(&first.id);
    println!();

    println!("3. Releasing the last subscription; further mutations are silent:");
    store.unsubscribe(counter);
    store.create(TaskDraft {
        title: "Unobserved task".to_string(),
        description: "Nobody is notified about this one".to_string(),
        due_date: Utc::now() + Duration::days(2),
        priority: Priority::Medium,
        status: Status::Pending,
    });
    println!("   (no output from subscribers)");

    Ok(())
}
