use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use eyre::{Context, Result, bail};
use std::path::PathBuf;
use taskman::{FileSnapshot, Priority, Status, Task, TaskDraft, TaskFilter, TaskPatch, TaskStore};

#[derive(Parser)]
#[command(name = "taskman")]
#[command(about = "Taskman CLI - manage a persisted to-do list")]
#[command(version)]
struct Cli {
    /// Directory holding the persisted task snapshot (default: per-user data dir)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new task
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Due date, YYYY-MM-DD or RFC 3339
        #[arg(long)]
        due: String,

        /// Low, Medium or High
        #[arg(long, default_value = "Medium")]
        priority: String,

        /// Pending, "In Progress" or Completed
        #[arg(long, default_value = "Pending")]
        status: String,
    },

    /// List all tasks
    List,

    /// Show a single task by id
    Show { id: String },

    /// Update fields of an existing task
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Due date, YYYY-MM-DD or RFC 3339
        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a task by id
    Delete { id: String },

    /// List tasks matching priority/status constraints ("All" = no constraint)
    Filter {
        #[arg(long, default_value = "All")]
        priority: String,

        #[arg(long, default_value = "All")]
        status: String,
    },
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let dir = cli.store_path.unwrap_or_else(default_store_dir);
    let snapshot = FileSnapshot::open(&dir)?;
    let mut store = TaskStore::new(Box::new(snapshot));

    match cli.command {
        Commands::Add {
            title,
            description,
            due,
            priority,
            status,
        } => {
            validate_title(&title)?;
            validate_description(&description)?;

            let task = store.create(TaskDraft {
                title,
                description,
                due_date: parse_due(&due)?,
                priority: priority.parse::<Priority>()?,
                status: status.parse::<Status>()?,
            });

            println!("Created {}", task.id.bold());
            print_task(&task);
        }

        Commands::List => print_task_list(&store.get_all()),

        Commands::Show { id } => match store.get_by_id(&id) {
            Some(task) => print_task(task),
            None => bail!("No task with id {}", id),
        },

        Commands::Update {
            id,
            title,
            description,
            due,
            priority,
            status,
        } => {
            if let Some(title) = &title {
                validate_title(title)?;
            }
            if let Some(description) = &description {
                validate_description(description)?;
            }

            let patch = TaskPatch {
                title,
                description,
                due_date: due.as_deref().map(parse_due).transpose()?,
                priority: priority.as_deref().map(str::parse).transpose()?,
                status: status.as_deref().map(str::parse).transpose()?,
            };
            if patch.is_empty() {
                bail!("Nothing to update: supply at least one field");
            }

            if !store.update(&id, patch) {
                bail!("No task with id {}", id);
            }
            println!("Updated {}", id.bold());
            if let Some(task) = store.get_by_id(&id) {
                print_task(task);
            }
        }

        Commands::Delete { id } => {
            if !store.delete(&id) {
                bail!("No task with id {}", id);
            }
            println!("Deleted {}", id.bold());
        }

        Commands::Filter { priority, status } => {
            let filter = TaskFilter::from_labels(Some(&priority), Some(&status))?;
            print_task_list(&store.filter(&filter));
        }
    }

    Ok(())
}

fn default_store_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("taskman"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_due(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid due date: {value} (expected YYYY-MM-DD or RFC 3339)"))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

// Field-length bounds are the caller's job; the store trusts its input.
fn validate_title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if !(3..=100).contains(&len) {
        bail!("Title must be 3-100 characters (got {})", len);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    let len = description.chars().count();
    if !(10..=500).contains(&len) {
        bail!("Description must be 10-500 characters (got {})", len);
    }
    Ok(())
}

fn priority_label(priority: Priority) -> ColoredString {
    match priority {
        Priority::Low => "Low".green(),
        Priority::Medium => "Medium".yellow(),
        Priority::High => "High".red(),
    }
}

fn status_label(status: Status) -> ColoredString {
    match status {
        Status::Pending => "Pending".normal(),
        Status::InProgress => "In Progress".yellow(),
        Status::Completed => "Completed".green(),
    }
}

fn print_task(task: &Task) {
    println!("{}", task.title.bold());
    println!("  id:          {}", task.id);
    println!("  description: {}", task.description);
    println!("  due:         {}", task.due_date.format("%Y-%m-%d"));
    println!("  priority:    {}", priority_label(task.priority));
    println!("  status:      {}", status_label(task.status));
    println!("  created:     {}", task.created_at.format("%Y-%m-%d %H:%M UTC"));
}

fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks");
        return;
    }
    for task in tasks {
        println!(
            "{}  [{} / {}]  due {}  {}",
            task.id,
            priority_label(task.priority),
            status_label(task.status),
            task.due_date.format("%Y-%m-%d"),
            task.title.bold(),
        );
    }
    println!("{} task(s)", tasks.len());
}
