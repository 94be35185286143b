//! Command-line front end for `tasklist_core`.
//!
//! # Responsibility
//! - Play the rendering layer: parse user input, call core operations, print the view.
//! - Apply presentation-only rules (due dates default to "not in the past").

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_core::{
    core_version, default_log_level, init_logging, parse_due_input, PersistenceConfig,
    SqliteKeyValueStorage, SystemClock, TaskFilter, TaskId, TaskList, TaskListView,
};

#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about = "Local task list with due dates")]
struct Cli {
    /// SQLite file holding the task list.
    #[arg(long, global = true, default_value = "tasklist.sqlite3")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a task.
    Add {
        title: String,
        /// Due date as YYYY-MM-DD.
        #[arg(long)]
        due: Option<String>,
        /// Accept a due date earlier than today.
        #[arg(long)]
        allow_past: bool,
    },
    /// Flip a task between open and completed.
    Toggle { id: TaskId },
    /// Delete a completed task.
    Remove { id: TaskId },
    /// Delete every completed task.
    ClearCompleted,
    /// Print the task list.
    List {
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, log_dir).context("failed to initialize logging")?;
    }

    let storage = SqliteKeyValueStorage::open(&cli.db)
        .with_context(|| format!("failed to open task storage `{}`", cli.db.display()))?;
    let mut list = TaskList::open(storage, SystemClock, PersistenceConfig::default());

    match cli.command {
        Command::Add {
            title,
            due,
            allow_past,
        } => {
            let due = parse_due_input(due.as_deref().unwrap_or_default())?;
            if let Some(due) = due {
                if !allow_past && due.as_naive() < list.today() {
                    bail!("due date {due} is in the past; pass --allow-past to keep it");
                }
            }
            match list.add(&title, due) {
                Some(task) => println!("added {}", task.id),
                None => println!("nothing added: title is empty"),
            }
        }
        Command::Toggle { id } => report(list.toggle(id), "toggled", id),
        Command::Remove { id } => {
            if !list.remove(id) {
                println!("not removed: task {id} is missing or not completed");
            } else {
                println!("removed {id}");
            }
        }
        Command::ClearCompleted => println!("removed {} completed", list.clear_completed()),
        Command::List { filter } => {
            list.set_filter(filter);
            print_view(&list.view());
        }
    }

    Ok(())
}

fn report(changed: bool, verb: &str, id: TaskId) {
    if changed {
        println!("{verb} {id}");
    } else {
        println!("no task with id {id}");
    }
}

fn print_view(view: &TaskListView) {
    println!(
        "tasklist {} | filter={} | remaining={}",
        core_version(),
        view.filter,
        view.remaining_count
    );
    for row in &view.rows {
        let check = if row.task.done { "[x]" } else { "[ ]" };
        match &row.badge {
            Some(badge) => println!(
                "{check} {} {}  <{}: {}>",
                row.task.id,
                row.task.title,
                badge.severity.as_str(),
                badge.label
            ),
            None => println!("{check} {} {}", row.task.id, row.task.title),
        }
    }
}
