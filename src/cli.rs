//! One-shot subcommands driving the controller without the TUI.

use crate::controller::TaskListController;
use crate::domain::{status_badge, Filter, TaskId};
use anyhow::{bail, Result};
use clap::Subcommand;
use std::io::Write;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default config file (base URL included)
    Init,
    /// Print tasks
    List {
        /// all, completed or pending
        #[arg(short, long, default_value = "all")]
        filter: Filter,
    },
    /// Create a task
    Add {
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Flip a task between completed and pending
    Toggle { id: TaskId },
    /// Replace a task's title
    Edit {
        id: TaskId,
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Delete a task
    Delete { id: TaskId },
}

fn print_tasks(controller: &TaskListController, out: &mut impl Write) -> Result<()> {
    let tasks = controller.visible_tasks();
    if tasks.is_empty() {
        writeln!(out, "No tasks ({})", controller.filter)?;
    }
    for task in tasks {
        writeln!(
            out,
            "{} {:>4}  {}",
            status_badge(task.completed, false),
            task.id,
            task.title
        )?;
    }
    Ok(())
}

/// Run a store-backed subcommand (`Init` is handled by the caller)
pub async fn run(
    command: Commands,
    controller: &mut TaskListController,
    out: &mut impl Write,
) -> Result<()> {
    if !controller.refresh().await {
        bail!("Could not fetch tasks from the task store");
    }

    match command {
        Commands::Init => bail!("init does not talk to the task store"),
        Commands::List { filter } => {
            controller.set_filter(filter);
            print_tasks(controller, out)
        }
        Commands::Add { title } => {
            controller.set_draft(title.join(" "));
            if controller.plan_create().is_none() {
                bail!("Task title cannot be blank");
            }
            if !controller.create().await {
                bail!("Task store did not accept the new task");
            }
            print_tasks(controller, out)
        }
        Commands::Toggle { id } => {
            if controller.find(&id).is_none() {
                bail!("No task with id {}", id);
            }
            if !controller.toggle_complete(&id).await {
                bail!("Task store did not accept the update");
            }
            print_tasks(controller, out)
        }
        Commands::Edit { id, title } => {
            if !controller.begin_edit(&id) {
                bail!("No task with id {}", id);
            }
            controller.set_edit_buffer(title.join(" "));
            if controller.plan_commit_edit().is_none() {
                bail!("Task title cannot be blank");
            }
            if !controller.commit_edit().await {
                bail!("Task store did not accept the update");
            }
            print_tasks(controller, out)
        }
        Commands::Delete { id } => {
            if !controller.delete(&id).await {
                bail!("Task store did not delete task {}", id);
            }
            print_tasks(controller, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::store::mock::{Call, MockTaskStore};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    async fn run_with(store: &Arc<MockTaskStore>, command: Commands) -> Result<String> {
        let mut controller = TaskListController::new(store.clone());
        let mut out = Vec::new();
        run(command, &mut controller, &mut out).await?;
        Ok(String::from_utf8(out)?)
    }

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let store = Arc::new(MockTaskStore::new(vec![
            Task::new(1, "milk", false),
            Task::new(2, "bread", true),
        ]));

        let all = run_with(&store, Commands::List { filter: Filter::All }).await.unwrap();
        assert_eq!(all, "[ ]    1  milk\n[x]    2  bread\n");

        let pending = run_with(&store, Commands::List { filter: Filter::Pending })
            .await
            .unwrap();
        assert_eq!(pending, "[ ]    1  milk\n");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = Arc::new(MockTaskStore::default());
        let out = run_with(&store, Commands::List { filter: Filter::Completed })
            .await
            .unwrap();
        assert_eq!(out, "No tasks (completed)\n");
    }

    #[tokio::test]
    async fn test_add_joins_words() {
        let store = Arc::new(MockTaskStore::default());
        let out = run_with(&store, Commands::Add { title: words("buy oat milk") })
            .await
            .unwrap();

        assert_eq!(out, "[ ]    1  buy oat milk\n");
        assert_eq!(store.tasks(), vec![Task::new(1, "buy oat milk", false)]);
    }

    #[tokio::test]
    async fn test_add_blank_is_rejected_before_sending() {
        let store = Arc::new(MockTaskStore::default());
        let result = run_with(&store, Commands::Add { title: words("  ") }).await;

        assert!(result.is_err());
        assert_eq!(store.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_toggle_edit_delete() {
        let store = Arc::new(MockTaskStore::new(vec![Task::new(1, "milk", false)]));

        run_with(&store, Commands::Toggle { id: TaskId::Number(1) }).await.unwrap();
        assert_eq!(store.tasks(), vec![Task::new(1, "milk", true)]);

        run_with(
            &store,
            Commands::Edit {
                id: TaskId::Number(1),
                title: words("whole milk"),
            },
        )
        .await
        .unwrap();
        assert_eq!(store.tasks(), vec![Task::new(1, "whole milk", true)]);

        let out = run_with(&store, Commands::Delete { id: TaskId::Number(1) })
            .await
            .unwrap();
        assert_eq!(out, "No tasks (all)\n");
        assert!(store.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_is_an_error() {
        let store = Arc::new(MockTaskStore::new(vec![Task::new(1, "milk", false)]));

        assert!(run_with(&store, Commands::Toggle { id: TaskId::Number(9) }).await.is_err());
        assert!(run_with(&store, Commands::Delete { id: TaskId::Number(9) }).await.is_err());
    }

    #[tokio::test]
    async fn test_rejection_is_reported() {
        let store = Arc::new(MockTaskStore::new(vec![Task::new(1, "milk", false)]).rejecting());
        let result = run_with(&store, Commands::Toggle { id: TaskId::Number(1) }).await;
        assert!(result.is_err());
    }
}
