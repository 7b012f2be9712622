use crate::cli::CompleteCommand;
use crate::commands::Session;
use crate::util::pending_sorted;
use anyhow::Result;
use kigen_core::clock::Clock;
use kigen_core::models::Task;
use kigen_core::repository::TaskStore;
use kigen_core::urgency::select_numbered;
use owo_colors::{OwoColorize, Style};

pub async fn complete_task(
    repo: &impl TaskStore,
    session: &Session<impl Clock>,
    command: CompleteCommand,
) -> Result<Task> {
    let today = session.today();
    let tasks = pending_sorted(repo, &session.user_id, today).await?;
    let target = select_numbered(&tasks, command.number)?;

    let completed = repo.complete_task(target.id, session.clock.now()).await?;
    tracing::info!(id = %completed.id, "task completed");

    println!(
        "{} Completed: {}",
        "✓".style(Style::new().green().bold()),
        completed.name.bright_white().bold()
    );
    println!("  {} {} pending", "→".blue(), tasks.len() - 1);
    Ok(completed)
}
