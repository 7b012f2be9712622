use crate::cli::EditCommand;
use crate::commands::Session;
use crate::util::{pending_sorted, split_name_and_due};
use anyhow::Result;
use kigen_core::clock::Clock;
use kigen_core::models::{Task, UpdateTaskData};
use kigen_core::repository::TaskStore;
use kigen_core::urgency::{label, select_numbered};
use owo_colors::{OwoColorize, Style};

pub async fn edit_task(repo: &impl TaskStore, session: &Session<impl Clock>, command: EditCommand) -> Result<Task> {
    let today = session.today();
    let tasks = pending_sorted(repo, &session.user_id, today).await?;
    let target = select_numbered(&tasks, command.number)?;

    let split = split_name_and_due(&session.parser, &command.words, today);
    let update = UpdateTaskData {
        name: Some(split.name),
        // no trailing due expression keeps the old date
        due_date: split.due.map(Some),
    };
    let updated = repo.update_task(target.id, update).await?;
    tracing::info!(id = %updated.id, "task edited");

    println!(
        "{} Updated: {} → {}",
        "✓".style(Style::new().green().bold()),
        target.name.bright_black(),
        updated.name.bright_white().bold()
    );
    println!("  {} Due: {}", "→".blue(), label(updated.due(), today));
    Ok(updated)
}
