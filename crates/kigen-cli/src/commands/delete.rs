use crate::cli::DeleteCommand;
use crate::commands::Session;
use crate::util::pending_sorted;
use anyhow::Result;
use dialoguer::Confirm;
use kigen_core::clock::Clock;
use kigen_core::models::{StatusFilter, TaskFilter};
use kigen_core::repository::TaskStore;
use kigen_core::urgency::select_numbered;
use owo_colors::{OwoColorize, Style};

fn confirm(prompt: String) -> bool {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Which of the user's tasks a bulk delete removes.
fn bulk_status(command: &DeleteCommand) -> StatusFilter {
    if command.completed {
        StatusFilter::Completed
    } else if command.pending {
        StatusFilter::Pending
    } else {
        StatusFilter::All
    }
}

/// Returns how many tasks were deleted.
pub async fn delete_tasks(repo: &impl TaskStore, session: &Session<impl Clock>, command: DeleteCommand) -> Result<u64> {
    let success_style = Style::new().green().bold();

    if let Some(number) = command.number {
        let tasks = pending_sorted(repo, &session.user_id, session.today()).await?;
        let target = select_numbered(&tasks, number)?;

        if !command.force && !confirm(format!("Are you sure you want to delete task '{}'?", target.name)) {
            println!("Deletion cancelled.");
            return Ok(0);
        }

        repo.delete_task(target.id).await?;
        tracing::info!(id = %target.id, "task deleted");
        println!("{} Deleted: {}", "✓".style(success_style), target.name.bright_white().bold());
        return Ok(1);
    }

    let status = bulk_status(&command);
    let filter = TaskFilter::owned_by(&session.user_id, status);
    let count = repo.find_tasks(&filter).await?.len();
    if count == 0 {
        println!("Nothing to delete.");
        return Ok(0);
    }

    let kind = match status {
        StatusFilter::Pending => "pending ",
        StatusFilter::Completed => "completed ",
        StatusFilter::All => "",
    };
    if !command.force && !confirm(format!("Delete all {} of your {}tasks?", count, kind)) {
        println!("Deletion cancelled.");
        return Ok(0);
    }

    let deleted = repo.delete_tasks(&filter).await?;
    tracing::info!(deleted, owner = %session.user_id, "tasks cleared");
    println!("{} Deleted {} {}task(s)", "✓".style(success_style), deleted, kind);
    Ok(deleted)
}
