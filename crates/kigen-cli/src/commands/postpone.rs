use crate::cli::PostponeCommand;
use crate::commands::Session;
use crate::util::pending_sorted;
use anyhow::Result;
use kigen_core::clock::Clock;
use kigen_core::error::CoreError;
use kigen_core::models::{Task, UpdateTaskData};
use kigen_core::repository::TaskStore;
use kigen_core::urgency::{label, select_numbered};
use owo_colors::{OwoColorize, Style};

const DEFAULT_POSTPONE: &str = "明日";

pub async fn postpone_task(
    repo: &impl TaskStore,
    session: &Session<impl Clock>,
    command: PostponeCommand,
) -> Result<Task> {
    let today = session.today();
    let text = if command.when.is_empty() {
        DEFAULT_POSTPONE.to_string()
    } else {
        command.when.join(" ")
    };
    let due = session
        .parser
        .parse(&text, today)
        .ok_or_else(|| CoreError::UnrecognizedDueDate(text.clone()))?;

    let tasks = pending_sorted(repo, &session.user_id, today).await?;
    let target = select_numbered(&tasks, command.number)?;

    let update = UpdateTaskData {
        name: None,
        due_date: Some(Some(due)),
    };
    let updated = repo.update_task(target.id, update).await?;
    tracing::info!(id = %updated.id, due = ?updated.due_date, "task postponed");

    println!(
        "{} Postponed: {}",
        "✓".style(Style::new().green().bold()),
        updated.name.bright_white().bold()
    );
    println!(
        "  {} {} → {}",
        "→".blue(),
        label(target.due(), today),
        label(updated.due(), today)
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add::create;
    use crate::commands::testing::{repository, session, words};

    #[tokio::test]
    async fn test_defaults_to_tomorrow() {
        let (repo, _dir) = repository().await;
        let session = session("u1");
        create(&repo, &session, "draft".to_string(), None).await.unwrap();

        let cmd = PostponeCommand {
            number: 1,
            when: vec![],
        };
        let updated = postpone_task(&repo, &session, cmd).await.unwrap();
        assert_eq!(updated.due_date.as_deref(), Some("2025-06-11"));
    }

    #[tokio::test]
    async fn test_rejects_unrecognized_expression() {
        let (repo, _dir) = repository().await;
        let session = session("u1");
        create(&repo, &session, "draft".to_string(), None).await.unwrap();

        let cmd = PostponeCommand {
            number: 1,
            when: words("whenever"),
        };
        let err = postpone_task(&repo, &session, cmd).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::UnrecognizedDueDate(_))
        ));

        let stored = pending_sorted(&repo, "u1", session.today()).await.unwrap();
        assert_eq!(stored[0].due_date, None);
    }

    #[tokio::test]
    async fn test_explicit_date() {
        let (repo, _dir) = repository().await;
        let session = session("u1");
        create(&repo, &session, "draft".to_string(), None).await.unwrap();

        let cmd = PostponeCommand {
            number: 1,
            when: words("2025-07-01"),
        };
        let updated = postpone_task(&repo, &session, cmd).await.unwrap();
        assert_eq!(updated.due_date.as_deref(), Some("2025-07-01"));
    }
}
