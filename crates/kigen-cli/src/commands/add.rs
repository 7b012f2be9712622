use crate::cli::AddCommand;
use crate::commands::Session;
use crate::util::split_name_and_due;
use anyhow::Result;
use chrono::{Days, NaiveDate};
use kigen_core::clock::Clock;
use kigen_core::error::CoreError;
use kigen_core::models::{NewTaskData, Task};
use kigen_core::repository::TaskStore;
use kigen_core::urgency::label;
use owo_colors::{OwoColorize, Style};

pub async fn add_task(repo: &impl TaskStore, session: &Session<impl Clock>, command: AddCommand) -> Result<Task> {
    let today = session.today();

    let (name, due) = if command.today {
        (command.words.join(" "), Some(today))
    } else if command.tomorrow {
        (command.words.join(" "), today.checked_add_days(Days::new(1)))
    } else if let Some(text) = &command.due {
        let due = session
            .parser
            .parse(text, today)
            .ok_or_else(|| CoreError::UnrecognizedDueDate(text.clone()))?;
        (command.words.join(" "), Some(due))
    } else {
        let split = split_name_and_due(&session.parser, &command.words, today);
        (split.name, split.due)
    };

    let task = create(repo, session, name, due).await?;
    print_added(&task, today);
    Ok(task)
}

pub(crate) async fn create(
    repo: &impl TaskStore,
    session: &Session<impl Clock>,
    name: String,
    due: Option<NaiveDate>,
) -> Result<Task> {
    let task = repo
        .add_task(NewTaskData {
            name,
            owner_id: session.user_id.clone(),
            owner_name: session.user_name.clone(),
            due_date: due,
            created_at: Some(session.clock.now()),
        })
        .await?;
    tracing::info!(id = %task.id, owner = %task.owner_id, "task added");
    Ok(task)
}

pub(crate) fn print_added(task: &Task, today: NaiveDate) {
    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Added task: {}",
        "✓".style(success_style),
        task.name.bright_white().bold()
    );
    println!("  {} Due: {}", "→".style(info_style), label(task.due(), today));
}
