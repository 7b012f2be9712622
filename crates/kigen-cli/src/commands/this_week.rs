use crate::cli::ThisWeekCommand;
use crate::commands::add::{create, print_added};
use crate::commands::Session;
use crate::util::split_name_and_due;
use anyhow::Result;
use kigen_core::clock::Clock;
use kigen_core::due::week_end;
use kigen_core::models::Task;
use kigen_core::repository::TaskStore;

pub async fn add_this_week(
    repo: &impl TaskStore,
    session: &Session<impl Clock>,
    command: ThisWeekCommand,
) -> Result<Task> {
    let today = session.today();

    let (name, due_text) = match command.on {
        Some(on) => (command.words.join(" "), Some(on)),
        None => {
            let split = split_name_and_due(&session.parser, &command.words, today);
            let within_week = matches!(
                (split.due, week_end(today)),
                (Some(due), Some(end)) if due <= end
            );
            if within_week {
                (split.name, split.due_text)
            } else {
                // The trailing token stays part of the name when it is not a day this week.
                (command.words.join(" "), None)
            }
        }
    };

    let after_cutoff = session.clock.is_past_hour(session.evening_cutoff_hour);
    let due = session
        .parser
        .this_week_deadline(due_text.as_deref(), today, after_cutoff);

    let task = create(repo, session, name, due).await?;
    print_added(&task, today);
    Ok(task)
}
