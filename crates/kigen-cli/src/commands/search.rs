use crate::cli::SearchCommand;
use crate::commands::Session;
use crate::views::table::{display_tasks, view_tasks};
use anyhow::Result;
use chrono::NaiveDate;
use kigen_core::clock::Clock;
use kigen_core::models::{StatusFilter, Task, TaskFilter};
use kigen_core::repository::TaskStore;
use kigen_core::urgency::urgency_score;
use owo_colors::OwoColorize;

const MAX_RESULTS: usize = 10;

/// Case-insensitive name matches, pending before completed, then by urgency.
fn matching(tasks: Vec<Task>, keyword: &str, today: NaiveDate) -> Vec<Task> {
    let keyword = keyword.to_lowercase();
    let mut found: Vec<Task> = tasks
        .into_iter()
        .filter(|task| task.name.to_lowercase().contains(&keyword))
        .collect();
    found.sort_by_key(|task| (task.completed, urgency_score(task.due(), today)));
    found
}

pub async fn search_tasks(repo: &impl TaskStore, session: &Session<impl Clock>, command: SearchCommand) -> Result<()> {
    let today = session.today();
    let keyword = command.keyword.join(" ");
    let tasks = repo
        .find_tasks(&TaskFilter::owned_by(&session.user_id, StatusFilter::All))
        .await?;
    let found = matching(tasks, &keyword, today);

    if found.is_empty() {
        println!("No tasks matching '{}'.", keyword);
        return Ok(());
    }

    println!("{} '{}' ({})", "Search:".bold(), keyword, found.len());
    display_tasks(&view_tasks(&found[..found.len().min(MAX_RESULTS)]), today);
    if found.len() > MAX_RESULTS {
        println!("Showing the first {} results.", MAX_RESULTS);
    }
    Ok(())
}
