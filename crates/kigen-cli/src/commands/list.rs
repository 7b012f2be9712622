use crate::cli::ListCommand;
use crate::commands::Session;
use crate::util::pending_sorted;
use crate::views::table::{display_tasks, view_tasks};
use anyhow::Result;
use chrono::NaiveDate;
use kigen_core::clock::Clock;
use kigen_core::models::{StatusFilter, Task, TaskFilter};
use kigen_core::repository::TaskStore;
use kigen_core::urgency::{is_urgent, label, number_items, sort_by_urgency, SeverityBand};
use owo_colors::OwoColorize;
use serde::Serialize;
use uuid::Uuid;

/// Owners in `all` show at most this many tasks.
const PER_OWNER_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    number: usize,
    id: Uuid,
    name: &'a str,
    due_date: Option<&'a str>,
    band: SeverityBand,
    label: String,
}

pub async fn list_tasks(repo: &impl TaskStore, session: &Session<impl Clock>, command: ListCommand) -> Result<()> {
    let today = session.today();
    let tasks = pending_sorted(repo, &session.user_id, today).await?;

    if command.json {
        let entries: Vec<ListEntry> = number_items(&tasks)
            .into_iter()
            .map(|numbered| {
                let due_label = label(numbered.item.due(), today);
                ListEntry {
                    number: numbered.number,
                    id: numbered.item.id,
                    name: &numbered.item.name,
                    due_date: numbered.item.due_date.as_deref(),
                    band: due_label.band,
                    label: due_label.text(),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No pending tasks for {}.", session.user_name);
        return Ok(());
    }

    println!("{} ({})", format!("{}'s tasks", session.user_name).bold(), tasks.len());
    display_tasks(&view_tasks(&tasks), today);
    Ok(())
}

/// Pending tasks due within three days, numbered as in `list`.
pub async fn list_urgent(repo: &impl TaskStore, session: &Session<impl Clock>) -> Result<()> {
    let today = session.today();
    let views: Vec<_> = view_tasks(&pending_sorted(repo, &session.user_id, today).await?)
        .into_iter()
        .filter(|view| is_urgent(view.due, today))
        .collect();

    if views.is_empty() {
        println!("Nothing urgent. Nice work.");
        return Ok(());
    }

    println!("{} ({})", "Urgent tasks".red().bold(), views.len());
    display_tasks(&views, today);
    Ok(())
}

pub async fn list_today(repo: &impl TaskStore, session: &Session<impl Clock>) -> Result<()> {
    let today = session.today();
    let views: Vec<_> = view_tasks(&pending_sorted(repo, &session.user_id, today).await?)
        .into_iter()
        .filter(|view| view.due == Some(today))
        .collect();

    if views.is_empty() {
        println!("Nothing due today.");
        return Ok(());
    }

    println!("{} ({})", "Due today".yellow().bold(), views.len());
    display_tasks(&views, today);
    Ok(())
}

/// Group `tasks` by owner id, keeping first-seen order, each group by urgency.
fn group_by_owner(tasks: Vec<Task>, today: NaiveDate) -> Vec<(String, Vec<Task>)> {
    let mut groups: Vec<(String, String, Vec<Task>)> = Vec::new();
    for task in tasks {
        match groups.iter_mut().find(|group| group.0 == task.owner_id) {
            Some(group) => group.2.push(task),
            None => groups.push((task.owner_id.clone(), task.owner_name.clone(), vec![task])),
        }
    }
    groups
        .into_iter()
        .map(|(_, owner_name, mut group)| {
            sort_by_urgency(&mut group, today, Task::due);
            (owner_name, group)
        })
        .collect()
}

pub async fn list_all(repo: &impl TaskStore, session: &Session<impl Clock>) -> Result<()> {
    let today = session.today();
    let tasks = repo.find_tasks(&TaskFilter::everyone(StatusFilter::Pending)).await?;

    if tasks.is_empty() {
        println!("No pending tasks for anyone.");
        return Ok(());
    }

    let total = tasks.len();
    let groups = group_by_owner(tasks, today);
    println!("{} ({} tasks, {} people)", "Everyone's tasks".bold(), total, groups.len());

    for (owner_name, group) in groups {
        println!();
        println!("{} ({})", owner_name.cyan().bold(), group.len());
        let shown = &group[..group.len().min(PER_OWNER_LIMIT)];
        display_tasks(&view_tasks(shown), today);
        if group.len() > PER_OWNER_LIMIT {
            println!("... 他{}件", group.len() - PER_OWNER_LIMIT);
        }
    }
    Ok(())
}
