use crate::commands::Session;
use crate::views::table::display_owner_stats;
use anyhow::Result;
use kigen_core::clock::Clock;
use kigen_core::models::{StatusFilter, TaskFilter};
use kigen_core::report::task_stats;
use kigen_core::repository::TaskStore;
use owo_colors::OwoColorize;

pub async fn show_stats(repo: &impl TaskStore, session: &Session<impl Clock>) -> Result<()> {
    let tasks = repo.find_tasks(&TaskFilter::everyone(StatusFilter::All)).await?;
    let stats = task_stats(&tasks, session.today());

    println!("{}", "📊 Task statistics".bold());
    println!("  Total:     {}", stats.total);
    println!("  Completed: {}", stats.completed.green());
    println!("  Pending:   {}", stats.pending().yellow());
    println!("  Rate:      {:.1}%", stats.completion_rate());
    display_owner_stats(&stats);
    Ok(())
}
