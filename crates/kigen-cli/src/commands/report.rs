use crate::commands::Session;
use anyhow::Result;
use kigen_core::clock::Clock;
use kigen_core::due::format_month_day;
use kigen_core::models::{StatusFilter, TaskFilter};
use kigen_core::report::weekly_report;
use kigen_core::repository::TaskStore;
use owo_colors::OwoColorize;

pub async fn show_weekly_report(repo: &impl TaskStore, session: &Session<impl Clock>) -> Result<()> {
    let tasks = repo
        .find_tasks(&TaskFilter::owned_by(&session.user_id, StatusFilter::All))
        .await?;
    let report = weekly_report(&tasks, session.today(), session.clock.timezone());

    println!(
        "{} {} ({} - {})",
        "📈 Weekly report for".bold(),
        session.user_name.bold(),
        format_month_day(report.week_start),
        format_month_day(report.week_end)
    );
    println!(
        "  Completed this week: {} (on time {}, late {})",
        report.completed_this_week,
        report.on_time.green(),
        report.late.red()
    );
    if let Some(rate) = report.on_time_rate() {
        println!("  On-time rate:        {:.1}%", rate);
    }
    println!(
        "  Pending:             {} ({} urgent)",
        report.pending, report.urgent_pending
    );
    println!("  Completed overall:   {}", report.total_completed);
    if let Some(performance) = report.performance() {
        println!();
        println!("{}", performance);
    }
    Ok(())
}
