use crate::cli::RemindCommand;
use crate::commands::Session;
use anyhow::Result;
use async_trait::async_trait;
use kigen_core::clock::Clock;
use kigen_core::models::{StatusFilter, TaskFilter};
use kigen_core::reminder::{build_daily_digest, DailyDigest};
use kigen_core::repository::TaskStore;
use kigen_core::timezone::next_fire_time;

/// Where the daily digest goes.
#[async_trait]
pub trait Notifier {
    async fn deliver(&self, digest: &DailyDigest) -> Result<()>;
}

pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    async fn deliver(&self, digest: &DailyDigest) -> Result<()> {
        println!("{}", digest);
        Ok(())
    }
}

pub async fn remind(repo: &impl TaskStore, session: &Session<impl Clock>, command: RemindCommand) -> Result<()> {
    let notifier = StdoutNotifier;
    if command.daemon {
        run_daemon(repo, session, &notifier).await
    } else {
        send_digest(repo, session, &notifier).await
    }
}

pub async fn send_digest(
    repo: &impl TaskStore,
    session: &Session<impl Clock>,
    notifier: &impl Notifier,
) -> Result<()> {
    let tasks = repo.find_tasks(&TaskFilter::everyone(StatusFilter::Pending)).await?;
    let digest = build_daily_digest(&tasks, session.today(), session.clock.timezone(), session.policy);
    tracing::info!(
        owners = digest.owners.len(),
        tasks = digest.task_count(),
        "delivering daily digest"
    );
    notifier.deliver(&digest).await
}

async fn run_daemon(repo: &impl TaskStore, session: &Session<impl Clock>, notifier: &impl Notifier) -> Result<()> {
    let tz = session.clock.timezone();
    println!(
        "Sending the digest every day at {} ({}). Press Ctrl-C to stop.",
        session.reminder_at.format("%H:%M"),
        tz
    );

    loop {
        let now = session.clock.now();
        let next = next_fire_time(now, tz, session.reminder_at)?;
        let wait = (next - now).to_std().unwrap_or_default();
        tracing::info!(%next, "next digest scheduled");

        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                // keep the schedule alive after a failed delivery
                if let Err(e) = send_digest(repo, session, notifier).await {
                    tracing::error!(error = %e, "daily digest failed");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("reminder daemon stopped");
                println!("Stopped.");
                return Ok(());
            }
        }
    }
}
