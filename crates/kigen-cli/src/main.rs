use clap::Parser;
use kigen_core::db;
use kigen_core::error::CoreError;
use kigen_core::repository::SqliteRepository;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod timezone;
mod util;
mod views;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides; stdout stays reserved for command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kigen=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match config::Config::new() {
        Ok(config) => config.with_overrides(&cli),
        Err(e) => {
            eprintln!("{} Invalid configuration: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let session = match commands::Session::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            handle_error(e.into());
            std::process::exit(1);
        }
    };
    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool);
    tracing::debug!(user = %session.user_id, db = %config.database_path, "session ready");

    let repo = &repository;
    let session = &session;
    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(repo, session, command).await.map(drop),
        cli::Commands::ThisWeek(command) => {
            commands::this_week::add_this_week(repo, session, command).await.map(drop)
        }
        cli::Commands::List(command) => commands::list::list_tasks(repo, session, command).await,
        cli::Commands::Urgent => commands::list::list_urgent(repo, session).await,
        cli::Commands::Today => commands::list::list_today(repo, session).await,
        cli::Commands::All => commands::list::list_all(repo, session).await,
        cli::Commands::Complete(command) => {
            commands::complete::complete_task(repo, session, command).await.map(drop)
        }
        cli::Commands::Edit(command) => commands::edit::edit_task(repo, session, command).await.map(drop),
        cli::Commands::Postpone(command) => {
            commands::postpone::postpone_task(repo, session, command).await.map(drop)
        }
        cli::Commands::Search(command) => commands::search::search_tasks(repo, session, command).await,
        cli::Commands::Stats => commands::stats::show_stats(repo, session).await,
        cli::Commands::Report => commands::report::show_weekly_report(repo, session).await,
        cli::Commands::Delete(command) => {
            commands::delete::delete_tasks(repo, session, command).await.map(drop)
        }
        cli::Commands::Remind(command) => commands::remind::remind(repo, session, command).await,
        cli::Commands::Parse(command) => commands::parse::parse_expression(session, command).map(drop),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} Task '{}' no longer exists.", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidNumber { .. } => {
                eprintln!("{} {}", "Error:".style(error_style), core_error);
                eprintln!("Run {} to see the numbers.", "kigen list".yellow());
            }
            CoreError::NoTasks => {
                eprintln!("{} {}", "Error:".style(error_style), core_error);
            }
            CoreError::UnrecognizedDueDate(text) => {
                eprintln!(
                    "{} Could not understand due date '{}'",
                    "Error:".style(error_style),
                    text.yellow()
                );
                eprintln!("Try 今日, 明日, 金曜, 3日後, 来週 or 12/25.");
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
