//! # Kigen Core Library
//!
//! Shared to-do list for a small group, with due dates written the way people
//! actually type them in chat.
//!
//! ## Features
//!
//! - **Natural-language due dates**: `明日`, `金曜`, `3日後`, `next week`,
//!   `7/30` and friends resolve against an explicit "today"
//! - **Urgency ranking**: overdue first, soonest next, undated last, with
//!   severity bands and compact labels for display
//! - **Shared task store**: SQLite-backed rows with owner id and display name
//! - **Daily digest and weekly report**: per-owner reminders and on-time stats
//!
//! ## Core Modules
//!
//! - [`due`]: Due-date expression parser
//! - [`urgency`]: Scores, severity bands, labels and positional numbering
//! - [`models`]: Task rows and transfer objects
//! - [`repository`]: Data access through the [`repository::TaskStore`] trait
//! - [`reminder`]: Daily digest selection and rendering
//! - [`report`]: Group statistics and the weekly report
//! - [`clock`]: Time sources carrying the group's time zone
//! - [`timezone`]: Timezone parsing and DST-aware scheduling
//! - [`db`]: Database connection and migrations
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use kigen_core::{
//!     clock::{Clock, SystemClock},
//!     db,
//!     due::parse_due_date,
//!     models::{NewTaskData, TaskFilter},
//!     repository::{SqliteRepository, TaskStore},
//!     urgency::{label, sort_by_urgency},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::establish_connection("kigen.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!     let clock = SystemClock::new(chrono_tz::Asia::Tokyo);
//!     let today = clock.today();
//!
//!     repo.add_task(NewTaskData {
//!         name: "レポート提出".to_string(),
//!         owner_id: "u1".to_string(),
//!         owner_name: "Aki".to_string(),
//!         due_date: parse_due_date("金曜", today),
//!         created_at: Some(Utc::now()),
//!     })
//!     .await?;
//!
//!     let mut tasks = repo.find_tasks(&TaskFilter::pending_for("u1")).await?;
//!     sort_by_urgency(&mut tasks, today, |t| t.due());
//!     for task in &tasks {
//!         println!("{} - {}", task.name, label(task.due(), today));
//!     }
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod db;
pub mod due;
pub mod error;
pub mod models;
pub mod reminder;
pub mod report;
pub mod repository;
pub mod timezone;
pub mod urgency;
