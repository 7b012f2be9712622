use clap::{ArgGroup, Parser, Subcommand};

/// A shared to-do list that understands due dates like 明日, 金曜 or 3日後
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Act as this user id instead of the configured one
    #[arg(long, global = true)]
    pub user_id: Option<String>,
    /// Display name used for tasks you add
    #[arg(long, global = true)]
    pub user_name: Option<String>,
    /// Path to the SQLite task database
    #[arg(long, global = true)]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a task; a trailing due expression ("レポート 金曜") sets the due date
    Add(AddCommand),
    /// Add a task due by the end of this week
    ThisWeek(ThisWeekCommand),
    /// List your pending tasks, most urgent first
    List(ListCommand),
    /// Your tasks due within three days, overdue included
    Urgent,
    /// Your tasks due today
    Today,
    /// Everyone's pending tasks, grouped by owner
    All,
    /// Mark a task as completed by its number in `list`
    Complete(CompleteCommand),
    /// Rename a task; a trailing due expression replaces the due date
    Edit(EditCommand),
    /// Move a task's due date (default: tomorrow)
    Postpone(PostponeCommand),
    /// Search your tasks by name
    Search(SearchCommand),
    /// Completion statistics for the whole group
    Stats,
    /// Your report for the current week
    Report,
    /// Delete one task, or clear tasks in bulk
    Delete(DeleteCommand),
    /// Print the daily digest, or keep sending it every day
    Remind(RemindCommand),
    /// Show how a due expression is understood
    Parse(ParseCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// Task name, optionally followed by a due expression
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Explicit due expression; rejected when not understood
    #[arg(short, long, conflicts_with_all = ["today", "tomorrow"])]
    pub due: Option<String>,
    /// Due today
    #[arg(long, conflicts_with = "tomorrow")]
    pub today: bool,
    /// Due tomorrow
    #[arg(long)]
    pub tomorrow: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ThisWeekCommand {
    /// Task name, optionally followed by a due expression
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Preferred day; kept when it falls within this week
    #[arg(long)]
    pub on: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompleteCommand {
    /// Task number as shown by `list`
    pub number: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// Task number as shown by `list`
    pub number: usize,
    /// New name, optionally followed by a due expression
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PostponeCommand {
    /// Task number as shown by `list`
    pub number: usize,
    /// New due expression
    #[arg(num_args = 0..)]
    pub when: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchCommand {
    #[arg(required = true, num_args = 1..)]
    pub keyword: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["number", "all", "pending", "completed"])
))]
pub struct DeleteCommand {
    /// Task number as shown by `list`
    pub number: Option<usize>,
    /// Delete all of your tasks
    #[arg(long)]
    pub all: bool,
    /// Delete your pending tasks
    #[arg(long)]
    pub pending: bool,
    /// Delete your completed tasks
    #[arg(long)]
    pub completed: bool,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RemindCommand {
    /// Stay running and send the digest every day at the configured time
    #[arg(long)]
    pub daemon: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ParseCommand {
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}
