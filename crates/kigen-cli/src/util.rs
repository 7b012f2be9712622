use anyhow::Result;
use chrono::NaiveDate;
use kigen_core::due::DueDateParser;
use kigen_core::models::{Task, TaskFilter};
use kigen_core::repository::TaskStore;
use kigen_core::urgency::sort_by_urgency;

/// A task name with the due expression split off its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitInput {
    pub name: String,
    pub due_text: Option<String>,
    pub due: Option<NaiveDate>,
}

/// Split `words` on the last space. The trailing token becomes the due date
/// only when it parses; otherwise the whole input is the name.
pub fn split_name_and_due(parser: &DueDateParser, words: &[String], today: NaiveDate) -> SplitInput {
    let text = words.join(" ");
    let text = text.trim();

    if let Some((head, tail)) = text.rsplit_once(' ') {
        let head = head.trim();
        if !head.is_empty() {
            if let Some(due) = parser.parse(tail, today) {
                return SplitInput {
                    name: head.to_string(),
                    due_text: Some(tail.to_string()),
                    due: Some(due),
                };
            }
        }
    }

    SplitInput {
        name: text.to_string(),
        due_text: None,
        due: None,
    }
}

/// The user's pending tasks in listing order; positional numbers refer to this.
pub async fn pending_sorted(repo: &impl TaskStore, owner_id: &str, today: NaiveDate) -> Result<Vec<Task>> {
    let mut tasks = repo.find_tasks(&TaskFilter::pending_for(owner_id)).await?;
    sort_by_urgency(&mut tasks, today, Task::due);
    Ok(tasks)
}
