//! The morning digest.
//!
//! Once a day every owner gets a short summary of what is due within the next
//! week, most urgent first. Tasks without a due date are included only while
//! they are recent, so old open-ended items do not crowd the message.

use crate::models::Task;
use crate::urgency::{days_until, label, sort_by_urgency, URGENT_WITHIN_DAYS};
use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPolicy {
    /// Due dates up to this many days ahead are included.
    pub horizon_days: u64,
    /// Tasks listed per owner; the rest are summarised as a count.
    pub per_owner_limit: usize,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            per_owner_limit: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OwnerDigest {
    pub owner_id: String,
    pub owner_name: String,
    /// Included tasks, sorted by urgency.
    pub tasks: Vec<Task>,
    pub overdue: usize,
    pub due_today: usize,
    /// Due in one to three days.
    pub urgent: usize,
}

impl OwnerDigest {
    fn new(owner_id: String, owner_name: String) -> Self {
        Self {
            owner_id,
            owner_name,
            tasks: Vec::new(),
            overdue: 0,
            due_today: 0,
            urgent: 0,
        }
    }

    pub fn heading(&self) -> String {
        let mut heading = format!("{}さん ({}件", self.owner_name, self.tasks.len());
        if self.overdue > 0 {
            heading.push_str(&format!(", 🔴{}件期限切れ", self.overdue));
        }
        if self.due_today > 0 {
            heading.push_str(&format!(", ⚡{}件今日まで", self.due_today));
        } else if self.urgent > 0 {
            heading.push_str(&format!(", 🟡{}件緊急", self.urgent));
        }
        heading.push(')');
        heading
    }
}

#[derive(Debug, Clone)]
pub struct DailyDigest {
    pub date: NaiveDate,
    pub policy: ReminderPolicy,
    pub owners: Vec<OwnerDigest>,
}

impl DailyDigest {
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.owners.iter().map(|o| o.tasks.len()).sum()
    }
}

impl fmt::Display for DailyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "おはようございます")?;
        if self.is_empty() {
            writeln!(f, "現在、一週間以内の未完了タスクはありません")?;
            return write!(f, "今日も素晴らしい一日を");
        }

        writeln!(f, "今週のタスク状況をお知らせします")?;
        for owner in &self.owners {
            writeln!(f)?;
            writeln!(f, "{}", owner.heading())?;
            for task in owner.tasks.iter().take(self.policy.per_owner_limit) {
                writeln!(f, "• {} - {}", task.name, label(task.due(), self.date))?;
            }
            let hidden = owner.tasks.len().saturating_sub(self.policy.per_owner_limit);
            if hidden > 0 {
                writeln!(f, "• ... 他{}件", hidden)?;
            }
        }
        Ok(())
    }
}

/// Build the digest for `today` from every row of the table.
pub fn build_daily_digest(
    tasks: &[Task],
    today: NaiveDate,
    tz: Tz,
    policy: ReminderPolicy,
) -> DailyDigest {
    let horizon = today
        .checked_add_days(Days::new(policy.horizon_days))
        .unwrap_or(NaiveDate::MAX);
    let horizon_days = i64::try_from(policy.horizon_days).unwrap_or(i64::MAX);
    let mut owners: Vec<OwnerDigest> = Vec::new();

    for task in tasks.iter().filter(|t| !t.completed) {
        let include = match task.due() {
            Some(due) => due <= horizon,
            None => {
                let created = task.created_at.with_timezone(&tz).date_naive();
                days_until(today, created) <= horizon_days
            }
        };
        if !include {
            continue;
        }

        let index = match owners.iter().position(|o| o.owner_id == task.owner_id) {
            Some(index) => index,
            None => {
                owners.push(OwnerDigest::new(
                    task.owner_id.clone(),
                    task.owner_name.clone(),
                ));
                owners.len() - 1
            }
        };
        let owner = &mut owners[index];

        if let Some(due) = task.due() {
            match days_until(due, today) {
                d if d < 0 => owner.overdue += 1,
                0 => owner.due_today += 1,
                d if d <= URGENT_WITHIN_DAYS => owner.urgent += 1,
                _ => {}
            }
        }
        owner.tasks.push(task.clone());
    }

    for owner in &mut owners {
        sort_by_urgency(&mut owner.tasks, today, Task::due);
    }

    DailyDigest {
        date: today,
        policy,
        owners,
    }
}
