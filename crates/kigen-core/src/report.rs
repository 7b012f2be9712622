//! Group statistics and the personal weekly report.

use crate::models::Task;
use crate::urgency::{days_until, is_urgent, URGENT_WITHIN_DAYS};
use chrono::{Datelike, Days, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OwnerStats {
    pub owner_name: String,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Pending and due within three days, not yet overdue.
    pub urgent: usize,
}

impl OwnerStats {
    pub fn completion_rate(&self) -> f64 {
        rate(self.completed, self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub owners: Vec<OwnerStats>,
}

impl TaskStats {
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }

    pub fn completion_rate(&self) -> f64 {
        rate(self.completed, self.total)
    }
}

fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Totals for the whole table, per owner display name in first-seen order.
pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let mut stats = TaskStats::default();

    for task in tasks {
        let index = match stats.owners.iter().position(|o| o.owner_name == task.owner_name) {
            Some(index) => index,
            None => {
                stats.owners.push(OwnerStats {
                    owner_name: task.owner_name.clone(),
                    ..Default::default()
                });
                stats.owners.len() - 1
            }
        };
        let owner = &mut stats.owners[index];

        owner.total += 1;
        stats.total += 1;

        if task.completed {
            owner.completed += 1;
            stats.completed += 1;
            continue;
        }

        owner.pending += 1;
        if let Some(due) = task.due() {
            match days_until(due, today) {
                d if d < 0 => owner.overdue += 1,
                d if d <= URGENT_WITHIN_DAYS => owner.urgent += 1,
                _ => {}
            }
        }
    }

    stats
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Performance {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Performance {
    pub fn from_rate(on_time_rate: f64) -> Self {
        if on_time_rate >= 90.0 {
            Performance::Excellent
        } else if on_time_rate >= 70.0 {
            Performance::Good
        } else {
            Performance::NeedsImprovement
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Performance::Excellent => write!(f, "🌟 素晴らしいパフォーマンスです"),
            Performance::Good => write!(f, "👍 良好なパフォーマンスです"),
            Performance::NeedsImprovement => write!(f, "📈 改善の余地があります"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    /// Monday of the reported week.
    pub week_start: NaiveDate,
    /// Sunday of the reported week.
    pub week_end: NaiveDate,
    pub completed_this_week: usize,
    pub on_time: usize,
    pub late: usize,
    pub pending: usize,
    /// Pending and due within three days, overdue included.
    pub urgent_pending: usize,
    pub total_completed: usize,
}

impl WeeklyReport {
    /// Share of this week's completions that met their due date.
    pub fn on_time_rate(&self) -> Option<f64> {
        (self.completed_this_week > 0).then(|| rate(self.on_time, self.completed_this_week))
    }

    pub fn performance(&self) -> Option<Performance> {
        self.on_time_rate().map(Performance::from_rate)
    }
}

/// Report for one owner's tasks over the Monday-to-Sunday week containing `today`.
pub fn weekly_report(tasks: &[Task], today: NaiveDate, tz: Tz) -> WeeklyReport {
    let from_monday = u64::from(today.weekday().num_days_from_monday());
    let week_start = today.checked_sub_days(Days::new(from_monday)).unwrap_or(today);
    let week_end = week_start.checked_add_days(Days::new(6)).unwrap_or(today);

    let mut report = WeeklyReport {
        week_start,
        week_end,
        completed_this_week: 0,
        on_time: 0,
        late: 0,
        pending: 0,
        urgent_pending: 0,
        total_completed: 0,
    };

    for task in tasks {
        if !task.completed {
            report.pending += 1;
            if is_urgent(task.due(), today) {
                report.urgent_pending += 1;
            }
            continue;
        }

        report.total_completed += 1;
        let Some(completed_at) = task.completed_at else {
            continue;
        };
        let completed_on = completed_at.with_timezone(&tz).date_naive();
        if completed_on < week_start || completed_on > week_end {
            continue;
        }

        report.completed_this_week += 1;
        match task.due() {
            Some(due) if completed_on <= due => report.on_time += 1,
            Some(_) => report.late += 1,
            None => {}
        }
    }

    report
}
