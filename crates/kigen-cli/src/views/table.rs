use chrono::{DateTime, NaiveDate, Utc};
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use kigen_core::models::Task;
use kigen_core::report::TaskStats;
use kigen_core::urgency::{label, SeverityBand};

#[derive(Debug, Clone)]
pub struct ViewTask {
    pub number: usize,
    pub name: String,
    pub due: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ViewTask {
    pub fn new(number: usize, task: &Task) -> Self {
        Self {
            number,
            name: task.name.clone(),
            due: task.due(),
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// Number `tasks` from 1 in their current order.
pub fn view_tasks(tasks: &[Task]) -> Vec<ViewTask> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| ViewTask::new(index + 1, task))
        .collect()
}

fn due_cell(due: Option<NaiveDate>, today: NaiveDate, completed: bool) -> Cell {
    let due_label = label(due, today);
    let cell = Cell::new(due_label.to_string());
    if completed {
        return cell.fg(Color::DarkGrey);
    }
    match due_label.band {
        SeverityBand::Overdue => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        SeverityBand::DueToday => cell.fg(Color::Red),
        SeverityBand::DueTomorrow | SeverityBand::NearTerm => cell.fg(Color::Yellow),
        SeverityBand::Upcoming => cell.fg(Color::Green),
        SeverityBand::FarFuture | SeverityBand::NoDueDate => cell,
    }
}

pub fn display_tasks(tasks: &[ViewTask], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Task", "Due", "Added"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.number));

        let name_cell = if task.completed {
            Cell::new(format!("✓ {}", task.name))
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey)
        } else {
            Cell::new(&task.name)
        };
        row.add_cell(name_cell);
        row.add_cell(due_cell(task.due, today, task.completed));
        row.add_cell(Cell::new(task.created_at.humanize()));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_owner_stats(stats: &TaskStats) {
    if stats.owners.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Owner", "Total", "Done", "Pending", "Overdue", "Urgent", "Rate"]);

    for owner in &stats.owners {
        let overdue_cell = if owner.overdue > 0 {
            Cell::new(owner.overdue).fg(Color::Red)
        } else {
            Cell::new(owner.overdue)
        };
        let urgent_cell = if owner.urgent > 0 {
            Cell::new(owner.urgent).fg(Color::Yellow)
        } else {
            Cell::new(owner.urgent)
        };

        let mut row = Row::new();
        row.add_cell(Cell::new(&owner.owner_name));
        row.add_cell(Cell::new(owner.total));
        row.add_cell(Cell::new(owner.completed));
        row.add_cell(Cell::new(owner.pending));
        row.add_cell(overdue_cell);
        row.add_cell(urgent_cell);
        row.add_cell(Cell::new(format!("{:.1}%", owner.completion_rate())));
        table.add_row(row);
    }

    println!("{table}");
}
