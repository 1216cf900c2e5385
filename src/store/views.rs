//! Read-only board queries. Each keeps the store's order, which is the
//! manual order set by `reorder_tasks`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{EisenhowerQuad, Row, Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Sunday => "sunday",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "monday" => Some(Self::Monday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

/// Active tasks on `date`: scheduled or completed, never rescheduled.
pub fn day_column(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status.is_active() && t.is_scheduled_on(date))
        .cloned()
        .collect()
}

pub fn day_row(tasks: &[Task], date: NaiveDate, row: Row) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status.is_active() && t.is_scheduled_on(date) && t.assigned_row == Some(row))
        .cloned()
        .collect()
}

/// The seven dates of the week containing `date`.
pub fn week_of(date: NaiveDate, start: WeekStart) -> [NaiveDate; 7] {
    let offset = match start {
        WeekStart::Monday => date.weekday().num_days_from_monday(),
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
    };
    let first = date - Duration::days(i64::from(offset));
    std::array::from_fn(|i| first + Duration::days(i as i64))
}

pub fn week_grid(tasks: &[Task], date: NaiveDate, start: WeekStart) -> Vec<(NaiveDate, Vec<Task>)> {
    week_of(date, start)
        .into_iter()
        .map(|day| (day, day_column(tasks, day)))
        .collect()
}

pub fn backlog(tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Unscheduled)
        .cloned()
        .collect()
}

pub fn quadrant(tasks: &[Task], quad: EisenhowerQuad) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Unscheduled && t.eisenhower_quad == Some(quad))
        .cloned()
        .collect()
}

/// Occurrences frozen on `date` when they were moved forward.
pub fn history(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Rescheduled && t.is_scheduled_on(date))
        .cloned()
        .collect()
}

/// Planned minutes for `date`. Summed as `u64`: each duration alone may
/// already be `u32::MAX`.
pub fn day_load(tasks: &[Task], date: NaiveDate) -> u64 {
    tasks
        .iter()
        .filter(|t| t.status.is_active() && t.is_scheduled_on(date))
        .map(|t| u64::from(t.duration))
        .sum()
}
