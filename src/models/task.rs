use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::{hhmm_opt, ymd_opt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Unscheduled,
    Scheduled,
    Completed,
    Rescheduled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unscheduled => "unscheduled",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Rescheduled => "rescheduled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unscheduled" => Some(Self::Unscheduled),
            "scheduled" => Some(Self::Scheduled),
            "completed" => Some(Self::Completed),
            "rescheduled" => Some(Self::Rescheduled),
            _ => None,
        }
    }

    /// Shown on the board. Rescheduled occurrences are history only.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Completed)
    }
}

/// Priority / category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[default]
    Backlog,
    High,
    Medium,
    Low,
    Leisure,
    Chores,
}

impl TaskType {
    pub const ALL: [TaskType; 6] = [
        Self::Backlog,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::Leisure,
        Self::Chores,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Leisure => "leisure",
            Self::Chores => "chores",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "backlog" => Some(Self::Backlog),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "leisure" => Some(Self::Leisure),
            "chores" => Some(Self::Chores),
            _ => None,
        }
    }
}

/// Row of the weekly grid a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Row {
    Goal,
    Focus,
    Work,
    Leisure,
    Chores,
}

impl Row {
    pub const ALL: [Row; 5] = [
        Self::Goal,
        Self::Focus,
        Self::Work,
        Self::Leisure,
        Self::Chores,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goal => "GOAL",
            Self::Focus => "FOCUS",
            Self::Work => "WORK",
            Self::Leisure => "LEISURE",
            Self::Chores => "CHORES",
        }
    }

    /// Accepts any casing, rows are typed by hand on the command line.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GOAL" => Some(Self::Goal),
            "FOCUS" => Some(Self::Focus),
            "WORK" => Some(Self::Work),
            "LEISURE" => Some(Self::Leisure),
            "CHORES" => Some(Self::Chores),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EisenhowerQuad {
    /// Urgent and important.
    Do,
    /// Important, not urgent.
    Schedule,
    /// Urgent, not important.
    Delegate,
    /// Neither.
    Eliminate,
}

impl EisenhowerQuad {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::Schedule => "schedule",
            Self::Delegate => "delegate",
            Self::Eliminate => "eliminate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "do" => Some(Self::Do),
            "schedule" => Some(Self::Schedule),
            "delegate" => Some(Self::Delegate),
            "eliminate" => Some(Self::Eliminate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Minutes.
    pub duration: u32,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
    #[serde(default, with = "ymd_opt")]
    pub due_date: Option<NaiveDate>,
    pub assigned_row: Option<Row>,
    pub eisenhower_quad: Option<EisenhowerQuad>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "hhmm_opt", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Task {
    /// A fresh backlog entry: unscheduled, nothing placed on the board.
    pub fn new(
        id: String,
        title: String,
        duration: u32,
        task_type: TaskType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            duration,
            task_type,
            status: TaskStatus::Unscheduled,
            due_date: None,
            assigned_row: None,
            eisenhower_quad: None,
            created_at,
            completed_at: None,
            start_time: None,
            notes: None,
        }
    }

    pub fn is_scheduled_on(&self, date: NaiveDate) -> bool {
        self.due_date == Some(date)
    }

    /// Checks the status/placement invariants. The store never calls this on
    /// its own path because `update_task` and `set_tasks` are raw writes.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            TaskStatus::Unscheduled => self.due_date.is_none() && self.assigned_row.is_none(),
            TaskStatus::Scheduled | TaskStatus::Rescheduled => {
                self.due_date.is_some() && self.eisenhower_quad.is_none()
            }
            TaskStatus::Completed => true,
        }
    }

    /// Raw field merge. Invariants are the caller's problem.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(task_type) = patch.task_type {
            self.task_type = task_type;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(row) = patch.assigned_row {
            self.assigned_row = row;
        }
        if let Some(quad) = patch.eisenhower_quad {
            self.eisenhower_quad = quad;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = completed_at;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Partial update for [`Task::apply`]. The outer `Option` means "leave as
/// is"; for nullable fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub duration: Option<u32>,
    pub task_type: Option<TaskType>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<NaiveDate>>,
    pub assigned_row: Option<Option<Row>>,
    pub eisenhower_quad: Option<Option<EisenhowerQuad>>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
    pub start_time: Option<Option<NaiveTime>>,
    pub notes: Option<Option<String>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Task {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        Task::new("01HX".into(), "Write report".into(), 45, TaskType::High, created)
    }

    #[test]
    fn test_new_task_is_unscheduled() {
        let t = sample();
        assert_eq!(t.status, TaskStatus::Unscheduled);
        assert!(t.due_date.is_none());
        assert!(t.assigned_row.is_none());
        assert!(t.eisenhower_quad.is_none());
        assert!(t.is_consistent());
    }

    #[test]
    fn test_json_shape() {
        let mut t = sample();
        t.status = TaskStatus::Scheduled;
        t.due_date = NaiveDate::from_ymd_opt(2024, 1, 6);
        t.assigned_row = Some(Row::Work);
        t.start_time = NaiveTime::from_hms_opt(9, 30, 0);

        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["type"], "high");
        assert_eq!(v["status"], "scheduled");
        assert_eq!(v["dueDate"], "2024-01-06");
        assert_eq!(v["assignedRow"], "WORK");
        assert_eq!(v["eisenhowerQuad"], serde_json::Value::Null);
        assert_eq!(v["startTime"], "09:30");
        assert!(v.get("notes").is_none());

        let back: Task = serde_json::from_value(v).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_apply_patch_clears_nullable_fields() {
        let mut t = sample();
        t.notes = Some("draft".into());
        t.apply(TaskPatch {
            title: Some("Final report".into()),
            notes: Some(None),
            ..Default::default()
        });
        assert_eq!(t.title, "Final report");
        assert!(t.notes.is_none());
        assert_eq!(t.duration, 45);
    }

    #[test]
    fn test_row_parse_is_case_insensitive() {
        assert_eq!(Row::from_str("focus"), Some(Row::Focus));
        assert_eq!(Row::from_str("CHORES"), Some(Row::Chores));
        assert_eq!(Row::from_str("nap"), None);
    }

    #[test]
    fn test_rescheduled_is_not_active() {
        assert!(TaskStatus::Scheduled.is_active());
        assert!(TaskStatus::Completed.is_active());
        assert!(!TaskStatus::Rescheduled.is_active());
        assert!(!TaskStatus::Unscheduled.is_active());
    }
}
