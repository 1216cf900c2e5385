use chrono::{DateTime, NaiveTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use tracing::{debug, warn};

use crate::error::PlannerError;
use crate::models::time::{format_date, format_time, parse_date, parse_time};
use crate::models::{EisenhowerQuad, Row, Task, TaskStatus, TaskType};

const SELECT_TASKS: &str = "SELECT id, title, duration, task_type, status, due_date, assigned_row,
        eisenhower_quad, created_at, completed_at, start_time, notes
     FROM tasks";

/// Load the whole collection in board order.
pub fn load_tasks(conn: &Connection) -> Result<Vec<Task>, PlannerError> {
    let mut stmt = conn.prepare(&format!("{SELECT_TASKS} ORDER BY position ASC"))?;
    let tasks = stmt
        .query_map([], row_to_task)?
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = tasks.len(), "tasks loaded");
    Ok(tasks)
}

/// Replace the stored collection with `tasks`; `position` is the index in
/// the slice. All-or-nothing.
pub fn save_tasks(conn: &Connection, tasks: &[Task]) -> Result<(), PlannerError> {
    conn.execute_batch("BEGIN IMMEDIATE")?;
    let result = (|| -> Result<(), PlannerError> {
        conn.execute("DELETE FROM tasks", [])?;
        let mut stmt = conn.prepare(
            "INSERT INTO tasks (id, position, title, duration, task_type, status, due_date,
                                assigned_row, eisenhower_quad, created_at, completed_at,
                                start_time, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;
        for (position, t) in tasks.iter().enumerate() {
            stmt.execute(params![
                t.id,
                position as i64,
                t.title,
                t.duration,
                t.task_type.as_str(),
                t.status.as_str(),
                t.due_date.map(format_date),
                t.assigned_row.map(|r| r.as_str()),
                t.eisenhower_quad.map(|q| q.as_str()),
                t.created_at.to_rfc3339(),
                t.completed_at.map(|c| c.to_rfc3339()),
                t.start_time.map(format_time),
                t.notes,
            ])?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            conn.execute_batch("COMMIT")?;
            debug!(count = tasks.len(), "tasks saved");
            Ok(())
        }
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK");
            Err(e)
        }
    }
}

fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    let id: String = row.get(0)?;

    let task_type: String = row.get(3)?;
    let task_type = TaskType::from_str(&task_type).unwrap_or_else(|| {
        warn!(task_id = %id, value = %task_type, "unknown task type, using backlog");
        TaskType::Backlog
    });
    let status: String = row.get(4)?;
    let status = TaskStatus::from_str(&status).unwrap_or_else(|| {
        warn!(task_id = %id, value = %status, "unknown status, using unscheduled");
        TaskStatus::Unscheduled
    });
    let assigned_row = row.get::<_, Option<String>>(6)?.and_then(|r| {
        let parsed = Row::from_str(&r);
        if parsed.is_none() {
            warn!(task_id = %id, value = %r, "unknown row, dropping it");
        }
        parsed
    });
    let eisenhower_quad = row.get::<_, Option<String>>(7)?.and_then(|q| {
        let parsed = EisenhowerQuad::from_str(&q);
        if parsed.is_none() {
            warn!(task_id = %id, value = %q, "unknown quadrant, dropping it");
        }
        parsed
    });

    Ok(Task {
        title: row.get(1)?,
        duration: row.get(2)?,
        task_type,
        status,
        due_date: opt_column(row, 5, parse_date)?,
        assigned_row,
        eisenhower_quad,
        created_at: column(row, 8, parse_timestamp)?,
        completed_at: opt_column(row, 9, parse_timestamp)?,
        start_time: opt_column::<NaiveTime>(row, 10, parse_time)?,
        notes: row.get(11)?,
        id,
    })
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, PlannerError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PlannerError::invalid_date(s, "an RFC 3339 timestamp"))
}

fn column<T>(
    row: &rusqlite::Row,
    idx: usize,
    parse: fn(&str) -> Result<T, PlannerError>,
) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    parse(&raw).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn opt_column<T>(
    row: &rusqlite::Row,
    idx: usize,
    parse: fn(&str) -> Result<T, PlannerError>,
) -> rusqlite::Result<Option<T>> {
    match row.get::<_, Option<String>>(idx)? {
        Some(raw) => parse(&raw)
            .map(Some)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::open_in_memory;
    use crate::store::{FixedClock, TaskStore};
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_save_and_load_preserve_order_and_fields() {
        let conn = open_in_memory().unwrap();
        let mut store = TaskStore::with_clock(FixedClock::on(d("2024-01-05")));
        let a = store.add_task("Write", 60, TaskType::High).unwrap();
        let b = store.add_task("Walk", 30, TaskType::Leisure).unwrap();
        store.schedule_task(&a.id, d("2024-01-06"), Some(Row::Focus), None).unwrap();
        store.set_eisenhower_quad(&b.id, Some(EisenhowerQuad::Delegate)).unwrap();
        store.reorder_tasks(&b.id, &a.id).unwrap();
        store.toggle_task_complete(&a.id).unwrap();

        save_tasks(&conn, store.tasks()).unwrap();
        let loaded = load_tasks(&conn).unwrap();
        assert_eq!(loaded, store.get_tasks());
        assert_eq!(loaded[0].id, b.id);
        assert_eq!(loaded[1].status, TaskStatus::Completed);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let conn = open_in_memory().unwrap();
        let mut store = TaskStore::with_clock(FixedClock::on(d("2024-01-05")));
        let a = store.add_task("One", 10, TaskType::Low).unwrap();
        store.add_task("Two", 10, TaskType::Low).unwrap();
        save_tasks(&conn, store.tasks()).unwrap();

        store.delete_task(&a.id).unwrap();
        save_tasks(&conn, store.tasks()).unwrap();
        let loaded = load_tasks(&conn).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Two");
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let conn = open_in_memory().unwrap();
        let mut store = TaskStore::with_clock(FixedClock::on(d("2024-01-05")));
        let a = store.add_task("Only", 10, TaskType::Low).unwrap();
        save_tasks(&conn, store.tasks()).unwrap();

        let dup = vec![a.clone(), a];
        assert!(save_tasks(&conn, &dup).is_err());
        assert_eq!(load_tasks(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let conn = open_in_memory().unwrap();
        conn.execute(
            "INSERT INTO tasks (id, position, title, duration, task_type, status, assigned_row,
                                eisenhower_quad, created_at)
             VALUES ('X', 0, 'Legacy', 25, 'urgent', 'unscheduled', 'NAPS', 'someday',
                     '2024-01-01T08:00:00+00:00')",
            [],
        )
        .unwrap();
        let loaded = load_tasks(&conn).unwrap();
        assert_eq!(loaded[0].task_type, TaskType::Backlog);
        assert_eq!(loaded[0].assigned_row, None);
        assert_eq!(loaded[0].eisenhower_quad, None);
    }
}
