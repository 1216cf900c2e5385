use rusqlite::Connection;

use crate::error::PlannerError;

pub fn run_migrations(conn: &Connection) -> Result<(), PlannerError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            position INTEGER NOT NULL,
            title TEXT NOT NULL,
            duration INTEGER NOT NULL,
            task_type TEXT NOT NULL DEFAULT 'backlog',
            status TEXT NOT NULL DEFAULT 'unscheduled'
                CHECK (status IN ('unscheduled', 'scheduled', 'completed', 'rescheduled')),
            due_date TEXT,
            assigned_row TEXT,
            eisenhower_quad TEXT,
            created_at TEXT NOT NULL,
            completed_at TEXT,
            start_time TEXT,
            notes TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_position ON tasks(position);
        CREATE INDEX IF NOT EXISTS idx_tasks_due ON tasks(due_date, status);
        ",
    )?;
    Ok(())
}
