use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::db::{connection, task_repo};
use crate::error::PlannerError;
use crate::models::time::parse_date;
use crate::models::Task;
use crate::store::{FixedClock, TaskStore};

/// One command's view of the workspace: the store loaded from SQLite plus a
/// listener that keeps the latest post-mutation snapshot for [`commit`].
///
/// [`commit`]: Session::commit
pub struct Session {
    conn: Connection,
    pub store: TaskStore,
    pending: Arc<Mutex<Option<Vec<Task>>>>,
}

impl Session {
    pub fn open(today: Option<&str>) -> Result<Self, PlannerError> {
        let mut store = match today {
            Some(date) => TaskStore::with_clock(FixedClock::on(parse_date(date)?)),
            None => TaskStore::new(),
        };
        let conn = connection::open_db()?;
        store.set_tasks(task_repo::load_tasks(&conn)?);

        let pending = Arc::new(Mutex::new(None));
        let sink = pending.clone();
        let mut primed = false;
        store.subscribe(move |tasks: &[Task]| {
            // the first call is the snapshot we just loaded
            if !primed {
                primed = true;
                return;
            }
            let mut slot = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            *slot = Some(tasks.to_vec());
        });

        Ok(Self {
            conn,
            store,
            pending,
        })
    }

    /// Persist the last notified snapshot, if anything changed.
    pub fn commit(self) -> Result<(), PlannerError> {
        if let Some(tasks) = take_pending(&self.pending) {
            task_repo::save_tasks(&self.conn, &tasks)?;
        }
        Ok(())
    }

    /// Resolve a task reference: exact ID, then unique ID prefix
    /// (case-insensitive).
    pub fn resolve(&self, reference: &str) -> Result<Task, PlannerError> {
        if let Some(task) = self.store.get_task(reference) {
            return Ok(task.clone());
        }
        let prefix = reference.to_ascii_uppercase();
        let matches: Vec<&Task> = self
            .store
            .tasks()
            .iter()
            .filter(|t| !prefix.is_empty() && t.id.to_ascii_uppercase().starts_with(&prefix))
            .collect();

        match matches.len() {
            0 => Err(PlannerError::task_not_found(reference)),
            1 => Ok(matches[0].clone()),
            _ => {
                let candidates: Vec<String> = matches.iter().map(|t| format!("{} ({})", t.title, t.id)).collect();
                Err(PlannerError::ambiguous_ref(reference, &candidates))
            }
        }
    }
}

/// Take the pending snapshot. A poisoned slot still holds the last snapshot
/// that was written.
fn take_pending(pending: &Mutex<Option<Vec<Task>>>) -> Option<Vec<Task>> {
    match pending.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}
