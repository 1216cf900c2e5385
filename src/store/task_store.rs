use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::PlannerError;
use crate::models::{EisenhowerQuad, Row, Task, TaskPatch, TaskStatus, TaskType};

use super::clock::{Clock, SystemClock};

/// Receives the full collection after every mutation.
pub type Listener = Box<dyn FnMut(&[Task]) + Send>;

/// Handle for hosts that touch the store from more than one thread. Every
/// mutation goes through the one lock, so the fork rule's read-then-write
/// stays atomic.
pub type SharedTaskStore = Arc<Mutex<TaskStore>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Authoritative in-memory task collection.
///
/// Listener contract: a listener is called once, synchronously, from
/// [`TaskStore::subscribe`] with the current list, then exactly once after
/// each successful mutation. A call that fails (unknown id, invalid input)
/// changes nothing and notifies nobody.
pub struct TaskStore {
    tasks: Vec<Task>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    clock: Box<dyn Clock>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            tasks: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
            clock: Box::new(clock),
        }
    }

    pub fn into_shared(self) -> SharedTaskStore {
        Arc::new(Mutex::new(self))
    }

    // ─── observers ─────────────────────────────────────────────────

    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&[Task]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        listener(&self.tasks);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.tasks);
        }
    }

    // ─── reads ─────────────────────────────────────────────────────

    /// Owned copy; mutating it never reaches the store.
    pub fn get_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn position(&self, id: &str) -> Result<usize, PlannerError> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| PlannerError::task_not_found(id))
    }

    // ─── mutations ─────────────────────────────────────────────────

    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        duration: u32,
        task_type: TaskType,
    ) -> Result<Task, PlannerError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PlannerError::validation("Task title must not be empty"));
        }
        if duration == 0 {
            return Err(PlannerError::validation("Task duration must be at least 1 minute"));
        }

        let task = Task::new(new_id(), title, duration, task_type, self.clock.now());
        debug!(task_id = %task.id, "task added");
        self.tasks.push(task.clone());
        self.notify();
        Ok(task)
    }

    /// Raw merge: status/placement invariants are not enforced here.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<(), PlannerError> {
        let idx = self.position(id)?;
        self.tasks[idx].apply(patch);
        debug!(task_id = id, "task updated");
        self.notify();
        Ok(())
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task, PlannerError> {
        let idx = self.position(id)?;
        let removed = self.tasks.remove(idx);
        debug!(task_id = id, "task deleted");
        self.notify();
        Ok(removed)
    }

    /// Returns whether the task is complete after the call. Un-completing
    /// looks at the placement the task has *now*: back to `scheduled` only
    /// with both a date and a row, otherwise `unscheduled`.
    pub fn toggle_task_complete(&mut self, id: &str) -> Result<bool, PlannerError> {
        let idx = self.position(id)?;
        let now = self.clock.now();
        let task = &mut self.tasks[idx];

        let completed = if task.status == TaskStatus::Completed {
            task.status = if task.due_date.is_some() && task.assigned_row.is_some() {
                TaskStatus::Scheduled
            } else {
                TaskStatus::Unscheduled
            };
            task.completed_at = None;
            false
        } else {
            task.status = TaskStatus::Completed;
            task.completed_at = Some(now);
            true
        };

        debug!(task_id = id, completed, "task completion toggled");
        self.notify();
        Ok(completed)
    }

    /// Moves `source_id` into the slot `target_id` occupies: remove the
    /// source, then insert it at the target's index in the shortened list.
    pub fn reorder_tasks(&mut self, source_id: &str, target_id: &str) -> Result<(), PlannerError> {
        let from = self.position(source_id)?;
        self.position(target_id)?;
        if source_id == target_id {
            self.notify();
            return Ok(());
        }

        let task = self.tasks.remove(from);
        // target is still present, the source was the only removal
        let to = self.position(target_id)?;
        self.tasks.insert(to, task);

        debug!(source = source_id, target = target_id, "tasks reordered");
        self.notify();
        Ok(())
    }

    /// Places a task on `date` / `row` and returns the id of the live
    /// occurrence.
    ///
    /// A task still sitting on a past date that gets moved to today or later
    /// is forked: the old record stays where it was, marked `rescheduled`,
    /// and a copy with a fresh id is scheduled on the new date. Every other
    /// case updates the task in place.
    pub fn schedule_task(
        &mut self,
        id: &str,
        date: NaiveDate,
        row: Option<Row>,
        task_type: Option<TaskType>,
    ) -> Result<String, PlannerError> {
        let today = self.clock.today();
        let idx = self.position(id)?;
        let current = &self.tasks[idx];

        let stale = matches!(current.due_date, Some(due) if due < today);
        let forks = stale && current.status != TaskStatus::Unscheduled && date >= today;

        if forks {
            let mut fork = current.clone();
            fork.id = new_id();
            fork.status = TaskStatus::Scheduled;
            fork.due_date = Some(date);
            fork.assigned_row = row;
            fork.eisenhower_quad = None;
            fork.task_type = task_type.unwrap_or(current.task_type);
            fork.created_at = self.clock.now();

            let fork_id = fork.id.clone();
            self.tasks[idx].status = TaskStatus::Rescheduled;
            self.tasks.push(fork);

            debug!(task_id = id, fork_id = %fork_id, %date, "past task forked onto new date");
            self.notify();
            return Ok(fork_id);
        }

        let task = &mut self.tasks[idx];
        task.status = TaskStatus::Scheduled;
        task.due_date = Some(date);
        task.assigned_row = row;
        task.eisenhower_quad = None;
        if let Some(task_type) = task_type {
            task.task_type = task_type;
        }

        debug!(task_id = id, %date, "task scheduled");
        self.notify();
        Ok(id.to_string())
    }

    pub fn unschedule_task(&mut self, id: &str) -> Result<(), PlannerError> {
        let idx = self.position(id)?;
        clear_placement(&mut self.tasks[idx]);
        self.tasks[idx].eisenhower_quad = None;

        debug!(task_id = id, "task unscheduled");
        self.notify();
        Ok(())
    }

    /// Classifying sends the task back to the backlog; a quadrant and a
    /// board slot are never held at the same time.
    pub fn set_eisenhower_quad(
        &mut self,
        id: &str,
        quad: Option<EisenhowerQuad>,
    ) -> Result<(), PlannerError> {
        let idx = self.position(id)?;
        clear_placement(&mut self.tasks[idx]);
        self.tasks[idx].eisenhower_quad = quad;

        debug!(task_id = id, quad = quad.map(|q| q.as_str()), "task classified");
        self.notify();
        Ok(())
    }

    /// Bulk replace, used when loading persisted state. No validation.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        debug!(count = tasks.len(), "task collection replaced");
        self.tasks = tasks;
        self.notify();
    }
}

fn clear_placement(task: &mut Task) {
    task.status = TaskStatus::Unscheduled;
    task.due_date = None;
    task.assigned_row = None;
    task.start_time = None;
}

fn new_id() -> String {
    ulid::Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::clock::FixedClock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn date(s: &str) -> NaiveDate {
        crate::models::time::parse_date(s).unwrap()
    }

    fn store_on(today: &str) -> TaskStore {
        TaskStore::with_clock(FixedClock::on(date(today)))
    }

    fn counting(store: &mut TaskStore) -> Arc<AtomicUsize> {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        calls
    }

    /// T1 on 2024-01-01 in FOCUS, today 2024-01-05.
    fn stale_store() -> (TaskStore, String) {
        let mut store = store_on("2024-01-05");
        let t1 = store.add_task("Plan sprint", 50, TaskType::High).unwrap();
        store
            .update_task(
                &t1.id,
                TaskPatch {
                    status: Some(TaskStatus::Scheduled),
                    due_date: Some(Some(date("2024-01-01"))),
                    assigned_row: Some(Some(Row::Focus)),
                    ..Default::default()
                },
            )
            .unwrap();
        (store, t1.id)
    }

    #[test]
    fn test_add_task_defaults() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Laundry", 30, TaskType::Chores).unwrap();
        assert_eq!(t.status, TaskStatus::Unscheduled);
        assert!(t.due_date.is_none() && t.assigned_row.is_none() && t.eisenhower_quad.is_none());
        assert_eq!(t.created_at.date_naive(), date("2024-01-05"));
        assert_eq!(store.get_tasks(), vec![t]);
    }

    #[test]
    fn test_add_task_validation() {
        let mut store = store_on("2024-01-05");
        let calls = counting(&mut store);
        let err = store.add_task("   ", 30, TaskType::Low).unwrap_err();
        assert_eq!(err.code.as_str(), "VALIDATION_ERROR");
        let err = store.add_task("Gym", 0, TaskType::Leisure).unwrap_err();
        assert_eq!(err.code.as_str(), "VALIDATION_ERROR");
        assert!(store.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = store_on("2024-01-05");
        let a = store.add_task("a", 1, TaskType::Low).unwrap();
        let b = store.add_task("b", 1, TaskType::Low).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_get_tasks_is_a_copy() {
        let mut store = store_on("2024-01-05");
        store.add_task("Read", 20, TaskType::Leisure).unwrap();
        let mut copy = store.get_tasks();
        copy[0].title = "Changed".into();
        copy.clear();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Read");
    }

    #[test]
    fn test_fork_scenario() {
        let (mut store, t1) = stale_store();
        let live = store
            .schedule_task(&t1, date("2024-01-06"), Some(Row::Work), None)
            .unwrap();

        assert_ne!(live, t1);
        assert_eq!(store.len(), 2);

        let original = store.get_task(&t1).unwrap();
        assert_eq!(original.status, TaskStatus::Rescheduled);
        assert_eq!(original.due_date, Some(date("2024-01-01")));
        assert_eq!(original.assigned_row, Some(Row::Focus));

        let fork = store.get_task(&live).unwrap();
        assert_eq!(fork.status, TaskStatus::Scheduled);
        assert_eq!(fork.due_date, Some(date("2024-01-06")));
        assert_eq!(fork.assigned_row, Some(Row::Work));
        assert_eq!(fork.title, "Plan sprint");
        assert_eq!(fork.duration, 50);
        assert_eq!(fork.task_type, TaskType::High);
        assert_eq!(store.tasks()[1].id, live);
    }

    #[test]
    fn test_fork_copies_everything_else() {
        let (mut store, t1) = stale_store();
        store
            .update_task(
                &t1,
                TaskPatch {
                    notes: Some(Some("bring slides".into())),
                    start_time: Some(crate::models::time::parse_time("09:30").ok()),
                    ..Default::default()
                },
            )
            .unwrap();
        let before = store.get_task(&t1).unwrap().clone();

        let live = store
            .schedule_task(&t1, date("2024-01-05"), None, Some(TaskType::Low))
            .unwrap();
        let fork = store.get_task(&live).unwrap();

        assert_eq!(fork.title, before.title);
        assert_eq!(fork.duration, before.duration);
        assert_eq!(fork.notes, before.notes);
        assert_eq!(fork.start_time, before.start_time);
        assert_eq!(fork.completed_at, before.completed_at);
        assert_eq!(fork.task_type, TaskType::Low);
        assert_eq!(fork.assigned_row, None);
        assert_eq!(fork.due_date, Some(date("2024-01-05")));
    }

    #[test]
    fn test_past_to_past_updates_in_place() {
        let (mut store, t1) = stale_store();
        let live = store
            .schedule_task(&t1, date("2024-01-03"), Some(Row::Goal), None)
            .unwrap();
        assert_eq!(live, t1);
        assert_eq!(store.len(), 1);
        let t = store.get_task(&t1).unwrap();
        assert_eq!(t.status, TaskStatus::Scheduled);
        assert_eq!(t.due_date, Some(date("2024-01-03")));
    }

    #[test]
    fn test_no_fork_from_today_or_future() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Call mum", 15, TaskType::Medium).unwrap();
        store.schedule_task(&t.id, date("2024-01-05"), Some(Row::Leisure), None).unwrap();
        store.schedule_task(&t.id, date("2024-01-09"), Some(Row::Work), None).unwrap();
        store.schedule_task(&t.id, date("2024-01-02"), None, Some(TaskType::High)).unwrap();

        assert_eq!(store.len(), 1);
        let t = store.get_task(&t.id).unwrap();
        assert_eq!(t.due_date, Some(date("2024-01-02")));
        assert_eq!(t.assigned_row, None);
        assert_eq!(t.task_type, TaskType::High);
    }

    #[test]
    fn test_unscheduled_with_stray_date_does_not_fork() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Odd", 10, TaskType::Low).unwrap();
        store
            .update_task(
                &t.id,
                TaskPatch {
                    due_date: Some(Some(date("2023-12-01"))),
                    ..Default::default()
                },
            )
            .unwrap();
        store.schedule_task(&t.id, date("2024-01-06"), Some(Row::Work), None).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_schedule_clears_quadrant() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Taxes", 90, TaskType::High).unwrap();
        store.set_eisenhower_quad(&t.id, Some(EisenhowerQuad::Do)).unwrap();
        store.schedule_task(&t.id, date("2024-01-08"), Some(Row::Goal), None).unwrap();
        let t = store.get_task(&t.id).unwrap();
        assert_eq!(t.eisenhower_quad, None);
        assert!(t.is_consistent());
    }

    #[test]
    fn test_toggle_complete_round_trip() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Run", 40, TaskType::Leisure).unwrap();
        store.schedule_task(&t.id, date("2024-01-05"), Some(Row::Leisure), None).unwrap();

        assert!(store.toggle_task_complete(&t.id).unwrap());
        let done = store.get_task(&t.id).unwrap();
        assert_eq!(done.status, TaskStatus::Completed);
        assert!(done.completed_at.is_some());

        assert!(!store.toggle_task_complete(&t.id).unwrap());
        let back = store.get_task(&t.id).unwrap();
        assert_eq!(back.status, TaskStatus::Scheduled);
        assert!(back.completed_at.is_none());
    }

    #[test]
    fn test_timestamps_come_from_the_clock() {
        // late evening UTC, but still the 5th for the fork rule
        let now = chrono::DateTime::parse_from_rfc3339("2024-01-05T23:45:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let mut store = TaskStore::with_clock(FixedClock::at(date("2024-01-05"), now));
        let t = store.add_task("Journal", 15, TaskType::Leisure).unwrap();
        assert_eq!(t.created_at, now);

        store.schedule_task(&t.id, date("2024-01-05"), Some(Row::Leisure), None).unwrap();
        store.toggle_task_complete(&t.id).unwrap();
        assert_eq!(store.get_task(&t.id).unwrap().completed_at, Some(now));
        assert_eq!(store.today(), date("2024-01-05"));
    }

    #[test]
    fn test_toggle_revert_uses_current_placement() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Dishes", 10, TaskType::Chores).unwrap();
        store.schedule_task(&t.id, date("2024-01-05"), Some(Row::Chores), None).unwrap();
        store.toggle_task_complete(&t.id).unwrap();

        store
            .update_task(
                &t.id,
                TaskPatch {
                    assigned_row: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!store.toggle_task_complete(&t.id).unwrap());
        assert_eq!(store.get_task(&t.id).unwrap().status, TaskStatus::Unscheduled);
    }

    #[test]
    fn test_unschedule_clears_everything() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Bills", 20, TaskType::Medium).unwrap();
        store.schedule_task(&t.id, date("2024-01-07"), Some(Row::Work), None).unwrap();
        store
            .update_task(
                &t.id,
                TaskPatch {
                    eisenhower_quad: Some(Some(EisenhowerQuad::Delegate)),
                    ..Default::default()
                },
            )
            .unwrap();

        store.unschedule_task(&t.id).unwrap();
        let t = store.get_task(&t.id).unwrap();
        assert_eq!(t.status, TaskStatus::Unscheduled);
        assert_eq!(t.due_date, None);
        assert_eq!(t.assigned_row, None);
        assert_eq!(t.eisenhower_quad, None);
    }

    #[test]
    fn test_set_quad_unschedules() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Email", 5, TaskType::Low).unwrap();
        store.schedule_task(&t.id, date("2024-01-05"), Some(Row::Work), None).unwrap();
        store.set_eisenhower_quad(&t.id, Some(EisenhowerQuad::Eliminate)).unwrap();
        let t = store.get_task(&t.id).unwrap();
        assert_eq!(t.eisenhower_quad, Some(EisenhowerQuad::Eliminate));
        assert_eq!(t.status, TaskStatus::Unscheduled);
        assert!(t.due_date.is_none() && t.assigned_row.is_none());
    }

    #[test]
    fn test_reorder_splice_semantics() {
        let mut store = store_on("2024-01-05");
        let ids: Vec<String> = ["a", "b", "c", "d"]
            .iter()
            .map(|t| store.add_task(*t, 5, TaskType::Low).unwrap().id)
            .collect();
        let titles = |s: &TaskStore| s.tasks().iter().map(|t| t.title.clone()).collect::<Vec<_>>();

        // a forward: remove a → [b c d], c sits at 1
        store.reorder_tasks(&ids[0], &ids[2]).unwrap();
        assert_eq!(titles(&store), ["b", "a", "c", "d"]);

        // d backward onto b at 0
        store.reorder_tasks(&ids[3], &ids[1]).unwrap();
        assert_eq!(titles(&store), ["d", "b", "a", "c"]);

        let before = store.get_tasks();
        store.reorder_tasks(&ids[2], &ids[2]).unwrap();
        assert_eq!(store.get_tasks(), before);
    }

    #[test]
    fn test_reorder_keeps_the_set() {
        let mut store = store_on("2024-01-05");
        let a = store.add_task("a", 5, TaskType::Low).unwrap();
        let b = store.add_task("b", 5, TaskType::High).unwrap();
        store.reorder_tasks(&b.id, &a.id).unwrap();
        let mut after = store.get_tasks();
        after.sort_by(|x, y| x.id.cmp(&y.id));
        let mut expected = vec![a, b];
        expected.sort_by(|x, y| x.id.cmp(&y.id));
        assert_eq!(after, expected);
    }

    #[test]
    fn test_missing_id_is_an_error_without_notification() {
        let mut store = store_on("2024-01-05");
        let t = store.add_task("Keep", 5, TaskType::Low).unwrap();
        let calls = counting(&mut store);
        let before = store.get_tasks();

        assert!(store.update_task("nope", TaskPatch::default()).unwrap_err().is_not_found());
        assert!(store.delete_task("nope").unwrap_err().is_not_found());
        assert!(store.toggle_task_complete("nope").unwrap_err().is_not_found());
        assert!(store.reorder_tasks("nope", &t.id).unwrap_err().is_not_found());
        assert!(store.reorder_tasks(&t.id, "nope").unwrap_err().is_not_found());
        assert!(store
            .schedule_task("nope", date("2024-01-05"), None, None)
            .unwrap_err()
            .is_not_found());
        assert!(store.unschedule_task("nope").unwrap_err().is_not_found());
        assert!(store.set_eisenhower_quad("nope", None).unwrap_err().is_not_found());

        assert_eq!(store.get_tasks(), before);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_gets_snapshot_then_one_per_mutation() {
        let mut store = store_on("2024-01-05");
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        store.add_task("existing", 5, TaskType::Low).unwrap();
        store.subscribe(move |tasks| s.lock().unwrap().push(tasks.len()));
        assert_eq!(*seen.lock().unwrap(), vec![1]);

        let a = store.add_task("a", 5, TaskType::Low).unwrap();
        let b = store.add_task("b", 5, TaskType::Low).unwrap();
        store.update_task(&a.id, TaskPatch::default()).unwrap();
        store.toggle_task_complete(&a.id).unwrap();
        store.reorder_tasks(&b.id, &a.id).unwrap();
        store.schedule_task(&a.id, date("2024-01-05"), Some(Row::Work), None).unwrap();
        store.unschedule_task(&a.id).unwrap();
        store.set_eisenhower_quad(&a.id, Some(EisenhowerQuad::Schedule)).unwrap();
        store.delete_task(&b.id).unwrap();
        store.set_tasks(Vec::new());

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 3, 3, 3, 3, 3, 3, 2, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = store_on("2024-01-05");
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let sub = store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let other = counting(&mut store);

        store.add_task("a", 5, TaskType::Low).unwrap();
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add_task("b", 5, TaskType::Low).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(other.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_shared_store_across_threads() {
        let shared = store_on("2024-01-05").into_shared();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = shared.clone();
                std::thread::spawn(move || {
                    store
                        .lock()
                        .unwrap()
                        .add_task(format!("task {i}"), 10, TaskType::Low)
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.lock().unwrap().len(), 4);
    }
}
