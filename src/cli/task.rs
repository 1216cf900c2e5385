use serde_json::json;

use crate::cli::commands::TaskCommands;
use crate::cli::session::Session;
use crate::cli::{parse_quad, parse_row, parse_type, report};
use crate::config::Config;
use crate::error::PlannerError;
use crate::models::time::{format_date, parse_date, parse_time};
use crate::models::TaskPatch;
use crate::output;

pub fn run(cmd: TaskCommands, json_output: bool, today: Option<&str>) -> i32 {
    let result = match cmd {
        TaskCommands::Add { title, duration, task_type } => {
            run_add(&title, duration, &task_type, json_output, today)
        }
        TaskCommands::List => run_list(json_output, today),
        TaskCommands::Show { id } => run_show(&id, json_output, today),
        TaskCommands::Update { id, title, duration, task_type, notes, time } => {
            let fields = UpdateFields { title, duration, task_type, notes, time };
            run_update(&id, fields, json_output, today)
        }
        TaskCommands::Delete { id } => run_delete(&id, json_output, today),
        TaskCommands::Done { id } => run_done(&id, json_output, today),
        TaskCommands::Move { id, target } => run_move(&id, &target, json_output, today),
        TaskCommands::Schedule { id, date, row, task_type, time } => run_schedule(
            &id,
            &date,
            row.as_deref(),
            task_type.as_deref(),
            time.as_deref(),
            json_output,
            today,
        ),
        TaskCommands::Unschedule { id } => run_unschedule(&id, json_output, today),
        TaskCommands::Quad { id, quad } => run_quad(&id, &quad, json_output, today),
    };
    report(result, json_output)
}

fn run_add(
    title: &str,
    duration: Option<u32>,
    task_type: &str,
    json_output: bool,
    today: Option<&str>,
) -> Result<i32, PlannerError> {
    let task_type = parse_type(task_type)?;
    let duration = duration.unwrap_or_else(|| Config::load().default_duration);

    let mut session = Session::open(today)?;
    let task = session.store.add_task(title, duration, task_type)?;
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(&task)
        })));
    } else {
        println!("Added task: {} ({})", task.title, task.id);
    }
    Ok(0)
}

fn run_list(json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let session = Session::open(today)?;
    let tasks = session.store.tasks();

    if json_output {
        output::json::print(&output::json::success(json!({
            "tasks": output::json::task_list(tasks)
        })));
    } else {
        output::text::print_task_list(tasks);
    }
    Ok(0)
}

fn run_show(id: &str, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let session = Session::open(today)?;
    let task = session.resolve(id)?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(&task)
        })));
    } else {
        output::text::print_task(&task);
    }
    Ok(0)
}

struct UpdateFields {
    title: Option<String>,
    duration: Option<u32>,
    task_type: Option<String>,
    notes: Option<String>,
    time: Option<String>,
}

impl UpdateFields {
    fn into_patch(self) -> Result<TaskPatch, PlannerError> {
        if let Some(ref title) = self.title {
            if title.trim().is_empty() {
                return Err(PlannerError::validation("Task title must not be empty"));
            }
        }
        if self.duration == Some(0) {
            return Err(PlannerError::validation("Task duration must be at least 1 minute"));
        }
        let start_time = match self.time.as_deref() {
            None => None,
            Some("") => Some(None),
            Some(t) => Some(Some(parse_time(t)?)),
        };
        Ok(TaskPatch {
            title: self.title,
            duration: self.duration,
            task_type: self.task_type.as_deref().map(parse_type).transpose()?,
            notes: self.notes.map(|n| if n.is_empty() { None } else { Some(n) }),
            start_time,
            ..Default::default()
        })
    }
}

fn run_update(
    id: &str,
    fields: UpdateFields,
    json_output: bool,
    today: Option<&str>,
) -> Result<i32, PlannerError> {
    let patch = fields.into_patch()?;
    if patch.is_empty() {
        return Err(PlannerError::validation(
            "Nothing to update. Pass --title, --duration, --type, --notes or --time.",
        ));
    }

    let mut session = Session::open(today)?;
    let task = session.resolve(id)?;
    session.store.update_task(&task.id, patch)?;
    let updated = session.resolve(&task.id)?;
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(&updated)
        })));
    } else {
        println!("Updated task: {} ({})", updated.title, updated.id);
    }
    Ok(0)
}

fn run_delete(id: &str, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let mut session = Session::open(today)?;
    let task = session.resolve(id)?;
    let removed = session.store.delete_task(&task.id)?;
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": { "id": removed.id, "title": removed.title }
        })));
    } else {
        println!("Deleted task: {} ({})", removed.title, removed.id);
    }
    Ok(0)
}

fn run_done(id: &str, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let mut session = Session::open(today)?;
    let task = session.resolve(id)?;
    let completed = session.store.toggle_task_complete(&task.id)?;
    let updated = session.resolve(&task.id)?;
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "completed": completed,
            "task": output::json::task_json(&updated)
        })));
    } else {
        println!("Task {} → {}", updated.id, updated.status.as_str());
    }
    Ok(0)
}

fn run_move(id: &str, target: &str, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let mut session = Session::open(today)?;
    let source = session.resolve(id)?;
    let target = session.resolve(target)?;
    session.store.reorder_tasks(&source.id, &target.id)?;
    let position = session
        .store
        .tasks()
        .iter()
        .position(|t| t.id == source.id)
        .unwrap_or_default();
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "moved": { "id": source.id, "target": target.id, "position": position }
        })));
    } else {
        println!("Moved {} to position {}", source.title, position + 1);
    }
    Ok(0)
}

#[allow(clippy::too_many_arguments)]
fn run_schedule(
    id: &str,
    date: &str,
    row: Option<&str>,
    task_type: Option<&str>,
    time: Option<&str>,
    json_output: bool,
    today: Option<&str>,
) -> Result<i32, PlannerError> {
    // Validate everything before any writes
    let date = parse_date(date)?;
    let row = row.map(parse_row).transpose()?;
    let task_type = task_type.map(parse_type).transpose()?;
    let start_time = time.map(parse_time).transpose()?;

    let mut session = Session::open(today)?;
    let task = session.resolve(id)?;
    let live_id = session.store.schedule_task(&task.id, date, row, task_type)?;
    if let Some(start) = start_time {
        session.store.update_task(
            &live_id,
            TaskPatch {
                start_time: Some(Some(start)),
                ..Default::default()
            },
        )?;
    }
    let live = session.resolve(&live_id)?;
    session.commit()?;

    let forked = live.id != task.id;
    if json_output {
        let mut data = json!({ "task": output::json::task_json(&live) });
        if forked {
            data["rescheduled_from"] = json!(task.id);
        }
        output::json::print(&output::json::success(data));
    } else {
        let row = live.assigned_row.map(|r| format!(" {}", r.as_str())).unwrap_or_default();
        println!("Scheduled {} on {}{} ({})", live.title, format_date(date), row, live.id);
        if forked {
            println!("Previous entry {} kept as rescheduled", task.id);
        }
    }
    Ok(0)
}

fn run_unschedule(id: &str, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let mut session = Session::open(today)?;
    let task = session.resolve(id)?;
    session.store.unschedule_task(&task.id)?;
    let updated = session.resolve(&task.id)?;
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(&updated)
        })));
    } else {
        println!("Moved {} back to the backlog", updated.title);
    }
    Ok(0)
}

fn run_quad(id: &str, quad: &str, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let quad = parse_quad(quad)?;
    let mut session = Session::open(today)?;
    let task = session.resolve(id)?;
    session.store.set_eisenhower_quad(&task.id, quad)?;
    let updated = session.resolve(&task.id)?;
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(&updated)
        })));
    } else {
        let label = quad.map(|q| q.as_str()).unwrap_or("none");
        println!("Task {} quadrant → {}", updated.id, label);
    }
    Ok(0)
}
