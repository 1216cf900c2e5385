use std::collections::HashSet;
use std::io::{self, Read};

use serde_json::json;

use crate::cli::report;
use crate::cli::session::Session;
use crate::error::PlannerError;
use crate::models::Task;
use crate::output;

pub fn run_export(json_output: bool, today: Option<&str>) -> i32 {
    report(export_inner(json_output, today), json_output)
}

fn export_inner(json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let session = Session::open(today)?;
    let tasks = output::json::task_list(session.store.tasks());
    if json_output {
        output::json::print(&output::json::success(json!({ "tasks": tasks })));
    } else {
        // bare array, the format `import` reads back
        output::json::print(&tasks);
    }
    Ok(0)
}

pub fn run_import(json_output: bool, today: Option<&str>) -> i32 {
    report(import_inner(json_output, today), json_output)
}

fn import_inner(json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| PlannerError::validation(format!("Failed to read stdin: {e}")))?;
    let tasks = parse_import(&input)?;

    let mut session = Session::open(today)?;
    let count = tasks.len();
    session.store.set_tasks(tasks);
    session.commit()?;

    if json_output {
        output::json::print(&output::json::success(json!({ "imported": count })));
    } else {
        println!("Imported {count} tasks");
    }
    Ok(0)
}

/// The store takes anything; storage needs unique IDs.
fn parse_import(input: &str) -> Result<Vec<Task>, PlannerError> {
    let tasks: Vec<Task> = serde_json::from_str(input)?;
    let mut seen = HashSet::new();
    for t in &tasks {
        if !seen.insert(t.id.as_str()) {
            return Err(PlannerError::validation(format!("Duplicate task ID: {}", t.id)));
        }
    }
    Ok(tasks)
}
