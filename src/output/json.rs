use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::PlannerError;
use crate::models::time::format_date;
use crate::models::Task;
use crate::store::views;

pub fn print(v: &Value) {
    println!("{v:#}");
}

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &PlannerError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!(t)
}

pub fn task_list(tasks: &[Task]) -> Value {
    Value::Array(tasks.iter().map(task_json).collect())
}

pub fn day_json(date: NaiveDate, tasks: &[Task], history: &[Task], load: u64) -> Value {
    json!({
        "date": format_date(date),
        "tasks": task_list(tasks),
        "rescheduled": task_list(history),
        "planned_minutes": load
    })
}

pub fn week_json(days: &[(NaiveDate, Vec<Task>)]) -> Value {
    let days: Vec<Value> = days
        .iter()
        .map(|(date, tasks)| {
            json!({
                "date": format_date(*date),
                "tasks": task_list(tasks),
                "planned_minutes": views::day_load(tasks, *date)
            })
        })
        .collect();
    json!({ "days": days })
}

pub fn config_json(c: &Config) -> Value {
    json!({
        "week_start": c.week_start.as_str(),
        "default_duration": c.default_duration
    })
}
