use chrono::NaiveDate;
use serde_json::json;

use crate::cli::session::Session;
use crate::cli::{parse_quad, report};
use crate::config::Config;
use crate::error::PlannerError;
use crate::models::time::parse_date;
use crate::output;
use crate::store::views;

fn target_date(session: &Session, date: Option<&str>) -> Result<NaiveDate, PlannerError> {
    match date {
        Some(d) => parse_date(d),
        None => Ok(session.store.today()),
    }
}

pub fn run_day(date: Option<&str>, json_output: bool, today: Option<&str>) -> i32 {
    report(day_inner(date, json_output, today), json_output)
}

fn day_inner(date: Option<&str>, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let session = Session::open(today)?;
    let date = target_date(&session, date)?;
    let tasks = session.store.tasks();

    let column = views::day_column(tasks, date);
    let history = views::history(tasks, date);
    let load = views::day_load(tasks, date);

    if json_output {
        output::json::print(&output::json::success(output::json::day_json(date, &column, &history, load)));
    } else {
        output::text::print_day(date, &column, &history, load);
    }
    Ok(0)
}

pub fn run_week(date: Option<&str>, json_output: bool, today: Option<&str>) -> i32 {
    report(week_inner(date, json_output, today), json_output)
}

fn week_inner(date: Option<&str>, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let session = Session::open(today)?;
    let date = target_date(&session, date)?;
    let config = Config::load();
    let grid = views::week_grid(session.store.tasks(), date, config.week_start);

    if json_output {
        output::json::print(&output::json::success(output::json::week_json(&grid)));
    } else {
        output::text::print_week(&grid);
    }
    Ok(0)
}

pub fn run_backlog(quad: Option<&str>, json_output: bool, today: Option<&str>) -> i32 {
    report(backlog_inner(quad, json_output, today), json_output)
}

fn backlog_inner(quad: Option<&str>, json_output: bool, today: Option<&str>) -> Result<i32, PlannerError> {
    let quad = quad.map(parse_quad).transpose()?.flatten();
    let session = Session::open(today)?;
    let tasks = match quad {
        Some(q) => views::quadrant(session.store.tasks(), q),
        None => views::backlog(session.store.tasks()),
    };

    if json_output {
        output::json::print(&output::json::success(json!({
            "tasks": output::json::task_list(&tasks)
        })));
    } else {
        output::text::print_task_list(&tasks);
    }
    Ok(0)
}
