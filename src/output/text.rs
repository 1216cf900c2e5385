use chrono::NaiveDate;

use crate::config::Config;
use crate::models::time::{format_date, format_time};
use crate::models::Task;
use crate::store::views;

fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(i, _)| &id[..i])
}

pub fn print_task(t: &Task) {
    println!("Task: {} ({})", t.title, t.id);
    println!("  Status: {}", t.status.as_str());
    println!("  Type: {}", t.task_type.as_str());
    println!("  Duration: {} min", t.duration);
    if let Some(due) = t.due_date {
        println!("  Date: {}", format_date(due));
    }
    if let Some(row) = t.assigned_row {
        println!("  Row: {}", row.as_str());
    }
    if let Some(start) = t.start_time {
        println!("  Start: {}", format_time(start));
    }
    if let Some(quad) = t.eisenhower_quad {
        println!("  Quadrant: {}", quad.as_str());
    }
    if let Some(ref notes) = t.notes {
        println!("  Notes: {notes}");
    }
    println!("  Created: {}", t.created_at.to_rfc3339());
    if let Some(completed) = t.completed_at {
        println!("  Completed: {}", completed.to_rfc3339());
    }
}

pub fn print_task_line(t: &Task) {
    let placement = match (t.due_date, t.assigned_row) {
        (Some(d), Some(r)) => format!(" {} {}", format_date(d), r.as_str()),
        (Some(d), None) => format!(" {}", format_date(d)),
        _ => String::new(),
    };
    let time = t.start_time.map(|s| format!(" @{}", format_time(s))).unwrap_or_default();
    println!(
        "  [{}] {} ({}) {}m {}{}{}",
        t.status.as_str(),
        t.title,
        short_id(&t.id),
        t.duration,
        t.task_type.as_str(),
        placement,
        time
    );
}

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        print_task_line(t);
    }
}

pub fn print_day(date: NaiveDate, tasks: &[Task], history: &[Task], load: u64) {
    println!("{} ({}, {} min planned)", format_date(date), date.format("%A"), load);
    print_task_list(tasks);
    if !history.is_empty() {
        println!("  Moved forward:");
        for t in history {
            print_task_line(t);
        }
    }
}

pub fn print_week(days: &[(NaiveDate, Vec<Task>)]) {
    for (date, tasks) in days {
        let load = views::day_load(tasks, *date);
        println!("{} {} ({} min)", date.format("%a"), format_date(*date), load);
        for t in tasks {
            print_task_line(t);
        }
    }
}

pub fn print_config(c: &Config) {
    println!("week_start = {}", c.week_start.as_str());
    println!("default_duration = {}", c.default_duration);
}
