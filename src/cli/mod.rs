pub mod board;
pub mod commands;
pub mod init;
pub mod session;
pub mod settings;
pub mod task;
pub mod transfer;

pub use commands::*;

use crate::error::PlannerError;
use crate::models::{EisenhowerQuad, Row, TaskType};
use crate::output;

/// Turn a handler result into an exit code, printing the error.
pub fn report(result: Result<i32, PlannerError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

pub fn parse_type(s: &str) -> Result<TaskType, PlannerError> {
    TaskType::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = TaskType::ALL.iter().map(|t| t.as_str()).collect();
        PlannerError::validation(format!("Unknown task type '{s}'. Expected one of: {}", known.join(", ")))
    })
}

pub fn parse_row(s: &str) -> Result<Row, PlannerError> {
    Row::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = Row::ALL.iter().map(|r| r.as_str()).collect();
        PlannerError::validation(format!("Unknown row '{s}'. Expected one of: {}", known.join(", ")))
    })
}

/// `none` clears the quadrant.
pub fn parse_quad(s: &str) -> Result<Option<EisenhowerQuad>, PlannerError> {
    if s == "none" {
        return Ok(None);
    }
    EisenhowerQuad::from_str(s).map(Some).ok_or_else(|| {
        PlannerError::validation(format!(
            "Unknown quadrant '{s}'. Expected do, schedule, delegate, eliminate or none"
        ))
    })
}
