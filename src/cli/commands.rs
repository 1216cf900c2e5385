use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "weekplan",
    version = VERSION,
    about = "Weekly planner: backlog, day board and week grid",
    after_help = "\
NOTE:
  Data lives in the nearest .weekplan/ directory (or $WEEKPLAN_DIR).
  Run `weekplan init` before any other command.

EXIT CODES:
  0  Success
  1  Error (not found, validation, DB, etc.)

FORMATS:
  Dates are YYYY-MM-DD, times are HH:MM (24-hour).
  Rows: GOAL, FOCUS, WORK, LEISURE, CHORES.
  Types: backlog, high, medium, low, leisure, chores.
  Quadrants: do, schedule, delegate, eliminate.

RESCHEDULING:
  Moving a task that still sits on a past day to today or later keeps the
  old entry as `rescheduled` and schedules a copy with a new ID.

LOGGING:
  Set WEEKPLAN_LOG (e.g. `weekplan=debug`) to log to stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize weekplan in this directory
    Init,

    /// Task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Show one day of the board (default: today)
    Day {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Show the week containing a date (default: today)
    Week {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Show unscheduled tasks
    Backlog {
        /// Only tasks classified into this quadrant
        #[arg(long)]
        quad: Option<String>,
    },

    /// Print all tasks as a JSON array
    Export,

    /// Replace all tasks with a JSON array read from stdin
    #[command(after_help = "\
STDIN FORMAT:
  [{\"id\":\"...\", \"title\":\"...\", \"duration\":30, \"type\":\"high\",
    \"status\":\"scheduled\", \"dueDate\":\"2024-01-06\", \"assignedRow\":\"WORK\",
    \"eisenhowerQuad\":null, \"createdAt\":\"2024-01-01T09:00:00Z\"}]

NOTE:
  Atomic: all-or-nothing. Duplicate IDs are rejected.
  The order of the array becomes the board order.")]
    Import,

    /// Workspace settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to the backlog
    Add {
        /// Task title
        title: String,
        /// Minutes (default: config default_duration)
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long = "type", default_value = "backlog")]
        task_type: String,
    },
    /// List all tasks in board order
    List,
    /// Show task details
    Show {
        /// Task ID or prefix
        id: String,
    },
    /// Change task fields without touching its placement
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long = "type")]
        task_type: Option<String>,
        /// Notes ("" clears)
        #[arg(long)]
        notes: Option<String>,
        /// Start time HH:MM ("" clears)
        #[arg(long)]
        time: Option<String>,
    },
    /// Delete a task
    Delete {
        id: String,
    },
    /// Toggle completion
    Done {
        id: String,
    },
    /// Move a task into another task's position
    Move {
        /// Task to move
        id: String,
        /// Task whose position it takes
        target: String,
    },
    /// Put a task on the board
    Schedule {
        id: String,
        /// Date (YYYY-MM-DD)
        date: String,
        #[arg(long)]
        row: Option<String>,
        #[arg(long = "type")]
        task_type: Option<String>,
        /// Start time HH:MM
        #[arg(long)]
        time: Option<String>,
    },
    /// Take a task off the board
    Unschedule {
        id: String,
    },
    /// Classify a backlog task (do|schedule|delegate|eliminate|none)
    Quad {
        id: String,
        quad: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print current settings
    Show,
    /// Change a setting
    Set {
        /// week_start | default_duration
        key: String,
        value: String,
    },
}
