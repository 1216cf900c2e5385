use std::env;
use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;
use tracing::debug;

use crate::error::PlannerError;

use super::migrations;

pub const WORKSPACE_DIR: &str = ".weekplan";
pub const DIR_ENV: &str = "WEEKPLAN_DIR";

/// Find the workspace directory: `$WEEKPLAN_DIR`, else the nearest
/// `.weekplan` walking up from the current directory.
pub fn find_workspace_dir() -> Result<PathBuf, PlannerError> {
    if let Some(dir) = env::var_os(DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let mut dir = env::current_dir().map_err(|e| PlannerError::database(e.to_string()))?;
    loop {
        let candidate = dir.join(WORKSPACE_DIR);
        if candidate.is_dir() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(PlannerError::not_initialized());
        }
    }
}

/// Where `init` creates the workspace.
pub fn init_workspace_dir() -> Result<PathBuf, PlannerError> {
    if let Some(dir) = env::var_os(DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let cwd = env::current_dir().map_err(|e| PlannerError::database(e.to_string()))?;
    Ok(cwd.join(WORKSPACE_DIR))
}

/// Get the path to the weekplan database.
pub fn db_path() -> Result<PathBuf, PlannerError> {
    Ok(find_workspace_dir()?.join("weekplan.db"))
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf, PlannerError> {
    Ok(find_workspace_dir()?.join("config.json"))
}

/// Open a connection to the database. Returns error if not initialized.
pub fn open_db() -> Result<Connection, PlannerError> {
    let path = db_path()?;
    if !path.exists() {
        return Err(PlannerError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    // older workspaces pick up new tables on first use
    migrations::run_migrations(&conn)?;
    debug!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Initialize the database: create directories, database, and run migrations.
pub fn init_db() -> Result<PathBuf, PlannerError> {
    let dir = init_workspace_dir()?;
    fs::create_dir_all(&dir).map_err(|e| PlannerError::database(e.to_string()))?;
    let path = dir.join("weekplan.db");
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    debug!(path = %path.display(), "database initialized");
    Ok(path)
}

/// In-memory database with the schema applied.
pub fn open_in_memory() -> Result<Connection, PlannerError> {
    let conn = Connection::open_in_memory()?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), PlannerError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}
