use crate::cli::commands::ConfigCommands;
use crate::cli::report;
use crate::config::Config;
use crate::db::connection;
use crate::error::PlannerError;
use crate::output;

pub fn run(cmd: ConfigCommands, json_output: bool) -> i32 {
    let result = match cmd {
        ConfigCommands::Show => run_show(json_output),
        ConfigCommands::Set { key, value } => run_set(&key, &value, json_output),
    };
    report(result, json_output)
}

fn run_show(json_output: bool) -> Result<i32, PlannerError> {
    // settings belong to a workspace
    connection::find_workspace_dir()?;
    let config = Config::load();
    if json_output {
        output::json::print(&output::json::success(output::json::config_json(&config)));
    } else {
        output::text::print_config(&config);
    }
    Ok(0)
}

fn run_set(key: &str, value: &str, json_output: bool) -> Result<i32, PlannerError> {
    connection::find_workspace_dir()?;
    let mut config = Config::load();
    config.set(key, value)?;
    config.save()?;

    if json_output {
        output::json::print(&output::json::success(output::json::config_json(&config)));
    } else {
        println!("Set {key} = {value}");
    }
    Ok(0)
}
