use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use weekplan::cli::commands::{Cli, Commands};
use weekplan::cli;

fn main() {
    if let Ok(filter) = std::env::var("WEEKPLAN_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }

    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let today = cli_args.today.clone();
    let today = today.as_deref();

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(json_output),
        Commands::Task(cmd) => cli::task::run(cmd, json_output, today),
        Commands::Day { date } => cli::board::run_day(date.as_deref(), json_output, today),
        Commands::Week { date } => cli::board::run_week(date.as_deref(), json_output, today),
        Commands::Backlog { quad } => cli::board::run_backlog(quad.as_deref(), json_output, today),
        Commands::Export => cli::transfer::run_export(json_output, today),
        Commands::Import => cli::transfer::run_import(json_output, today),
        Commands::Config(cmd) => cli::settings::run(cmd, json_output),
    };

    process::exit(exit_code);
}
