use anyhow::Result;

use tournament_standings::cli::Command;
use tournament_standings::{handle_export, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Standings { input, max_round } => handle_standings(input, *max_round),
        Command::Export {
            input,
            rounds,
            output_dir,
            stdout,
        } => handle_export(input, *rounds, output_dir.as_ref(), *stdout),
    }
}
