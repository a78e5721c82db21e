use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::checker::run_checks;
pub use services::discovery::{discover_records, pair_records};
pub use services::generator::{write_configs, GeneratorParams};
pub use services::logs::load_processes;
pub use services::output::print_report;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if handle_generate_command(&cli)? {
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(report) = handle_check_command(&cli)? {
        if !report.passed() {
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}
