//! Main application entry point.

use autostack_app::{AppError, Args, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Autostack canvas");

    let args = Args::parse();
    let result = run(&args)
        .and_then(|snapshot| serde_json::to_string_pretty(&snapshot).map_err(AppError::from));

    match result {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
