use clap::Parser;
use std::process::ExitCode;
use wallpaper_adapter_lib::{init_logging, run, Cli};

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(report) if report.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
