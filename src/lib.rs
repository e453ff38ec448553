use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use commands::wallpaper::{
    generate_wallpapers_cmd, import_theme_cmd, GenerateReport, ImportReport, ScreenOutcome, Session,
};
use services::config::load_config;
use services::fs_utils::path_utils::{truncate_path, DISPLAY_PATH_LEN};
use services::theme_archive::ExtractionStatus;
use services::wallpaper::Screen;

/// Fit wallpapers (or 3DS theme art) to the Ayn Thor's two screens.
#[derive(Debug, Parser)]
#[command(name = "wallpaper-adapter", version, about)]
pub struct Cli {
    /// 3DS theme archive (.zip) holding pt_top*.png / pt_bottom*.png
    #[arg(long, value_name = "ZIP")]
    pub theme: Option<PathBuf>,

    /// Image for the top screen. Overrides the theme's pt_top.
    #[arg(long, value_name = "IMAGE")]
    pub top: Option<PathBuf>,

    /// Image for the bottom screen. Overrides the theme's pt_bottom.
    #[arg(long, value_name = "IMAGE")]
    pub bottom: Option<PathBuf>,

    /// Output folder. A theme import writes into a subfolder named after the archive.
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// JSON file overriding target sizes, output names or the resample filter
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the reports as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one CLI run.
#[derive(Debug, serde::Serialize)]
pub struct RunReport {
    pub import: Option<ImportReport>,
    pub generate: GenerateReport,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.generate.all_saved()
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Build a session from the parsed arguments and generate both wallpapers.
pub fn run(cli: Cli) -> anyhow::Result<RunReport> {
    let config = load_config(cli.config.as_deref()).context("Could not load configuration")?;

    let mut session = Session::new();
    let import = match &cli.theme {
        Some(archive) => Some(
            import_theme_cmd(&mut session, archive)
                .with_context(|| format!("Could not read theme {}", archive.display()))?,
        ),
        None => None,
    };

    if let (Some(import), false) = (&import, cli.json) {
        print_import(import);
    }

    if let Some(top) = &cli.top {
        session.set_image(Screen::Top, top);
    }
    if let Some(bottom) = &cli.bottom {
        session.set_image(Screen::Bottom, bottom);
    }
    session.set_output_dir(&cli.output);

    let generate =
        generate_wallpapers_cmd(&session, &config).context("Could not generate wallpapers")?;

    let report = RunReport { import, generate };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_generate(&report.generate);
    }
    Ok(report)
}

fn print_import(import: &ImportReport) {
    let archive = truncate_path(&import.archive_path.to_string_lossy(), DISPLAY_PATH_LEN);
    match import.status {
        ExtractionStatus::Complete => println!("Imported {archive}: top and bottom found"),
        ExtractionStatus::Partial(found) => {
            println!("Partial import of {archive}: only the {found} image was found")
        }
        ExtractionStatus::Empty => println!("No pt_top/pt_bottom image found in {archive}"),
    }
}

fn print_generate(report: &GenerateReport) {
    for screen in &report.screens {
        match &screen.outcome {
            ScreenOutcome::Saved { path } => println!(
                "{:>6} {} -> {}",
                screen.screen,
                screen.target,
                truncate_path(&path.to_string_lossy(), DISPLAY_PATH_LEN)
            ),
            ScreenOutcome::Failed { error } => {
                println!("{:>6} {} FAILED: {error}", screen.screen, screen.target)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod cli_tests;
