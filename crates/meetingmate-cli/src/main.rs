//! meetingmate CLI entry point.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use meetingmate_cli::cli::Cli;
use meetingmate_cli::config::CliConfig;
use meetingmate_cli::error::{CliError, CliResult};
use meetingmate_core::{extract_meeting, NoteFormat, NoteRenderer, RenderOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(CliError::Config)?
    } else {
        CliConfig::load().unwrap_or_default()
    };

    // Read input
    let input = match cli.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if input.trim().is_empty() {
        println!("No input provided. Use --help for usage information.");
        return Ok(());
    }

    let now = Utc::now();
    let meeting = extract_meeting(&input, now);
    debug!(
        title = %meeting.title,
        attendees = meeting.attendees.len(),
        links = meeting.links.len(),
        "extracted meeting"
    );

    let format = if config.output.plain {
        NoteFormat::Plain
    } else {
        cli.note_format()
    };
    let options = RenderOptions::new(now)
        .with_details(cli.details || config.output.details)
        .with_attendees(cli.attendees || config.output.attendees)
        .with_format(format);
    let rendered = NoteRenderer::new(options).render(&meeting);

    // Write output
    match cli.output {
        Some(ref path) => {
            fs::write(path, &rendered)?;
            println!("Meeting notes saved to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
