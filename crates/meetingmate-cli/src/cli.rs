//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;
use meetingmate_core::NoteFormat;

/// meetingmate - Turn calendar invitation dumps into meeting notes
#[derive(Debug, Parser)]
#[command(name = "meetingmate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file containing meeting information (defaults to stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Include the meeting details section
    #[arg(long)]
    pub details: bool,

    /// Include the attendees section
    #[arg(long)]
    pub attendees: bool,

    /// Output plain text without markdown formatting
    #[arg(long)]
    pub plain: bool,

    /// Path to configuration file
    #[arg(long, short, env = "MEETINGMATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

impl Cli {
    /// Returns the output format implied by the `--plain` flag.
    pub fn note_format(&self) -> NoteFormat {
        if self.plain {
            NoteFormat::Plain
        } else {
            NoteFormat::Markdown
        }
    }
}
