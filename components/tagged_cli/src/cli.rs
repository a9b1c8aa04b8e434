//! Command-line arguments

use clap::{ArgAction, Parser};
use tracing::Level;

/// Evaluate tagged number statements from the command line, a file or a REPL
#[derive(Debug, Clone, Parser)]
#[command(name = "tn", version, about)]
pub struct Cli {
    /// Statements to evaluate, separated by `;`
    #[arg(short, long, value_name = "STATEMENTS")]
    pub eval: Option<String>,

    /// File of statements, one per line
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the kind next to each result
    #[arg(
        short = 'k',
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub show_kind: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Arguments that run a single file
    pub fn with_file(file: String) -> Self {
        Self {
            eval: None,
            file: Some(file),
            repl: false,
            show_kind: true,
            verbose: 0,
        }
    }

    /// Log level selected by the verbosity count
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
