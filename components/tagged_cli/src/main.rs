//! Tagged number evaluator CLI
//!
//! Entry point for the evaluator. Parses CLI arguments, installs the log
//! subscriber and delegates to the Evaluator.

use clap::Parser as ClapParser;
use tagged_cli::{Cli, CliError, Evaluator};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut evaluator = Evaluator::new().with_show_kind(cli.show_kind);

    let outcome = if let Some(file) = &cli.file {
        evaluator.execute_file(file).map(Some)
    } else if let Some(source) = &cli.eval {
        evaluator.execute_source(source).map(Some)
    } else if cli.repl {
        evaluator.repl().map(|()| None)
    } else {
        // Default: show usage
        println!("Tagged number evaluator v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  tn --eval <STATEMENTS>   Evaluate statements separated by ';'");
        println!("  tn --file <FILE>         Evaluate a file of statements");
        println!("  tn --repl                Start interactive REPL");
        println!();
        println!("Run 'tn --help' for more options.");
        Ok(None)
    };

    match outcome {
        Ok(Some(values)) => {
            for value in values {
                println!("{}", evaluator.format_value(&value));
            }
        }
        Ok(None) => {}
        Err(CliError::Io(e)) => {
            eprintln!(
                "Error: Could not read file '{}': {}",
                cli.file.as_deref().unwrap_or_default(),
                e
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
