//! REPL (Read-Eval-Print Loop) implementation

use crate::error::{CliError, CliResult};
use crate::evaluator::Evaluator;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// # Arguments
/// * `evaluator` - The Evaluator whose bindings persist across lines
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(evaluator: &mut Evaluator) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("Tagged number evaluator v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a statement, .help for commands, or 'exit' to quit.");
    println!();

    loop {
        match editor.readline("tn> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if trimmed == "exit" || trimmed == ".exit" || trimmed == "quit" {
                    println!("Goodbye!");
                    break;
                }

                if trimmed.starts_with('.') {
                    handle_repl_command(trimmed, evaluator);
                    continue;
                }

                let _ = editor.add_history_entry(trimmed);

                match evaluator.execute_source(trimmed) {
                    Ok(values) => {
                        for value in values {
                            println!("{}", evaluator.format_value(&value));
                        }
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("Press Ctrl-D or type 'exit' to quit");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, evaluator: &Evaluator) {
    match command {
        ".help" => println!("{}", help_text()),
        ".vars" => {
            if evaluator.variables().is_empty() {
                println!("(no variables)");
            }
            for (name, value) in evaluator.variables() {
                println!("{} = {}", name, evaluator.format_value(value));
            }
        }
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

fn help_text() -> String {
    let binary: Vec<&str> = tagged_number::BinaryOp::ALL
        .iter()
        .map(|op| op.symbol())
        .collect();
    format!(
        "Statements (tokens separated by spaces, statements by ';'):\n\
         \x20 VALUE | UNOP VALUE | VALUE BINOP VALUE\n\
         \x20 NAME = EXPR | NAME OP= VALUE | NAME++ | NAME-- | ++NAME | --NAME\n\
         Unary operators: ~ ! -\n\
         Binary operators: {}\n\
         REPL Commands:\n\
         \x20 .help     - Show this help message\n\
         \x20 .vars     - List bound variables\n\
         \x20 .clear    - Clear the screen\n\
         \x20 .exit     - Exit the REPL",
        binary.join(" ")
    )
}
