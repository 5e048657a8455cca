//! REPL (Read-Eval-Print Loop) implementation

use crate::cli::Mode;
use crate::error::{CliError, CliResult};
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// # Arguments
/// * `session` - The Session used to evaluate each input
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(session: &mut Session) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("typeof-cli v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a JSON array of values, '.help' for commands or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    println!("{}", handle_repl_command(trimmed, session));
                    continue;
                }

                if !in_multiline && trimmed.is_empty() {
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }
                in_multiline = false;

                let _ = editor.add_history_entry(&line_buffer);

                match session
                    .evaluate_str(&line_buffer)
                    .and_then(|report| session.render(&report))
                {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
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

/// Handle special REPL commands, returning the text to print
fn handle_repl_command(command: &str, session: &mut Session) -> String {
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(".help"), _) => [
            "REPL Commands:",
            "  .help          - Show this help message",
            "  .mode [MODE]   - Show or set the mode (coarse, real, same, unique, count, all)",
            "  .json          - Toggle JSON output",
            "  .exit          - Exit the REPL",
            "  exit           - Exit the REPL",
            "  quit           - Exit the REPL",
        ]
        .join("\n"),
        (Some(".mode"), None) => format!("Mode: {:?}", session.mode()),
        (Some(".mode"), Some(name)) => match Mode::parse(name) {
            Some(mode) => {
                session.set_mode(mode);
                format!("Mode: {:?}", mode)
            }
            None => format!("Unknown mode: {}", name),
        },
        (Some(".json"), _) => {
            let enabled = session.toggle_json();
            format!("JSON output: {}", if enabled { "enabled" } else { "disabled" })
        }
        _ => format!("Unknown command: {}\nType .help for available commands", command),
    }
}

/// Check if the input appears to be complete
///
/// This is a simple heuristic that checks for balanced brackets and braces
/// outside of JSON strings
fn is_input_complete(input: &str) -> bool {
    let mut brace_count = 0;
    let mut bracket_count = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string {
            escape_next = true;
            continue;
        }

        if !in_string {
            match c {
                '"' => in_string = true,
                '{' => brace_count += 1,
                '}' => brace_count -= 1,
                '[' => bracket_count += 1,
                ']' => bracket_count -= 1,
                _ => {}
            }
        } else if c == '"' {
            in_string = false;
        }
    }

    brace_count <= 0 && bracket_count <= 0 && !in_string
}
