//! typeof-cli
//!
//! Entry point for the classifier CLI. Parses CLI arguments and delegates
//! to the Session for evaluation.

use clap::Parser as ClapParser;
use type_cli::{Cli, CliError, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    type_cli::init_tracing(cli.log_level());

    let mut session = Session::new(cli.mode).with_json(cli.json);

    let report = if let Some(file) = &cli.file {
        session.evaluate_file(file)
    } else if let Some(source) = &cli.eval {
        session.evaluate_str(source)
    } else if cli.repl {
        session.repl()?;
        return Ok(());
    } else {
        // Default: show usage
        println!("typeof-cli v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  typeof-cli --file <FILE>     Classify the JSON array in a file");
        println!("  typeof-cli --eval <JSON>     Classify an inline JSON array");
        println!("  typeof-cli --repl            Start interactive REPL");
        println!();
        println!("Run 'typeof-cli --help' for more options.");
        return Ok(());
    };

    match report.and_then(|report| session.render(&report)) {
        Ok(output) => println!("{}", output),
        Err(CliError::Io(e)) => {
            eprintln!("Error: Could not read file '{}': {}", cli.file.unwrap_or_default(), e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
