//! typeof-cli library
//!
//! Provides the Session struct and supporting modules for classifying
//! JavaScript values written as JSON literals.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod literal;
pub mod repl;
pub mod report;
pub mod session;

pub use cli::{Cli, Mode};
pub use error::{CliError, CliResult};
pub use report::Report;
pub use session::Session;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` is used.
/// Safe to call multiple times.
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
