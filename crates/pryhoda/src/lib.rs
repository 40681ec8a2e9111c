//! Console front end for Pryhoda
//!
//! Reads commands line by line, prints narration, and owns the save file.

pub mod cli;
pub mod session;

pub use cli::Args;
pub use session::{Session, SessionEnd};

/// Install the log subscriber
///
/// Logs go to stderr so they never mix with narration on stdout. `RUST_LOG`
/// wins over the default filter.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let default_filter = if verbose {
        "warn,pry_core=debug,pry_save=debug,pryhoda=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
