//! CLI command implementations

use clap::Subcommand;

pub mod check;
pub mod count;
pub mod generate_config;
pub mod list;
pub mod parse;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse an XLIFF or SDLXLIFF file and print its segments
    Parse(parse::ParseArgs),

    /// Count words in a piece of text
    Count(count::CountArgs),

    /// Run the QA rule checks over bilingual files
    Check(check::CheckArgs),

    /// List rule categories, confirmation states or inline tag types
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented qa.toml template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// Initialize logging from a `-v` count
///
/// `RUST_LOG` takes precedence when set. `quiet` leaves logging off.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization within one process is ignored
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
