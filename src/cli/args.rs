use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_ALTERNATE_EXIT_CODE, PROGRAM_ENV};
use crate::expected;

#[derive(Parser, Debug)]
#[command(
    name = "ccx-conformance",
    about = "Run the CCX Notification Writer binary as a subprocess and check its command-line contract.",
    version
)]
pub struct Cli {
    /// Print compiled operator.json and exit.
    #[arg(long, global = true)]
    pub describe: bool,

    /// Program under test (name on PATH or path).
    #[arg(long, global = true, env = PROGRAM_ENV, default_value = expected::PROGRAM)]
    pub program: String,

    /// Log harness activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check help, version and author output.
    Check {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Launch the program with one flag and show what it printed.
    Probe {
        /// Flag passed as the single argument, e.g. --show-configuration.
        #[arg(allow_hyphen_values = true)]
        flag: String,

        /// Exit code accepted besides 0.
        #[arg(long, default_value_t = DEFAULT_ALTERNATE_EXIT_CODE)]
        accept_code: i32,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Empty the database and initialize migrations and tables.
    PrepareDb {
        /// How many times to run the sequence.
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
}
