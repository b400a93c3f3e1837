pub mod cli;
pub mod config;
pub mod conformance;
pub mod database;
pub mod digest;
pub mod error;
pub mod expected;
pub mod harness;
pub mod logging;
pub mod operator;
pub mod probe;
pub mod refusal;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use harness::{Harness, ScenarioContext};

use clap::Parser;
use cli::{Cli, Command, ExitCode};

/// Run the ccx-conformance CLI and return an exit code.
pub fn run() -> u8 {
    let cli = Cli::parse();

    // --describe short-circuits before anything is launched.
    if cli.describe {
        let op = operator::operator_json();
        println!(
            "{}",
            serde_json::to_string_pretty(&op).expect("operator json serialization cannot fail")
        );
        return ExitCode::Success.into();
    }

    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        eprintln!("ccx-conformance: no command provided. Try --help.");
        return ExitCode::Refusal.into();
    };

    let harness = Harness::new(HarnessConfig::with_program(cli.program));

    let (output, exit_code) = match command {
        Command::Check { json } => conformance::execute_check(&harness, json),
        Command::Probe {
            flag,
            accept_code,
            json,
        } => probe::execute_probe(&harness, &flag, accept_code, json),
        Command::PrepareDb { rounds } => database::command::execute_prepare_db(&harness, rounds),
    };
    println!("{output}");
    exit_code
}
