//! World and step definitions for the writer scenarios.

use ccx_conformance::database::{ensure_database_preconditioned, DropTablesCleaner};
use ccx_conformance::expected::normalize_help;
use ccx_conformance::harness::{
    verify_authors_output, verify_exit_code, verify_help_output, verify_version_output,
};
use ccx_conformance::{Harness, HarnessConfig, HarnessError, ScenarioContext};
use cucumber::{given, then, when, World};

use crate::common::StubWriter;

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct WriterWorld {
    stub: StubWriter,
    harness: Harness,
    ctx: ScenarioContext,
    remembered_help: Option<String>,
}

impl WriterWorld {
    fn new() -> Self {
        let stub = StubWriter::conforming();
        let harness = Harness::new(HarnessConfig::with_program(stub.program_str()));
        Self {
            stub,
            harness,
            ctx: ScenarioContext::new(),
            remembered_help: None,
        }
    }

    fn normalized_help(&self) -> String {
        let stdout = self.ctx.stdout.clone().expect("nothing captured");
        normalize_help(&String::from_utf8(stdout).expect("utf-8 output"))
    }
}

fn check(result: Result<(), HarnessError>) {
    if let Err(e) = result {
        panic!("{e}");
    }
}

#[given("CCX Notification database is empty")]
fn database_is_empty(world: &mut WriterWorld) {
    let cleaner = DropTablesCleaner::new(&world.harness);
    check(ensure_database_preconditioned(
        &world.harness,
        &cleaner,
        &mut world.ctx,
    ));
}

#[when(regex = r"^I start the CCX Notification Writer with the (.+) command line flag$")]
fn start_with_flag(world: &mut WriterWorld, flag: String) {
    check(world.harness.launch_with_flag(&mut world.ctx, &flag));
}

#[when("I remember the help output")]
fn remember_help(world: &mut WriterWorld) {
    world.remembered_help = Some(world.normalized_help());
}

#[then("I should see help messages displayed by CCX Notification Writer on standard output")]
fn help_displayed(world: &mut WriterWorld) {
    check(verify_help_output(&world.ctx));
}

#[then("I should see version info displayed by CCX Notification Writer on standard output")]
fn version_displayed(world: &mut WriterWorld) {
    check(verify_version_output(&world.ctx));
}

#[then("I should see info about authors displayed by CCX Notification Writer on standard output")]
fn authors_displayed(world: &mut WriterWorld) {
    check(verify_authors_output(&world.ctx));
}

#[then("nothing should be captured on standard error")]
fn stderr_empty(world: &mut WriterWorld) {
    assert!(world.ctx.stderr.is_none(), "stderr: {:?}", world.ctx.stderr);
}

#[then(expr = "the process should exit with status code set to {int}")]
fn exit_code(world: &mut WriterWorld, expected: i32) {
    check(verify_exit_code(&world.ctx, expected));
}

#[then("the help output should match the remembered one")]
fn help_unchanged(world: &mut WriterWorld) {
    let remembered = world.remembered_help.as_deref().expect("help not remembered");
    assert_eq!(world.normalized_help(), remembered);
}

#[then(regex = r#"^the writer should have received "(.+)" as one argument$"#)]
fn received_argument(world: &mut WriterWorld, argument: String) {
    assert_eq!(world.stub.calls().last(), Some(&argument));
}

#[then(expr = "the database setup sequence should have run {int} time(s)")]
fn database_sequence_ran(world: &mut WriterWorld, rounds: usize) {
    let round = ["--db-drop-tables", "--db-init-migration", "--db-init"];
    assert_eq!(world.stub.calls(), round.repeat(rounds));
}
