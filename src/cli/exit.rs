/// Exit codes used across ccx-conformance subcommands.
///
/// Mapping:
///   0: success (OK, probe accepted, DATABASE_PREPARED)
///   1: conformance failure (INVALID)
///   2: refusal (REFUSAL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Invalid = 1,
    Refusal = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}
