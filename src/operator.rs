use serde_json::{json, Value};

use crate::expected;

/// Return the compiled-in operator manifest for `--describe`.
pub fn operator_json() -> Value {
    json!({
        "name": "ccx-conformance",
        "schema_version": "operator.v0",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Run the CCX Notification Writer binary as a subprocess and check its command-line contract.",
        "program_under_test": expected::PROGRAM,
        "output_mode": "report",
        "subcommands": {
            "check": {
                "description": "Check help, version and author output",
                "output_mode": "report",
                "exit_codes": {
                    "0": "OK",
                    "1": "INVALID",
                    "2": "REFUSAL"
                }
            },
            "probe": {
                "description": "Launch the program with one flag and show what it printed",
                "output_mode": "status",
                "exit_codes": {
                    "0": "ACCEPTED",
                    "1": "INVALID",
                    "2": "REFUSAL"
                }
            },
            "prepare-db": {
                "description": "Empty the database and initialize migrations and tables",
                "output_mode": "status",
                "exit_codes": {
                    "0": "DATABASE_PREPARED",
                    "2": "REFUSAL"
                }
            }
        },
        "refusal_codes": {
            "E_LAUNCH": "Program under test cannot be started",
            "E_IO": "Output of the program under test cannot be read",
            "E_SETUP": "Database preconditioning failed"
        },
        "global_flags": ["--describe", "--program", "--verbose", "--version"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_manifest_has_required_fields() {
        let op = operator_json();
        assert_eq!(op["name"], "ccx-conformance");
        assert_eq!(op["schema_version"], "operator.v0");
        assert_eq!(op["program_under_test"], "ccx-notification-writer");
        assert!(op["version"].as_str().is_some());
    }

    #[test]
    fn operator_manifest_has_all_subcommands() {
        let op = operator_json();
        let subs = op["subcommands"].as_object().unwrap();
        assert!(subs.contains_key("check"));
        assert!(subs.contains_key("probe"));
        assert!(subs.contains_key("prepare-db"));
    }

    #[test]
    fn operator_manifest_has_exit_codes() {
        let op = operator_json();
        let check = &op["subcommands"]["check"]["exit_codes"];
        assert_eq!(check["0"], "OK");
        assert_eq!(check["1"], "INVALID");
        assert_eq!(check["2"], "REFUSAL");
    }

    #[test]
    fn operator_manifest_has_all_refusal_codes() {
        let op = operator_json();
        let codes = op["refusal_codes"].as_object().unwrap();
        for code in ["E_LAUNCH", "E_IO", "E_SETUP"] {
            assert!(codes.contains_key(code));
        }
    }
}
