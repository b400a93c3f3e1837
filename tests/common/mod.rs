//! Shell stand-in for the ccx-notification-writer binary.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use ccx_conformance::expected::HELP_TEXT;
use tempfile::TempDir;

/// A writer stub living in its own temp directory.
///
/// Every invocation appends its first argument to `calls.log`. Usage text
/// goes to stderr with Go's tab indentation, like the real binary.
#[derive(Debug)]
pub struct StubWriter {
    dir: TempDir,
    program: PathBuf,
}

impl StubWriter {
    /// Stub that answers every informational flag correctly.
    pub fn conforming() -> Self {
        Self::with_cases(&[
            (
                "--version|-version",
                "echo 'CCX Notification Writer version 1.0'",
            ),
            ("--authors|-authors", "echo 'Pavel Tisnovsky, Red Hat Inc.'"),
        ])
    }

    /// Stub with extra `case` arms placed before the defaults.
    pub fn with_cases(cases: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let usage = dir.path().join("usage.txt");
        let log = dir.path().join("calls.log");
        let program = dir.path().join("ccx-notification-writer");

        let (_, flags) = HELP_TEXT.split_once('\n').unwrap();
        fs::write(&usage, format!("{}\n", flags.replace("        ", "    \t"))).unwrap();

        let mut script = String::from("#!/bin/sh\n");
        script.push_str(&format!("echo \"$1\" >> '{}'\n", log.display()));
        script.push_str("case \"$1\" in\n");
        for (pattern, body) in cases {
            script.push_str(&format!("  {pattern})\n    {body} ;;\n"));
        }
        script.push_str(
            "  --db-drop-tables|--db-init-migration|--db-init)\n    echo \"done: $1\" ;;\n",
        );
        script.push_str(&format!(
            "  --help|-help|-h)\n    echo 'Clowder is not enabled, skipping init...'\n    cat '{}' >&2 ;;\n",
            usage.display()
        ));
        script.push_str(&format!(
            "  *)\n    echo 'Clowder is not enabled, skipping init...'\n    cat '{}' >&2\n    exit 2 ;;\n",
            usage.display()
        ));
        script.push_str("esac\n");

        fs::write(&program, script).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir, program }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn program_str(&self) -> String {
        self.program.display().to_string()
    }

    /// Arguments of every invocation so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
