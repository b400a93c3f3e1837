use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckOutcome {
    OK,
    INVALID,
    REFUSAL,
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckOutcome::OK => write!(f, "OK"),
            CheckOutcome::INVALID => write!(f, "INVALID"),
            CheckOutcome::REFUSAL => write!(f, "REFUSAL"),
        }
    }
}

/// Pass/fail per check; `false` also for checks that never ran.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConformanceChecks {
    pub help: bool,
    pub help_idempotent: bool,
    pub version: bool,
    pub authors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl Finding {
    pub fn new(code: &str, flag: &str) -> Self {
        Self {
            code: code.to_string(),
            flag: Some(flag.to_string()),
            expected: None,
            actual: None,
        }
    }

    /// Finding for a failed harness step on `flag`.
    pub fn from_error(flag: &str, error: &HarnessError) -> Self {
        let mut finding = Finding::new(error.code(), flag);
        match error {
            HarnessError::UnexpectedExitCode { actual, accepted } => {
                finding.expected = Some(format!("0 or {accepted}"));
                finding.actual = Some(actual.to_string());
            }
            HarnessError::HelpMismatch { diff, .. } => {
                finding.actual = Some(diff.clone());
            }
            HarnessError::MissingLine { line, output } => {
                finding.expected = Some(line.clone());
                finding.actual = Some(output.join("\n"));
            }
            other => finding.actual = Some(other.to_string()),
        }
        finding
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub version: String,
    pub outcome: CheckOutcome,
    pub program: String,
    pub started_at: String,
    pub checks: ConformanceChecks,
    pub invalid: Vec<Finding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refusal: Option<serde_json::Value>,
}

impl ConformanceReport {
    fn base(program: &str, started_at: String, outcome: CheckOutcome) -> Self {
        Self {
            version: "ccx-conformance.check.v0".to_string(),
            outcome,
            program: program.to_string(),
            started_at,
            checks: ConformanceChecks::default(),
            invalid: vec![],
            refusal: None,
        }
    }

    pub fn ok(program: &str, started_at: String, checks: ConformanceChecks) -> Self {
        Self {
            checks,
            ..Self::base(program, started_at, CheckOutcome::OK)
        }
    }

    pub fn invalid(
        program: &str,
        started_at: String,
        checks: ConformanceChecks,
        findings: Vec<Finding>,
    ) -> Self {
        Self {
            checks,
            invalid: findings,
            ..Self::base(program, started_at, CheckOutcome::INVALID)
        }
    }

    pub fn refusal(program: &str, started_at: String, reason: serde_json::Value) -> Self {
        Self {
            refusal: Some(reason),
            ..Self::base(program, started_at, CheckOutcome::REFUSAL)
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.outcome {
            CheckOutcome::OK => 0,
            CheckOutcome::INVALID => 1,
            CheckOutcome::REFUSAL => 2,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("conformance report serialization cannot fail")
    }

    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("ccx-conformance check: {}", self.outcome));
        lines.push(format!("  program: {}", self.program));
        if self.outcome != CheckOutcome::REFUSAL {
            let c = &self.checks;
            for (name, passed) in [
                ("help", c.help),
                ("help_idempotent", c.help_idempotent),
                ("version", c.version),
                ("authors", c.authors),
            ] {
                let mark = if passed { "ok" } else { "FAILED" };
                lines.push(format!("  {name}: {mark}"));
            }
        }
        if !self.invalid.is_empty() {
            lines.push("  findings:".to_string());
            for f in &self.invalid {
                let mut entry = format!("    - {}", f.code);
                if let Some(flag) = &f.flag {
                    entry.push_str(&format!(" ({flag})"));
                }
                lines.push(entry);
            }
        }
        if let Some(r) = &self.refusal {
            lines.push(format!("  refusal: {r}"));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_outcome() {
        let ok = ConformanceReport::ok("w", "t".into(), ConformanceChecks::default());
        assert_eq!(ok.exit_code(), 0);
        let invalid =
            ConformanceReport::invalid("w", "t".into(), ConformanceChecks::default(), vec![]);
        assert_eq!(invalid.exit_code(), 1);
        let refusal = ConformanceReport::refusal("w", "t".into(), serde_json::json!({}));
        assert_eq!(refusal.exit_code(), 2);
    }

    #[test]
    fn unexpected_exit_code_finding_lists_accepted_codes() {
        let f = Finding::from_error(
            "--version",
            &HarnessError::UnexpectedExitCode {
                actual: 1,
                accepted: 2,
            },
        );
        assert_eq!(f.code, "UNEXPECTED_EXIT_CODE");
        assert_eq!(f.expected.as_deref(), Some("0 or 2"));
        assert_eq!(f.actual.as_deref(), Some("1"));
    }

    #[test]
    fn human_report_lists_findings() {
        let checks = ConformanceChecks {
            help: true,
            ..Default::default()
        };
        let report = ConformanceReport::invalid(
            "w",
            "t".into(),
            checks,
            vec![Finding::new("VERSION_MISSING", "--version")],
        );
        let text = report.to_human();
        assert!(text.starts_with("ccx-conformance check: INVALID"));
        assert!(text.contains("  help: ok"));
        assert!(text.contains("  version: FAILED"));
        assert!(text.contains("    - VERSION_MISSING (--version)"));
    }

    #[test]
    fn json_report_skips_empty_refusal() {
        let report = ConformanceReport::ok("w", "t".into(), ConformanceChecks::default());
        let v: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(v["version"], "ccx-conformance.check.v0");
        assert_eq!(v["outcome"], "OK");
        assert!(v.get("refusal").is_none());
    }
}
