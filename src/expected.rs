//! Literal output the CCX Notification Writer must reproduce.

/// Default program name, resolved through `PATH`.
pub const PROGRAM: &str = "ccx-notification-writer";

/// Line printed for `--version`.
pub const VERSION_LINE: &str = "CCX Notification Writer version 1.0";

/// Line printed for `--authors`.
pub const AUTHORS_LINE: &str = "Pavel Tisnovsky, Red Hat Inc.";

/// Flags listed by the help text, in order.
pub const FLAGS: [&str; 15] = [
    "authors",
    "check-kafka",
    "db-cleanup",
    "db-drop-tables",
    "db-init",
    "db-init-migration",
    "max-age",
    "migrate",
    "migration-info",
    "new-reports-cleanup",
    "old-reports-cleanup",
    "print-new-reports-for-cleanup",
    "print-old-reports-for-cleanup",
    "show-configuration",
    "version",
];

/// Help block after tab normalization.
pub const HELP_TEXT: &str = "Clowder is not enabled, skipping init...
Usage of ccx-notification-writer:
  -authors
        show authors
  -check-kafka
        check connection to Kafka
  -db-cleanup
        perform database cleanup
  -db-drop-tables
        drop all tables from database
  -db-init
        perform database initialization
  -db-init-migration
        initialize migration
  -max-age string
        max age for displaying/cleaning old records
  -migrate string
        set database version
  -migration-info
        prints migration info
  -new-reports-cleanup
        perform new reports clean up
  -old-reports-cleanup
        perform old reports clean up
  -print-new-reports-for-cleanup
        print new reports to be cleaned up
  -print-old-reports-for-cleanup
        print old reports to be cleaned up
  -show-configuration
        show configuration
  -version
        show version";

/// Normalize help output: tabs become four spaces, outer whitespace goes.
pub fn normalize_help(raw: &str) -> String {
    raw.replace('\t', "    ").trim().to_string()
}
