use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Default decision-log file name, created in the working directory.
pub const DEFAULT_DECISION_LOG: &str = "decisions.log";

/// Append-only, human-readable record of every removal. The file is
/// opened, appended and closed per write; nothing reads it back.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AuditLog { path: path.into() }
    }

    pub fn record_removal(&self, title: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\nTitle    : {}\n\tRemoving : true\n", title)
    }
}
