use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("{0}")]
    Pattern(#[from] thompson::PatternError),

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Distinct non-zero exit codes per spec §6: usage errors, malformed
    /// patterns, and malformed/unreadable files each get their own code.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Pattern(_) => 3,
            CliError::Read { .. } | CliError::Write { .. } => 4,
        }
    }
}
