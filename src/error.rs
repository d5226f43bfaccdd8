use std::path::PathBuf;

use thiserror::Error;

use crate::output::OutputError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot access {}: {}", path.display(), source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a usable history database: {0}")]
    DataSource(#[from] rusqlite::Error),
    #[error("history database is missing {what}")]
    SchemaMismatch { what: String },
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

impl ExtractError {
    /// True for the failure class `all_history` degrades gracefully on:
    /// the source file is readable but is not a history database.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataSource(_) | Self::SchemaMismatch { .. })
    }
}
