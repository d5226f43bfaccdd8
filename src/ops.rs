use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::history::{self, HistoryRecord};
use crate::output::{self, OutputError};
use crate::session;

/// Extract the distinct URLs embedded in a session snapshot and persist
/// them before returning. Zero matches is a success: an empty output file
/// is written.
pub fn recent_session(cfg: &ExtractConfig) -> Result<HashSet<String>, ExtractError> {
    let urls = session::scan_file(&cfg.source, cfg.scan_utf16)?;
    output::write_urls(&cfg.output, urls.iter().map(String::as_str), cfg.format)
        .map_err(|err| write_failure(&cfg.output, err))?;
    info!(
        "extracted {} urls from session snapshot, saved to {}",
        urls.len(),
        cfg.output.display()
    );
    Ok(urls)
}

/// Extract every visited URL from the History database, most recent
/// first, and persist them before returning.
///
/// A source that is readable but not a usable history database is
/// reported and yields `None`; no output file is written. Unreadable
/// source or unwritable destination still propagate.
pub fn all_history(cfg: &ExtractConfig) -> Result<Option<Vec<HistoryRecord>>, ExtractError> {
    let records = match history::query_history(&cfg.source) {
        Ok(records) => records,
        Err(err) if err.is_recoverable() => {
            warn!("skipping {}: {err}", cfg.source.display());
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    output::write_history(&cfg.output, &records, cfg.format)
        .map_err(|err| write_failure(&cfg.output, err))?;
    info!(
        "extracted {} urls from history database, saved to {}",
        records.len(),
        cfg.output.display()
    );
    Ok(Some(records))
}

fn write_failure(path: &Path, err: OutputError) -> ExtractError {
    match err {
        OutputError::Io(source) => ExtractError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        other => ExtractError::Output(other),
    }
}
