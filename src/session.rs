use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]+").expect("url pattern")
});

/// Scan a session-restore snapshot for every embedded URL.
///
/// The whole file is read into memory; session snapshots run from
/// kilobytes to a few megabytes, so a streaming read is not worth the
/// complexity.
pub fn scan_file(path: &Path, scan_utf16: bool) -> Result<HashSet<String>, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut urls = scan_bytes(&bytes);
    if scan_utf16 {
        urls.extend(scan_utf16le(&bytes));
    }
    Ok(urls)
}

/// Collect the distinct URLs embedded in a byte buffer.
///
/// Each byte is widened one-to-one into the codepoint of equal value, so
/// decoding is total over arbitrary binary content. A strict UTF-8 decode
/// would reject most snapshots. Matches are greedy, non-overlapping, left
/// to right; duplicates collapse and order is discarded, since snapshots
/// repeat the same URL across serialized tab-state records.
pub fn scan_bytes(data: &[u8]) -> HashSet<String> {
    let text: String = data.iter().map(|&b| char::from(b)).collect();
    URL_PATTERN
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Collapse UTF-16LE printable runs and scan the collapsed text.
///
/// Chromium stores some session strings as wide characters. Both byte
/// alignments are tried since the snapshot gives no alignment guarantee.
/// Non-printable pairs break a run so matches never span unrelated data.
pub fn scan_utf16le(data: &[u8]) -> HashSet<String> {
    let mut urls = HashSet::new();
    for start in 0..2usize {
        let mut collapsed = String::with_capacity(data.len() / 2);
        let mut i = start;
        while i + 1 < data.len() {
            let (lo, hi) = (data[i], data[i + 1]);
            if hi == 0 && is_printable(lo) {
                collapsed.push(char::from(lo));
            } else {
                collapsed.push('\n');
            }
            i += 2;
        }
        urls.extend(
            URL_PATTERN
                .find_iter(&collapsed)
                .map(|m| m.as_str().to_string()),
        );
    }
    urls
}
