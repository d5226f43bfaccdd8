use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::history::HistoryRecord;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Jsonl,
    Csv,
}

#[derive(Serialize)]
struct UrlRow<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    url: &'a str,
    visit_time: Option<chrono::NaiveDateTime>,
}

/// Write URLs to `path` in iteration order, replacing any existing file.
///
/// The text format is one URL per line with a single trailing newline.
/// Bytes already flushed stay on disk if a later write fails.
pub fn write_urls<'a, I>(path: &Path, urls: I, format: OutputFormat) -> Result<(), OutputError>
where
    I: IntoIterator<Item = &'a str>,
{
    match format {
        OutputFormat::Text => write_text(path, urls),
        OutputFormat::Jsonl => write_jsonl(path, urls.into_iter().map(|url| UrlRow { url })),
        OutputFormat::Csv => write_csv(path, urls.into_iter().map(|url| UrlRow { url })),
    }
}

/// Write history records; structured formats carry the decoded visit time
/// alongside each URL, the text format stays URL-only.
pub fn write_history(
    path: &Path,
    records: &[HistoryRecord],
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => write_text(path, records.iter().map(|r| r.url.as_str())),
        OutputFormat::Jsonl => write_jsonl(
            path,
            records.iter().map(|r| HistoryRow {
                url: &r.url,
                visit_time: r.visit_time,
            }),
        ),
        OutputFormat::Csv => write_csv(
            path,
            records.iter().map(|r| HistoryRow {
                url: &r.url,
                visit_time: r.visit_time,
            }),
        ),
    }
}

fn write_text<'a, I>(path: &Path, urls: I) -> Result<(), OutputError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for url in urls {
        writeln!(writer, "{url}")?;
    }
    writer.flush()?;
    Ok(())
}

fn write_jsonl<T, I>(path: &Path, rows: I) -> Result<(), OutputError>
where
    T: Serialize,
    I: Iterator<Item = T>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for row in rows {
        serde_json::to_writer(&mut writer, &row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn write_csv<T, I>(path: &Path, rows: I) -> Result<(), OutputError>
where
    T: Serialize,
    I: Iterator<Item = T>,
{
    let mut writer = csv::Writer::from_writer(File::create(path)?);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_one_url_per_line() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("urls.txt");
        write_urls(&path, ["http://x", "http://y"], OutputFormat::Text).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        assert_eq!(content, "http://x\nhttp://y\n");
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("urls.txt");
        write_urls(
            &path,
            ["http://a", "http://b", "http://c"],
            OutputFormat::Text,
        )
        .expect("first write");
        write_urls(&path, ["http://z"], OutputFormat::Text).expect("second write");

        let content = std::fs::read_to_string(&path).expect("read");
        assert_eq!(content, "http://z\n");
    }

    #[test]
    fn empty_input_writes_empty_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("urls.txt");
        write_urls(&path, std::iter::empty::<&str>(), OutputFormat::Text).expect("write");

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "");
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("urls.txt");
        let err = write_urls(&path, ["http://x"], OutputFormat::Text).expect_err("io error");
        assert!(matches!(err, OutputError::Io(_)));
    }

    #[test]
    fn jsonl_rows_parse_back() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("urls.jsonl");
        write_urls(&path, ["http://x", "http://y"], OutputFormat::Jsonl).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        let urls: Vec<String> = content
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).expect("json");
                value["url"].as_str().expect("url").to_string()
            })
            .collect();
        assert_eq!(urls, ["http://x", "http://y"]);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("urls.csv");
        write_urls(&path, ["http://x"], OutputFormat::Csv).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("url"));
        assert_eq!(lines.next(), Some("http://x"));
    }
}
