use std::path::PathBuf;

use crate::cli::CliOptions;
use crate::output::OutputFormat;

/// Immutable per-run configuration, built once from the CLI and passed by
/// reference into each operation.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub scan_utf16: bool,
}

impl ExtractConfig {
    pub fn from_cli(opts: &CliOptions) -> Self {
        Self {
            source: sanitize_path(&opts.input),
            output: sanitize_path(&opts.output),
            format: format_from_cli(opts.format),
            scan_utf16: opts.scan_utf16,
        }
    }
}

/// Convert CLI output format to the internal enum
pub fn format_from_cli(format: crate::cli::OutputFormat) -> OutputFormat {
    match format {
        crate::cli::OutputFormat::Text => OutputFormat::Text,
        crate::cli::OutputFormat::Jsonl => OutputFormat::Jsonl,
        crate::cli::OutputFormat::Csv => OutputFormat::Csv,
    }
}

/// Strip whitespace and surrounding quote characters from a path argument.
///
/// "Copy as path" on Windows wraps the path in double quotes; shells leave
/// stray whitespace. Both would otherwise end up in the opened path.
pub fn sanitize_path(raw: &str) -> PathBuf {
    let cleaned = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    PathBuf::from(cleaned)
}

#[cfg(test)]
mod tests {
    use super::sanitize_path;
    use std::path::PathBuf;

    #[test]
    fn strips_quotes_and_whitespace() {
        assert_eq!(
            sanitize_path("  \"C:\\Users\\me\\Sessions\\Session_123\"  "),
            PathBuf::from("C:\\Users\\me\\Sessions\\Session_123")
        );
        assert_eq!(
            sanitize_path("'/home/me/History'"),
            PathBuf::from("/home/me/History")
        );
    }

    #[test]
    fn leaves_clean_paths_alone() {
        assert_eq!(
            sanitize_path("/home/me/History"),
            PathBuf::from("/home/me/History")
        );
    }
}
