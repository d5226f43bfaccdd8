use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Scan a raw session-restore snapshot for embedded URL text
    Session,
    /// Query the History database for all visited URLs
    History,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Jsonl,
    Csv,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// Session snapshot or History database to read
    #[arg(short, long)]
    pub input: String,

    /// Destination file for extracted URLs
    #[arg(short, long, default_value = "./urls.txt")]
    pub output: String,

    /// Extraction mode
    #[arg(short, long, value_enum)]
    pub mode: ExtractMode,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also scan for UTF-16LE encoded URLs (session mode only)
    #[arg(long)]
    pub scan_utf16: bool,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
