//! # edgesift
//!
//! Extracts visited URLs from Microsoft Edge browser artifacts. Two
//! sources are supported: raw session-restore snapshots (scanned byte by
//! byte for embedded URL text) and the `History` SQLite database (queried
//! by descending last-visit time). Results are written to a text file,
//! one URL per line.

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod ops;
pub mod output;
pub mod session;
