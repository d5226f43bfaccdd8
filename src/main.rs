use anyhow::Result;
use tracing::info;

use edgesift::cli::{self, ExtractMode};
use edgesift::config::ExtractConfig;
use edgesift::logging;
use edgesift::ops;

fn main() -> Result<()> {
    logging::init_logging();

    let cli_opts = cli::parse();
    let cfg = ExtractConfig::from_cli(&cli_opts);

    info!(
        "starting mode={:?} input={} output={}",
        cli_opts.mode,
        cfg.source.display(),
        cfg.output.display()
    );

    match cli_opts.mode {
        ExtractMode::Session => {
            ops::recent_session(&cfg)?;
        }
        ExtractMode::History => {
            ops::all_history(&cfg)?;
        }
    }

    Ok(())
}
