mod bytes;
mod cli;
mod config;
mod file_system;
mod output;

use std::path::Path;

use crate::{
    config::Config,
    file_system::{entry::sort_entries, scan::find_large_files},
    output::report::print_report,
};

/// Skipped entries are logged at `debug` and the scan summary at `info`.
/// Both stay compiled in but are filtered out: the report promises a silent
/// best-effort scan, so only `warn` and above ever reach stderr.
fn main() -> anyhow::Result<()> {
    // Stdout carries the report, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse(std::env::args_os())?;
    tracing::debug!("{config:?}");

    let mut entries = find_large_files(Path::new(&config.dir), config.threshold_bytes())?;
    sort_entries(&mut entries);

    print_report(&config, &entries)?;

    Ok(())
}
