use std::io::{self, Write};

use crate::{
    bytes::format::format_size,
    config::Config,
    file_system::entry::{total_size, FileEntry},
};

const SEPARATOR_WIDTH: usize = 60;
const SIZE_WIDTH: usize = 10;

/// Renders the full report. `entries` must already be sorted.
pub fn make_report(config: &Config, entries: &[FileEntry]) -> String {
    let sep = "=".repeat(SEPARATOR_WIDTH);
    let mut report = String::new();

    report.push_str(&format!(
        "Files larger than {}MB in {}:\n",
        config.threshold_mb, config.dir
    ));
    report.push_str(&sep);
    report.push('\n');

    for fe in entries {
        report.push_str(&format!(
            "{size:>width$} {path}\n",
            size = format_size(fe.size.into()),
            width = SIZE_WIDTH,
            path = fe.path.display(),
        ));
    }

    report.push_str(&sep);
    report.push('\n');
    report.push_str(&format!("Total: {} large files\n", entries.len()));
    report.push_str(&format!(
        "Combined size: {}\n",
        format_size(total_size(entries))
    ));

    report
}

pub fn print_report(config: &Config, entries: &[FileEntry]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(make_report(config, entries).as_bytes())?;
    stdout.flush()
}
