//! Output writing

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the kept lines to `path`, one per line, newline-terminated.
///
/// The file is created (or truncated) only here, after the whole input has
/// already been consumed, and is flushed before the handle is dropped.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{line}")
            .with_context(|| format!("Failed to write to: {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;

    Ok(())
}
