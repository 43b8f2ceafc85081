//! Line-by-line filtering pipeline
//!
//! Turns raw input text into the kept-line report: each non-blank line is
//! parsed into a word record and passed to the rule engine; lines the
//! engine does not exclude are kept verbatim. Malformed lines are skipped
//! with a printed warning and never abort the run.

use stressfilter_core::{should_exclude, WordRecord};

/// Outcome of one filtering run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Lines whose word matched no exclusion rule, in input order.
    pub kept: Vec<String>,
    /// Malformed lines that were skipped with a warning.
    pub skipped: usize,
    /// Well-formed lines removed by an exclusion rule.
    pub excluded: usize,
}

/// Filter the whole input text.
///
/// Blank lines are skipped silently. Kept lines are stored trimmed but
/// otherwise verbatim, preserving the original casing and the whitespace
/// between the two tokens.
pub fn filter_content(content: &str) -> FilterReport {
    let mut report = FilterReport::default();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match WordRecord::parse(line) {
            Ok(record) => {
                if should_exclude(&record.word, record.index) {
                    log::debug!("excluded: {line}");
                    report.excluded += 1;
                } else {
                    report.kept.push(line.to_string());
                }
            }
            Err(err) => {
                log::warn!("{err}");
                println!("Warning: {err}, skipping");
                report.skipped += 1;
            }
        }
    }

    report
}
