//! stressfilter — filter Bashkir words by stress-placement rules
//!
//! Reads `word index` pairs from the input file, drops every word that
//! matches one of the fixed exclusion rules, and writes the kept lines to
//! the output file.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use stressfilter_cli::filter::{self, FilterReport};
use stressfilter_cli::input::FileReader;
use stressfilter_cli::{output, CliError, CliResult};

/// Filter Bashkir words by stress-placement rules
#[derive(Debug, Parser)]
#[command(name = "stressfilter", version, about)]
struct Cli {
    /// Input file with one "word index" pair per line
    input: PathBuf,

    /// Output file for the kept lines
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            println!("Processing finished successfully!");
            println!("Total words kept: {}", report.kept.len());
        }
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(not_found @ CliError::FileNotFound(_)) => println!("Error: {not_found}"),
                _ => println!("Error while processing: {err:#}"),
            }
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> CliResult<FilterReport> {
    log::info!(
        "filtering {} into {}",
        cli.input.display(),
        cli.output.display()
    );

    let content = FileReader::read_text(&cli.input)?;
    let report = filter::filter_content(&content);

    log::debug!(
        "kept {} lines, excluded {}, skipped {}",
        report.kept.len(),
        report.excluded,
        report.skipped
    );

    output::write_lines(&cli.output, &report.kept)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_parse() {
        let cli = Cli::parse_from(["stressfilter", "in.txt", "out.txt"]);
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
