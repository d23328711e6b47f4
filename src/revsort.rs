// Revsort – Sorts the words of a Hunspell dictionary by suffix
// Copyright (C) 2026  The Revsort authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod dic_entry;
mod errors;
mod report;
mod sources;
mod suffix_sort;
mod tag_index;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::EnvFilter;
use errors::RunError;
use report::{Format, TagOrder};
use sources::Sources;

/// Groups the words of a Hunspell dictionary by tag and sorts each
/// group by the end of the words.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// The path to the .dic file.
    dic_path: PathBuf,

    /// The path to the .aff file.
    aff_path: PathBuf,

    /// The length of the substring at the end of the word to sort.
    #[arg(short, long, default_value_t = 1)]
    length: usize,

    /// How to print the groups.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// The order in which to print the tags.
    #[arg(short, long, value_enum, default_value_t = TagOrder::Alpha)]
    tag_order: TagOrder,

    /// Write the groups to a file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more details to standard error. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn write_output(
    index: &tag_index::TagIndex,
    args: &Args,
) -> Result<(), RunError> {
    match args.output {
        Some(ref path) => {
            let destination = path.display().to_string();

            File::create(path)
                .map_err(errors::ReportError::from)
                .and_then(|file| {
                    report::write_report(
                        index,
                        args.format,
                        args.tag_order,
                        &mut BufWriter::new(file),
                    )
                })
                .map_err(|source| RunError::Report { destination, source })
        },
        None => {
            let stdout = std::io::stdout();

            report::write_report(
                index,
                args.format,
                args.tag_order,
                &mut BufWriter::new(stdout.lock()),
            ).map_err(|source| {
                RunError::Report {
                    destination: "stdout".to_string(),
                    source,
                }
            })
        },
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let sources = Sources::open(&args.dic_path, &args.aff_path)?;
    let dictionary_path = sources.dictionary_path().to_owned();

    info!(
        dictionary = %dictionary_path.display(),
        affixes = %sources.affixes_path().display(),
        length = args.length,
        "reading dictionary"
    );

    let (mut index, stats) = sources.read_tag_index()
        .map_err(|source| {
            RunError::Read { path: dictionary_path.clone(), source }
        })?;

    info!(
        lines = stats.lines,
        entries = stats.entries,
        untagged = stats.untagged,
        tags = index.len(),
        "read dictionary"
    );

    if index.is_empty() {
        warn!(
            dictionary = %dictionary_path.display(),
            "no tagged words found"
        );
    }

    index.sort_by_suffix(args.length);

    write_output(&index, args)
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
