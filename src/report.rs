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

use std::io::Write;
use clap::ValueEnum;
use serde::Serialize;
use super::errors::ReportError;
use super::tag_index::TagIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    // TAG: word word word
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TagOrder {
    #[default]
    Alpha,
    FirstSeen,
}

#[derive(Serialize)]
struct TagEntry<'a> {
    tag: &'a str,
    words: &'a [String],
}

pub fn ordered_tags(index: &TagIndex, order: TagOrder) -> Vec<&str> {
    let mut tags = index.tags().collect::<Vec<&str>>();

    if order == TagOrder::Alpha {
        tags.sort_unstable();
    }

    tags
}

fn entries(index: &TagIndex, order: TagOrder) -> Vec<TagEntry<'_>> {
    ordered_tags(index, order).into_iter()
        .filter_map(|tag| {
            index.words(tag).map(|words| TagEntry { tag, words })
        })
        .collect()
}

fn write_text(
    entries: &[TagEntry],
    output: &mut impl Write,
) -> std::io::Result<()> {
    for entry in entries.iter() {
        write!(output, "{}:", entry.tag)?;

        for word in entry.words.iter() {
            write!(output, " {}", word)?;
        }

        writeln!(output)?;
    }

    Ok(())
}

fn write_json(
    entries: &[TagEntry],
    output: &mut impl Write,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *output, entries)?;
    writeln!(output)?;

    Ok(())
}

pub fn write_report(
    index: &TagIndex,
    format: Format,
    order: TagOrder,
    output: &mut impl Write,
) -> Result<(), ReportError> {
    let entries = entries(index, order);

    match format {
        Format::Text => write_text(&entries, output)?,
        Format::Json => write_json(&entries, output)?,
    }

    output.flush()?;

    Ok(())
}
