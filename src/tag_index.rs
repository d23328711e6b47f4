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

use std::collections::HashMap;
use std::io::BufRead;
use tracing::{debug, trace};
use super::dic_entry::DictionaryEntry;
use super::errors::ReadError;
use super::suffix_sort;

// Maps each tag to the words that carry it. The tags are also kept in
// the order they were first seen so that every key of the map can be
// visited in a reproducible order.
#[derive(Debug, Default)]
pub struct TagIndex {
    tags: Vec<String>,
    words: HashMap<String, Vec<String>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    pub lines: usize,
    pub entries: usize,
    pub untagged: usize,
}

impl TagIndex {
    pub fn new() -> TagIndex {
        TagIndex::default()
    }

    // Untagged entries are dropped. A tag that appears twice on the
    // same entry adds the word twice and the duplicate is only removed
    // by sort_by_suffix.
    pub fn add_entry(&mut self, entry: &DictionaryEntry) {
        for &tag in entry.tags.iter() {
            match self.words.get_mut(tag) {
                Some(words) => words.push(entry.word.to_string()),
                None => {
                    self.tags.push(tag.to_string());
                    self.words.insert(
                        tag.to_string(),
                        vec![entry.word.to_string()],
                    );
                },
            }
        }
    }

    pub fn read<R: BufRead>(
        reader: R,
    ) -> Result<(TagIndex, ReadStats), ReadError> {
        let mut index = TagIndex::new();
        let mut stats = ReadStats::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| {
                ReadError::Io { line: line_num + 1, source }
            })?;

            stats.lines += 1;

            let Some(entry) = DictionaryEntry::parse(&line)
            else {
                continue;
            };

            stats.entries += 1;

            if !entry.is_tagged() {
                trace!(line = line_num + 1, word = entry.word, "untagged");
                stats.untagged += 1;
                continue;
            }

            trace!(
                line = line_num + 1,
                word = entry.word,
                tags = ?entry.tags,
                "entry"
            );

            index.add_entry(&entry);
        }

        Ok((index, stats))
    }

    pub fn sort_by_suffix(&mut self, sub_len: usize) {
        for tag in self.tags.iter() {
            if let Some(words) = self.words.get_mut(tag) {
                let before = words.len();

                suffix_sort::sort_and_dedup(words, sub_len);

                debug!(
                    tag = tag.as_str(),
                    words = words.len(),
                    duplicates = before - words.len(),
                    "sorted"
                );
            }
        }
    }

    // Tags in the order they were first seen
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn words(&self, tag: &str) -> Option<&[String]> {
        self.words.get(tag).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
