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

// A line of a .dic file has the form word[/tag1/tag2/...]. Nothing
// in the line is interpreted beyond splitting on the slashes, so
// empty words and empty tags are kept as they are.

const TAG_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry<'a> {
    pub word: &'a str,
    pub tags: Vec<&'a str>,
}

impl<'a> DictionaryEntry<'a> {
    // Returns None if the line is blank
    pub fn parse(line: &'a str) -> Option<DictionaryEntry<'a>> {
        let line = line.trim();

        if line.is_empty() {
            return None;
        }

        let mut parts = line.split(TAG_SEPARATOR);
        // split always yields at least one part
        let word = parts.next().unwrap_or("");

        Some(DictionaryEntry {
            word,
            tags: parts.collect(),
        })
    }

    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(DictionaryEntry::parse(""), None);
        assert_eq!(DictionaryEntry::parse("   "), None);
        assert_eq!(DictionaryEntry::parse("\t\r"), None);
    }

    #[test]
    fn tags() {
        let entry = DictionaryEntry::parse("  running/VERB/PRES\r").unwrap();
        assert_eq!(entry.word, "running");
        assert_eq!(&entry.tags, &["VERB", "PRES"]);
        assert!(entry.is_tagged());

        let entry = DictionaryEntry::parse("olma/NOUN/NOUN").unwrap();
        assert_eq!(entry.word, "olma");
        assert_eq!(&entry.tags, &["NOUN", "NOUN"]);
    }

    #[test]
    fn untagged() {
        let entry = DictionaryEntry::parse("kitob").unwrap();
        assert_eq!(entry.word, "kitob");
        assert!(entry.tags.is_empty());
        assert!(!entry.is_tagged());

        // The word count at the top of a Hunspell dictionary
        let entry = DictionaryEntry::parse("3").unwrap();
        assert!(!entry.is_tagged());
    }

    #[test]
    fn odd_structure() {
        let entry = DictionaryEntry::parse("/TAG").unwrap();
        assert_eq!(entry.word, "");
        assert_eq!(&entry.tags, &["TAG"]);

        let entry = DictionaryEntry::parse("word//TAG").unwrap();
        assert_eq!(&entry.tags, &["", "TAG"]);

        let entry = DictionaryEntry::parse("word/").unwrap();
        assert_eq!(&entry.tags, &[""]);
    }
}
