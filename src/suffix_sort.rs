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

use std::collections::HashSet;

// Returns the last sub_len characters of the word, or the whole word
// if it is shorter than that
pub fn suffix_key(word: &str, sub_len: usize) -> &str {
    if sub_len == 0 {
        return "";
    }

    match word.char_indices().rev().nth(sub_len - 1) {
        Some((pos, _)) => &word[pos..],
        None => word,
    }
}

// Sorts the words by their suffix key and removes any duplicates. The
// sort is stable so words with the same key stay in the order they
// were added. When a word appears more than once the first one in the
// sorted order is kept.
pub fn sort_and_dedup(words: &mut Vec<String>, sub_len: usize) {
    words.sort_by(|a, b| {
        suffix_key(a, sub_len).cmp(suffix_key(b, sub_len))
    });

    let mut seen = HashSet::<String>::with_capacity(words.len());

    words.retain(|word| seen.insert(word.clone()));
}
