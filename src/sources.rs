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

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;
use super::errors::{LoadError, ReadError};
use super::tag_index::{ReadStats, TagIndex};

// The dictionary and affix files, opened together. Both are closed
// when the dictionary has been read, whether or not reading succeeds.
// The affix file is only held open. Nothing reads its contents yet.
pub struct Sources {
    dictionary_path: PathBuf,
    dictionary: BufReader<File>,
    affixes_path: PathBuf,
    affixes: File,
}

fn open_file(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| {
        LoadError::Open { path: path.to_owned(), source }
    })
}

impl Sources {
    // Both paths are checked before either file is opened
    pub fn open(
        dictionary_path: &Path,
        affixes_path: &Path,
    ) -> Result<Sources, LoadError> {
        if !dictionary_path.is_file() {
            return Err(LoadError::MissingDictionary(
                dictionary_path.to_owned()
            ));
        }

        if !affixes_path.is_file() {
            return Err(LoadError::MissingAffixes(affixes_path.to_owned()));
        }

        let dictionary = BufReader::new(open_file(dictionary_path)?);
        let affixes = open_file(affixes_path)?;

        debug!(
            dictionary = %dictionary_path.display(),
            affixes = %affixes_path.display(),
            "opened sources"
        );

        Ok(Sources {
            dictionary_path: dictionary_path.to_owned(),
            dictionary,
            affixes_path: affixes_path.to_owned(),
            affixes,
        })
    }

    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary_path
    }

    pub fn affixes_path(&self) -> &Path {
        &self.affixes_path
    }

    pub fn read_tag_index(self) -> Result<(TagIndex, ReadStats), ReadError> {
        let Sources { dictionary, affixes, .. } = self;

        let result = TagIndex::read(dictionary);

        drop(affixes);

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_dictionary() {
        let dir = TempDir::new().unwrap();
        let aff = write_file(&dir, "uz.aff", "SET UTF-8\n");
        let dic = dir.path().join("uz.dic");

        match Sources::open(&dic, &aff) {
            Err(LoadError::MissingDictionary(path)) => assert_eq!(path, dic),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("missing dictionary was opened"),
        }
    }

    #[test]
    fn missing_affixes() {
        let dir = TempDir::new().unwrap();
        let dic = write_file(&dir, "uz.dic", "kitob/NOUN\n");
        let aff = dir.path().join("uz.aff");

        match Sources::open(&dic, &aff) {
            Err(LoadError::MissingAffixes(path)) => assert_eq!(path, aff),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("missing affix file was opened"),
        }
    }

    #[test]
    fn both_missing() {
        let dir = TempDir::new().unwrap();
        let dic = dir.path().join("uz.dic");
        let aff = dir.path().join("uz.aff");

        // The dictionary is checked first
        assert!(matches!(
            Sources::open(&dic, &aff),
            Err(LoadError::MissingDictionary(_)),
        ));
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let aff = write_file(&dir, "uz.aff", "");

        assert!(matches!(
            Sources::open(dir.path(), &aff),
            Err(LoadError::MissingDictionary(_)),
        ));
    }

    #[test]
    fn read() {
        let dir = TempDir::new().unwrap();
        let dic = write_file(
            &dir,
            "uz.dic",
            "3\nkitob/NOUN\n\nolma/NOUN/ROOT\nva\n",
        );
        let aff = write_file(&dir, "uz.aff", "SFX A Y 1\n");

        let sources = Sources::open(&dic, &aff).unwrap();

        assert_eq!(sources.dictionary_path(), dic);
        assert_eq!(sources.affixes_path(), aff);

        let (index, stats) = sources.read_tag_index().unwrap();

        assert_eq!(stats.lines, 5);
        assert_eq!(stats.entries, 4);
        assert_eq!(stats.untagged, 2);
        assert_eq!(index.words("NOUN").unwrap(), &["kitob", "olma"]);
        assert_eq!(index.words("ROOT").unwrap(), &["olma"]);
    }
}
