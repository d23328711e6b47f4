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

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: .dic file not found", .0.display())]
    MissingDictionary(PathBuf),
    #[error("{}: .aff file not found", .0.display())]
    MissingAffixes(PathBuf),
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReadError {
    // Line numbers count from 1
    #[error("line {line}: {source}")]
    Io {
        line: usize,
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: ReadError,
    },
    #[error("{destination}: {source}")]
    Report {
        destination: String,
        source: ReportError,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            LoadError::MissingDictionary("uz.dic".into()).to_string(),
            "uz.dic: .dic file not found",
        );
        assert_eq!(
            LoadError::MissingAffixes("uz.aff".into()).to_string(),
            "uz.aff: .aff file not found",
        );

        let error = RunError::Read {
            path: "uz.dic".into(),
            source: ReadError::Io {
                line: 4,
                source: io::Error::new(io::ErrorKind::InvalidData, "bad"),
            },
        };

        assert_eq!(error.to_string(), "uz.dic: line 4: bad");
    }
}
