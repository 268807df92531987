// Club roster exports -> set of canonical club player names
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::roster::canonical_csv_name;
use crate::types::ClubCsvError;

/// Title/export-date rows above the real header in every club export
pub const METADATA_ROWS: usize = 3;
pub const STATUS_COLUMN: &str = "Status";
pub const PERSON_COLUMN: &str = "Person";
pub const ACTIVE_STATUS: &str = "OK";

/// Canonical lowercase "first last" names of everyone treated as a club player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClubPlayerSet(BTreeSet<String>);

impl ClubPlayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Elite-team players count as club players on every other team
    pub fn promote<'a, I>(&mut self, elite_players: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.0.extend(elite_players.into_iter().cloned());
    }
}

impl Extend<String> for ClubPlayerSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<S: Into<String>> FromIterator<S> for ClubPlayerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Active members of one club export
pub fn load_club_csv(path: &Path) -> Result<Vec<String>, ClubCsvError> {
    let file = fs::File::open(path).map_err(|source| ClubCsvError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_club_roster(file, path)
}

/// Skip the metadata rows, find `Status` and `Person` in the header, keep
/// the canonical names of rows whose status is `OK`.
///
/// A missing column rejects the whole export. A row too short to hold
/// either column is skipped with a warning.
pub fn read_club_roster<R: Read>(mut reader: R, source: &Path) -> Result<Vec<String>, ClubCsvError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(|e| ClubCsvError::Open {
        path: source.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8_lossy(&raw);
    let text = text.trim_start_matches('\u{feff}');
    let table = skip_lines(text, METADATA_ROWS);

    let csv_err = |e| ClubCsvError::Csv { path: source.to_path_buf(), source: e };

    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(table.as_bytes());

    let headers = csv_reader.headers().map_err(csv_err)?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ClubCsvError::MissingColumn { path: source.to_path_buf(), column: name })
    };
    let status_idx = column(STATUS_COLUMN)?;
    let person_idx = column(PERSON_COLUMN)?;

    let mut names = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(csv_err)?;
        let (Some(status), Some(person)) = (record.get(status_idx), record.get(person_idx)) else {
            warn!("{}: data row {} is missing Status/Person, skipped", source.display(), row + 1);
            continue;
        };
        if !status.trim().eq_ignore_ascii_case(ACTIVE_STATUS) {
            continue;
        }
        if person.trim().is_empty() {
            warn!("{}: data row {} has no Person, skipped", source.display(), row + 1);
            continue;
        }
        names.push(canonical_csv_name(person));
    }

    info!("loaded {} active club players from {}", names.len(), source.display());
    Ok(names)
}

fn skip_lines(text: &str, count: usize) -> &str {
    let mut rest = text;
    for _ in 0..count {
        match rest.find('\n') {
            Some(i) => rest = &rest[i + 1..],
            None => return "",
        }
    }
    rest
}

/// Union of every export. The first unreadable file aborts the load.
pub fn load_club_set(paths: &[PathBuf]) -> Result<ClubPlayerSet, ClubCsvError> {
    let mut club = ClubPlayerSet::new();
    for path in paths {
        club.extend(load_club_csv(path)?);
    }
    Ok(club)
}
