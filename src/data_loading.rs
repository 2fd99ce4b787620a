//! Reads `people.csv`, `movies.csv` and `stars.csv` from a data directory.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::records::{MovieRow, PersonRow, RecordStore, StarRow};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

/// Directory used when the caller does not name one.
pub const DEFAULT_DIRECTORY: &str = "large";

pub fn load_data(directory: &Path) -> Result<RecordStore> {
    let people: Vec<PersonRow> = parse_csv(&directory.join(PEOPLE_FILE))?;
    let movies: Vec<MovieRow> = parse_csv(&directory.join(MOVIES_FILE))?;
    let stars: Vec<StarRow> = parse_csv(&directory.join(STARS_FILE))?;
    Ok(RecordStore::from_rows(people, movies, stars))
}

/// Deserializes every row of a headed CSV file. Columns are matched by header name.
pub fn parse_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let shown = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::io(&shown, e))?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| Error::csv(&shown, e))?;
    debug!(path = %shown, rows = rows.len(), "parsed csv");
    Ok(rows)
}
