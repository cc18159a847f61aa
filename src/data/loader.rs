use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{BikeDataset, DailyRecord, HourlyRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Default location of the hourly table, relative to the working directory.
pub const HOURLY_PATH: &str = "hour.csv";
/// Default location of the daily table.
pub const DAILY_PATH: &str = "day.csv";

/// Errors the loader can surface. Both are fatal for the session: without the
/// two source tables there is nothing to render.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}, line {line}: {source}")]
    Parse {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Read both CSV tables into a [`BikeDataset`]. Called exactly once at
/// startup; the result is owned read-only by the app state for the whole
/// session, so no further reads or invalidation ever happen.
pub fn load_dataset(hourly_path: &Path, daily_path: &Path) -> Result<BikeDataset, LoadError> {
    let hourly: Vec<HourlyRecord> = read_table(hourly_path)?;
    let daily: Vec<DailyRecord> = read_table(daily_path)?;
    Ok(BikeDataset::new(hourly, daily))
}

// ---------------------------------------------------------------------------
// CSV decoding
// ---------------------------------------------------------------------------

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    rows_from_reader(path, file)
}

/// Decode every row of a headered CSV stream. Columns are matched by header
/// name, so the source files' extra columns pass through untouched. A row
/// that fails to decode (including an unparseable date) aborts the load with
/// the 1-based line number of the offending row.
fn rows_from_reader<T: DeserializeOwned, R: Read>(path: &Path, rdr: R) -> Result<Vec<T>, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: T = result.map_err(|source| {
            let line = source
                .position()
                .map(|p| p.line())
                .unwrap_or_default();
            LoadError::Parse {
                path: path.to_path_buf(),
                line,
                source,
            }
        })?;
        rows.push(row);
    }

    Ok(rows)
}
