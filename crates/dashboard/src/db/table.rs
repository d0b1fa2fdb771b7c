//! CSV-backed table with whole-file read-modify-write.

use std::fmt::Display;
use std::fs::File;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::RepositoryError;

/// One table file holding records of type `R`, in file order.
pub struct CsvTable<R> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R> CsvTable<R>
where
    R: Serialize + DeserializeOwned,
{
    /// Create a table over `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// The table file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` or `RepositoryError::Csv` if the file
    /// cannot be read or a row does not fit the record type. Record types
    /// keep numeric cells as text; repositories parse them row by row.
    pub fn load(&self) -> Result<Vec<R>, RepositoryError> {
        let _guard = self.lock.lock();
        self.read_all()
    }

    /// Replace the table contents with `records`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` or `RepositoryError::Csv` if the file
    /// cannot be written.
    pub fn save(&self, records: &[R]) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock();
        self.write_all(records)
    }

    /// Load the table, let `f` change it, and write it back.
    ///
    /// The table lock is held for the whole cycle. If `f` fails nothing is
    /// written and its error is returned.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or a `RepositoryError` converted into `E`
    /// if reading or writing fails.
    pub fn modify<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<R>) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let _guard = self.lock.lock();
        let mut records = self.read_all()?;
        let out = f(&mut records)?;
        self.write_all(&records)?;
        Ok(out)
    }

    fn read_all(&self) -> Result<Vec<R>, RepositoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let mut records: Vec<R> = Vec::new();
        for row in reader.deserialize::<R>() {
            records.push(row?);
        }
        Ok(records)
    }

    fn write_all(&self, records: &[R]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp_path)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        std::fs::rename(&tmp_path, &self.path)?;

        tracing::trace!(path = %self.path.display(), rows = records.len(), "Table written");
        Ok(())
    }
}

/// Parse a raw cell, reading a blank cell as the default value.
///
/// # Errors
///
/// Returns a message naming the column and the value if a non-blank cell
/// does not parse. Callers add the row and wrap it as data corruption.
pub(crate) fn parse_cell<T>(cell: &str, column: &str) -> Result<T, String>
where
    T: FromStr + Default,
    T::Err: Display,
{
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(T::default());
    }
    cell.parse().map_err(|e| format!("{column} {cell:?}: {e}"))
}

/// Split a comma-joined cell into its non-blank entries.
pub(crate) fn split_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join entries into one comma-separated cell.
pub(crate) fn join_list(values: &[String]) -> String {
    values.join(",")
}
