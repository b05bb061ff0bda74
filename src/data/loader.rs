use std::cell::{Cell, OnceCell};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, UsageRecord, AREA, VALUE, YEAR};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons the source table could not be turned into a [`Dataset`].
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error("line {line}: column '{column}' has invalid value '{value}'")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// DatasetStore – read-once cache handed to the views
// ---------------------------------------------------------------------------

/// Owns the path of the source table and the table itself once loaded.
///
/// The first successful [`DatasetStore::load`] reads and parses the file; every
/// later call returns the same in-memory [`Dataset`]. A failed load is not
/// cached, so the next call tries the file again.
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    cache: OnceCell<Dataset>,
    reads: Cell<usize>,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
            reads: Cell::new(0),
        }
    }

    /// Return the cached dataset, loading it from disk on first use.
    pub fn load(&self) -> Result<&Dataset, DataLoadError> {
        if let Some(ds) = self.cache.get() {
            return Ok(ds);
        }
        self.reads.set(self.reads.get() + 1);
        log::debug!("Reading {} (attempt {})", self.path.display(), self.reads.get());
        let dataset = load_file(&self.path)?;
        log::info!(
            "Loaded {} rows ({} areas, columns {:?}) from {}",
            dataset.len(),
            dataset.areas.len(),
            dataset.columns,
            self.path.display()
        );
        Ok(self.cache.get_or_init(|| dataset))
    }

    /// How many times the backing file has been opened.
    #[cfg(test)]
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a usage table from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file)
}

/// CSV layout: header row with column names, at least `Area`, `Year` and
/// `Value`. Every other column is kept as raw text in [`UsageRecord::extra`].
pub fn parse_csv<R: Read>(input: R) -> Result<Dataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let position = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataLoadError::MissingColumn(name))
    };
    let area_idx = position(AREA)?;
    let year_idx = position(YEAR)?;
    let value_idx = position(VALUE)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_no as u64 + 2);
        let invalid = |column: &'static str, value: &str| DataLoadError::InvalidField {
            line,
            column,
            value: value.to_string(),
        };

        let area = record.get(area_idx).unwrap_or("").trim();
        if area.is_empty() {
            return Err(invalid(AREA, area));
        }

        let raw_year = record.get(year_idx).unwrap_or("");
        let year: i32 = raw_year
            .trim()
            .parse()
            .map_err(|_| invalid(YEAR, raw_year))?;

        let raw_value = record.get(value_idx).unwrap_or("");
        let value: f64 = raw_value
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| invalid(VALUE, raw_value))?;

        let mut extra = BTreeMap::new();
        for (col_idx, cell) in record.iter().enumerate() {
            if col_idx == area_idx || col_idx == year_idx || col_idx == value_idx {
                continue;
            }
            if let Some(name) = headers.get(col_idx) {
                extra.insert(name.clone(), cell.to_string());
            }
        }

        records.push(UsageRecord {
            area: area.to_string(),
            year,
            value,
            extra,
        });
    }

    Ok(Dataset::from_records(headers, records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FAO_SAMPLE: &str = "\
Domain,Area,Element,Item,Year,Unit,Value
Pesticides Use,Albania,Use,Pesticides (total),1990,tonnes of active ingredients,121
Pesticides Use,Albania,Use,Pesticides (total),1991,tonnes of active ingredients,121
Pesticides Use,Algeria,Use,Pesticides (total),1990,tonnes of active ingredients,1828.92
";

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn parses_typed_columns_and_keeps_extras() {
        let ds = parse_csv(FAO_SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.columns,
            vec!["Domain", "Area", "Element", "Item", "Year", "Unit", "Value"]
        );
        let rec = &ds.records[2];
        assert_eq!(rec.area, "Algeria");
        assert_eq!(rec.year, 1990);
        assert!((rec.value - 1828.92).abs() < 1e-9);
        assert_eq!(rec.extra.get("Unit").map(String::as_str), Some("tonnes of active ingredients"));
        assert!(!rec.extra.contains_key(AREA));
        assert_eq!(ds.areas, vec!["Albania", "Algeria"]);
        assert_eq!(ds.year_bounds, Some((1990, 1991)));
    }

    #[test]
    fn strips_byte_order_mark() {
        let input = "\u{feff}Area,Year,Value\nX,2000,1\n";
        let ds = parse_csv(input.as_bytes()).unwrap();
        assert_eq!(ds.columns[0], "Area");
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn missing_column_is_rejected() {
        let err = parse_csv("Area,Year\nX,2000\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Value")));
    }

    #[test]
    fn non_numeric_value_fails_the_load() {
        let err = parse_csv("Area,Year,Value\nX,2000,lots\n".as_bytes()).unwrap_err();
        match err {
            DataLoadError::InvalidField { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, VALUE);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fractional_year_fails_the_load() {
        let err = parse_csv("Area,Year,Value\nX,2000.5,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidField { column: "Year", .. }));
    }

    #[test]
    fn empty_area_fails_the_load() {
        let err = parse_csv("Area,Year,Value\n ,2000,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidField { column: "Area", .. }));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let err = parse_csv("Area,Year,Value\nX,2000\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("absent.csv"));
        assert!(matches!(store.load(), Err(DataLoadError::Io { .. })));
        assert_eq!(store.reads(), 1);
    }

    #[test]
    fn store_reads_file_once() {
        let file = write_fixture(FAO_SAMPLE);
        let store = DatasetStore::new(file.path());

        let first = store.load().unwrap() as *const Dataset;
        let first_rows = store.load().unwrap().records.clone();

        // The cached table survives the source disappearing.
        let path = file.path().to_path_buf();
        file.close().unwrap();
        assert!(!path.exists());

        let second = store.load().unwrap();
        assert_eq!(second as *const Dataset, first);
        assert_eq!(second.records, first_rows);
        assert_eq!(store.reads(), 1);
    }

    #[test]
    fn failed_load_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");
        let store = DatasetStore::new(&path);
        assert!(store.load().is_err());

        std::fs::write(&path, "Area,Year,Value\nX,2000,1\n").unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        assert_eq!(store.reads(), 2);
    }
}
