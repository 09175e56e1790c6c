//! Spreadsheet ingestion.
//!
//! Loads the first worksheet of a workbook (xlsx, xlsm, xlsb, xls, ods) or a
//! delimited text file (csv, tsv) into an immutable [`RecordSet`]. The first
//! row is the header; every following row is a record.
//!
//! Header naming follows dataframe conventions so column names are always
//! unique and non-empty (surrounding whitespace is kept as-is):
//! - a blank header cell at index `i` becomes `Unnamed: i`
//! - repeated names become `name`, `name.1`, `name.2`, ...
//!
//! Fully blank rows are skipped. Empty strings are treated as missing cells.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::io::Read;

use calamine::{Data, Range, Reader, open_workbook_auto};
use camino::Utf8Path;

use crate::error::{IngestError, IngestResult};

/// Default maximum spreadsheet size in bytes (50 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 50 * 1024 * 1024;

/// Workbook extensions handled by the workbook reader.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value (blank cell, empty string, or workbook error cell).
    Empty,
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
}

impl Cell {
    /// Whether this cell counts as missing.
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Textual form of the cell, with missing values coerced to `""`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Empty => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Textual form of the cell, or `None` when it is missing.
    pub fn value(&self) -> Option<Cow<'_, str>> {
        if self.is_missing() {
            None
        } else {
            Some(self.as_text())
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Self::Empty
        } else {
            Self::Text(s.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.is_empty() { Self::Empty } else { Self::Text(s) }
    }
}

impl From<Option<&str>> for Cell {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Self::Empty, Self::from)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self::Empty,
            Data::String(s) => Self::from(s.as_str()),
            Data::Float(f) => Self::Number(*f),
            #[allow(clippy::cast_precision_loss)]
            Data::Int(i) => Self::Number(*i as f64),
            Data::Bool(b) => Self::Bool(*b),
            other => Self::from(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write_number(f, *n),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
        }
    }
}

/// Whole numbers print without a fractional part (`3`, not `3.0`).
#[allow(clippy::cast_possible_truncation)]
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

/// The full in-memory table loaded from one spreadsheet.
///
/// Immutable once built: every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RecordSet {
    /// Load a spreadsheet from disk, choosing the reader by file extension.
    ///
    /// When `max_bytes` is set, the file size is checked before anything is
    /// read into memory.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_path(path: &Utf8Path, max_bytes: Option<u64>) -> IngestResult<Self> {
        let metadata = std::fs::metadata(path.as_std_path()).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(limit) = max_bytes
            && metadata.len() > limit
        {
            return Err(IngestError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let extension = path.extension().map(str::to_ascii_lowercase);
        let records = match extension.as_deref() {
            Some("csv") => Self::from_delimited(open(path)?, b',')?,
            Some("tsv") => Self::from_delimited(open(path)?, b'\t')?,
            Some(ext) if WORKBOOK_EXTENSIONS.contains(&ext) => Self::from_workbook(path)?,
            _ => {
                return Err(IngestError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        tracing::info!(
            columns = records.columns.len(),
            rows = records.rows.len(),
            "spreadsheet loaded"
        );
        Ok(records)
    }

    /// Parse delimited text (CSV, TSV, ...) with the first record as header.
    pub fn from_delimited<R: Read>(reader: R, delimiter: u8) -> IngestResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut grid = Vec::new();
        for record in reader.records() {
            let record = record?;
            grid.push(record.iter().map(Cell::from).collect());
        }
        Self::from_grid(grid)
    }

    fn from_workbook(path: &Utf8Path) -> IngestResult<Self> {
        let mut workbook = open_workbook_auto(path.as_std_path())?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(IngestError::NoWorksheet)??;
        Self::from_range(&range)
    }

    /// Build a record set from a worksheet range.
    ///
    /// A range covers only the used cells, so blank leading columns are
    /// restored: columns stay anchored at `A` and positional bindings keep
    /// pointing at the same sheet columns. Blank leading rows need no such
    /// treatment because the header is the first non-blank row.
    pub fn from_range(range: &Range<Data>) -> IngestResult<Self> {
        let leading = range.start().map_or(0, |(_, col)| col as usize);
        Self::from_grid(
            range
                .rows()
                .map(|row| {
                    let mut cells = vec![Cell::Empty; leading];
                    cells.extend(row.iter().map(Cell::from));
                    cells
                })
                .collect(),
        )
    }

    /// Build a record set from raw rows, the first of which is the header.
    ///
    /// Short rows are padded with [`Cell::Empty`]; rows longer than the
    /// header are rejected.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> IngestResult<Self> {
        let mut grid = grid.into_iter();
        let header = grid.next().ok_or(IngestError::EmptySheet)?;
        if header.iter().all(Cell::is_missing) {
            return Err(IngestError::EmptySheet);
        }
        let columns = column_names(&header);

        let mut rows = Vec::new();
        for (i, mut row) in grid.enumerate() {
            if row.iter().all(Cell::is_missing) {
                continue;
            }
            if row.len() > columns.len() {
                return Err(IngestError::RaggedRow {
                    row: i + 1,
                    cells: row.len(),
                    columns: columns.len(),
                });
            }
            row.resize(columns.len(), Cell::Empty);
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of the column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid column index.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        assert!(index < self.columns.len(), "column index out of range");
        self.rows.iter().map(move |row| &row[index])
    }

    /// Cells of the column called `name`, or `None` if there is no such column.
    pub fn column_named(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        self.column_index(name).map(|index| self.column(index))
    }

    /// All data rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the record set has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn open(path: &Utf8Path) -> IngestResult<std::fs::File> {
    std::fs::File::open(path.as_std_path()).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Derive unique, non-empty column names from the header row.
fn column_names(header: &[Cell]) -> Vec<String> {
    let base: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if cell.is_missing() {
                format!("Unnamed: {i}")
            } else {
                cell.to_string()
            }
        })
        .collect();

    let mut used: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(base.len());
    for name in base {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while used.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        used.insert(candidate.clone());
        names.push(candidate);
    }
    names
}
