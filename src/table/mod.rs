//! In-memory result tables and their CSV / XLSX representations
//!
//! Proteome Discoverer exports PSM and peptide tables either as text or as Excel
//! workbooks. A [`Table`] holds the header row and all data rows of such an export;
//! [`TableFormat`] picks the reader and writer from the file extension.

use std::fmt;
use std::path::Path;

mod csv_file;
mod error;
mod xlsx_file;


pub use error::TableError;

/// A single table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// No value
    #[default]
    Empty,
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Anything else
    Text(String),
}

impl Cell {
    /// Infer a typed cell from its textual representation.
    ///
    /// A number is only inferred when writing it back yields the same text, so
    /// `007`, `1.50`, `1e3`, `NaN` or padded values stay [`Cell::Text`].
    pub fn from_text(value: &str) -> Self {
        if value.is_empty() {
            return Cell::Empty;
        }
        if let Ok(v) = value.parse::<i64>() {
            if v.to_string() == value {
                return Cell::Int(v);
            }
        }
        if let Ok(v) = value.parse::<f64>() {
            if v.is_finite() && v.to_string() == value {
                return Cell::Float(v);
            }
        }
        Cell::Text(value.to_string())
    }

    /// Integer value of the cell, accepting integral floats and integer text
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            Cell::Float(v) => float_to_integer(*v),
            Cell::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_integer))
            }
            Cell::Empty | Cell::Bool(_) => None,
        }
    }

    /// Whether the cell holds no value
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

fn float_to_integer(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

/// Header row plus data rows.
///
/// Every row has exactly as many cells as there are headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given headers
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Load a table, choosing the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        TableFormat::from_path(path)?.load(path)
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    /// Column names
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index of the column with exactly this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of a column, top to bottom
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    /// Mutable access to the cells of a column by index
    pub(crate) fn column_mut(&mut self, index: usize) -> impl Iterator<Item = &mut Cell> + '_ {
        self.rows.iter_mut().map(move |row| &mut row[index])
    }
}

/// Supported table file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated text with a header line
    Csv,
    /// Excel workbook; the first worksheet is used
    Xlsx,
}

impl TableFormat {
    /// Resolve the format from a path's extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(TableFormat::Csv),
            Some("xlsx") => Ok(TableFormat::Xlsx),
            _ => Err(TableError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Xlsx => "xlsx",
        }
    }

    /// Read a table in this format
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Table, TableError> {
        match self {
            TableFormat::Csv => csv_file::read(path.as_ref()),
            TableFormat::Xlsx => xlsx_file::read(path.as_ref()),
        }
    }

    /// Write a table in this format.
    ///
    /// The file is written next to its destination first and moved into place
    /// once complete, so a failed write never leaves a truncated file behind.
    pub fn save<P: AsRef<Path>>(&self, table: &Table, path: P) -> Result<(), TableError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
        match self {
            TableFormat::Csv => csv_file::write(table, temp_file.as_file_mut())?,
            TableFormat::Xlsx => xlsx_file::write(table, temp_file.as_file_mut())?,
        }
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
