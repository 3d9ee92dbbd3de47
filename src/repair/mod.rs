//! Scan column repair
//!
//! [`TableRepairer`] ties the pieces together: it loads a result table, indexes
//! the MGF file the table was searched against, and replaces every value of the
//! scan column (a 1-based spectrum position) with the scan number recorded for
//! that position.

use std::path::Path;

use log::{info, warn};

use crate::indexer::{ScanIndexMapping, SpectrumIndexer};
use crate::mgf::MgfError;
use crate::scan_number::{ScanNumberParser, ScanPatternError};
use crate::table::{Cell, Table, TableError, TableFormat};

mod report;


pub use report::RepairReport;

/// Column Proteome Discoverer writes the scan number to
pub const DEFAULT_SCAN_COLUMN: &str = "First Scan";

/// Errors that abort a repair
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    /// The table could not be read or has an unsupported format
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// The MGF file could not be read
    #[error("Spectra error: {0}")]
    Spectra(#[from] MgfError),

    /// The title pattern does not compile
    #[error(transparent)]
    Pattern(#[from] ScanPatternError),

    /// The scan column does not exist
    #[error("Column {0:?} not found in table")]
    MissingColumn(String),

    /// A scan column value is not an integer position
    #[error("Row {row}: value {value:?} in column {column:?} is not an integer spectrum position")]
    InvalidOrdinal {
        /// Data row (1-based)
        row: usize,
        /// Column name
        column: String,
        /// Offending value
        value: String,
    },

    /// A position has no spectrum in the MGF
    #[error(
        "Row {row}: no spectrum at position {position} (the MGF holds {spectra} spectra); \
         the table may already be repaired or belong to a different MGF file"
    )]
    MissingScanIndex {
        /// Data row (1-based)
        row: usize,
        /// Position looked up
        position: i64,
        /// Number of spectra in the mapping
        spectra: usize,
    },
}

/// Outcome of rewriting one column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRepair {
    /// Rows whose value was replaced
    pub rows_repaired: usize,
    /// Rows that received their position's negative placeholder
    pub unresolved_rows: usize,
}

/// A repaired table together with its report
#[derive(Debug, Clone)]
pub struct RepairedTable {
    /// The table with the scan column rewritten
    pub table: Table,
    /// Summary of the run
    pub report: RepairReport,
}

/// Replace each position in `column` with its scan number from `mapping`.
///
/// All lookups are resolved before the table is touched, so on error the table
/// is left unchanged.
pub fn apply_mapping(
    table: &mut Table,
    column: &str,
    mapping: &ScanIndexMapping,
) -> Result<ColumnRepair, RepairError> {
    let index = table
        .column_index(column)
        .ok_or_else(|| RepairError::MissingColumn(column.to_string()))?;

    let mut scan_numbers = Vec::with_capacity(table.row_count());
    let mut unresolved_rows = 0;
    for (i, row) in table.rows().iter().enumerate() {
        let cell = &row[index];
        let position = cell.as_integer().ok_or_else(|| RepairError::InvalidOrdinal {
            row: i + 1,
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        let scan_number = mapping
            .get(position)
            .ok_or(RepairError::MissingScanIndex {
                row: i + 1,
                position,
                spectra: mapping.len(),
            })?;
        scan_numbers.push(scan_number);
        if scan_number == -position {
            unresolved_rows += 1;
        }
    }

    for (cell, scan_number) in table.column_mut(index).zip(&scan_numbers) {
        *cell = Cell::Int(*scan_number);
    }

    Ok(ColumnRepair {
        rows_repaired: scan_numbers.len(),
        unresolved_rows,
    })
}

/// Repairs scan columns of result tables
#[derive(Debug, Clone, Default)]
pub struct TableRepairer {
    indexer: SpectrumIndexer,
}

impl TableRepairer {
    /// Create a repairer around a configured indexer
    pub fn new(indexer: SpectrumIndexer) -> Self {
        Self { indexer }
    }

    /// Create a repairer using the given title pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, ScanPatternError> {
        Ok(Self::new(SpectrumIndexer::new(ScanNumberParser::new(pattern)?)))
    }

    /// The spectrum indexer in use
    pub fn indexer(&self) -> &SpectrumIndexer {
        &self.indexer
    }

    /// Load `table_path`, index `spectra_path` and rewrite `scan_column`.
    ///
    /// The table format is checked before any file is opened.
    pub fn repair<P, Q>(
        &self,
        table_path: P,
        scan_column: &str,
        spectra_path: Q,
    ) -> Result<RepairedTable, RepairError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let table_path = table_path.as_ref();
        let spectra_path = spectra_path.as_ref();

        let format = TableFormat::from_path(table_path)?;
        info!("Loading {} table {}", format, table_path.display());
        let mut table = format.load(table_path)?;
        info!(
            "  {} rows, {} columns",
            table.row_count(),
            table.column_count()
        );

        if table.column_index(scan_column).is_none() {
            return Err(RepairError::MissingColumn(scan_column.to_string()));
        }

        let mapping = self.indexer.index_file(spectra_path)?;
        let repair = apply_mapping(&mut table, scan_column, &mapping)?;

        info!("Repaired {} values in column {:?}", repair.rows_repaired, scan_column);
        if repair.unresolved_rows > 0 {
            warn!(
                "{} rows reference spectra without a recoverable scan number and were set to negative placeholders",
                repair.unresolved_rows
            );
        }

        let report = RepairReport {
            table_path: table_path.to_path_buf(),
            spectra_path: spectra_path.to_path_buf(),
            column: scan_column.to_string(),
            pattern: self.indexer.parser().pattern().to_string(),
            indexing: mapping.stats().clone(),
            rows_repaired: repair.rows_repaired,
            unresolved_rows: repair.unresolved_rows,
            output_path: None,
        };

        Ok(RepairedTable { table, report })
    }
}
