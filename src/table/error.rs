use std::path::PathBuf;

/// Errors that can occur while loading or saving result tables
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// XLSX parsing error
    #[error("XLSX read error: {0}")]
    XlsxReadError(#[from] calamine::XlsxError),

    /// XLSX writing error
    #[error("XLSX write error: {0}")]
    XlsxWriteError(#[from] rust_xlsxwriter::XlsxError),

    /// File extension is neither `.csv` nor `.xlsx`
    #[error("Unsupported table format: {0} (expected a .csv or .xlsx file)")]
    UnsupportedFormat(PathBuf),

    /// The workbook has no worksheet to read
    #[error("Workbook contains no worksheets: {0}")]
    NoWorksheet(PathBuf),

    /// The table exceeds what the output format can hold
    #[error("Table too large for output format: {0}")]
    TooLarge(String),
}
