/// Errors that can occur during MGF parsing
#[derive(Debug, thiserror::Error)]
pub enum MgfError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A peak line could not be parsed as numbers
    #[error("Invalid peak line {line}: {content:?}")]
    InvalidPeak {
        /// Line number (1-based)
        line: usize,
        /// Offending line content
        content: String,
    },

    /// The file ended inside a `BEGIN IONS` block
    #[error("Spectrum {index} starting at line {line} is missing END IONS")]
    UnterminatedSpectrum {
        /// Spectrum index (0-based)
        index: i64,
        /// Line number of the BEGIN IONS marker (1-based)
        line: usize,
    },

    /// A nested `BEGIN IONS` appeared before the previous block was closed
    #[error("Unexpected BEGIN IONS at line {0} inside an open spectrum")]
    NestedSpectrum(usize),
}
