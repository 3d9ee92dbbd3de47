//! Ordinal position to scan number indexing
//!
//! Proteome Discoverer sometimes reports the 1-based position of a spectrum in
//! the MGF file instead of its native scan number. [`SpectrumIndexer`] reads the
//! whole MGF once and records, for every position, the scan number recovered by
//! [`ScanNumberParser`]. Positions whose scan number cannot be recovered map to
//! `-position`, which can never collide with a real scan number.

use std::path::Path;

use log::{debug, info, warn};

use crate::mgf::{MgfError, MgfSpectrum, MgfStreamer};
use crate::scan_number::{ScanNumberOutcome, ScanNumberParser, ScanNumberSource, ScanPatternError};

#[cfg(test)]
mod tests;

/// Spectra between two progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Counters collected while indexing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexingStats {
    /// Spectra read from the source
    pub spectra_read: usize,
    /// Resolved from the SCANS parameter
    pub from_scans_field: usize,
    /// Resolved from a `scan=` token in the title
    pub from_title_scan_token: usize,
    /// Resolved from the title pattern
    pub from_title_pattern: usize,
    /// Resolved from an integer title
    pub from_title_integer: usize,
    /// Spectra without a recoverable scan number
    pub unresolved: usize,
}

impl IndexingStats {
    fn record(&mut self, outcome: &ScanNumberOutcome) {
        self.spectra_read += 1;
        match outcome.source() {
            Some(ScanNumberSource::ScansField) => self.from_scans_field += 1,
            Some(ScanNumberSource::TitleScanToken) => self.from_title_scan_token += 1,
            Some(ScanNumberSource::TitlePattern) => self.from_title_pattern += 1,
            Some(ScanNumberSource::TitleInteger) => self.from_title_integer += 1,
            None => self.unresolved += 1,
        }
    }

    /// Number of spectra with a recovered scan number
    pub fn resolved(&self) -> usize {
        self.spectra_read - self.unresolved
    }
}

/// Mapping from 1-based spectrum position to scan number.
///
/// Holds exactly one entry per spectrum read, keyed `1..=len()`.
#[derive(Debug, Clone, Default)]
pub struct ScanIndexMapping {
    scan_numbers: Vec<i64>,
    stats: IndexingStats,
}

impl ScanIndexMapping {
    /// Scan number recorded for `position`, if the position exists
    pub fn get(&self, position: i64) -> Option<i64> {
        if position < 1 {
            return None;
        }
        let index = usize::try_from(position - 1).ok()?;
        self.scan_numbers.get(index).copied()
    }

    /// Number of positions (= spectra read)
    pub fn len(&self) -> usize {
        self.scan_numbers.len()
    }

    /// Whether no spectra were read
    pub fn is_empty(&self) -> bool {
        self.scan_numbers.is_empty()
    }

    /// Iterate over `(position, scan_number)` in file order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.scan_numbers
            .iter()
            .enumerate()
            .map(|(i, &scan)| (i as i64 + 1, scan))
    }

    /// Positions that hold their `-position` sentinel
    pub fn unresolved_positions(&self) -> impl Iterator<Item = i64> + '_ {
        self.iter()
            .filter(|&(position, scan)| scan == -position)
            .map(|(position, _)| position)
    }

    /// Counters collected while the mapping was built
    pub fn stats(&self) -> &IndexingStats {
        &self.stats
    }
}

/// Builds a [`ScanIndexMapping`] from a spectra source
#[derive(Debug, Clone)]
pub struct SpectrumIndexer {
    parser: ScanNumberParser,
    progress_interval: usize,
}

impl Default for SpectrumIndexer {
    fn default() -> Self {
        Self::new(ScanNumberParser::default())
    }
}

impl SpectrumIndexer {
    /// Create an indexer around a configured parser
    pub fn new(parser: ScanNumberParser) -> Self {
        Self {
            parser,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Create an indexer using the given title pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, ScanPatternError> {
        Ok(Self::new(ScanNumberParser::new(pattern)?))
    }

    /// Set how many spectra pass between progress log lines (0 disables)
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// The scan number parser in use
    pub fn parser(&self) -> &ScanNumberParser {
        &self.parser
    }

    /// Index an MGF file (plain or gzipped).
    ///
    /// The file is closed when this returns, on success or error.
    pub fn index_file<P: AsRef<Path>>(&self, path: P) -> Result<ScanIndexMapping, MgfError> {
        let path = path.as_ref();
        info!("Reading spectra from {}", path.display());
        let streamer = MgfStreamer::open(path)?;
        self.index(streamer.spectra())
    }

    /// Index spectra in the order the source yields them
    pub fn index<I>(&self, spectra: I) -> Result<ScanIndexMapping, MgfError>
    where
        I: IntoIterator<Item = Result<MgfSpectrum, MgfError>>,
    {
        let mut mapping = ScanIndexMapping::default();

        for (i, spectrum) in spectra.into_iter().enumerate() {
            let spectrum = spectrum?;
            let position = i as i64 + 1;

            let outcome = self.parser.parse(&spectrum.params, -position);
            match outcome.source() {
                Some(source) => debug!(
                    "Spectrum {} -> scan {} ({})",
                    position,
                    outcome.scan_number(),
                    source
                ),
                None => debug!(
                    "Spectrum {}: no scan number in {:?}",
                    position,
                    spectrum.params.title()
                ),
            }

            mapping.stats.record(&outcome);
            mapping.scan_numbers.push(outcome.scan_number());

            if self.progress_interval > 0 && mapping.len() % self.progress_interval == 0 {
                info!("  {} spectra read", mapping.len());
            }
        }

        info!("Finished reading {} spectra", mapping.len());

        if mapping.stats.unresolved > 0 {
            warn!(
                "Scan numbers for {} of {} spectra could not be parsed; their positions map to negative placeholders",
                mapping.stats.unresolved,
                mapping.len()
            );
        }

        Ok(mapping)
    }
}
