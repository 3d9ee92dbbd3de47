//! Streaming MGF parser
//!
//! This module provides a pull-based, line-oriented reader that yields one
//! [`MgfSpectrum`] per `BEGIN IONS` block.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;

use super::models::{MgfSpectrum, SpectrumParams};

pub use error::MgfError;
pub use iterators::SpectrumIterator;

mod error;
mod iterators;


/// Read buffer size for MGF files
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

const BEGIN_IONS: &str = "BEGIN IONS";
const END_IONS: &str = "END IONS";

/// Streaming parser for MGF files
pub struct MgfStreamer<R: BufRead> {
    reader: R,
    line: String,
    line_number: usize,
    current_spectrum_index: i64,
}

impl MgfStreamer<Box<dyn BufRead>> {
    /// Open an MGF file for streaming.
    ///
    /// Files ending in `.gz` are decompressed on the fly.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MgfError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let gzipped = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);

        let reader: Box<dyn BufRead> = if gzipped {
            debug!("Reading gzip-compressed MGF: {}", path.display());
            Box::new(BufReader::with_capacity(
                DEFAULT_INPUT_BUFFER_SIZE,
                GzDecoder::new(file),
            ))
        } else {
            Box::new(BufReader::with_capacity(DEFAULT_INPUT_BUFFER_SIZE, file))
        };

        Ok(Self::new(reader))
    }
}

impl<R: BufRead> MgfStreamer<R> {
    /// Create a new streamer from a BufRead source
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            current_spectrum_index: 0,
        }
    }

    /// Number of spectra returned so far
    pub fn spectra_read(&self) -> usize {
        self.current_spectrum_index as usize
    }

    /// Iterate over all remaining spectra
    pub fn spectra(self) -> SpectrumIterator<R> {
        SpectrumIterator { streamer: self }
    }

    /// Read the next spectrum from the stream
    pub fn next_spectrum(&mut self) -> Result<Option<MgfSpectrum>, MgfError> {
        // Skip global parameters and blank lines up to the next block
        loop {
            if !self.advance()? {
                return Ok(None);
            }
            if self.current_line().eq_ignore_ascii_case(BEGIN_IONS) {
                break;
            }
        }

        let begin_line = self.line_number;
        let mut spectrum = MgfSpectrum {
            index: self.current_spectrum_index,
            params: SpectrumParams::new(),
            ..Default::default()
        };

        loop {
            if !self.advance()? {
                return Err(MgfError::UnterminatedSpectrum {
                    index: spectrum.index,
                    line: begin_line,
                });
            }

            let line = self.current_line();
            if line.is_empty() || is_comment(line) {
                continue;
            }
            if line.eq_ignore_ascii_case(END_IONS) {
                break;
            }
            if line.eq_ignore_ascii_case(BEGIN_IONS) {
                return Err(MgfError::NestedSpectrum(self.line_number));
            }

            if let Some((key, value)) = line.split_once('=') {
                spectrum.params.insert(key, value);
            } else {
                let (mz, intensity) = parse_peak(line).ok_or_else(|| MgfError::InvalidPeak {
                    line: self.line_number,
                    content: line.to_string(),
                })?;
                spectrum.mz_array.push(mz);
                spectrum.intensity_array.push(intensity);
            }
        }

        self.current_spectrum_index += 1;
        Ok(Some(spectrum))
    }

    /// Load the next line into the buffer; `false` at end of input
    fn advance(&mut self) -> Result<bool, MgfError> {
        self.line.clear();
        let bytes = self.reader.read_line(&mut self.line)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }

    fn current_line(&self) -> &str {
        self.line.trim()
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with(['#', ';', '!', '/'])
}

/// Parse `m/z [intensity [charge]]`; the charge column is ignored
fn parse_peak(line: &str) -> Option<(f64, f64)> {
    let mut fields = line.split_whitespace();
    let mz = fields.next()?.parse::<f64>().ok()?;
    let intensity = match fields.next() {
        Some(value) => value.parse::<f64>().ok()?,
        None => 0.0,
    };
    Some((mz, intensity))
}
