use std::io::BufRead;

use super::{MgfError, MgfStreamer};
use crate::mgf::models::MgfSpectrum;

/// Iterator over spectra in an MGF file
pub struct SpectrumIterator<R: BufRead> {
    pub(super) streamer: MgfStreamer<R>,
}

impl<R: BufRead> Iterator for SpectrumIterator<R> {
    type Item = Result<MgfSpectrum, MgfError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.streamer.next_spectrum() {
            Ok(Some(spectrum)) => Some(Ok(spectrum)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
