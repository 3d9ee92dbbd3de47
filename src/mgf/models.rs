//! Data models for MGF spectrum blocks

use std::collections::HashMap;

/// Key-value parameter block of a single MGF spectrum.
///
/// Keys are stored lower-cased, values with surrounding whitespace removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpectrumParams {
    values: HashMap<String, String>,
}

impl SpectrumParams {
    /// Create an empty parameter block
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, normalizing the key to lower case
    pub fn insert(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.trim().to_lowercase(), value.trim().to_string());
    }

    /// Look up a parameter by (case-insensitive) key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }

    /// The `SCANS` parameter, if present
    pub fn scans(&self) -> Option<&str> {
        self.get("scans")
    }

    /// The `TITLE` parameter, if present
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// Number of parameters in the block
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the block has no parameters
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all `(key, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for SpectrumParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = SpectrumParams::new();
        for (key, value) in iter {
            params.insert(key.as_ref(), value.as_ref());
        }
        params
    }
}

/// A single `BEGIN IONS ... END IONS` block
#[derive(Debug, Clone, Default)]
pub struct MgfSpectrum {
    /// Position of the block in the file (0-based)
    pub index: i64,

    /// Parameter block (TITLE, SCANS, PEPMASS, ...)
    pub params: SpectrumParams,

    /// m/z values of the peak list
    pub mz_array: Vec<f64>,

    /// Intensities of the peak list (0.0 when the line has no intensity column)
    pub intensity_array: Vec<f64>,
}

impl MgfSpectrum {
    /// Number of peaks in the spectrum
    pub fn peak_count(&self) -> usize {
        self.mz_array.len()
    }
}
