//! Scan number inference from MGF spectrum parameters
//!
//! Exporters disagree on where the native scan number lives. The parser tries,
//! in order:
//!
//! 1. the `SCANS` parameter
//! 2. a `scan=` token inside the title (msconvert-style native IDs)
//! 3. the first match of a configurable pattern in the title, digits only
//!    (default `\.\d+\.`, i.e. `sample.144.144.2.dta`)
//! 4. the whole title as a bare integer
//!
//! The first step that yields an integer wins. When none does, the caller's
//! fallback value is returned instead and the outcome is marked unresolved.

use std::fmt;

use regex::Regex;

use crate::mgf::SpectrumParams;

/// Default title pattern: a run of digits enclosed in dots
pub const DEFAULT_SCAN_PATTERN: &str = r"\.\d+\.";

/// Error compiling a user-supplied title pattern
#[derive(Debug, thiserror::Error)]
#[error("Invalid scan number pattern {pattern:?}: {source}")]
pub struct ScanPatternError {
    /// The pattern as given
    pub pattern: String,
    /// Underlying regex error
    #[source]
    pub source: regex::Error,
}

/// Which rule produced a scan number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanNumberSource {
    /// The `SCANS` parameter
    ScansField,
    /// A `scan=` token in the title
    TitleScanToken,
    /// The configured title pattern
    TitlePattern,
    /// The title itself is an integer
    TitleInteger,
}

impl fmt::Display for ScanNumberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanNumberSource::ScansField => "SCANS field",
            ScanNumberSource::TitleScanToken => "title scan= token",
            ScanNumberSource::TitlePattern => "title pattern",
            ScanNumberSource::TitleInteger => "integer title",
        };
        f.write_str(name)
    }
}

/// Result of inferring the scan number of one spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanNumberOutcome {
    /// A scan number was found
    Parsed {
        /// The recovered scan number
        scan_number: i64,
        /// Rule that produced it
        source: ScanNumberSource,
    },
    /// Nothing matched; carries the caller's fallback value
    Unresolved(i64),
}

impl ScanNumberOutcome {
    /// Whether a scan number was recovered
    pub fn succeeded(&self) -> bool {
        matches!(self, ScanNumberOutcome::Parsed { .. })
    }

    /// The recovered scan number, or the fallback when unresolved
    pub fn scan_number(&self) -> i64 {
        match *self {
            ScanNumberOutcome::Parsed { scan_number, .. } => scan_number,
            ScanNumberOutcome::Unresolved(fallback) => fallback,
        }
    }

    /// The rule that produced the scan number, if any
    pub fn source(&self) -> Option<ScanNumberSource> {
        match *self {
            ScanNumberOutcome::Parsed { source, .. } => Some(source),
            ScanNumberOutcome::Unresolved(_) => None,
        }
    }
}

/// Infers scan numbers from spectrum parameters
#[derive(Debug, Clone)]
pub struct ScanNumberParser {
    pattern: Regex,
}

impl Default for ScanNumberParser {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_SCAN_PATTERN).expect("default scan pattern is valid"),
        }
    }
}

impl ScanNumberParser {
    /// Create a parser using the given title pattern
    pub fn new(pattern: &str) -> Result<Self, ScanPatternError> {
        let pattern = Regex::new(pattern).map_err(|source| ScanPatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// The title pattern in use
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Infer the scan number of one spectrum, returning `fallback` when every rule fails
    pub fn parse(&self, params: &SpectrumParams, fallback: i64) -> ScanNumberOutcome {
        if let Some(scan_number) = params.scans().and_then(parse_integer) {
            return ScanNumberOutcome::Parsed {
                scan_number,
                source: ScanNumberSource::ScansField,
            };
        }

        if let Some(title) = params.title() {
            if let Some((scan_number, source)) = self.parse_title(title) {
                return ScanNumberOutcome::Parsed { scan_number, source };
            }
        }

        ScanNumberOutcome::Unresolved(fallback)
    }

    fn parse_title(&self, title: &str) -> Option<(i64, ScanNumberSource)> {
        if title.contains("scan") {
            if let Some(scan_number) = scan_token(title) {
                return Some((scan_number, ScanNumberSource::TitleScanToken));
            }
        }

        if let Some(scan_number) = self.pattern_match(title) {
            return Some((scan_number, ScanNumberSource::TitlePattern));
        }

        parse_integer(title).map(|scan_number| (scan_number, ScanNumberSource::TitleInteger))
    }

    /// Digits of the first pattern match in the title
    fn pattern_match(&self, title: &str) -> Option<i64> {
        let matched = self.pattern.find(title)?;
        let digits: String = matched
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}

/// Value following the first `scan=`, up to the next quote
fn scan_token(title: &str) -> Option<i64> {
    let (_, rest) = title.split_once("scan=")?;
    let rest = rest.trim_start_matches('"');
    let value = rest.split('"').next().unwrap_or(rest);
    parse_integer(value)
}

fn parse_integer(value: &str) -> Option<i64> {
    value.trim().trim_matches('"').trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> SpectrumParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_scans_field_wins_over_title() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(
            &params(&[("SCANS", "144"), ("TITLE", "sample.999.999.2 scan=\"555\"")]),
            -1,
        );
        assert_eq!(
            outcome,
            ScanNumberOutcome::Parsed {
                scan_number: 144,
                source: ScanNumberSource::ScansField
            }
        );
    }

    #[test]
    fn test_unparseable_scans_field_falls_through_to_title() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("SCANS", "144-146"), ("TITLE", "run.150.150.2")]), -1);
        assert_eq!(outcome.scan_number(), 150);
        assert_eq!(outcome.source(), Some(ScanNumberSource::TitlePattern));
    }

    #[test]
    fn test_scan_token_beats_pattern() {
        let parser = ScanNumberParser::default();
        let title = "sample.456.456.2 File:\"sample.raw\", NativeID:\"controllerType=0 controllerNumber=1 scan=273\"";
        let outcome = parser.parse(&params(&[("TITLE", title)]), -1);
        assert_eq!(outcome.scan_number(), 273);
        assert_eq!(outcome.source(), Some(ScanNumberSource::TitleScanToken));
    }

    #[test]
    fn test_quoted_scan_token() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("TITLE", "scan=\"892\"")]), -1);
        assert_eq!(outcome.scan_number(), 892);
    }

    #[test]
    fn test_scan_word_without_token_uses_pattern() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("TITLE", "scans: sample.77.77.2")]), -1);
        assert_eq!(outcome.scan_number(), 77);
        assert_eq!(outcome.source(), Some(ScanNumberSource::TitlePattern));
    }

    #[test]
    fn test_dotted_title_first_match() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("TITLE", "sample.456.2.dta")]), -1);
        assert_eq!(outcome.scan_number(), 456);
    }

    #[test]
    fn test_custom_pattern() {
        let parser = ScanNumberParser::new(r"Index: \d+").unwrap();
        let outcome = parser.parse(&params(&[("TITLE", "Spectrum Index: 1234, RT 12.5")]), -1);
        assert_eq!(outcome.scan_number(), 1234);
    }

    #[test]
    fn test_pattern_without_digits_falls_through() {
        let parser = ScanNumberParser::new(r"[a-z]+").unwrap();
        let outcome = parser.parse(&params(&[("TITLE", "31")]), -1);
        assert_eq!(outcome.scan_number(), 31);
        assert_eq!(outcome.source(), Some(ScanNumberSource::TitleInteger));
    }

    #[test]
    fn test_bare_integer_title() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("TITLE", " 4711 ")]), -1);
        assert_eq!(
            outcome,
            ScanNumberOutcome::Parsed {
                scan_number: 4711,
                source: ScanNumberSource::TitleInteger
            }
        );
    }

    #[test]
    fn test_unparseable_title_returns_fallback() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("TITLE", "no numbers here")]), -7);
        assert!(!outcome.succeeded());
        assert_eq!(outcome.scan_number(), -7);
        assert_eq!(outcome.source(), None);
    }

    #[test]
    fn test_no_scans_and_no_title() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("PEPMASS", "500.1")]), -3);
        assert_eq!(outcome, ScanNumberOutcome::Unresolved(-3));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ScanNumberParser::new(r"(\d+").unwrap_err();
        assert_eq!(err.pattern, r"(\d+");
    }

    #[test]
    fn test_overflowing_digits_fail_the_step() {
        let parser = ScanNumberParser::default();
        let outcome = parser.parse(&params(&[("TITLE", "x.99999999999999999999999.y")]), -1);
        assert!(!outcome.succeeded());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scans_field_is_returned_unchanged(scan in 0i64..10_000_000, title in ".*") {
                let parser = ScanNumberParser::default();
                let scan_text = scan.to_string();
                let p = params(&[("SCANS", scan_text.as_str()), ("TITLE", title.as_str())]);
                prop_assert_eq!(parser.parse(&p, -1).scan_number(), scan);
            }

            #[test]
            fn dotted_titles_resolve_to_first_number(stem in "[a-zA-Z_]{1,12}", scan in 0i64..10_000_000, charge in 1u8..6) {
                let parser = ScanNumberParser::default();
                let title = format!("{}.{}.{}.{}", stem, scan, scan, charge);
                let p = params(&[("TITLE", title.as_str())]);
                prop_assert_eq!(parser.parse(&p, -1).scan_number(), scan);
            }

            #[test]
            fn unresolved_outcome_keeps_fallback(title in "[a-zA-Z ]{0,24}", fallback in i64::MIN..0) {
                let parser = ScanNumberParser::default();
                let p = params(&[("TITLE", title.as_str())]);
                prop_assert_eq!(parser.parse(&p, fallback), ScanNumberOutcome::Unresolved(fallback));
            }
        }
    }
}
