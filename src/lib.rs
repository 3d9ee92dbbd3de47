//! # mgf-scan-repair - Scan Number Repair for Proteome Discoverer Tables
//!
//! Some Proteome Discoverer workflows that search MGF files report the position of
//! a spectrum in the MGF (1, 2, 3, ...) in the "First Scan" column instead of the
//! instrument's native scan number. `mgf_scan_repair` recovers the native scan
//! numbers from the MGF and writes them back into the table.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mgf_scan_repair::repair::{TableRepairer, DEFAULT_SCAN_COLUMN};
//! use mgf_scan_repair::table::TableFormat;
//!
//! let repairer = TableRepairer::default();
//! let repaired = repairer.repair("psms.xlsx", DEFAULT_SCAN_COLUMN, "run01.mgf")?;
//!
//! TableFormat::Xlsx.save(&repaired.table, "psms.xlsx_fixed.xlsx")?;
//! println!("{}", repaired.report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## How Scan Numbers Are Recovered
//!
//! For every spectrum in the MGF, in file order, the first rule that yields an
//! integer wins:
//!
//! | Rule | Example | Result |
//! |------|---------|--------|
//! | `SCANS` parameter | `SCANS=144` | 144 |
//! | `scan=` token in the title | `TITLE=... NativeID:"... scan=273"` | 273 |
//! | title pattern (default `\.\d+\.`) | `TITLE=sample.456.456.2.dta` | 456 |
//! | integer title | `TITLE=892` | 892 |
//!
//! A spectrum matching no rule maps to the negative of its position, so it can be
//! spotted in the output and never collides with a real scan number. The number
//! of such spectra is logged as a single warning.
//!
//! ## Architecture
//!
//! - [`mgf`]: streaming MGF reader
//! - [`scan_number`]: scan number inference for one spectrum
//! - [`indexer`]: position to scan number mapping over a whole MGF
//! - [`table`]: CSV / XLSX result tables
//! - [`repair`]: column rewrite and run report

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod indexer;
pub mod mgf;
pub mod repair;
pub mod scan_number;
pub mod table;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::indexer::{IndexingStats, ScanIndexMapping, SpectrumIndexer};
    pub use crate::mgf::{MgfError, MgfSpectrum, MgfStreamer, SpectrumParams};
    pub use crate::repair::{
        apply_mapping, RepairError, RepairReport, RepairedTable, TableRepairer,
        DEFAULT_SCAN_COLUMN,
    };
    pub use crate::scan_number::{
        ScanNumberOutcome, ScanNumberParser, ScanNumberSource, DEFAULT_SCAN_PATTERN,
    };
    pub use crate::table::{Cell, Table, TableError, TableFormat};
}
