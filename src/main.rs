//! # scan-repair
//!
//! Repairs the scan number column of a Proteome Discoverer result table that
//! holds MGF spectrum positions instead of native scan numbers.
//!
//! ## Usage
//!
//! ```bash
//! # Repair "First Scan" in an Excel export, writing psms.xlsx_fixed.xlsx
//! scan-repair -d psms.xlsx -m run01.mgf
//!
//! # CSV export, custom column, titles like "Scan 1501 (rt=12.3)"
//! scan-repair -d psms.csv -m run01.mgf -c "Last Scan" -p "Scan \d+" -o repaired
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::run(cli)
}
