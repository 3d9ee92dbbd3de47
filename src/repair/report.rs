use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::indexer::IndexingStats;

/// Summary of one repair run
#[derive(Debug, Clone)]
pub struct RepairReport {
    /// Input result table
    pub table_path: PathBuf,
    /// MGF file that was indexed
    pub spectra_path: PathBuf,
    /// Repaired column
    pub column: String,
    /// Title pattern used
    pub pattern: String,
    /// Indexing counters
    pub indexing: IndexingStats,
    /// Rows whose value was replaced
    pub rows_repaired: usize,
    /// Rows that received a negative placeholder
    pub unresolved_rows: usize,
    /// Where the repaired table was written, once saved
    pub output_path: Option<PathBuf>,
}

impl RepairReport {
    /// Whether any spectrum or row was left without a scan number
    pub fn has_warnings(&self) -> bool {
        self.indexing.unresolved > 0 || self.unresolved_rows > 0
    }

    fn source_lines(&self) -> [(&'static str, usize); 4] {
        [
            ("SCANS field", self.indexing.from_scans_field),
            ("title scan= token", self.indexing.from_title_scan_token),
            ("title pattern", self.indexing.from_title_pattern),
            ("integer title", self.indexing.from_title_integer),
        ]
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Scan Number Repair Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("=========================").cyan()));
            output.push_str(&format!("{}: {}\n", style("Table").bold(), self.table_path.display()));
            output.push_str(&format!("{}: {}\n", style("Spectra").bold(), self.spectra_path.display()));
            output.push_str(&format!("{}: {}\n", style("Column").bold(), self.column));
            output.push_str(&format!("{}: {}\n\n", style("Pattern").bold(), self.pattern));

            output.push_str(&format!(
                "{}: {}\n",
                style("Spectra read").bold(),
                self.indexing.spectra_read
            ));
            for (name, count) in self.source_lines() {
                output.push_str(&format!("  {:<20} {}\n", name, style(count).green()));
            }
            let unresolved = if self.indexing.unresolved > 0 {
                style(self.indexing.unresolved).yellow().bold()
            } else {
                style(self.indexing.unresolved).green()
            };
            output.push_str(&format!("  {:<20} {}\n\n", "unresolved", unresolved));

            output.push_str(&format!(
                "{}: {} ({} with placeholders)\n",
                style("Rows repaired").bold(),
                style(self.rows_repaired).green(),
                style(self.unresolved_rows).yellow()
            ));
            if let Some(path) = &self.output_path {
                output.push_str(&format!("{}: {}\n", style("Output").bold(), path.display()));
            }

            output.push('\n');
            if self.has_warnings() {
                output.push_str(&format!("{}\n", style("Repair finished with warnings").yellow().bold()));
            } else {
                output.push_str(&format!("{}\n", style("Repair finished").green().bold()));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan Number Repair Report")?;
        writeln!(f, "=========================")?;
        writeln!(f, "Table: {}", self.table_path.display())?;
        writeln!(f, "Spectra: {}", self.spectra_path.display())?;
        writeln!(f, "Column: {}", self.column)?;
        writeln!(f, "Pattern: {}", self.pattern)?;
        writeln!(f)?;
        writeln!(f, "Spectra read: {}", self.indexing.spectra_read)?;
        for (name, count) in self.source_lines() {
            writeln!(f, "  {:<20} {}", name, count)?;
        }
        writeln!(f, "  {:<20} {}", "unresolved", self.indexing.unresolved)?;
        writeln!(f)?;
        writeln!(
            f,
            "Rows repaired: {} ({} with placeholders)",
            self.rows_repaired, self.unresolved_rows
        )?;
        if let Some(path) = &self.output_path {
            writeln!(f, "Output: {}", path.display())?;
        }
        writeln!(f)?;
        if self.has_warnings() {
            writeln!(f, "Repair finished with warnings")
        } else {
            writeln!(f, "Repair finished")
        }
    }
}
