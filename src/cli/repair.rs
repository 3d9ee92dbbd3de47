use anyhow::{Context, Result};
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use mgf_scan_repair::repair::{TableRepairer, DEFAULT_SCAN_COLUMN};
use mgf_scan_repair::scan_number::DEFAULT_SCAN_PATTERN;
use mgf_scan_repair::table::TableFormat;

use super::config::Config;

/// Repair the scan column of `data` using `mgf` and write the result as .xlsx
pub fn run(
    data: PathBuf,
    mgf: PathBuf,
    colname: Option<String>,
    pattern: Option<String>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };

    let column = colname
        .or(config.repair.column)
        .unwrap_or_else(|| DEFAULT_SCAN_COLUMN.to_string());
    let pattern = pattern
        .or(config.repair.pattern)
        .unwrap_or_else(|| DEFAULT_SCAN_PATTERN.to_string());
    let output = output_path(&data, output.as_deref());

    info!("Proteome Discoverer scan number repair");
    info!("======================================");
    info!("Table:   {}", data.display());
    info!("Spectra: {}", mgf.display());
    info!("Column:  {}", column);
    info!("Pattern: {}", pattern);
    info!("Output:  {}", output.display());

    let repairer = TableRepairer::with_pattern(&pattern)?;
    let mut repaired = repairer
        .repair(&data, &column, &mgf)
        .with_context(|| format!("Failed to repair {}", data.display()))?;

    TableFormat::Xlsx
        .save(&repaired.table, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());

    repaired.report.output_path = Some(output);

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", repaired.report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", repaired.report);
    }

    Ok(())
}

/// Output path: the given stem, or the table path followed by `_fixed`, always ending in .xlsx
fn output_path(data: &Path, stem: Option<&Path>) -> PathBuf {
    let stem: OsString = match stem {
        Some(stem) => stem.as_os_str().to_owned(),
        None => {
            let mut stem = data.as_os_str().to_owned();
            stem.push("_fixed");
            stem
        }
    };

    let path = PathBuf::from(stem);
    let has_xlsx_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(TableFormat::Xlsx.extension()))
        .unwrap_or(false);
    if has_xlsx_extension {
        return path;
    }

    let mut with_extension = path.into_os_string();
    with_extension.push(".");
    with_extension.push(TableFormat::Xlsx.extension());
    PathBuf::from(with_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            output_path(Path::new("results/psms.xlsx"), None),
            PathBuf::from("results/psms.xlsx_fixed.xlsx")
        );
        assert_eq!(
            output_path(Path::new("psms.csv"), None),
            PathBuf::from("psms.csv_fixed.xlsx")
        );
    }

    #[test]
    fn test_output_stem() {
        assert_eq!(
            output_path(Path::new("psms.csv"), Some(Path::new("out/run.v2"))),
            PathBuf::from("out/run.v2.xlsx")
        );
        assert_eq!(
            output_path(Path::new("psms.csv"), Some(Path::new("repaired.XLSX"))),
            PathBuf::from("repaired.XLSX")
        );
    }
}
