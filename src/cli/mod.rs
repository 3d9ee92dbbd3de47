use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod repair;

/// Repair mis-numbered scan columns in Proteome Discoverer result tables
#[derive(Parser)]
#[command(name = "scan-repair")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Result table to repair (.csv or .xlsx)
    #[arg(short = 'd', long = "data", value_name = "TABLE")]
    data: PathBuf,

    /// MGF file the table was searched against (.mgf or .mgf.gz)
    #[arg(short = 'm', long = "mgf", value_name = "MGF")]
    mgf: PathBuf,

    /// Column holding the spectrum positions [default: First Scan]
    #[arg(short = 'c', long = "colname", value_name = "NAME")]
    colname: Option<String>,

    /// Regex locating the scan number in spectrum titles [default: \.\d+\.]
    #[arg(short = 'p', long, value_name = "REGEX")]
    pattern: Option<String>,

    /// Output file stem; .xlsx is appended [default: <TABLE>_fixed, e.g. psms.xlsx_fixed.xlsx]
    #[arg(short = 'o', long, value_name = "STEM")]
    output: Option<PathBuf>,

    /// Load column and pattern from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn run(cli: Cli) -> Result<()> {
    repair::run(
        cli.data,
        cli.mgf,
        cli.colname,
        cli.pattern,
        cli.output,
        cli.config,
    )
}
