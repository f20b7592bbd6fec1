use clap::Parser;
use std::path::PathBuf;

/// Lab inventory report: record machine status and tasks, export to PDF
#[derive(Debug, Parser)]
#[command(name = "lab-report", version, about)]
pub struct Cli {
    /// Configuration file to load instead of searching for .lab-report.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the PDF report is written to
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from(["lab-report", "--config", "lab.toml", "--export-dir", "out"]);
        assert_eq!(cli.config, Some(PathBuf::from("lab.toml")));
        assert_eq!(cli.export_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lab-report"]);
        assert!(cli.config.is_none() && cli.export_dir.is_none());
    }
}
