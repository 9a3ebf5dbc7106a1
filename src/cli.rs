use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "primer-report")]
#[command(about = "Report pairwise PCR product statistics for primer panels")]
#[command(version)]
pub struct CliArgs {
    /// JSON file with the precomputed pair statistics of every primer set
    #[arg(long, short = 's', value_name = "PATH")]
    pub stats: Option<PathBuf>,

    /// Write the per-pair text report to this file
    #[arg(long, value_name = "PATH")]
    pub text_report: Option<PathBuf>,

    /// Write the spreadsheet matrix report (.xlsx) to this file
    #[arg(long, value_name = "PATH")]
    pub xlsx: Option<PathBuf>,

    /// JSON file with genomic feature overlap counts per primer pair
    #[arg(long, value_name = "PATH", requires = "gff_report")]
    pub gff_results: Option<PathBuf>,

    /// Write the tab-separated feature overlap report to this file
    #[arg(long, value_name = "PATH", requires = "gff_results")]
    pub gff_report: Option<PathBuf>,

    /// Write a JSON summary (pair counts, low-yield and warned pairs) per set
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// TOML report configuration (cutoffs, layout, metric catalogue)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Warn when viable/amplificable products is at or below this ratio
    /// (overrides the configuration file; default 0.5)
    #[arg(long, value_name = "RATIO")]
    pub short_products_cutoff: Option<f64>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.text_report.is_none() && self.xlsx.is_none() && self.gff_report.is_none() && self.json.is_none() {
            return Err(
                "Nothing to do: specify at least one of --text-report, --xlsx, --gff-report or --json".to_string()
            );
        }

        let needs_stats = self.text_report.is_some() || self.xlsx.is_some() || self.json.is_some();
        if needs_stats && self.stats.is_none() {
            return Err("--stats is required for --text-report, --xlsx and --json".to_string());
        }

        if self.gff_results.is_some() != self.gff_report.is_some() {
            return Err("--gff-results and --gff-report must be given together".to_string());
        }

        if let Some(cutoff) = self.short_products_cutoff
            && !(0.0..=1.0).contains(&cutoff)
        {
            return Err(format!("--short-products-cutoff must be between 0 and 1 (got {})", cutoff));
        }

        Ok(())
    }
}
