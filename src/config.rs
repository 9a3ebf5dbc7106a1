/// Configuration resolution module
///
/// This module handles:
/// - The report configuration (cutoffs, sheet layout, metric catalogue)
/// - Loading overrides from a TOML file
/// - Building an immutable ReportPlan from CLI arguments
use crate::cli::CliArgs;
use crate::input;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default ratio at or below which a pair gets a warning in the text report
pub const SHORT_PRODUCTS_CUTOFF: f64 = 0.5;

/// Default ratio below which a matrix cell is highlighted
pub const LOW_YIELD_RATIO: f64 = 0.90;

/// One reported metric: record key, short code and legend description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricSpec {
    pub key: String,
    pub code: String,
    pub label: String,
}

impl MetricSpec {
    fn new(key: &str, code: &str, label: &str) -> Self {
        Self { key: key.to_string(), code: code.to_string(), label: label.to_string() }
    }
}

/// The metric catalogue used by both the legend and the detail table
pub fn default_metrics() -> Vec<MetricSpec> {
    vec![
        MetricSpec::new("num_union_sites_p1", "P1_COUNT", "Num union sites of primer 1"),
        MetricSpec::new("num_union_sites_p2", "P2_COUNT", "Num union sites of primer 2"),
        MetricSpec::new("num_possible_products_10000", "NP10K", "Num of possible products (length < 10000)"),
        MetricSpec::new("num_possible_products_700", "NP700", "Num of possible products (length < 700)"),
        MetricSpec::new("num_short_products", "NSP", "Num of short products (length < 100)"),
        MetricSpec::new("num_sequenciable_products", "NSECP", "Num of sequenceable products (100-700)"),
        MetricSpec::new("num_unique_unique_products", "NUUP", "Num of unique unique products (100-700)"),
        MetricSpec::new(
            "num_repetitive_repetitive_products",
            "NRRP",
            "Num of repetitive repetitive products (100-700)",
        ),
        MetricSpec::new("num_unique_repetitive_products", "NURP", "Num of unique repetitive products (100-700)"),
        MetricSpec::new("percentage_sequenciable_nucleotides", "PSN", "Percentage of sequenceable nucleotides"),
        MetricSpec::new(
            "adjusted_percentage_sequenciable_nucleotides",
            "APSN",
            "Adjusted percentage of sequenceable nucleotides",
        ),
    ]
}

/// Preferred sheet positions (0-based); shifted right/down when a large
/// panel would otherwise overlap them
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub detail_row: u32,
    pub legend_column: u16,
    pub column_width: f64,
    pub legend_label_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { detail_row: 15, legend_column: 14, column_width: 11.0, legend_label_width: 40.0 }
    }
}

/// Settings shared by every report writer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub short_products_cutoff: f64,
    pub low_yield_ratio: f64,
    pub layout: LayoutConfig,
    pub metrics: Vec<MetricSpec>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            short_products_cutoff: SHORT_PRODUCTS_CUTOFF,
            low_yield_ratio: LOW_YIELD_RATIO,
            layout: LayoutConfig::default(),
            metrics: default_metrics(),
        }
    }
}

impl ReportConfig {
    /// Parse a TOML configuration; absent keys keep their defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: ReportConfig =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse report configuration: {}", e))?;
        config.check()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, String> {
        debug!("Loading report configuration from {:?}", path);
        let toml_str = input::load_string(path)?;
        Self::from_toml(&toml_str)
    }

    fn check(&self) -> Result<(), String> {
        let ratios = [("short_products_cutoff", self.short_products_cutoff), ("low_yield_ratio", self.low_yield_ratio)];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be between 0 and 1 (got {})", name, value));
            }
        }

        if self.metrics.is_empty() {
            return Err("metric catalogue must not be empty".to_string());
        }

        for (pos, metric) in self.metrics.iter().enumerate() {
            if self.metrics[..pos].iter().any(|m| m.key == metric.key) {
                return Err(format!("metric '{}' is listed more than once", metric.key));
            }
        }

        Ok(())
    }
}

/// Everything a run needs, fully resolved before any report is written
#[derive(Debug, Clone)]
pub struct ReportPlan {
    pub stats_path: Option<PathBuf>,
    pub text_report: Option<PathBuf>,
    pub workbook: Option<PathBuf>,
    /// (overlap input, report output)
    pub gff: Option<(PathBuf, PathBuf)>,
    pub summary_json: Option<PathBuf>,
    pub config: ReportConfig,
}

/// Build a complete ReportPlan from validated CLI arguments
///
/// The configuration file is read here so that a bad file is reported
/// before any input is parsed or any output is created.
pub fn build_report_plan(args: &CliArgs) -> Result<ReportPlan, String> {
    debug!("Building report plan from CLI args");

    let mut config = match args.config {
        Some(ref path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    if let Some(cutoff) = args.short_products_cutoff {
        debug!("Short products cutoff overridden on command line: {}", cutoff);
        config.short_products_cutoff = cutoff;
    }

    // Argument combinations were checked by CliArgs::validate
    let gff = args.gff_results.clone().zip(args.gff_report.clone());

    debug!("Reporting {} metrics, cutoff {}", config.metrics.len(), config.short_products_cutoff);

    Ok(ReportPlan {
        stats_path: args.stats.clone(),
        text_report: args.text_report.clone(),
        workbook: args.xlsx.clone(),
        gff,
        summary_json: args.json.clone(),
        config,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
