//! JSON export of the per-set summaries.

use super::stats::SetSummary;
use crate::config::ReportConfig;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export set summaries as JSON.
///
/// Creates a report with the generation time, the thresholds in effect and
/// one entry per primer set.
///
/// # Arguments
/// * `summaries` - Per-set summaries, in set order
/// * `output_path` - Path to write the JSON file
/// * `config` - Thresholds recorded alongside the summaries
pub fn export_json_summary(summaries: &[SetSummary], output_path: &Path, config: &ReportConfig) -> Result<()> {
    use serde_json::json;

    let report = json!({
        "generated": chrono::Local::now().to_rfc3339(),
        "short_products_cutoff": config.short_products_cutoff,
        "low_yield_ratio": config.low_yield_ratio,
        "sets": summaries,
    });

    let mut file = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut file, &report)?;
    file.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::three_primer_set;
    use crate::report::stats::summarize_set;

    #[test]
    fn test_export_json_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let config = ReportConfig::default();
        let summary = summarize_set(&three_primer_set(), &config, true).unwrap();

        export_json_summary(&[summary], &path, &config).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["generated"].is_string());
        assert_eq!(value["low_yield_ratio"], 0.9);
        assert_eq!(value["sets"][0]["pair_count"], 3);
        assert_eq!(value["sets"][0]["low_yield_pairs"][0], "Pair P1-P2");
        assert_eq!(value["sets"][0]["primers"][2], "ACGTAC");
    }
}
