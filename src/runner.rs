use crate::config::ReportPlan;
use crate::error::Result;
use crate::input;
use crate::report::{self, SetSummary};
use crate::ui;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// What a run produced
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub summaries: Vec<SetSummary>,
    pub written: Vec<PathBuf>,
}

/// Run every report requested by the plan
///
/// This is the main entry point for report generation. Inputs are loaded
/// and every set is validated before the first output file is created.
pub fn run_reports(plan: &ReportPlan) -> Result<RunOutcome> {
    let mut outcome = RunOutcome::default();

    if let Some(ref stats_path) = plan.stats_path {
        let sets = input::load_primer_sets(stats_path)?;
        debug!("Loaded {} primer set(s)", sets.len());

        // The matrix metrics are only required by the spreadsheet and the JSON summary
        let with_yield = plan.workbook.is_some() || plan.summary_json.is_some();
        outcome.summaries = report::summarize_sets(&sets, &plan.config, with_yield)?;
        for summary in &outcome.summaries {
            ui::status(&format_summary_line(summary));
        }

        // Render fully in memory first; the file only appears on success
        let text = match plan.text_report {
            Some(_) => {
                let mut buffer = Vec::new();
                report::write_detailed_report(&mut buffer, &sets, plan.config.short_products_cutoff)?;
                Some(buffer)
            }
            None => None,
        };

        if let Some(ref path) = plan.workbook {
            report::write_stats_workbook(path, &sets, &plan.config)?;
            outcome.written.push(path.clone());
        }

        if let (Some(path), Some(text)) = (&plan.text_report, text) {
            fs::write(path, text)?;
            outcome.written.push(path.clone());
        }

        if let Some(ref path) = plan.summary_json {
            report::export_json_summary(&outcome.summaries, path, &plan.config)?;
            outcome.written.push(path.clone());
        }
    }

    if let Some((ref results_path, ref report_path)) = plan.gff {
        let results = input::load_gff_results(results_path)?;
        debug!("Writing {} feature overlap rows", results.len());
        report::write_gff_report(&results, fs::File::create(report_path)?)?;
        outcome.written.push(report_path.clone());
    }

    Ok(outcome)
}

/// One console line per primer set
pub fn format_summary_line(summary: &SetSummary) -> String {
    let low_yield = match summary.low_yield_pairs {
        Some(ref pairs) => format!(", {} low-yield", pairs.len()),
        None => String::new(),
    };
    format!(
        "primer set {}: {} primers, {} pairs{}, {} warned",
        summary.set_index,
        summary.primers.len(),
        summary.pair_count,
        low_yield,
        summary.warned_pairs.len()
    )
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
