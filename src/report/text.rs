//! Plain text pair report.
//!
//! One block per stored pair, grouped by primer set. The whole document is
//! assembled in memory before anything reaches the sink.

use crate::error::{ReportError, Result};
use crate::types::{PrimerSets, StoredPair};
use log::debug;
use std::io::Write;

const PAIR_RULE_WIDTH: usize = 20;
const SET_RULE_WIDTH: usize = 30;

/// Warning appended to a pair whose viable products ratio is at or below the cutoff
pub const NOT_EFFECTIVE_WARNING: &str = "WARNING: too many products generated by this pair are not effective";

/// Divide two counts, refusing a zero denominator.
pub fn checked_ratio(numerator: u64, denominator: u64, pair: &str, ratio: &'static str) -> Result<f64> {
    if denominator == 0 {
        return Err(ReportError::DegenerateDenominator { pair: pair.to_string(), ratio });
    }
    Ok(numerator as f64 / denominator as f64)
}

/// Format a ratio as a percentage with one decimal ("60.0%").
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Whether a pair gets the not-effective warning.
pub fn needs_warning(viable_ratio: f64, short_products_cutoff: f64) -> bool {
    viable_ratio <= short_products_cutoff
}

/// Render the statistics of one pair as report lines.
pub fn generate_pair_stats(pair: &StoredPair, short_products_cutoff: f64) -> Result<Vec<String>> {
    let label = pair.label();
    let stats = &pair.stats;
    let amplificable = stats.amplificable_products;
    let viable = stats.viable_products;
    let short = stats.filtered_by_max_length;

    let viable_ratio = checked_ratio(viable.count, amplificable, &label, "viable products ratio")?;
    let short_ratio = checked_ratio(short.count, amplificable, &label, "short products ratio")?;

    // Mixed products are excluded from the chromatin ratios
    let effective = viable.count.saturating_sub(stats.mixed_products);
    let euchromatin_ratio = checked_ratio(stats.euchromatin_products, effective, &label, "euchromatin ratio")?;
    let heterochromatin_ratio =
        checked_ratio(stats.heterochromatin_products, effective, &label, "heterochromatin ratio")?;

    let mut report = vec![
        label.clone(),
        "-".repeat(PAIR_RULE_WIDTH),
        format!("Total Number of products:\t{}", stats.total_products),
        format!("Pcr products that are amplificable(<1000): {}", amplificable),
        format!(
            "Number of pcr products in range ({} - {}):\t{}\t{}",
            viable.min,
            viable.max,
            viable.count,
            format_percent(viable_ratio)
        ),
        format!("Number of short products(<{}):\t{}\t{}", short.max, short.count, format_percent(short_ratio)),
        format!("Number of euchromatic effective products:\t{}", stats.euchromatin_products),
        format!("Number of effective euchromatic nucleotides:\t{}", stats.euchromatin_nucleotides),
        format!("Number of heterochromatic effective products:\t{}", stats.heterochromatin_products),
        format!("Number of effective heterochromatic nucleotides:\t{}", stats.heterochromatin_nucleotides),
        format!("Number of mixed effective products:\t{}", stats.mixed_products),
        format!("Number of mixed effective nucleotides:\t{}", stats.mixed_nucleotides),
        format!("Ratio euchromatin (without mixed):\t{}", format_percent(euchromatin_ratio)),
        format!("Ratio heterochromatin (without mixed):\t{}", format_percent(heterochromatin_ratio)),
    ];

    if needs_warning(viable_ratio, short_products_cutoff) {
        debug!("Pair {} viable ratio {:.3} at or below cutoff {}", label, viable_ratio, short_products_cutoff);
        report.push(NOT_EFFECTIVE_WARNING.to_string());
    }

    Ok(report)
}

/// Build the complete text report for all primer sets.
pub fn format_detailed_report(sets: &PrimerSets, short_products_cutoff: f64) -> Result<String> {
    let mut report = Vec::new();

    for (index, set) in sets {
        report.push(format!("PRIMER SET {}", index));
        report.push(format!("Primers: {}", set.primers.join(", ")));
        report.push("#".repeat(SET_RULE_WIDTH));

        for pair in set.sorted_pairs() {
            report.extend(generate_pair_stats(pair, short_products_cutoff)?);
            report.push("-".repeat(PAIR_RULE_WIDTH));
        }
    }

    Ok(report.join("\n"))
}

/// Write the text report to an already open sink and flush it.
///
/// Nothing is written if any pair fails to format.
pub fn write_detailed_report<W: Write>(sink: &mut W, sets: &PrimerSets, short_products_cutoff: f64) -> Result<()> {
    let report = format_detailed_report(sets, short_products_cutoff)?;
    sink.write_all(report.as_bytes())?;
    sink.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;
