//! Tab-separated feature overlap report.
//!
//! Independent of the pair statistics: one row per primer pair label with
//! the exon, gene and PCR product counts found by the overlap analysis.

use crate::types::GffOverlap;
use std::collections::BTreeMap;
use std::io::{self, Write};

pub const GFF_HEADER: &str = "PRIMER PAIR\tEXONS\tGENES\tNUM_PCR_PRODUCTS";

/// Format the overlap table, one row per pair in label order.
pub fn format_gff_report(results: &BTreeMap<String, GffOverlap>) -> String {
    let mut report = vec![GFF_HEADER.to_string()];
    for (primer_pair, overlap) in results {
        report.push(format!("{}\t{}\t{}\t{}", primer_pair, overlap.exon, overlap.gene, overlap.num_pcr_products));
    }
    report.join("\n")
}

/// Write the overlap table and close the sink.
///
/// The sink is consumed: it is flushed and dropped before returning.
pub fn write_gff_report<W: Write>(results: &BTreeMap<String, GffOverlap>, mut output: W) -> io::Result<()> {
    output.write_all(format_gff_report(results).as_bytes())?;
    output.flush()?;
    drop(output);
    Ok(())
}
