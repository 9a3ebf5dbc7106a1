mod cli;
mod config;
mod error;
#[cfg(test)]
mod fixtures;
mod input;
mod report;
mod runner;
mod types;
mod ui;

use config::ReportPlan;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve configuration file and CLI overrides
    let plan = match config::build_report_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    print_report_plan(&plan);

    let outcome = match runner::run_reports(&plan) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::print_error(&format!("Report generation failed: {}", e));
            std::process::exit(1);
        }
    };

    for path in &outcome.written {
        ui::status(&format!("wrote {}", path.display()));
    }
}

/// Print which inputs are read and which reports will be produced
fn print_report_plan(plan: &ReportPlan) {
    let mut outputs = Vec::new();
    if plan.text_report.is_some() {
        outputs.push("text");
    }
    if plan.workbook.is_some() {
        outputs.push("xlsx");
    }
    if plan.summary_json.is_some() {
        outputs.push("json");
    }
    if plan.gff.is_some() {
        outputs.push("gff");
    }

    if let Some(ref stats) = plan.stats_path {
        println!("Reporting pair statistics from {}", stats.display());
    }
    println!("  Outputs:  {}", outputs.join(", "));
    println!(
        "  Cutoffs:  short products {}, low yield {:.0}%",
        plan.config.short_products_cutoff,
        plan.config.low_yield_ratio * 100.0
    );
}
