/// End-to-end tests for the primer-report binary
///
/// These run the compiled binary against the JSON inputs in test-data/
/// and inspect the files it writes.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const WARNING: &str = "WARNING: too many products generated by this pair are not effective";

// Helper to get the test data directory
fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

// Helper to run the binary
fn run_report(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_primer-report"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run primer-report {}: {}", args.join(" "), e))
}

fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn test_all_reports_from_three_primer_panel() {
    let dir = tempfile::tempdir().unwrap();
    let stats = data_dir().join("three_primers.json");
    let text = dir.path().join("report.txt");
    let xlsx = dir.path().join("report.xlsx");
    let json = dir.path().join("summary.json");

    let output = run_report(&[
        "--stats",
        path_str(&stats),
        "--text-report",
        path_str(&text),
        "--xlsx",
        path_str(&xlsx),
        "--json",
        path_str(&json),
    ]);
    assert_success(&output, "full report run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("primer set 0: 3 primers, 3 pairs, 1 low-yield, 0 warned"), "stdout: {}", stdout);

    let report = std::fs::read_to_string(&text).unwrap();
    assert!(report.starts_with("PRIMER SET 0\nPrimers: AAACCC, GGGTTT, ACGTAC\n"));
    assert_eq!(report.matches("Ratio euchromatin (without mixed):\t72.7%").count(), 3);
    assert!(!report.contains(WARNING));

    let workbook = std::fs::read(&xlsx).unwrap();
    assert_eq!(&workbook[..2], b"PK");

    let summary: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(summary["low_yield_ratio"], 0.9);
    assert_eq!(summary["sets"][0]["pair_count"], 3);
    assert_eq!(summary["sets"][0]["low_yield_pairs"][0], "Pair P1-P2");
}

#[test]
fn test_config_file_and_cli_override() {
    let dir = tempfile::tempdir().unwrap();
    let stats = data_dir().join("three_primers.json");
    let config = data_dir().join("report.toml");
    let text = dir.path().join("report.txt");
    let json = dir.path().join("summary.json");

    let output = run_report(&[
        "--stats",
        path_str(&stats),
        "--config",
        path_str(&config),
        "--text-report",
        path_str(&text),
        "--json",
        path_str(&json),
    ]);
    assert_success(&output, "run with config file");

    // Viable ratio 0.60 is at the configured cutoff
    let report = std::fs::read_to_string(&text).unwrap();
    assert_eq!(report.matches(WARNING).count(), 3);

    let summary: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(summary["sets"][0]["low_yield_pairs"].as_array().unwrap().len(), 3);

    // The command line wins over the file
    let output = run_report(&[
        "--stats",
        path_str(&stats),
        "--config",
        path_str(&config),
        "--short-products-cutoff",
        "0.55",
        "--text-report",
        path_str(&text),
    ]);
    assert_success(&output, "run with cutoff override");
    let report = std::fs::read_to_string(&text).unwrap();
    assert!(!report.contains(WARNING));
}

#[test]
fn test_missing_pair_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let stats = data_dir().join("missing_pair.json");
    let text = dir.path().join("report.txt");
    let xlsx = dir.path().join("report.xlsx");

    let output = run_report(&["--stats", path_str(&stats), "--text-report", path_str(&text), "--xlsx", path_str(&xlsx)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("primer set 0"), "stderr: {}", stderr);
    assert!(!text.exists());
    assert!(!xlsx.exists());
}

#[test]
fn test_gff_report() {
    let dir = tempfile::tempdir().unwrap();
    let results = data_dir().join("gff_overlaps.json");
    let tsv = dir.path().join("overlaps.tsv");

    let output = run_report(&["--gff-results", path_str(&results), "--gff-report", path_str(&tsv)]);
    assert_success(&output, "gff report run");

    assert_eq!(
        std::fs::read_to_string(&tsv).unwrap(),
        "PRIMER PAIR\tEXONS\tGENES\tNUM_PCR_PRODUCTS\nP1-P2\t3\t2\t10\nP1-P3\t0\t1\t4"
    );
}

#[test]
fn test_nothing_to_do_is_an_error() {
    let stats = data_dir().join("three_primers.json");
    let output = run_report(&["--stats", path_str(&stats)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nothing to do"));
}

#[test]
fn test_gff_flags_must_be_paired() {
    let results = data_dir().join("gff_overlaps.json");
    let output = run_report(&["--gff-results", path_str(&results)]);
    assert!(!output.status.success());
}
