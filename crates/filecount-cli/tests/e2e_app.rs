/// End-to-end tests for `run` — the full scan → listing → report path,
/// driven from parsed arguments exactly as the binary does, with the
/// listing captured in memory.
use clap::Parser;
use filecount_cli::{run, AppConfig, Args};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn config(argv: &[&str]) -> AppConfig {
    let args = Args::try_parse_from(std::iter::once("filecount").chain(argv.iter().copied()))
        .expect("arguments must parse");
    AppConfig::from_args(&args).expect("a --path must be given")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// root/ with one file and two subdirectories of five files each.
fn build_multidirs() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("top.txt"), b"x").unwrap();
    for name in ["alpha", "beta"] {
        let dir = tmp.path().join(name);
        fs::create_dir(&dir).unwrap();
        for i in 0..5 {
            fs::write(dir.join(format!("{i}.txt")), b"x").unwrap();
        }
    }
    tmp
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn listing_is_sorted_by_descending_count() {
    let tmp = build_multidirs();
    let root = path_arg(tmp.path());

    let mut out = Vec::new();
    run(&config(&["--path", root, "--workers", "2"]), &mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines[0], format!("total number of files in {root}: 11"));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "num files\tpath");
    assert_eq!(lines[3], "---------\t----");

    let mut fives: Vec<&str> = lines[4..6].to_vec();
    fives.sort_unstable();
    let alpha = format!("5\t\t{}", tmp.path().join("alpha").display());
    let beta = format!("5\t\t{}", tmp.path().join("beta").display());
    assert_eq!(fives, vec![alpha.as_str(), beta.as_str()]);
    assert_eq!(lines[6], format!("1\t\t{root}"));
    assert_eq!(lines.len(), 7);
    assert!(listing.ends_with("\n\n"));
}

#[test]
fn report_flag_writes_tsv() {
    let tmp = build_multidirs();
    let out_dir = TempDir::new().unwrap();
    let report = out_dir.path().join("counts.tsv");

    let mut out = Vec::new();
    run(
        &config(&[
            "--path",
            path_arg(tmp.path()),
            "--report",
            "--output-file",
            path_arg(&report),
        ]),
        &mut out,
    )
    .unwrap();

    let tsv = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[0], "file count\tpath");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("5\t"));
    assert!(lines[2].starts_with("5\t"));
    assert_eq!(lines[3], format!("1\t{}", tmp.path().display()));
}

#[test]
fn without_report_flag_no_file_is_written() {
    let tmp = build_multidirs();
    let out_dir = TempDir::new().unwrap();
    let report = out_dir.path().join("counts.tsv");

    let mut out = Vec::new();
    run(
        &config(&["--path", path_arg(tmp.path()), "--output-file", path_arg(&report)]),
        &mut out,
    )
    .unwrap();

    assert!(!report.exists());
}

#[test]
fn not_a_directory_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();

    let mut out = Vec::new();
    let err = run(&config(&["--path", path_arg(&file)]), &mut out).unwrap_err();

    assert!(out.is_empty());
    assert!(format!("{err:#}").contains("is not a directory"), "{err:#}");
}
