//! End-to-end tests: run the built binary and check what lands on stdout,
//! stderr, and the exit status.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

const ALL_FLAGS: &[&str] = &[
    "--ci",
    "0.8123",
    "--level",
    "HIGH",
    "--integration",
    "0.9",
    "--coherence",
    "0.75",
    "--temporal-depth",
    "0.6",
];

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read fixture {name}: {e}"))
}

/// Run in an empty directory so no stray `zele-report.toml` is picked up.
fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zele-report"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run zele-report")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn stdout_is_exactly_the_report() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, ALL_FLAGS);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), load_fixture("report-high.txt"));
}

#[test]
fn validation_failure_writes_nothing_to_stdout() {
    let dir = TempDir::new().unwrap();
    let out = run(
        &dir,
        &["--ci", "0.8", "--level", "HIGH", "--integration", "0.9", "--temporal-depth", "0.6"],
    );
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = stderr(&out);
    assert!(err.contains("invalid metric coherence"), "stderr: {err}");
    assert!(err.contains("missing metric: coherence"), "stderr: {err}");
}

#[test]
fn out_of_range_warning_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    let mut args = ALL_FLAGS.to_vec();
    args[7] = "-0.1";
    let out = run(&dir, &args);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let report = stdout(&out);
    assert!(report.contains("   Coherence = -0.1000 (consistent patterns)\n"));
    assert!(!report.contains("metric outside"));
    assert!(stderr(&out).contains("metric outside [0, 1]"));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let mut args = ALL_FLAGS.to_vec();
    args.extend_from_slice(&["--config", "missing.toml"]);
    let out = run(&dir, &args);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("failed to load config missing.toml"));
}

#[test]
fn config_output_path_and_flag_override() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("zele-report.toml"),
        "[output]\npath = \"from-config.txt\"\n",
    )
    .unwrap();

    let out = run(&dir, ALL_FLAGS);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(out.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("from-config.txt")).unwrap(),
        load_fixture("report-high.txt")
    );

    let mut args = ALL_FLAGS.to_vec();
    args.extend_from_slice(&["-o", "from-flag.json", "--format", "json"]);
    let out = run(&dir, &args);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(out.stdout.is_empty());

    let json = fs::read_to_string(dir.path().join("from-flag.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["ci"], 0.8123);
}

#[test]
fn metrics_from_default_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("zele-report.toml"),
        "[metrics]\nci = 0.8123\nconsciousness_level = \"HIGH\"\nintegration = 0.9\n\
         coherence = 0.75\ntemporal_depth = 0.6\n",
    )
    .unwrap();
    let out = run(&dir, &[]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), load_fixture("report-high.txt"));
}
