use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn elapsed_line() -> impl Predicate<str> {
    predicate::str::is_match(r"^elapsed: [0-9.eE+-]+s \| -?[0-9]+\n$").expect("valid regex")
}

#[test]
fn run_single_benchmark_prints_one_line() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.args(["run", "primes", "-n", "20"]);
    cmd.assert()
        .success()
        .stdout(elapsed_line())
        .stdout(predicate::str::ends_with("| 19\n"));
    Ok(())
}

#[test]
fn run_with_wall_clock() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.args(["run", "fib", "-n", "10", "--clock", "wall"]);
    cmd.assert().success().stdout(predicate::str::ends_with("| 550\n"));
    Ok(())
}

#[test]
fn run_degenerate_size_fails() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.args(["run", "factors", "-n", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no divisors"));
    Ok(())
}

#[test]
fn run_writes_json_to_output_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("report.json");

    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.args(["run", "loop", "list", "-n", "5", "--format", "json", "--output"])
        .arg(&path);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let record: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(record["clock"], "process");
    let results = record["results"].as_array().ok_or("results should be an array")?;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["key"], "loop");
    assert_eq!(results[0]["value"], 10);
    assert_eq!(results[1]["key"], "list");
    assert_eq!(results[1]["value"], 4);
    Ok(())
}

#[test]
fn run_csv_has_header_and_rows() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.args(["run", "objects", "-n", "2", "--format", "csv"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("benchmark,n,clock,elapsed_secs,value\n"))
        .stdout(predicate::str::contains("objects,2,process,"));
    Ok(())
}

#[test]
fn list_shows_every_benchmark() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.arg("list");
    let mut assert = cmd.assert().success();
    for key in ["factors", "fib", "list", "loop", "objects", "primes"] {
        assert = assert.stdout(predicate::str::contains(key));
    }
    Ok(())
}

#[test]
fn verify_passes_for_all_scenarios() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.arg("verify");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ok factors (n = 12) -> 12"))
        .stdout(predicate::str::contains("ok primes (n = 20) -> 19"));
    Ok(())
}

#[test]
fn trace_goes_to_stderr_only() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("hbench")?;
    cmd.env("HBENCH_TRACE", "hbench_core=info")
        .args(["run", "list", "-n", "5"]);
    cmd.assert()
        .success()
        .stdout(elapsed_line())
        .stderr(predicate::str::contains("workload finished"));
    Ok(())
}

#[test]
fn standalone_fib_prints_sanity_value() -> Result<(), Box<dyn Error>> {
    // 10 * fib(30)
    let mut cmd = Command::cargo_bin("fib")?;
    cmd.env_remove("HBENCH_TRACE");
    cmd.assert()
        .success()
        .stdout(elapsed_line())
        .stdout(predicate::str::ends_with("| 8320400\n"));
    Ok(())
}

#[test]
fn standalone_primes_prints_sanity_value() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("primes")?;
    cmd.assert()
        .success()
        .stdout(elapsed_line())
        .stdout(predicate::str::ends_with("| 29989\n"));
    Ok(())
}
