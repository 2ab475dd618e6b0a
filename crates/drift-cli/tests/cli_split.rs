use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn temp_file(tag: &str, content: &str) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("drift_{tag}_{pid}_{nanos}.yaml"));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn cli_split_stdout_golden() {
    let input = temp_file("split", "\nkind: Service1\n---\nkind: Service2\n---");

    let mut cmd = cargo_bin_cmd!("drift");
    cmd.args(["split", input.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout("kind: Service1\n---\nkind: Service2\n---\n");

    let _ = fs::remove_file(&input);
}

#[test]
fn cli_split_drops_comment_only_documents() {
    let input = temp_file("split_comments", "kind: Service1\n---\n# just a comment\n---\n");

    let mut cmd = cargo_bin_cmd!("drift");
    cmd.args(["split", input.to_str().unwrap()]);
    cmd.assert().success().stdout("kind: Service1\n---\n");

    let _ = fs::remove_file(&input);
}

#[test]
fn cli_split_reports_malformed_documents() {
    let input = temp_file("split_bad", "kind: Service1\n---\nkind: [unbalanced\n");

    let mut cmd = cargo_bin_cmd!("drift");
    cmd.args(["split", input.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error parsing yaml document"))
        .stderr(predicate::str::contains("kind: [unbalanced"));

    let _ = fs::remove_file(&input);
}

#[test]
fn cli_split_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("drift");
    cmd.args(["split", "-"]);
    cmd.write_stdin("kind: Service1\n");
    cmd.assert().success().stdout("kind: Service1\n---\n");
}

#[test]
fn cli_flatten_prints_sorted_paths() {
    let input = temp_file(
        "flatten",
        "kind: Service\nmetadata:\n  name: web\nports:\n  - 80\n  - 443\n",
    );

    let mut cmd = cargo_bin_cmd!("drift");
    cmd.args(["flatten", input.to_str().unwrap()]);
    cmd.assert().success().stdout(
        "kind=Service\n\
         metadata.name=web\n\
         ports.#=2\n\
         ports.0=80\n\
         ports.1=443\n",
    );

    let _ = fs::remove_file(&input);
}
