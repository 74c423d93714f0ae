use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn inspect_stops_after_stage() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "# Title\n**bold**").unwrap();

    let mut cmd = cargo_bin_cmd!("prep");
    cmd.arg("inspect").arg(input.as_os_str()).arg("headers");

    cmd.assert().success().stdout(
        "<h1 class=\"prep-h1\">Title</h1>\n**bold**\n",
    );
}

#[test]
fn inspect_reveals_code_newlines() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "```\na\nb\n```").unwrap();

    let mut cmd = cargo_bin_cmd!("prep");
    cmd.arg("inspect").arg(input.as_os_str()).arg("code-blocks");

    cmd.assert().success().stdout(predicate::str::contains("a␤b"));
}

#[test]
fn inspect_rejects_unknown_stage() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "text").unwrap();

    let mut cmd = cargo_bin_cmd!("prep");
    cmd.arg("inspect").arg(input.as_os_str()).arg("smartypants");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn inspect_all_stages_as_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "x").unwrap();

    let mut cmd = cargo_bin_cmd!("prep");
    cmd.arg("inspect")
        .arg(input.as_os_str())
        .arg("inline-code")
        .arg("--extra-json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"stage\": \"escape\""))
        .stdout(predicate::str::contains("\"stage\": \"inline-code\""))
        .stdout(predicate::str::contains("\"stage\": \"headers\"").not());
}

#[test]
fn list_stages_in_order() {
    let mut cmd = cargo_bin_cmd!("prep");
    cmd.arg("--list-stages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(" 1. escape"))
        .stdout(predicate::str::contains("13. restore"));
}

#[test]
fn list_formats_shows_both() {
    let mut cmd = cargo_bin_cmd!("prep");
    cmd.arg("--list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("html"))
        .stdout(predicate::str::contains("inline"));
}

#[test]
fn generate_css_prints_stylesheet() {
    let mut cmd = cargo_bin_cmd!("prep");
    cmd.arg("generate-css");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".prep-code-block"))
        .stdout(predicate::str::contains(".prep-chat-message"));
}
