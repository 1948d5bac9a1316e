#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notemark_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("notemark"));
    cmd.env("NOTEMARK_HOME", home.path())
        .env_remove("NOTEMARK_OWNER")
        .env_remove("NOTEMARK_DEFAULT_TITLE")
        .env_remove("NOTEMARK_STYLE_BOUNDARY_RUNS")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

/// Creates a note and returns the short id printed in the success message.
fn create_note(home: &TempDir, title: &str, text: &str) -> String {
    let output = notemark_cmd(home)
        .args(["new", title, "--text", text])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('(').unwrap() + 1;
    let end = stdout.find(')').unwrap();
    stdout[start..end].to_string()
}

#[test]
fn render_keeps_markers_in_plain_output() {
    let home = TempDir::new().unwrap();
    notemark_cmd(&home)
        .arg("render")
        .write_stdin("Hello #uworld#u today")
        .assert()
        .success()
        .stdout("Hello #uworld#u today\n");
}

#[test]
fn render_json_reports_sink_calls() {
    let home = TempDir::new().unwrap();
    notemark_cmd(&home)
        .args(["render", "--json"])
        .write_stdin("Hello #uworld#u today")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"len\": 21"))
        .stdout(predicate::str::contains("\"start\": 8"))
        .stdout(predicate::str::contains("\"end\": 13"))
        .stdout(predicate::str::contains("underline"));
}

#[test]
fn spans_reads_a_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("note.txt");
    fs::write(&file, "#bHello#b.").unwrap();

    notemark_cmd(&home)
        .arg("spans")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start\": 2"))
        .stdout(predicate::str::contains("\"end\": 7"))
        .stdout(predicate::str::contains("\"rule\": 3"));
}

#[test]
fn spans_drop_runs_at_the_end() {
    let home = TempDir::new().unwrap();
    notemark_cmd(&home)
        .arg("spans")
        .write_stdin("#bHello#b")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn boundary_runs_can_be_enabled_by_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("notemark.toml"), "style_boundary_runs = true\n").unwrap();

    notemark_cmd(&home)
        .arg("spans")
        .write_stdin("#bHello#b")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start\": 2"));
}

#[test]
fn rules_lists_builtin_and_configured_rules() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("notemark.toml"),
        "[[rules]]\nname = \"highlight\"\npattern = \"==(\\\\w+)==\"\nstyle = \"bold\"\n",
    )
    .unwrap();

    notemark_cmd(&home)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("strikethrough"))
        .stdout(predicate::str::contains("italic"))
        .stdout(predicate::str::contains("highlight"));
}

#[test]
fn notes_workflow() {
    let home = TempDir::new().unwrap();

    let groceries = create_note(&home, "Groceries", "eggs and #bmilk#b please");
    let keys = create_note(&home, "Keys", "under the mat");
    assert!(home.path().join("notes.json").exists());

    notemark_cmd(&home)
        .args(["pin", keys.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note pinned"));

    let output = notemark_cmd(&home).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let pinned = stdout.find("Pinned").unwrap();
    let keys_line = stdout.find("Keys").unwrap();
    let groceries_line = stdout.find("Groceries").unwrap();
    assert!(pinned < keys_line && keys_line < groceries_line);

    notemark_cmd(&home)
        .args(["search", "MILK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Keys").not());

    notemark_cmd(&home)
        .args(["show", groceries.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("eggs and #bmilk#b please"));

    notemark_cmd(&home)
        .args(["edit", groceries.as_str(), "just bread"])
        .assert()
        .success();
    notemark_cmd(&home)
        .args(["show", groceries.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("just bread"));

    notemark_cmd(&home)
        .args(["delete", keys.as_str()])
        .assert()
        .success();
    notemark_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keys").not());
}

#[test]
fn prune_removes_blank_notes() {
    let home = TempDir::new().unwrap();
    notemark_cmd(&home).arg("new").assert().success();
    create_note(&home, "Kept", "content");

    notemark_cmd(&home)
        .arg("prune")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 empty note(s)"));

    notemark_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept"))
        .stdout(predicate::str::contains("Note ").not());
}

#[test]
fn unknown_id_fails() {
    let home = TempDir::new().unwrap();
    notemark_cmd(&home)
        .args(["show", "zzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
