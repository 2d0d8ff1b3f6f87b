/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary against a temporary tree and verify
/// command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{Tree, TreeBuilder};
use predicates::prelude::*;

fn linesweep(tree: &Tree) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linesweep"));
    cmd.env_remove("RUST_LOG")
        .env_remove("LINESWEEP_ROOT")
        .env_remove("LINESWEEP_HISTORY")
        .arg("--root")
        .arg(tree.root())
        .arg("--history")
        .arg(tree.history_path());
    cmd
}

fn linesweep_with_stdin(tree: &Tree) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_linesweep"));
    cmd.env_remove("RUST_LOG")
        .arg("--root")
        .arg(tree.root())
        .arg("--history")
        .arg(tree.history_path());
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linesweep"));
    cmd.assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linesweep"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find, classify and rewrite lines"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("edit"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linesweep"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linesweep"));
    cmd.arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_classify() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linesweep"));
    cmd.args(["classify", "public Foo() {"])
        .assert()
        .success()
        .stdout(predicate::eq("[Constructor]\n"));
}

#[test]
fn test_cli_find() {
    let tree = TreeBuilder::new().with_file("app/build.gradle", "").build();

    linesweep(&tree)
        .args(["find", "build.gradle"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("build.gradle -> "));

    linesweep(&tree)
        .args(["find", "pom.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File 'pom.xml' not found."));
}

#[test]
fn test_cli_search_lists_tagged_matches() {
    let tree = TreeBuilder::new()
        .with_file("build.gradle", "dependencies {\n    implementation 'com.x:lib:1.0'\n}\n")
        .build();

    linesweep(&tree)
        .args(["search", "com.x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Gradle] in "))
        .stdout(predicate::str::contains("line 2: implementation 'com.x:lib:1.0'"));
}

#[test]
fn test_cli_search_not_found_and_file_short_circuit() {
    let tree = TreeBuilder::new().with_file("settings.gradle", "x\n").build();

    linesweep(&tree)
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'zzz' not found in any files."));

    linesweep(&tree)
        .args(["search", "settings.gradle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'settings.gradle' is a file located at: "));
}

#[test]
fn test_cli_search_respects_ignore_flag() {
    let tree = TreeBuilder::new()
        .with_file("src/test/ATest.java", "needle\n")
        .with_file("src/main/A.java", "needle\n")
        .build();

    linesweep(&tree)
        .args(["--ignore", "test/", "search", "needle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A.java"))
        .stdout(predicate::str::contains("ATest.java").not());
}

#[test]
fn test_cli_batch_edit_then_rerun() {
    let tree = TreeBuilder::new().with_file("gradle.properties", "lib=1.0\n").build();

    linesweep(&tree)
        .args(["edit", "1.0", "--replace", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated "))
        .stdout(predicate::str::contains("1 updated, 0 skipped, 0 already handled"));
    assert_eq!(tree.read("gradle.properties"), "lib=2.0\n");

    linesweep(&tree)
        .args(["edit", "1.0", "--replace", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches found for '1.0'"));
}

#[test]
fn test_cli_interactive_edit_reads_stdin() {
    let tree = TreeBuilder::new().with_file("a.properties", "x=1.0\ny=1.0\n").build();

    linesweep_with_stdin(&tree)
        .args(["edit", "1.0"])
        .write_stdin("\n3.0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter replacement (or press Enter to skip): "))
        .stdout(predicate::str::contains("1 updated, 1 skipped"));

    assert_eq!(tree.read("a.properties"), "x=1.0\ny=3.0\n");
}

#[test]
fn test_cli_history_listing() {
    let tree = TreeBuilder::new().with_file("v.txt", "1.0\n").build();

    linesweep(&tree).args(["edit", "1.0", "--replace", "1.1"]).assert().success();

    linesweep(&tree)
        .args(["history", "--status", "updated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated (1):"))
        .stdout(predicate::str::contains("line 1: 1.0 -> 1.1"))
        .stdout(predicate::str::contains("skipped").not());
}

#[test]
fn test_cli_corrupt_history_fails() {
    let tree = TreeBuilder::new().with_file("a.txt", "x\n").with_history("not json").build();

    linesweep(&tree)
        .args(["search", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn test_cli_shell_session() {
    let tree = TreeBuilder::new().with_file("A.java", "@Deprecated\n").build();

    linesweep_with_stdin(&tree)
        .arg("shell")
        .write_stdin("Deprecated\nignore A.java\nDeprecated\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Annotation] in "))
        .stdout(predicate::str::contains("'A.java' added to ignore list."))
        .stdout(predicate::str::contains("'Deprecated' not found in any files."));
}

#[test]
fn test_cli_serve_round_trip() {
    let tree = TreeBuilder::new().with_file("pom.xml", "<version>1.0</version>\n").build();

    linesweep_with_stdin(&tree)
        .arg("serve")
        .write_stdin(
            "{\"id\":1,\"tool\":\"find_file\",\"arguments\":{\"filename\":\"pom.xml\"}}\n\
             {\"id\":2,\"tool\":\"bogus\",\"arguments\":{}}\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":1"))
        .stdout(predicate::str::contains("pom.xml -> "))
        .stdout(predicate::str::contains("Unknown tool: bogus"));
}
