use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("tinybf").unwrap()
}

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn runs_program_from_file() {
    // 'A' is 65
    let tf = source_file("++++++++[>++++++++<-]>+. print an A");
    cargo_bin()
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout("A")
        .stderr(predicate::str::is_empty());
}

#[test]
fn echoes_stdin() {
    let tf = source_file(",.,.");
    cargo_bin()
        .arg(tf.path())
        .write_stdin("ok")
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout("ok");
}

#[test]
fn debug_output_mode() {
    let tf = source_file("+++.");
    cargo_bin()
        .arg("--output-mode")
        .arg("debug")
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout("3 \u{3}\n");
}

#[test]
fn dev_mode_dumps_tokens() {
    let tf = source_file("+ comment .");
    cargo_bin()
        .arg("--dev")
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout("1 \u{1}\n")
        .stderr(predicate::str::contains("Token: +").and(predicate::str::contains("Token: .")));
}

#[test]
fn missing_file_fails() {
    cargo_bin()
        .arg("/definitely/not/a/real/program.bf")
        .timeout(Duration::from_secs(5))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn unmatched_end_fails_after_earlier_output() {
    let tf = source_file("+++.].");
    cargo_bin()
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .failure()
        .stdout("\u{3}")
        .stderr(predicate::str::contains("End of loop (]) at byte 4 has no matching start"));
}

#[test]
fn unterminated_start_fails() {
    let tf = source_file("+[");
    cargo_bin()
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start of loop ([) at byte 1 is never closed"));
}

#[test]
fn check_rejects_before_running() {
    let tf = source_file("+++.[");
    cargo_bin()
        .arg("--check")
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parsing error: Start of loop ([) at byte 4"));
}

#[test]
fn max_steps_stops_runaway_loop() {
    let tf = source_file("+[]");
    cargo_bin()
        .arg("--max-steps")
        .arg("1000")
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .failure()
        .stderr(predicate::str::contains("aborted"));
}

#[test]
fn zero_cells_is_rejected() {
    let tf = source_file("+");
    cargo_bin()
        .arg("--cells")
        .arg("0")
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one cell"));
}

#[test]
fn small_tape_clamps() {
    // Moving past the end of a two cell tape stays on cell 1
    let tf = source_file(">>>>+++<.>.");
    cargo_bin()
        .arg("--cells")
        .arg("2")
        .arg(tf.path())
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout("\u{0}\u{3}");
}
