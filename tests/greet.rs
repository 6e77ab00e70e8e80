//! Runs the `greet` binary and checks its console output.

use chrono::Local;
use std::process::{Command, Output};

fn run_greet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_greet"))
        .args(args)
        .output()
        .expect("failed to run greet")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn assert_today_line(lines: &[String]) {
    let today = Local::now();
    let year = today.format("%Y").to_string();
    let month = today.format("%B").to_string();
    let line = lines
        .iter()
        .find(|line| line.starts_with("Today is "))
        .expect("no date line");
    assert!(line.contains(&year), "{line}");
    assert!(line.contains(&month), "{line}");
}

#[test]
fn greets_named_user_with_date() {
    let output = run_greet(&["Alice"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[1], "* HELLO WORLD *");
    let greeting = lines
        .iter()
        .position(|line| line.starts_with("Hello, Alice!"))
        .expect("no greeting");
    let date = lines
        .iter()
        .position(|line| line.starts_with("Today is "))
        .expect("no date line");
    assert!(greeting < date);
    assert_today_line(&lines);
}

#[test]
fn greets_guest_without_argument() {
    let output = run_greet(&[]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines.contains(&"Hello, Guest! Welcome to our app.".to_string()));
    assert_today_line(&lines);
}

#[test]
fn empty_name_falls_back_to_guest() {
    let output = run_greet(&[""]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines.contains(&"Hello, Guest! Welcome to our app.".to_string()));
}
