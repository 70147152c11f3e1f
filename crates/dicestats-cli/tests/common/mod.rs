//! Shared helpers for driving the compiled binaries.
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Path to the `dice-enumerate` binary under test.
pub const ENUMERATE: &str = env!("CARGO_BIN_EXE_dice-enumerate");

/// Path to the `dice-sample` binary under test.
pub const SAMPLE: &str = env!("CARGO_BIN_EXE_dice-sample");

/// Runs `bin` with `args`, the given extra environment, and `stdin` piped
/// in. Configuration variables from the test runner's own environment are
/// removed first.
pub fn run(bin: &str, args: &[&str], env: &[(&str, &str)], stdin: &str) -> Output {
    let mut command = Command::new(bin);
    command
        .args(args)
        .env_remove("DICE_ROLLS")
        .env_remove("DICE_SEED")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        command.env(key, value);
    }

    let mut child = command.spawn().unwrap();
    if let Some(mut pipe) = child.stdin.take() {
        // The binary may exit without reading, closing the pipe early.
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// The summary rows (`sum`, `frequency`, `probability` text) that follow
/// the `Sum\tFreq\tProb` header.
pub fn summary_rows(text: &str) -> Vec<(u8, u64, String)> {
    text.lines()
        .skip_while(|line| *line != "Sum\tFreq\tProb")
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            (
                fields[0].parse().unwrap(),
                fields[1].parse().unwrap(),
                fields[2].to_owned(),
            )
        })
        .collect()
}
