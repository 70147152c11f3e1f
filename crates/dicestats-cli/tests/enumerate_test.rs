//! End-to-end tests for `dice-enumerate`.

mod common;

#[test]
fn test_enumerate_prints_roll_table_then_summary() {
    let output = common::run(common::ENUMERATE, &[], &[], "");

    assert!(output.status.success());
    let text = common::stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + 36 + 2 + 11);
    assert_eq!(lines[0], "Die1\tDie2\tSum");

    let mut expected = Vec::new();
    for die1 in 1..=6 {
        for die2 in 1..=6 {
            expected.push(format!("{die1}\t{die2}\t{}", die1 + die2));
        }
    }
    assert_eq!(&lines[1..37], expected.as_slice());
}

#[test]
fn test_enumerate_summary_is_triangular() {
    let output = common::run(common::ENUMERATE, &[], &[], "");

    let rows = common::summary_rows(&common::stdout(&output));
    let sums: Vec<u8> = rows.iter().map(|r| r.0).collect();
    let freqs: Vec<u64> = rows.iter().map(|r| r.1).collect();

    assert_eq!(sums, (2..=12).collect::<Vec<u8>>());
    assert_eq!(freqs, vec![1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1]);
    assert_eq!(freqs.iter().sum::<u64>(), 36);
}

#[test]
fn test_enumerate_probabilities_are_frequency_over_36() {
    let output = common::run(common::ENUMERATE, &[], &[], "");

    for (_, frequency, probability) in common::summary_rows(&common::stdout(&output)) {
        #[allow(clippy::cast_precision_loss)]
        let expected = frequency as f64 / 36.0;
        assert_eq!(probability.parse::<f64>().unwrap(), expected);
    }
    assert!(common::stdout(&output).contains("7\t6\t0.16666666666666666\n"));
}

#[test]
fn test_enumerate_ignores_stdin_and_is_stable() {
    let first = common::run(common::ENUMERATE, &[], &[], "");
    let second = common::run(common::ENUMERATE, &[], &[], "junk\n");

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_enumerate_json() {
    let output = common::run(common::ENUMERATE, &["--json"], &[], "");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["procedure"], "enumerator");
    assert_eq!(json["total"], 36);
    assert_eq!(json["rolls"][6], serde_json::json!({ "die1": 2, "die2": 1, "sum": 3 }));
    assert_eq!(json["summary"][0]["probability"], 1.0 / 36.0);
}

#[test]
fn test_enumerate_rejects_arguments() {
    let output = common::run(common::ENUMERATE, &["5"], &[], "");

    assert_eq!(output.status.code(), Some(2));
    assert!(common::stderr(&output).contains("unexpected argument '5'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_enumerate_help() {
    let output = common::run(common::ENUMERATE, &["--help"], &[], "");

    assert!(output.status.success());
    assert!(common::stdout(&output).contains("Usage: dice-enumerate [OPTIONS]"));
    assert!(common::stdout(&output).contains("--json"));
}
