use proptest::prelude::*;
use tol::engine::TclEngine;
use tol::error::TolError;
use tol::processor::Processor;
use tol::report::Reporter;

/// Run an argument list against the Tcl engine, capturing output.
fn run(args: &[String]) -> (Result<(), TolError>, String, String) {
    let mut p = Processor::new(TclEngine::new(), Reporter::new(Vec::new(), Vec::new()));
    let result = p.run(args);
    let (out, err) = p.into_reporter().into_inner();
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|&s| s.to_owned()).collect()
}

#[test]
fn zero_arguments_is_success_without_output() {
    let (result, out, err) = run(&[]);
    assert!(result.is_ok());
    assert!(out.is_empty() && err.is_empty());
}

#[test]
fn reset_round_trip() {
    let (result, out, err) = run(&owned(&["-r", "-s", "x", "1", "-p", "set x", "-r", "set x"]));
    assert_eq!(out, "1\n");
    assert!(matches!(result, Err(TolError::Evaluation { arg: 8, .. })));
    assert!(err.contains("no such variable"), "{err}");
}

#[test]
fn assignment_to_array_stops_the_run() {
    let (result, out, err) = run(&owned(&["array set a {x 1}", "-s", "a", "1", "-p", "set z 9"]));
    assert!(matches!(result, Err(TolError::Evaluation { arg: 2, .. })));
    assert_eq!(out, "");
    assert_eq!(err, "arg 2: can't set \"a\": variable is array\n");
}

proptest! {
    /// Text-only argument lists: every command runs in order until the first
    /// failure, and nothing after it runs.
    #[test]
    fn commands_run_in_order_until_first_failure(
        values in prop::collection::vec(0u32..1000, 1..8),
        fail_at in prop::option::of(0usize..8),
    ) {
        let fail_at = fail_at.filter(|&k| k < values.len());
        let mut args = Vec::new();
        for (i, v) in values.iter().enumerate() {
            args.push("-p".to_owned());
            if Some(i) == fail_at {
                args.push("error boom".to_owned());
            } else {
                args.push(format!("expr {{{v}}}"));
            }
        }

        let (result, out, err) = run(&args);
        let ran = fail_at.unwrap_or(values.len());
        let expected: String = values[..ran].iter().map(|v| format!("{v}\n")).collect();
        prop_assert_eq!(out, expected);
        match fail_at {
            Some(k) => {
                let failed_at_expected_arg =
                    matches!(result, Err(TolError::Evaluation { arg, .. }) if arg == 2 * k + 2);
                prop_assert!(failed_at_expected_arg);
                prop_assert!(err.starts_with(&format!("arg {}: boom", 2 * k + 2)), "{}", err);
            }
            None => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(err, "");
            }
        }
    }

    /// `-p` shows exactly the command it precedes.
    #[test]
    fn print_flag_is_per_command(
        commands in prop::collection::vec((any::<bool>(), 0u32..1000), 0..10),
    ) {
        let mut args = Vec::new();
        for (i, (print, v)) in commands.iter().enumerate() {
            if *print {
                args.push("-p".to_owned());
            }
            args.push(format!("set v{i} {v}"));
        }
        let (result, out, _) = run(&args);
        prop_assert!(result.is_ok());
        let expected: String = commands
            .iter()
            .filter(|(print, _)| *print)
            .map(|(_, v)| format!("{v}\n"))
            .collect();
        prop_assert_eq!(out, expected);
    }

    /// `-s` binds for later commands; `-r` forgets the binding.
    #[test]
    fn set_binding_survives_until_reset(
        name in "[a-z][a-z0-9_]{0,7}",
        value in "[A-Za-z0-9]{0,12}",
    ) {
        let read = format!("set {{{name}}}");
        let args = vec![
            "-s".to_owned(), name.clone(), value.clone(),
            "-p".to_owned(), read.clone(),
            "-r".to_owned(), read,
        ];
        let (result, out, err) = run(&args);
        let expected = if value.is_empty() { String::new() } else { format!("{value}\n") };
        prop_assert_eq!(out, expected);
        prop_assert!(result.is_err());
        prop_assert!(err.starts_with("arg 7: "), "{}", err);
    }

    /// Pieces chained with `-c` form a single command.
    #[test]
    fn continued_pieces_form_one_command(
        words in prop::collection::vec("[a-z]{1,6}", 0..6),
    ) {
        let mut args = owned(&["-c", "set l [list"]);
        for w in &words {
            args.push("-c".to_owned());
            args.push(w.clone());
        }
        args.push("]".to_owned());
        args.push("-p".to_owned());
        args.push("llength $l".to_owned());

        let (result, out, _) = run(&args);
        prop_assert!(result.is_ok());
        prop_assert_eq!(out, format!("{}\n", words.len()));
    }

    /// `-i` swallows one failure; the next unguarded failure is fatal.
    #[test]
    fn ignore_covers_exactly_one_failure(before in 0usize..4, between in 0usize..4) {
        let mut args = Vec::new();
        for _ in 0..before {
            args.push("set a 1".to_owned());
        }
        args.push("-i".to_owned());
        args.push("error first".to_owned());
        for _ in 0..between {
            args.push("-p".to_owned());
            args.push("set a 1".to_owned());
        }
        args.push("error second".to_owned());
        args.push("-p".to_owned());
        args.push("set never 1".to_owned());

        let (result, out, err) = run(&args);
        prop_assert_eq!(out, "1\n".repeat(between));
        prop_assert!(result.is_err());
        prop_assert!(err.contains("second"), "{}", err);
        prop_assert!(!err.contains("first"), "{}", err);
    }
}
