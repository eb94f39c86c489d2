use std::{cell::RefCell, rc::Rc};

use lox_expr::{parse, repl_banner, run, scan, Diagnostics, Error, Interpreter, Value};

fn run_capture(input: &str) -> (Result<Value, Error>, String) {
    let out = Rc::new(RefCell::new(Vec::<u8>::new()));
    let mut itp = Interpreter::new(out.clone());
    let result = run(input, &mut itp);
    let printed = String::from_utf8(out.borrow().clone()).unwrap();
    (result, printed)
}

fn assert_prints(input: &str, expected: &str) {
    let (result, printed) = run_capture(input);
    if let Err(e) = result {
        panic!("{input:?} failed: {e}");
    }
    assert_eq!(printed, format!("{expected}\n"), "{input:?}");
}

#[test]
fn printer_round_trips() {
    for (input, expected) in [
        ("1 + 2", "(+ 1 2)"),
        ("1 + 2 * 3", "(+ 1 (* 2 3))"),
        ("(1 + 2) * 3", "(* (group (+ 1 2)) 3)"),
    ] {
        let mut diagnostics = Diagnostics::new();
        let items = scan(input, &mut diagnostics);
        let expr = parse(&items, &mut diagnostics).unwrap();
        assert!(!diagnostics.had_error());
        assert_eq!(expr.to_string(), expected);
    }
}

#[test]
fn results_are_printed_in_display_form() {
    assert_prints("1 + 2", "3");
    assert_prints("7 / 2", "3.5");
    assert_prints("\"a\" + \"b\"", "ab");
    assert_prints("!nil", "true");
    assert_prints("!0", "false");
    assert_prints("nil", "nil");
    assert_prints("// just a comment\n(4 >= 4) == true", "true");
}

#[test]
fn runtime_error_reports_operator_line() {
    let (result, printed) = run_capture("1\n+\n\"b\"");
    let err = match result {
        Err(err @ Error::Runtime(_)) => err,
        other => panic!("expected runtime error, got {other:?}"),
    };
    assert_eq!(
        err.to_string(),
        "Operands must be two numbers or two strings.\n[line 2]"
    );
    assert_eq!(err.exit_code(), 70);
    assert!(printed.is_empty());
}

#[test]
fn negating_bool_is_runtime_error() {
    let (result, _) = run_capture("-true");
    match result {
        Err(Error::Runtime(e)) => assert_eq!(e.to_string(), "Operand must be a number."),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn syntax_error_skips_evaluation() {
    let (result, printed) = run_capture("(1 + 2");
    let Err(Error::Static(diagnostics)) = &result else {
        panic!("expected static error, got {result:?}");
    };
    let reports: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        reports,
        vec!["[line 1] Error at end: Expect ')' after expression."]
    );
    assert_eq!(result.unwrap_err().exit_code(), 65);
    assert!(printed.is_empty());
}

#[test]
fn lexical_and_syntax_errors_surface_together() {
    let (result, printed) = run_capture("1 + @");
    let Err(Error::Static(diagnostics)) = result else {
        panic!("expected static error");
    };
    let reports: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        reports,
        vec![
            "[line 1] Error: Unexpected character.",
            "[line 1] Error at end: Expect expression.",
        ]
    );
    assert!(printed.is_empty());
}

#[test]
fn lexical_error_alone_still_blocks_evaluation() {
    let (result, printed) = run_capture("1 # + 2");
    assert!(matches!(result, Err(Error::Static(ref d)) if d.len() == 1));
    assert!(printed.is_empty());
}

#[test]
fn multi_line_string_line_numbers() {
    let (result, _) = run_capture("\"one\ntwo\"\n\n$");
    let Err(Error::Static(diagnostics)) = result else {
        panic!("expected static error");
    };
    let first = diagnostics.iter().next().unwrap();
    assert_eq!(first.to_string(), "[line 4] Error: Unexpected character.");
}

#[test]
fn unterminated_string_reports_once() {
    let mut diagnostics = Diagnostics::new();
    let items = scan("\"never closed", &mut diagnostics);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(items.len(), 1);
}

#[test]
fn only_the_leading_expression_runs() {
    assert_prints("1;", "1");
    assert_prints("1 2", "1");
    assert_prints("2 * 3 4 + \"x\"", "6");
}

#[test]
fn extreme_numbers_print_in_exponent_form() {
    assert_prints("10000000000000000 * 100000", "1e+21");
    assert_prints("1 / 10000000", "1e-07");
    assert_prints("0 / 0", "nan");
    assert_prints("-1 / 0", "-inf");
}

#[test]
fn banner_names_package_version() {
    assert_eq!(
        repl_banner(),
        format!("lox-expr, version {}.", env!("CARGO_PKG_VERSION"))
    );
    assert!(repl_banner().contains("0.1.0"));
}
