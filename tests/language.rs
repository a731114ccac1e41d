use bigcalc::{
    error::{CalcError, ParseError, RuntimeError},
    get_result, handle_line,
    interpreter::{bindings::Bindings, command::HELP_TEXT, session::Response},
    run,
};
use dashu::integer::IBig;

fn assert_value(src: &str, expected: i64) {
    let bindings = Bindings::new();
    match get_result(src, &bindings) {
        Ok(value) => assert_eq!(value, IBig::from(expected), "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_error(src: &str, expected: &CalcError) {
    let bindings = Bindings::new();
    match get_result(src, &bindings) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "wrong error for {src:?}"),
    }
}

fn transcript(input: &str) -> String {
    let mut output = Vec::new();
    run(input.as_bytes(), &mut output).expect("in-memory session cannot fail on I/O");
    String::from_utf8(output).expect("session output is UTF-8")
}

const INVALID_EXPRESSION: CalcError = CalcError::Parse(ParseError::InvalidExpression);

#[test]
fn literal_round_trip() {
    assert_value("0", 0);
    assert_value("42", 42);
    assert_value("007", 7);

    let digits = "123456789012345678901234567890123456789";
    let bindings = Bindings::new();
    assert_eq!(get_result(digits, &bindings).unwrap().to_string(), digits);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("2 * 3 ^ 2", 18);
    assert_value("((7))", 7);
    assert_value("3 + 8 * ((4 + 3) * 2 + 1) - 6 / (2 + 1)", 121);
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_value("8 - 3 - 2", 3);
    assert_value("8 - 3 + 2", 7);
    assert_value("64 / 4 / 2", 8);
    assert_value("12 / 3 * 2", 8);
    assert_value("2 ^ 3 ^ 2", 64);
}

#[test]
fn sign_runs_collapse() {
    assert_value("5 - -2", 7);
    assert_value("5---2", 3);
    assert_value("5 -- 2", 7);
    assert_value("5 +- 2", 3);
    assert_value("5 +-+-- 2", 3);
    assert_value("--5", 5);
    assert_value("+-5", -5);
    assert_value("2 * -3", -6);
    assert_value("(-4) * (-4)", 16);
}

#[test]
fn truncating_division() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
    assert_value("-7 / -2", 3);
}

#[test]
fn exponentiation() {
    assert_value("2 ^ 10", 1024);
    assert_value("2 ^ 0", 1);
    assert_value("0 ^ 0", 1);
    assert_value("-2 ^ 3", -8);

    let bindings = Bindings::new();
    let big = get_result("2 ^ 100", &bindings).unwrap();
    assert_eq!(big.to_string(), "1267650600228229401496703205376");
}

#[test]
fn arbitrary_precision() {
    let bindings = Bindings::new();
    let product = get_result("99999999999999999999 * 99999999999999999999", &bindings).unwrap();
    assert_eq!(product.to_string(), "9999999999999999999800000000000000000001");
}

#[test]
fn unbalanced_parentheses_are_invalid() {
    assert_error("(1 + 2", &INVALID_EXPRESSION);
    assert_error("1 + 2)", &INVALID_EXPRESSION);
    assert_error("((1 + 2)", &INVALID_EXPRESSION);
    assert_error(")1 + 2(", &INVALID_EXPRESSION);
}

#[test]
fn malformed_expressions_are_invalid() {
    assert_error("2 +", &INVALID_EXPRESSION);
    assert_error("* 2", &INVALID_EXPRESSION);
    assert_error("2 3", &INVALID_EXPRESSION);
    assert_error("2 * / 3", &INVALID_EXPRESSION);
    assert_error("2 (3)", &INVALID_EXPRESSION);
    assert_error("-(3)", &INVALID_EXPRESSION);
    assert_error("()", &INVALID_EXPRESSION);
    assert_error("a1", &INVALID_EXPRESSION);
    assert_error("2 % 3", &INVALID_EXPRESSION);
    assert_error("", &INVALID_EXPRESSION);
}

#[test]
fn arithmetic_faults() {
    assert_error("1 / 0", &CalcError::Runtime(RuntimeError::DivisionByZero));
    assert_error("1 / (2 - 2)", &CalcError::Runtime(RuntimeError::DivisionByZero));
    assert_error("2 ^ -1", &CalcError::Runtime(RuntimeError::NegativeExponent));
    assert_error("2 ^ 99999999999", &CalcError::Runtime(RuntimeError::ExponentTooLarge));
    assert_error("7 ^ 400000000", &CalcError::Runtime(RuntimeError::Overflow));
    assert_error("(2 ^ 64) ^ 1000000", &CalcError::Runtime(RuntimeError::Overflow));
}

#[test]
fn trivial_bases_accept_any_exponent() {
    assert_value("1 ^ 4000000000", 1);
    assert_value("-1 ^ 4000000001", -1);
    assert_value("0 ^ 4000000000", 0);
}

#[test]
fn unknown_variable() {
    assert_error("y", &CalcError::Runtime(RuntimeError::UnknownVariable { name: "y".into() }));
    assert_error("1 + y * 2",
                 &CalcError::Runtime(RuntimeError::UnknownVariable { name: "y".into() }));
}

#[test]
fn assignment_last_write_wins() {
    let mut bindings = Bindings::new();
    assert_eq!(handle_line("x = 5", &mut bindings), Ok(Response::Silent));
    assert_eq!(handle_line("x", &mut bindings), Ok(Response::Value(IBig::from(5))));
    assert_eq!(handle_line("x = 7", &mut bindings), Ok(Response::Silent));
    assert_eq!(handle_line("x", &mut bindings), Ok(Response::Value(IBig::from(7))));
    assert_eq!(bindings.len(), 1);
}

#[test]
fn assignment_from_variables_and_signs() {
    let mut bindings = Bindings::new();
    handle_line("a = -12", &mut bindings).unwrap();
    handle_line("b = a", &mut bindings).unwrap();
    handle_line("c = -a", &mut bindings).unwrap();
    handle_line("d=+3", &mut bindings).unwrap();
    assert_eq!(bindings.get("b"), Some(&IBig::from(-12)));
    assert_eq!(bindings.get("c"), Some(&IBig::from(12)));
    assert_eq!(bindings.get("d"), Some(&IBig::from(3)));
    assert_eq!(handle_line("a - -b + c * d", &mut bindings),
               Ok(Response::Value(IBig::from(12))));
}

#[test]
fn failed_assignment_leaves_bindings_untouched() {
    let mut bindings = Bindings::new();
    handle_line("n = 1", &mut bindings).unwrap();

    let cases = [("1x = 5", CalcError::Parse(ParseError::InvalidIdentifier { identifier: "1x".into() })),
                 ("n = 2 + 3", CalcError::Parse(ParseError::InvalidAssignment)),
                 ("n = 5 = 6", CalcError::Parse(ParseError::InvalidAssignment)),
                 ("n = a1", CalcError::Parse(ParseError::InvalidAssignment)),
                 ("n =", CalcError::Parse(ParseError::InvalidAssignment)),
                 ("n = --4", CalcError::Parse(ParseError::InvalidAssignment)),
                 ("n = m", CalcError::Runtime(RuntimeError::UnknownVariable { name: "m".into() }))];

    for (line, expected) in cases {
        assert_eq!(handle_line(line, &mut bindings), Err(expected), "line {line:?}");
        assert_eq!(bindings.get("n"), Some(&IBig::from(1)), "line {line:?} changed n");
    }
    assert_eq!(bindings.len(), 1);
}

#[test]
fn identifier_is_checked_before_the_right_side() {
    let mut bindings = Bindings::new();
    assert!(matches!(handle_line("a1 = b = c", &mut bindings),
                     Err(CalcError::Parse(ParseError::InvalidIdentifier { .. }))));
}

#[test]
fn commands() {
    assert_eq!(transcript("/help\n2 + 2\n"), format!("{HELP_TEXT}\n4\n"));
    assert_eq!(transcript("/exit\n2 + 2\n"), "Bye!\n");
    assert_eq!(transcript("/foo\n/help me\n"), "Unknown command\nUnknown command\n");
}

#[test]
fn session_prints_errors_and_continues() {
    let output = transcript("\n   \ny\n1x = 5\n(1 + 2\n7 / 0\nx = 3\nx ^ 2\n");
    assert_eq!(output,
               "Unknown variable\nInvalid identifier\nInvalid expression\nDivision by \
                zero\n9\n");
}

#[test]
fn undecodable_line_is_reported_and_skipped() {
    let mut output = Vec::new();
    run(&b"1 + 1\n\xff\xfe\n2 + 2\n"[..], &mut output).expect("bad UTF-8 is not an I/O failure");
    assert_eq!(String::from_utf8(output).unwrap(), "2\nInvalid expression\n4\n");
}

#[test]
fn crlf_line_endings_are_accepted() {
    assert_eq!(transcript("x = 3\r\nx * x\r\n"), "9\n");
}

#[test]
fn session_ends_at_end_of_input() {
    assert_eq!(transcript("1 + 1"), "2\n");
    assert_eq!(transcript(""), "");
}
