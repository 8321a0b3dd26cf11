use rpncalc::{
    calculate,
    error::{EvalError, ParseError},
    rpn::{converter::convert, evaluator::evaluate},
    ui,
};

fn assert_rpn(input: &str, want: &[&str]) {
    match convert(input) {
        Ok(tokens) => assert_eq!(tokens, want, "wrong RPN for '{input}'"),
        Err(e) => panic!("conversion of '{input}' failed: {e}"),
    }
}

fn assert_parse_error(input: &str, want: &ParseError) {
    match convert(input) {
        Ok(tokens) => panic!("conversion of '{input}' succeeded with {tokens:?}"),
        Err(e) => assert_eq!(&e, want, "wrong error for '{input}'"),
    }
}

fn assert_value(input: &str, want: f64) {
    match calculate(input) {
        Ok(value) => {
            assert!((value - want).abs() < 1e-9,
                    "'{input}' evaluated to {value}, wanted {want}")
        },
        Err(e) => panic!("evaluation of '{input}' failed: {e}"),
    }
}

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn arithmetic_converts_to_postfix() {
    assert_rpn("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3",
               &["3", "4", "2", "*", "1", "5", "-", "2", "3", "^", "^", "/", "+"]);
}

#[test]
fn function_calls_convert_to_postfix() {
    assert_rpn("sin(max(2,3)/3*pi)",
               &["2", "3", "max", "3", "/", "pi", "*", "sin"]);
}

#[test]
fn whitespace_is_ignored() {
    assert_rpn(" 1\t+ 2 ", &["1", "2", "+"]);
    assert_value("  10 /\t2  ", 5.0);
}

#[test]
fn number_literal_text_is_preserved() {
    assert_rpn("1.50 + .5 + 2e3", &["1.50", ".5", "+", "2e3", "+"]);
}

#[test]
fn power_is_right_associative() {
    assert_rpn("2^3^2", &["2", "3", "2", "^", "^"]);
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn equal_precedence_groups_left_to_right() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 5", 2.0);
}

#[test]
fn precedence_is_honored() {
    assert_value("3 + 4 * 2", 11.0);
    assert_value("(3 + 4) * 2", 14.0);
    assert_value("2 ^ 3 * 4", 32.0);
    assert_value("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3", 3.0001220703125);
}

#[test]
fn functions_and_constants_evaluate() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("sin(pi)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("max(2, 3)", 3.0);
    assert_value("min(2, 3)", 2.0);
    assert_value("sin(max(2,3)/3*pi)", 0.0);
    assert_value("max(2 + 3, 2 * 3)", 6.0);
}

#[test]
fn missing_closing_parenthesis_is_error() {
    assert_parse_error("max(sin(pi, 2)", &ParseError::MismatchedParenthesis);
    assert_parse_error("(1 + 2", &ParseError::MismatchedParenthesis);
}

#[test]
fn extra_closing_parenthesis_is_error() {
    assert_parse_error("1 + 2)", &ParseError::MismatchedParenthesis);
}

#[test]
fn adjacent_operators_are_error() {
    assert_parse_error("1+2**3",
                       &ParseError::InvalidSequence { prev: "*".to_owned(),
                                                      curr: "*".to_owned(), });
    assert_parse_error("1+-2",
                       &ParseError::InvalidSequence { prev: "+".to_owned(),
                                                      curr: "-".to_owned(), });
}

#[test]
fn dangling_operator_before_closing_paren_is_error() {
    assert_parse_error("sin(1+2*)",
                       &ParseError::InvalidSequence { prev: "*".to_owned(),
                                                      curr: ")".to_owned(), });
}

#[test]
fn implicit_multiplication_is_error() {
    assert_parse_error("2(3)",
                       &ParseError::InvalidSequence { prev: "2".to_owned(),
                                                      curr: "(".to_owned(), });
    assert_parse_error("2pi",
                       &ParseError::InvalidSequence { prev: "2".to_owned(),
                                                      curr: "pi".to_owned(), });
    assert_parse_error("(1)(2)",
                       &ParseError::InvalidSequence { prev: ")".to_owned(),
                                                      curr: "(".to_owned(), });
    assert_parse_error("2 sin(1)",
                       &ParseError::InvalidSequence { prev: "2".to_owned(),
                                                      curr: "sin".to_owned(), });
}

#[test]
fn function_without_argument_list_is_error() {
    assert_parse_error("sin 3",
                       &ParseError::InvalidSequence { prev: "sin".to_owned(),
                                                      curr: "3".to_owned(), });
    assert_parse_error("sin cos(1)",
                       &ParseError::InvalidSequence { prev: "sin".to_owned(),
                                                      curr: "cos".to_owned(), });
    assert_parse_error("sin pi",
                       &ParseError::InvalidSequence { prev: "sin".to_owned(),
                                                      curr: "pi".to_owned(), });
}

#[test]
fn empty_argument_slots_are_error() {
    assert_parse_error("max(2,)",
                       &ParseError::InvalidSequence { prev: ",".to_owned(),
                                                      curr: ")".to_owned(), });
    assert_parse_error("max(,2)",
                       &ParseError::InvalidSequence { prev: "(".to_owned(),
                                                      curr: ",".to_owned(), });
    assert_parse_error("()",
                       &ParseError::InvalidSequence { prev: "(".to_owned(),
                                                      curr: ")".to_owned(), });
}

#[test]
fn unknown_identifiers_are_error() {
    assert_parse_error("foo(2)", &ParseError::UnsupportedToken { token: "foo".to_owned() });
    assert_parse_error("2 + x", &ParseError::UnsupportedToken { token: "x".to_owned() });
}

#[test]
fn unrecognized_characters_are_error() {
    assert_parse_error("2 $ 2", &ParseError::UnsupportedToken { token: "$".to_owned() });
    assert_parse_error("1 + #2", &ParseError::UnsupportedToken { token: "#".to_owned() });
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate(&tokens(&["4", "0", "/"])), Err(EvalError::DivisionByZero));
    assert!(calculate("4 / 0").is_err());
    assert!(calculate("1 / (2 - 2)").is_err());
}

#[test]
fn nonzero_division_still_works() {
    assert_value("4 / 0.5", 8.0);
}

#[test]
fn stack_underflow_names_the_consumer() {
    assert_eq!(evaluate(&tokens(&["5", "+"])),
               Err(EvalError::InsufficientOperands { name: "+".to_owned() }));
    assert_eq!(evaluate(&tokens(&["sin"])),
               Err(EvalError::InsufficientOperands { name: "sin".to_owned() }));
    assert_eq!(evaluate(&tokens(&["2", "max"])),
               Err(EvalError::InsufficientOperands { name: "max".to_owned() }));
}

#[test]
fn leftover_operands_are_error() {
    assert_eq!(evaluate(&tokens(&["5", "3"])),
               Err(EvalError::MalformedExpression { remaining: 2 }));
    assert_eq!(evaluate(&tokens(&[])),
               Err(EvalError::MalformedExpression { remaining: 0 }));
}

#[test]
fn malformed_numbers_are_error() {
    assert_eq!(evaluate(&tokens(&["12.3.4"])),
               Err(EvalError::MalformedNumber { token: "12.3.4".to_owned() }));
}

#[test]
fn unsupported_rpn_tokens_are_error() {
    assert_eq!(evaluate(&tokens(&["foo"])),
               Err(EvalError::UnsupportedToken { token: "foo".to_owned() }));
}

#[test]
fn binary_argument_order_is_left_to_right() {
    assert_eq!(evaluate(&tokens(&["8", "2", "/"])), Ok(4.0));
    assert_eq!(evaluate(&tokens(&["8", "2", "-"])), Ok(6.0));
    assert_eq!(evaluate(&tokens(&["2", "3", "^"])), Ok(8.0));
}

#[test]
fn garbage_inputs_never_panic() {
    let inputs = ["", "   ", "(", ")", ",", "+", "))((", "1 2 3", "sin()",
                  "max(1,2,3)", "q", "1..2", "é", "^^^", "pi pi"];
    for input in inputs {
        // Each of these must come back as a value or an error, not a panic.
        let _ = calculate(input);
    }
}

#[test]
fn integral_results_display_without_decimal_point() {
    assert_eq!(ui::format_result(5.0), "= 5");
    assert_eq!(ui::format_result(-3.0), "= -3");
    assert_eq!(ui::format_result(2.5), "= 2.5");
}

#[test]
fn errors_display_with_marker() {
    let error = calculate("4 / 0").unwrap_err();
    assert_eq!(ui::format_error(error.as_ref()), "X Division by zero.");
}
