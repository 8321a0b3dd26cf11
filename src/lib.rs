//! # rpncalc
//!
//! rpncalc is a calculator for infix mathematical expressions. It converts
//! input to Reverse Polish Notation with the Shunting-Yard algorithm and
//! evaluates the resulting token sequence on an operand stack, with support
//! for functions, constants, and parenthesized function arguments.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for conversion and evaluation.
///
/// This module defines all errors that can be raised while converting an
/// infix expression to RPN or while evaluating an RPN sequence. It
/// standardizes error reporting and carries detailed information about
/// failures, including the offending token texts and operand counts, so that
/// callers can render useful messages.
///
/// # Responsibilities
/// - Defines error enums for both pipeline stages.
/// - Attaches the offending tokens, names, and counts to each failure mode.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the two-stage calculation pipeline.
///
/// This module ties together lexing, conversion to Reverse Polish Notation,
/// and stack-based evaluation. It exposes the public API for turning a raw
/// input string into an RPN token sequence and for reducing such a sequence
/// to a single numeric value.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, converter, and evaluator.
/// - Defines the operator, function, and constant tables.
/// - Manages the flow of data and errors between the two stages.
pub mod rpn;
/// Presentation layer for the command-line binary.
///
/// This module renders results and errors for terminal output and drives the
/// interactive read-evaluate-print loop. It sits outside the core pipeline
/// and only consumes its public API.
///
/// # Responsibilities
/// - Formats numeric results, dropping the decimal point for integral values.
/// - Formats errors for display.
/// - Runs the interactive session until a quit keyword is read.
pub mod ui;

/// Returns the value of an infix expression.
///
/// This function runs both pipeline stages on the provided input: the
/// expression is converted to Reverse Polish Notation and the resulting token
/// sequence is evaluated to a single number. The first failure in either
/// stage is returned and no partial result is produced.
///
/// # Errors
/// Returns an error if the input cannot be lexed, violates the expression
/// grammar, has unbalanced parentheses, or cannot be reduced to exactly one
/// value.
///
/// # Examples
/// ```
/// let value = rpncalc::calculate("3 + 4 * 2").unwrap();
/// assert_eq!(value, 11.0);
///
/// // Implicit multiplication is not supported.
/// assert!(rpncalc::calculate("2(3)").is_err());
/// ```
pub fn calculate(input: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = rpn::converter::convert(input)?;
    let value = rpn::evaluator::evaluate(&tokens)?;
    Ok(value)
}
