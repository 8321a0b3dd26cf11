/// The converter module turns infix input into Reverse Polish Notation.
///
/// The converter lexes the raw input string and applies the Shunting-Yard
/// algorithm in a single left-to-right pass, maintaining an output sequence
/// and a local operator stack. It also enforces the expression grammar by
/// checking every token against the one before it.
///
/// # Responsibilities
/// - Produces the ordered RPN token sequence for a valid expression.
/// - Rejects illegal adjacent tokens, such as back-to-back operators or
///   implicit multiplication.
/// - Reports unbalanced parentheses and unrecognized tokens.
pub mod converter;
/// The evaluator module reduces an RPN sequence to a single value.
///
/// The evaluator processes tokens strictly left to right against a local
/// operand stack: numbers and constants are pushed, operators and functions
/// pop their operands and push the result. After the last token exactly one
/// value must remain.
///
/// # Responsibilities
/// - Classifies each RPN token and dispatches it exhaustively.
/// - Applies operators and functions with left-to-right argument order.
/// - Reports stack underflow, division by zero, and leftover operands.
pub mod evaluator;
/// The lexer module tokenizes infix input for conversion.
///
/// The lexer reads the raw input text and produces a stream of tokens, each
/// corresponding to a meaningful element such as a numeric literal, an
/// identifier, an operator symbol, or a delimiter. This is the first stage of
/// the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Preserves the literal text of numbers and identifiers.
/// - Surfaces unrecognized characters for error reporting.
pub mod lexer;
/// The ops module defines the operator, function, and constant tables.
///
/// This module declares the closed sets of recognized operators and
/// functions together with their metadata (precedence, associativity, name,
/// arity) and the named constants. All of it is immutable, process-wide data.
///
/// # Responsibilities
/// - Defines the `Operator` and `Function` enums and their lookups.
/// - Maps constant names to their values.
pub mod ops;
