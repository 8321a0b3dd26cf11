/// Conversion errors.
///
/// Defines all error types that can occur while lexing an infix expression
/// and converting it to Reverse Polish Notation. Parse errors include
/// unrecognized tokens, illegal adjacent-token sequences, and unbalanced
/// parentheses, all detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing an RPN token
/// sequence to a value. Evaluation errors include things like division by
/// zero, operand stack underflow, malformed numeric literals, and leftover
/// operands.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
