#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an RPN sequence.
pub enum EvalError {
    /// Found a token that is not a number, operator, function, or constant.
    UnsupportedToken {
        /// The offending token text.
        token: String,
    },
    /// A token that looks numeric failed to parse as a number.
    MalformedNumber {
        /// The offending token text.
        token: String,
    },
    /// The operand stack held fewer values than the operator or function
    /// consumes.
    InsufficientOperands {
        /// The name of the operator or function that underflowed the stack.
        name: String,
    },
    /// The right operand of a division is exactly zero.
    DivisionByZero,
    /// The sequence did not reduce to exactly one value.
    MalformedExpression {
        /// How many operands remained after the last token was consumed.
        remaining: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedToken { token } => {
                write!(f, "Cannot evaluate unsupported token '{token}'.")
            },

            Self::MalformedNumber { token } => {
                write!(f, "Malformed number '{token}'.")
            },

            Self::InsufficientOperands { name } => {
                write!(f, "Not enough operands for '{name}'.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::MalformedExpression { remaining } => write!(f,
                                                              "Expected one value after evaluation but {remaining} remained."),
        }
    }
}

impl std::error::Error for EvalError {}
