#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix input to RPN.
pub enum ParseError {
    /// Found a lexical form that is not a number, operator, parenthesis,
    /// comma, or recognized function or constant name.
    UnsupportedToken {
        /// The offending token text.
        token: String,
    },
    /// Two adjacent tokens cannot legally follow one another.
    InvalidSequence {
        /// The earlier of the two offending tokens.
        prev: String,
        /// The later of the two offending tokens.
        curr: String,
    },
    /// Parentheses are unbalanced, in either direction.
    MismatchedParenthesis,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedToken { token } => {
                write!(f, "Unsupported token '{token}'.")
            },

            Self::InvalidSequence { prev, curr } => {
                write!(f, "Invalid input sequence '{prev}' '{curr}'.")
            },

            Self::MismatchedParenthesis => write!(f, "Mismatched parenthesis."),
        }
    }
}

impl std::error::Error for ParseError {}
