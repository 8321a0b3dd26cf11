use logos::Logos;

use crate::{
    error::ParseError,
    rpn::{
        lexer::Token,
        ops::{self, Function, Operator},
    },
};

/// A lexical token after classification against the operator, function, and
/// constant tables. This is the closed set of forms the expression grammar
/// knows about; anything the lexer produces that does not fit one of these
/// is rejected before conversion.
#[derive(Debug, PartialEq)]
enum Lexeme {
    Number(String),
    Constant(String),
    Function(Function),
    Operator(Operator),
    Comma,
    LeftParen,
    RightParen,
}

impl Lexeme {
    /// The literal text of the lexeme, used in error messages.
    fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::Constant(text) => text,
            Self::Function(function) => function.name(),
            Self::Operator(op) => op.symbol(),
            Self::Comma => ",",
            Self::LeftParen => "(",
            Self::RightParen => ")",
        }
    }
}

/// An entry on the converter's operator stack. Every entry is either `(` or
/// a recognized operator or function.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    LeftParen,
    Operator(Operator),
    Function(Function),
}

impl StackEntry {
    /// The RPN text of the entry, or `None` for `(`, which is structural and
    /// never emitted to the output.
    const fn rpn_text(self) -> Option<&'static str> {
        match self {
            Self::LeftParen => None,
            Self::Operator(op) => Some(op.symbol()),
            Self::Function(function) => Some(function.name()),
        }
    }
}

/// Converts an infix expression into Reverse Polish Notation.
///
/// This is the entry point of the conversion stage. It lexes the input and
/// applies the Shunting-Yard algorithm in a single left-to-right pass,
/// validating every token against the one before it. See
/// <https://en.wikipedia.org/wiki/Shunting_yard_algorithm> for the algorithm.
///
/// # Parameters
/// - `input`: The raw expression text. Whitespace is ignored.
///
/// # Returns
/// The ordered RPN token sequence: numbers as their literal text, operators,
/// functions, and constants by name, all in postfix order.
///
/// # Errors
/// - `UnsupportedToken` for unrecognized characters or identifiers.
/// - `InvalidSequence` for adjacent tokens the grammar forbids.
/// - `MismatchedParenthesis` for unbalanced parentheses.
///
/// # Examples
/// ```
/// use rpncalc::rpn::converter::convert;
///
/// let rpn = convert("sin(max(2,3)/3*pi)").unwrap();
/// assert_eq!(rpn, ["2", "3", "max", "3", "/", "pi", "*", "sin"]);
/// ```
pub fn convert(input: &str) -> Result<Vec<String>, ParseError> {
    let mut lexer = Token::lexer(input);
    let mut output = Vec::with_capacity(input.len());
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut prev: Option<Lexeme> = None;

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::UnsupportedToken { token: lexer.slice().to_owned() });
        };

        let lexeme = classify(token)?;
        if let Some(previous) = &prev {
            validate(previous, &lexeme)?;
        }

        match &lexeme {
            Lexeme::Number(text) | Lexeme::Constant(text) => output.push(text.clone()),
            Lexeme::Function(function) => stack.push(StackEntry::Function(*function)),
            Lexeme::Operator(op) => process_operator(&mut output, &mut stack, *op),
            Lexeme::Comma => process_comma(&mut output, &mut stack),
            Lexeme::LeftParen => stack.push(StackEntry::LeftParen),
            Lexeme::RightParen => process_right_paren(&mut output, &mut stack)?,
        }

        prev = Some(lexeme);
    }

    while let Some(entry) = stack.pop() {
        match entry.rpn_text() {
            Some(text) => output.push(text.to_owned()),
            None => return Err(ParseError::MismatchedParenthesis),
        }
    }

    Ok(output)
}

/// Classifies a lexical token against the operator, function, and constant
/// tables.
///
/// # Errors
/// `UnsupportedToken` if an identifier is neither a recognized function nor
/// a recognized constant.
fn classify(token: Token) -> Result<Lexeme, ParseError> {
    Ok(match token {
        Token::Number(text) => Lexeme::Number(text),
        Token::Identifier(name) => {
            if let Some(function) = Function::from_name(&name) {
                Lexeme::Function(function)
            } else if ops::is_constant(&name) {
                Lexeme::Constant(name)
            } else {
                return Err(ParseError::UnsupportedToken { token: name });
            }
        },
        Token::Plus => Lexeme::Operator(Operator::Add),
        Token::Minus => Lexeme::Operator(Operator::Sub),
        Token::Star => Lexeme::Operator(Operator::Mul),
        Token::Slash => Lexeme::Operator(Operator::Div),
        Token::Caret => Lexeme::Operator(Operator::Pow),
        Token::LParen => Lexeme::LeftParen,
        Token::RParen => Lexeme::RightParen,
        Token::Comma => Lexeme::Comma,
    })
}

/// Checks whether `curr` may legally follow `prev`.
///
/// The grammar has no implicit multiplication and no unary operators, so an
/// operand may not follow another operand, an operator may not follow
/// another operator, and argument slots may not be empty. The first token of
/// an input is not validated against anything.
///
/// # Errors
/// `InvalidSequence` naming both tokens if the pair is forbidden.
fn validate(prev: &Lexeme, curr: &Lexeme) -> Result<(), ParseError> {
    let invalid = match prev {
        // `2(3)`, `2pi`, `(1)(2)` and friends: implicit multiplication.
        Lexeme::Number(_) | Lexeme::Constant(_) | Lexeme::RightParen => {
            matches!(curr,
                     Lexeme::Number(_)
                     | Lexeme::Constant(_)
                     | Lexeme::Function(_)
                     | Lexeme::LeftParen)
        },

        // A function is followed by its argument list, never an operand.
        Lexeme::Function(_) => {
            matches!(curr, Lexeme::Number(_) | Lexeme::Constant(_) | Lexeme::Function(_))
        },

        // `1+*2`, `max(2,)`, `sin(1+2*)`: dangling operators and empty
        // argument slots.
        Lexeme::Operator(_) | Lexeme::Comma | Lexeme::LeftParen => {
            matches!(curr, Lexeme::Operator(_) | Lexeme::RightParen | Lexeme::Comma)
        },
    };

    if invalid {
        return Err(ParseError::InvalidSequence { prev: prev.text().to_owned(),
                                                 curr: curr.text().to_owned(), });
    }
    Ok(())
}

/// Processes an operator according to the Shunting-Yard algorithm.
///
/// Entries that bind at least as tightly as `op` are popped to the output,
/// stopping at the nearest `(`, then `op` is pushed. A function on top of
/// the stack binds tighter than any operator. Right-associative operators do
/// not pop entries of equal precedence, which is what makes `a^b^c` group as
/// `a^(b^c)`.
fn process_operator(output: &mut Vec<String>, stack: &mut Vec<StackEntry>, op: Operator) {
    while let Some(&top) = stack.last() {
        let pops = match top {
            StackEntry::LeftParen => false,
            StackEntry::Function(_) => true,
            StackEntry::Operator(pending) => {
                pending.precedence() > op.precedence()
                || (pending.precedence() == op.precedence() && !op.is_right_associative())
            },
        };
        if !pops {
            break;
        }
        if let Some(text) = top.rpn_text() {
            output.push(text.to_owned());
        }
        stack.pop();
    }
    stack.push(StackEntry::Operator(op));
}

/// Processes a comma according to the Shunting-Yard algorithm.
///
/// Pending entries down to (but not including) the nearest `(` are popped to
/// the output. The comma delimits function arguments without closing the
/// call, so the `(` stays on the stack.
fn process_comma(output: &mut Vec<String>, stack: &mut Vec<StackEntry>) {
    while let Some(&top) = stack.last() {
        let Some(text) = top.rpn_text() else { break };
        output.push(text.to_owned());
        stack.pop();
    }
}

/// Processes a right parenthesis according to the Shunting-Yard algorithm.
///
/// Pending entries down to the nearest `(` are popped to the output and the
/// `(` itself is discarded. If a function name then sits on top of the
/// stack, the parenthesis closed its call and the name is popped to the
/// output as well.
///
/// # Errors
/// `MismatchedParenthesis` if the stack holds no matching `(`.
fn process_right_paren(output: &mut Vec<String>,
                       stack: &mut Vec<StackEntry>)
                       -> Result<(), ParseError> {
    while let Some(&top) = stack.last() {
        let Some(text) = top.rpn_text() else { break };
        output.push(text.to_owned());
        stack.pop();
    }

    match stack.pop() {
        Some(StackEntry::LeftParen) => {},
        _ => return Err(ParseError::MismatchedParenthesis),
    }

    if let Some(&StackEntry::Function(function)) = stack.last() {
        output.push(function.name().to_owned());
        stack.pop();
    }

    Ok(())
}
