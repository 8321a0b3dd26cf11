use logos::Logos;

/// Represents a lexical token in an infix expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    /// The literal text is preserved so the RPN output carries it unchanged.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", text)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", text)]
    Number(String),
    /// Identifier tokens; function or constant names such as `sin` or `pi`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", text)]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Captures the current token slice verbatim.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The literal text of the token as written in the input.
fn text(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_owned()
}
