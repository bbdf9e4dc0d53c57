use logos::Logos;

use crate::{
    ast::Function,
    error::TokenizeError,
    interpreter::token::{Token, TokenKind},
    util::sequence::Sequence,
};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, TokenizeError>;

/// Raw lexical classes recognised in an input line.
///
/// Words are split into functions and identifiers after matching, since the
/// function set is closed and small.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+ - * / ^ =`, always a single character.
    #[regex(r"[-+*/^=]")]
    Operator,
    /// Digits with at most one decimal point, such as `42`, `3.5` or `7.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// Function or variable names such as `sqrt` or `rate_2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    /// Whitespace.
    #[regex(r"[ \t\r\n\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// Converts an input line into a sequence of tokens in infix order.
///
/// Whitespace is skipped and never required, so `2+3` and `2 + 3` produce
/// the same tokens. Signs are never part of a number: `-4` is the operator
/// `-` followed by the operand `4`.
///
/// # Parameters
/// - `line`: The text to tokenize.
///
/// # Returns
/// The tokens in the order they appear in `line`.
///
/// # Errors
/// Returns [`TokenizeError::InvalidCharacter`] for the first character that
/// does not start a token.
///
/// # Example
/// ```
/// use treecalc::interpreter::{
///     lexer::tokenize,
///     token::{Token, TokenKind},
/// };
///
/// let tokens = tokenize("sqrt(x)*2.5").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Function,
///                 TokenKind::LeftParen,
///                 TokenKind::Identifier,
///                 TokenKind::RightParen,
///                 TokenKind::Operator,
///                 TokenKind::Operand]);
/// assert_eq!(tokens.back(), Some(&Token::operand("2.5")));
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(line: &str) -> LexResult<Sequence<Token>> {
    let mut tokens = Sequence::new();
    let mut lexer = Lexeme::lexer(line);

    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        let kind = match lexeme {
            Ok(Lexeme::LParen) => TokenKind::LeftParen,
            Ok(Lexeme::RParen) => TokenKind::RightParen,
            Ok(Lexeme::Operator) => TokenKind::Operator,
            Ok(Lexeme::Number) => TokenKind::Operand,
            Ok(Lexeme::Word) if Function::from_name(text).is_some() => TokenKind::Function,
            Ok(Lexeme::Word) => TokenKind::Identifier,
            Ok(Lexeme::Ignored) => continue,
            Err(()) => {
                let position = lexer.span().start;
                let character = line[position..].chars().next().unwrap_or_default();
                return Err(TokenizeError::InvalidCharacter { character, position });
            },
        };
        tokens.push_back(Token::new(text, kind));
    }

    Ok(tokens)
}

/// Returns `true` if `name` could be tokenized as a variable name.
///
/// Function names are reserved and therefore rejected.
///
/// # Example
/// ```
/// use treecalc::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("ans"));
/// assert!(is_identifier("_tmp1"));
/// assert!(!is_identifier("1x"));
/// assert!(!is_identifier("sqrt"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars.next()
                           .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    starts_well
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    && Function::from_name(name).is_none()
}
