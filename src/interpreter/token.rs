use crate::{
    ast::{Function, Operator},
    util::num::parse_operand,
};

/// The syntactic category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal such as `42` or `3.5`.
    Operand,
    /// One of `+ - * / ^ =`.
    Operator,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A built-in function name, such as `sqrt`.
    Function,
    /// A variable name, resolved at evaluation time.
    Identifier,
}

/// A minimal but meaningful unit of an expression.
///
/// Tokens keep the exact text they were read from, which is what the
/// serializers emit, together with their kind. The same type flows through
/// every stage: infix order out of the tokenizer, postfix order out of the
/// converter, and prefix or postfix order out of the tree serializers.
///
/// # Example
/// ```
/// use treecalc::{
///     ast::Operator,
///     interpreter::token::{Token, TokenKind},
/// };
///
/// let plus = Token::operator('+');
/// assert_eq!(plus.kind, TokenKind::Operator);
/// assert_eq!(plus.as_operator(), Some(Operator::Add));
///
/// assert_eq!(Token::operand("2.5").as_number(), Some(2.5));
/// assert_eq!(Token::identifier("x").as_number(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The source text of the token.
    pub text: String,
    /// The category of the token.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token from its text and kind.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(),
               kind }
    }

    /// Creates a numeric literal token.
    pub fn operand(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Operand)
    }

    /// Creates a single-character operator token.
    #[must_use]
    pub fn operator(symbol: char) -> Self {
        Self::new(symbol, TokenKind::Operator)
    }

    /// Creates a `(` token.
    #[must_use]
    pub fn left_paren() -> Self {
        Self::new("(", TokenKind::LeftParen)
    }

    /// Creates a `)` token.
    #[must_use]
    pub fn right_paren() -> Self {
        Self::new(")", TokenKind::RightParen)
    }

    /// Creates a function name token.
    pub fn function(name: impl Into<String>) -> Self {
        Self::new(name, TokenKind::Function)
    }

    /// Creates a variable name token.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(name, TokenKind::Identifier)
    }

    /// Returns `true` for tokens that become leaves of an expression tree.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, TokenKind::Operand | TokenKind::Identifier)
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self.kind, TokenKind::LeftParen | TokenKind::RightParen)
    }

    /// Returns the operator this token denotes, if it is an operator token
    /// with a known symbol.
    #[must_use]
    pub fn as_operator(&self) -> Option<Operator> {
        if self.kind != TokenKind::Operator {
            return None;
        }
        Operator::from_symbol(&self.text)
    }

    /// Returns the function this token names, if it is a function token with
    /// a known name.
    #[must_use]
    pub fn as_function(&self) -> Option<Function> {
        if self.kind != TokenKind::Function {
            return None;
        }
        Function::from_name(&self.text)
    }

    /// Returns the numeric value of an operand token.
    ///
    /// # Returns
    /// - `Some(f64)`: For operand tokens whose text follows the operand
    ///   grammar.
    /// - `None`: For any other token.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        if self.kind != TokenKind::Operand {
            return None;
        }
        parse_operand(&self.text)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
