/// Tree building errors.
///
/// Raised when a postfix or prefix token sequence does not describe exactly
/// one well-formed expression.
pub mod build_error;
/// Evaluation errors.
///
/// Raised while computing the value of an expression tree: undefined
/// variables, division by zero, unsupported functions or operators.
pub mod eval_error;
/// Conversion errors.
///
/// Raised while reordering infix tokens into postfix order, chiefly for
/// unbalanced parentheses.
pub mod parse_error;
/// Interactive session errors.
///
/// Raised by the command loop for malformed commands, wrapping any pipeline
/// failure.
pub mod session_error;
/// Tokenization errors.
///
/// Raised when the input line contains a character that starts no token.
pub mod tokenize_error;

pub use build_error::BuildError;
pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use session_error::SessionError;
pub use tokenize_error::TokenizeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of the expression pipeline, tagged with the stage that failed.
pub enum CalcError {
    /// The tokenizer rejected the input.
    Tokenize(TokenizeError),
    /// The infix-to-postfix converter rejected the tokens.
    Parse(ParseError),
    /// The tree builder rejected the postfix sequence.
    Build(BuildError),
    /// Evaluation of the tree failed.
    Eval(EvalError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokenize(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Build(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<TokenizeError> for CalcError {
    fn from(e: TokenizeError) -> Self {
        Self::Tokenize(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<BuildError> for CalcError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
