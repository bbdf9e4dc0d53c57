#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reordering infix tokens into
/// postfix order.
pub enum ParseError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    UnbalancedParentheses,
    /// An `=` reached the converter. Assignment is split off by the caller
    /// before the right hand side is converted.
    UnexpectedAssignment,
    /// An operator token carried a symbol outside `+ - * / ^ =`.
    UnknownOperator {
        /// The symbol found.
        symbol: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses => write!(f, "Unbalanced parentheses."),
            Self::UnexpectedAssignment => {
                write!(f, "Assignment '=' cannot appear inside an expression.")
            },
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator '{symbol}'."),
        }
    }
}

impl std::error::Error for ParseError {}
