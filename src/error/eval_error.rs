#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// The tree has no root.
    EmptyTree,
    /// An identifier is not bound to a value.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The tree holds an identifier but no resolver was configured.
    NoResolver,
    /// A function node names a function outside the supported set.
    UnsupportedFunction {
        /// The name of the function.
        name: String,
    },
    /// An operator node carries a symbol that cannot be evaluated.
    UnsupportedOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// Attempted division by exactly zero.
    DivisionByZero,
    /// A function or operator node lacks a child it needs.
    MissingOperand {
        /// The text of the incomplete node.
        token: String,
    },
    /// An operand node's text is not a number.
    InvalidNumber {
        /// The operand text.
        text: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTree => write!(f, "Nothing to evaluate: the expression tree is empty."),
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::NoResolver => write!(f, "No variable resolver is configured."),
            Self::UnsupportedFunction { name } => write!(f, "Unsupported function '{name}'."),
            Self::UnsupportedOperator { symbol } => {
                write!(f, "Unsupported operator '{symbol}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MissingOperand { token } => write!(f, "Missing operand for '{token}'."),
            Self::InvalidNumber { text } => write!(f, "'{text}' is not a valid number."),
        }
    }
}

impl std::error::Error for EvalError {}
