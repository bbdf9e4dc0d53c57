#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while assembling an expression tree
/// from a postfix or prefix token sequence.
pub enum BuildError {
    /// A function was applied with nothing to apply it to.
    MissingFunctionOperand {
        /// The function name.
        function: String,
    },
    /// A binary operator found fewer than two operands.
    MissingOperatorOperands {
        /// The operator symbol.
        operator: String,
    },
    /// More than one subtree remained once every token was consumed.
    LeftoverOperands {
        /// The number of subtrees left over.
        count: usize,
    },
    /// A parenthesis token appeared where only operands, operators and
    /// functions are allowed.
    UnexpectedParenthesis {
        /// The parenthesis found.
        token: String,
    },
    /// The token sequence was empty.
    EmptyExpression,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFunctionOperand { function } => {
                write!(f, "Invalid expression: missing operand for function '{function}'.")
            },
            Self::MissingOperatorOperands { operator } => write!(f,
                                                                 "Invalid expression: missing operands for operator '{operator}'."),
            Self::LeftoverOperands { count } => {
                write!(f, "Invalid expression: {count} operands left over.")
            },
            Self::UnexpectedParenthesis { token } => {
                write!(f, "Invalid expression: unexpected parenthesis '{token}'.")
            },
            Self::EmptyExpression => write!(f, "Invalid expression: nothing to evaluate."),
        }
    }
}

impl std::error::Error for BuildError {}
