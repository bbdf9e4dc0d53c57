use crate::error::CalcError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors reported by an interactive calculator session.
pub enum SessionError {
    /// An assignment had nothing to the left of `=`.
    MissingAssignmentTarget,
    /// The left hand side of an assignment is not an identifier.
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// `show` named a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// The expression pipeline failed.
    Calc(CalcError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAssignmentTarget => {
                write!(f, "Assignment needs a variable name before '='.")
            },
            Self::InvalidVariableName { name } => write!(f, "Invalid variable name '{name}'."),
            Self::UnknownVariable { name } => write!(f, "Variable '{name}' is not defined."),
            Self::Calc(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Calc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalcError> for SessionError {
    fn from(e: CalcError) -> Self {
        Self::Calc(e)
    }
}
