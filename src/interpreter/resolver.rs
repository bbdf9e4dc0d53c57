use crate::error::EvalError;

/// Supplies the values of variables during evaluation.
///
/// An [`ExprTree`](crate::interpreter::tree::ExprTree) borrows a resolver and
/// calls it once for every identifier leaf it evaluates. The resolver owns (or
/// borrows) the variable data; the tree never does.
///
/// Any closure of the right shape is a resolver, which keeps tests free of
/// a full variable store.
///
/// # Example
/// ```
/// use treecalc::{error::EvalError, interpreter::resolver::Resolver};
///
/// let only_pi = |name: &str| match name {
///     "pi" => Ok(std::f64::consts::PI),
///     _ => Err(EvalError::UndefinedVariable { name: name.to_string() }),
/// };
///
/// assert_eq!(only_pi.resolve("pi"), Ok(std::f64::consts::PI));
/// assert!(only_pi.resolve("tau").is_err());
/// ```
pub trait Resolver {
    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Implementations return [`EvalError::UndefinedVariable`] for unknown
    /// names; the tree propagates whatever error is returned unchanged.
    fn resolve(&self, name: &str) -> Result<f64, EvalError>;
}

impl<F> Resolver for F where F: Fn(&str) -> Result<f64, EvalError>
{
    fn resolve(&self, name: &str) -> Result<f64, EvalError> {
        self(name)
    }
}
