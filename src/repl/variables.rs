use std::{cell::RefCell, collections::HashMap};

use crate::{error::EvalError, interpreter::resolver::Resolver};

/// Name of the variable that always holds the most recent result.
pub const ANSWER: &str = "ans";

/// The variable table of a calculator session.
///
/// Values live behind a `RefCell` so that the table can be borrowed by an
/// expression tree as its resolver and still be updated, through `&self`,
/// once an evaluation has finished.
///
/// # Example
/// ```
/// use treecalc::{interpreter::resolver::Resolver, repl::variables::Variables};
///
/// let vars = Variables::new();
/// assert_eq!(vars.get("ans"), Some(0.0));
///
/// vars.assign("x", 2.5);
/// assert_eq!(vars.resolve("x"), Ok(2.5));
/// assert!(vars.resolve("y").is_err());
/// ```
#[derive(Debug)]
pub struct Variables {
    values: RefCell<HashMap<String, f64>>,
}

impl Variables {
    /// Creates a table holding only `ans`, set to zero.
    #[must_use]
    pub fn new() -> Self {
        let values = HashMap::from([(ANSWER.to_string(), 0.0)]);
        Self { values: RefCell::new(values) }
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.borrow().get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn assign(&self, name: &str, value: f64) {
        self.values.borrow_mut().insert(name.to_string(), value);
    }

    /// Returns every bound name, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.values.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Variables {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for Variables {
    fn resolve(&self, name: &str) -> Result<f64, EvalError> {
        self.get(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }
}
