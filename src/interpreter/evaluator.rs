use crate::{
    ast::{ExprNode, Function, Operator},
    error::EvalError,
    interpreter::{token::TokenKind, tree::ExprTree},
    util::stack::Stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl ExprTree<'_> {
    /// Computes the value of the tree.
    ///
    /// Evaluation is depth first, left operand before right, and runs on an
    /// explicit worklist, so a chain of thousands of operators does not grow
    /// the call stack. Identifiers are looked up through the configured
    /// resolver, and whatever the resolver returns, value or error, is used
    /// as is.
    ///
    /// # Errors
    /// - [`EvalError::EmptyTree`] if no tree has been built.
    /// - [`EvalError::NoResolver`] if an identifier is reached and no resolver
    ///   is configured.
    /// - [`EvalError::DivisionByZero`] if a divisor is exactly zero.
    /// - [`EvalError::UnsupportedFunction`] or
    ///   [`EvalError::UnsupportedOperator`] for nodes the evaluator cannot
    ///   apply.
    /// - Any error produced by the resolver, typically
    ///   [`EvalError::UndefinedVariable`].
    ///
    /// # Example
    /// ```
    /// use treecalc::{compile, error::EvalError};
    ///
    /// assert_eq!(compile("2^3^2").unwrap().evaluate(), Ok(512.0));
    /// assert_eq!(compile("5/0").unwrap().evaluate(), Err(EvalError::DivisionByZero));
    /// assert_eq!(compile("x+1").unwrap().evaluate(), Err(EvalError::NoResolver));
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        let root = self.root().ok_or(EvalError::EmptyTree)?;

        let mut pending = Stack::new();
        let mut values: Stack<f64> = Stack::new();
        pending.push(Visit::Enter(root));

        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => self.enter(node, &mut pending, &mut values)?,
                Visit::Exit(node) => {
                    let value = combine(node, &mut values)?;
                    values.push(value);
                },
            }
        }

        values.pop().ok_or(EvalError::EmptyTree)
    }

    /// Evaluates a leaf, or schedules the children of an inner node ahead of
    /// the node itself.
    fn enter<'t>(&self,
                 node: &'t ExprNode,
                 pending: &mut Stack<Visit<'t>>,
                 values: &mut Stack<f64>)
                 -> EvalResult<()> {
        let token = &node.token;
        match token.kind {
            TokenKind::Operand => {
                let value = token.as_number()
                                 .ok_or_else(|| EvalError::InvalidNumber { text: token.text.clone() })?;
                values.push(value);
            },
            TokenKind::Identifier => {
                let resolver = self.resolver.ok_or(EvalError::NoResolver)?;
                values.push(resolver.resolve(&token.text)?);
            },
            TokenKind::Function => {
                let operand = node.right
                                  .as_deref()
                                  .or(node.left.as_deref())
                                  .ok_or_else(|| missing_operand(node))?;
                pending.push(Visit::Exit(node));
                pending.push(Visit::Enter(operand));
            },
            TokenKind::Operator | TokenKind::LeftParen | TokenKind::RightParen => {
                let (Some(left), Some(right)) = (node.left.as_deref(), node.right.as_deref()) else {
                    return Err(missing_operand(node));
                };
                pending.push(Visit::Exit(node));
                pending.push(Visit::Enter(right));
                pending.push(Visit::Enter(left));
            },
        }
        Ok(())
    }
}

/// A step of the evaluation worklist.
enum Visit<'t> {
    /// Evaluate a leaf, or schedule an inner node's children.
    Enter(&'t ExprNode),
    /// Combine the values of an inner node's children, which are on top of
    /// the value stack.
    Exit(&'t ExprNode),
}

/// Applies a function or operator node to the values of its children.
fn combine(node: &ExprNode, values: &mut Stack<f64>) -> EvalResult<f64> {
    let token = &node.token;
    if token.kind == TokenKind::Function {
        let value = values.pop().ok_or_else(|| missing_operand(node))?;
        let function = Function::from_name(&token.text).ok_or_else(|| {
                           EvalError::UnsupportedFunction { name: token.text.clone() }
                       })?;
        return Ok(function.apply(value));
    }

    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
        return Err(missing_operand(node));
    };
    apply_operator(&token.text, left, right)
}

/// Applies the binary operator spelled `symbol` to two values.
fn apply_operator(symbol: &str, left: f64, right: f64) -> EvalResult<f64> {
    match Operator::from_symbol(symbol) {
        Some(Operator::Add) => Ok(left + right),
        Some(Operator::Sub) => Ok(left - right),
        Some(Operator::Mul) => Ok(left * right),
        Some(Operator::Div) => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        Some(Operator::Pow) => Ok(left.powf(right)),
        Some(Operator::Assign) | None => {
            Err(EvalError::UnsupportedOperator { symbol: symbol.to_string() })
        },
    }
}

fn missing_operand(node: &ExprNode) -> EvalError {
    EvalError::MissingOperand { token: node.token.text.clone() }
}
