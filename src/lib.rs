//! # treecalc
//!
//! treecalc is an expression-tree calculator written in Rust.
//! A line of text is tokenized, reordered into postfix order with the
//! shunting-yard algorithm, assembled into a binary expression tree, and then
//! either evaluated or written back out in prefix or postfix order.
//!
//! ```
//! use treecalc::{compile, interpreter::serializer::tokens_to_line};
//!
//! let tree = compile("(2+3)*4").unwrap();
//! assert_eq!(tree.evaluate(), Ok(20.0));
//! assert_eq!(tokens_to_line(&tree.to_prefix()), "* + 2 3 4");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{
        converter::to_postfix, lexer::tokenize, resolver::Resolver, tree::ExprTree,
    },
};

/// Defines the nodes of expression trees.
///
/// This module declares `ExprNode`, the binary tree node built by the tree
/// builder, together with the `Operator` and `Function` enums the converter
/// and evaluator dispatch on.
///
/// # Responsibilities
/// - Defines operator precedence and associativity.
/// - Defines the closed set of built-in functions.
/// - Owns subtrees exclusively and frees them without deep recursion.
pub mod ast;
/// Provides error types for every stage of the pipeline.
///
/// Each stage has its own error enum; `CalcError` wraps them so a whole
/// request can be driven with `?`.
///
/// # Responsibilities
/// - Defines error enums for tokenizing, converting, building and evaluating.
/// - Provides readable messages through `Display`.
pub mod error;
/// Implements the expression pipeline.
///
/// This module ties together the tokenizer, the infix-to-postfix converter,
/// the tree builder, the evaluator and the serializers.
///
/// # Responsibilities
/// - Converts text into tokens, tokens into postfix order, postfix into a
///   tree.
/// - Evaluates trees and linearizes them in prefix or postfix order.
pub mod interpreter;
/// The interactive calculator session.
///
/// A thin command loop over the pipeline: assignments, `show`, `prefix`,
/// `postfix`, `tree`, `help` and `exit`, with an `ans` variable holding the
/// last result.
pub mod repl;
/// General utilities shared by the pipeline stages.
///
/// # Responsibilities
/// - Provides the singly-linked sequence and the stack built on it.
/// - Parses operand text into numbers.
pub mod util;

/// Runs the pipeline up to and including tree building.
///
/// The returned tree has no resolver; set one with
/// [`ExprTree::set_resolver`] before evaluating an expression that contains
/// identifiers.
///
/// # Errors
/// Returns the first tokenizing, conversion or tree building error.
///
/// # Examples
/// ```
/// use treecalc::{compile, error::CalcError};
///
/// let tree = compile("sqrt(9)").unwrap();
/// assert_eq!(tree.evaluate(), Ok(3.0));
///
/// assert!(matches!(compile("(1+2"), Err(CalcError::Parse(_))));
/// assert!(matches!(compile("1 # 2"), Err(CalcError::Tokenize(_))));
/// ```
pub fn compile<'r>(source: &str) -> Result<ExprTree<'r>, CalcError> {
    let infix = tokenize(source)?;
    let postfix = to_postfix(&infix)?;
    Ok(ExprTree::from_postfix(&postfix)?)
}

/// Evaluates `source`, resolving identifiers through `resolver`.
///
/// # Errors
/// Returns the first error raised by any stage of the pipeline.
///
/// # Examples
/// ```
/// use treecalc::{error::EvalError, evaluate};
///
/// let vars = |name: &str| match name {
///     "r" => Ok(2.0),
///     _ => Err(EvalError::UndefinedVariable { name: name.to_string() }),
/// };
///
/// assert_eq!(evaluate("3.5 * r^2", &vars).unwrap(), 14.0);
///
/// // 'y' is not defined.
/// assert!(evaluate("y + 1", &vars).is_err());
/// ```
pub fn evaluate(source: &str, resolver: &dyn Resolver) -> Result<f64, CalcError> {
    let mut tree = compile(source)?;
    tree.set_resolver(resolver);
    Ok(tree.evaluate()?)
}
