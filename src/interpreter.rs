/// The tree builder assembles expression trees from token sequences.
///
/// It consumes a postfix sequence (or a prefix one) with a stack of partial
/// subtrees and checks that exactly one expression results.
///
/// # Responsibilities
/// - Turns operands and identifiers into leaves, functions into unary nodes
///   and operators into binary nodes.
/// - Reports arity mismatches and leftover operands.
pub mod builder;
/// The converter reorders infix tokens into postfix order.
///
/// This is the shunting-yard stage. It applies operator precedence and
/// associativity, removes parentheses and attaches each function to the
/// group that follows it.
///
/// # Responsibilities
/// - Emits tokens in postfix order.
/// - Detects unbalanced parentheses.
pub mod converter;
/// The evaluator computes the value of an expression tree.
///
/// Evaluation is recursive and depth first. Identifiers are resolved through
/// the tree's resolver.
///
/// # Responsibilities
/// - Applies `+ - * / ^` and `sqrt`.
/// - Reports division by zero, undefined variables and unsupported nodes.
pub mod evaluator;
/// The lexer module tokenizes an input line.
///
/// The lexer reads raw text and produces the infix token sequence: numbers,
/// names, operators and parentheses.
///
/// # Responsibilities
/// - Classifies names as functions or identifiers.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The capability through which variables are looked up.
pub mod resolver;
/// Prefix and postfix linearization of expression trees.
pub mod serializer;
/// The token type shared by every stage.
pub mod token;
/// The expression tree and its lifecycle.
pub mod tree;
