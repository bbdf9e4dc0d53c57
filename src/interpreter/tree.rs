use crate::{ast::ExprNode, interpreter::resolver::Resolver};

/// An expression tree together with the resolver used to evaluate it.
///
/// The tree starts empty. Building from a postfix (or prefix) sequence
/// replaces whatever tree was held before; the old nodes are freed first, so
/// a failed build leaves the tree empty. Evaluation and serialization only
/// read the tree.
///
/// The resolver is borrowed for `'r`. Whoever owns the variable data keeps
/// owning it, and can keep mutating it through interior mutability between
/// evaluations.
///
/// # Example
/// ```
/// use treecalc::{
///     error::EvalError,
///     interpreter::{converter::to_postfix, lexer::tokenize, tree::ExprTree},
/// };
///
/// let x_is_four = |name: &str| match name {
///     "x" => Ok(4.0),
///     _ => Err(EvalError::UndefinedVariable { name: name.to_string() }),
/// };
///
/// let mut tree = ExprTree::with_resolver(&x_is_four);
/// assert!(tree.is_empty());
///
/// let postfix = to_postfix(&tokenize("x^2 - 1").unwrap()).unwrap();
/// tree.build_from_postfix(&postfix).unwrap();
///
/// assert_eq!(tree.evaluate(), Ok(15.0));
/// ```
#[derive(Default)]
pub struct ExprTree<'r> {
    pub(crate) root:     Option<Box<ExprNode>>,
    pub(crate) resolver: Option<&'r dyn Resolver>,
}

impl<'r> ExprTree<'r> {
    /// Creates an empty tree with no resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self { root:     None,
               resolver: None, }
    }

    /// Creates an empty tree that resolves identifiers through `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: &'r dyn Resolver) -> Self {
        Self { root:     None,
               resolver: Some(resolver), }
    }

    /// Sets the resolver used for identifiers, replacing any previous one.
    pub fn set_resolver(&mut self, resolver: &'r dyn Resolver) {
        self.resolver = Some(resolver);
    }

    /// Returns `true` if a resolver has been configured.
    #[must_use]
    pub const fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Returns the root node, if a tree has been built.
    #[must_use]
    pub fn root(&self) -> Option<&ExprNode> {
        self.root.as_deref()
    }

    /// Returns `true` if no tree is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Frees the current tree, keeping the resolver.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Installs `root` as the tree, dropping the previous one.
    pub fn replace_root(&mut self, root: Box<ExprNode>) {
        self.root = Some(root);
    }
}

impl std::fmt::Debug for ExprTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExprTree")
         .field("root", &self.root)
         .field("has_resolver", &self.has_resolver())
         .finish()
    }
}
