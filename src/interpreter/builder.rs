use crate::{
    ast::ExprNode,
    error::BuildError,
    interpreter::{
        token::{Token, TokenKind},
        tree::ExprTree,
    },
    util::{sequence::Sequence, stack::Stack},
};

/// Result type used by the tree builder.
pub type BuildResult<T> = Result<T, BuildError>;

/// The order in which tokens are fed to [`assemble`].
#[derive(Clone, Copy, PartialEq, Eq)]
enum Feed {
    /// Postfix tokens front to back: an operator's right operand is on top.
    Postfix,
    /// Prefix tokens back to front: an operator's left operand is on top.
    ReversedPrefix,
}

impl<'r> ExprTree<'r> {
    /// Builds a new tree from a postfix token sequence, replacing the current
    /// one.
    ///
    /// The previous tree is freed before anything else happens, so on error
    /// the tree is left empty. The resolver is kept.
    ///
    /// # Errors
    /// - [`BuildError::MissingFunctionOperand`] if a function has no argument.
    /// - [`BuildError::MissingOperatorOperands`] if an operator has fewer than
    ///   two operands.
    /// - [`BuildError::LeftoverOperands`] if the tokens describe more than one
    ///   expression.
    /// - [`BuildError::UnexpectedParenthesis`] for a parenthesis token.
    /// - [`BuildError::EmptyExpression`] if `postfix` is empty.
    ///
    /// # Example
    /// ```
    /// use treecalc::{
    ///     error::BuildError,
    ///     interpreter::{token::Token, tree::ExprTree},
    ///     util::sequence::Sequence,
    /// };
    ///
    /// let postfix: Sequence<Token> =
    ///     [Token::operand("9"), Token::function("sqrt")].into_iter().collect();
    ///
    /// let mut tree = ExprTree::new();
    /// tree.build_from_postfix(&postfix).unwrap();
    /// assert_eq!(tree.evaluate(), Ok(3.0));
    ///
    /// let leftover: Sequence<Token> =
    ///     [Token::operand("1"), Token::operand("2")].into_iter().collect();
    /// assert_eq!(tree.build_from_postfix(&leftover),
    ///            Err(BuildError::LeftoverOperands { count: 2 }));
    /// assert!(tree.is_empty());
    /// ```
    pub fn build_from_postfix(&mut self, postfix: &Sequence<Token>) -> BuildResult<()> {
        self.clear();
        let root = assemble(postfix.iter(), Feed::Postfix)?;
        self.replace_root(root);
        Ok(())
    }

    /// Builds a new tree from a prefix token sequence, replacing the current
    /// one.
    ///
    /// This is the inverse of [`ExprTree::to_prefix`]. The previous tree is
    /// freed first and errors are reported exactly as for
    /// [`ExprTree::build_from_postfix`].
    ///
    /// # Errors
    /// See [`ExprTree::build_from_postfix`].
    ///
    /// # Example
    /// ```
    /// use treecalc::{
    ///     interpreter::{token::Token, tree::ExprTree},
    ///     util::sequence::Sequence,
    /// };
    ///
    /// // - 10 / 8 2
    /// let prefix: Sequence<Token> = [Token::operator('-'),
    ///                                Token::operand("10"),
    ///                                Token::operator('/'),
    ///                                Token::operand("8"),
    ///                                Token::operand("2")].into_iter()
    ///                                                    .collect();
    ///
    /// let tree = ExprTree::from_prefix(&prefix).unwrap();
    /// assert_eq!(tree.evaluate(), Ok(6.0));
    /// ```
    pub fn build_from_prefix(&mut self, prefix: &Sequence<Token>) -> BuildResult<()> {
        self.clear();

        let mut reversed = Stack::new();
        for token in prefix {
            reversed.push(token);
        }

        let root = assemble(reversed.iter().copied(), Feed::ReversedPrefix)?;
        self.replace_root(root);
        Ok(())
    }

    /// Creates a tree, without a resolver, from a postfix token sequence.
    ///
    /// # Errors
    /// See [`ExprTree::build_from_postfix`].
    pub fn from_postfix(postfix: &Sequence<Token>) -> BuildResult<Self> {
        let mut tree = Self::new();
        tree.build_from_postfix(postfix)?;
        Ok(tree)
    }

    /// Creates a tree, without a resolver, from a prefix token sequence.
    ///
    /// # Errors
    /// See [`ExprTree::build_from_postfix`].
    pub fn from_prefix(prefix: &Sequence<Token>) -> BuildResult<Self> {
        let mut tree = Self::new();
        tree.build_from_prefix(prefix)?;
        Ok(tree)
    }
}

/// Assembles subtrees on a stack until exactly one tree remains.
///
/// Postfix and reversed prefix differ only in which of the two popped
/// subtrees becomes the left operand of a binary operator.
fn assemble<'t>(tokens: impl Iterator<Item = &'t Token>, feed: Feed) -> BuildResult<Box<ExprNode>> {
    let mut nodes: Stack<Box<ExprNode>> = Stack::new();

    for token in tokens {
        match token.kind {
            TokenKind::Operand | TokenKind::Identifier => nodes.push(ExprNode::leaf(token.clone())),
            TokenKind::Function => {
                let operand = nodes.pop().ok_or_else(|| {
                                             BuildError::MissingFunctionOperand { function:
                                                                                      token.text.clone() }
                                         })?;
                nodes.push(ExprNode::unary(token.clone(), operand));
            },
            TokenKind::Operator => {
                let (Some(top), Some(below)) = (nodes.pop(), nodes.pop()) else {
                    return Err(BuildError::MissingOperatorOperands { operator: token.text.clone() });
                };
                let (left, right) = match feed {
                    Feed::Postfix => (below, top),
                    Feed::ReversedPrefix => (top, below),
                };
                nodes.push(ExprNode::binary(token.clone(), left, right));
            },
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(BuildError::UnexpectedParenthesis { token: token.text.clone() });
            },
        }
    }

    match nodes.len() {
        0 => Err(BuildError::EmptyExpression),
        1 => nodes.pop().ok_or(BuildError::EmptyExpression),
        count => Err(BuildError::LeftoverOperands { count }),
    }
}
