use crate::{
    ast::ExprNode,
    interpreter::{token::Token, tree::ExprTree},
    util::{sequence::Sequence, stack::Stack},
};

impl ExprTree<'_> {
    /// Linearizes the tree in prefix order: node, then left subtree, then
    /// right subtree.
    ///
    /// An empty tree yields an empty sequence.
    ///
    /// # Example
    /// ```
    /// use treecalc::{compile, interpreter::serializer::tokens_to_line};
    ///
    /// let tree = compile("(2+3)*sqrt(x)").unwrap();
    /// assert_eq!(tokens_to_line(&tree.to_prefix()), "* + 2 3 sqrt x");
    /// ```
    #[must_use]
    pub fn to_prefix(&self) -> Sequence<Token> {
        let mut out = Sequence::new();
        if let Some(root) = self.root() {
            push_prefix(root, &mut out);
        }
        out
    }

    /// Linearizes the tree in postfix order: left subtree, then right
    /// subtree, then node.
    ///
    /// For a tree built from a postfix sequence this reproduces that
    /// sequence. An empty tree yields an empty sequence.
    ///
    /// # Example
    /// ```
    /// use treecalc::{compile, interpreter::serializer::tokens_to_line};
    ///
    /// let tree = compile("(2+3)*sqrt(x)").unwrap();
    /// assert_eq!(tokens_to_line(&tree.to_postfix()), "2 3 + x sqrt *");
    /// ```
    #[must_use]
    pub fn to_postfix(&self) -> Sequence<Token> {
        let mut out = Sequence::new();
        if let Some(root) = self.root() {
            push_postfix(root, &mut out);
        }
        out
    }
}

fn push_prefix(root: &ExprNode, out: &mut Sequence<Token>) {
    let mut pending = Stack::new();
    pending.push(root);

    while let Some(node) = pending.pop() {
        out.push_back(node.token.clone());
        if let Some(right) = node.right.as_deref() {
            pending.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            pending.push(left);
        }
    }
}

fn push_postfix(root: &ExprNode, out: &mut Sequence<Token>) {
    // `true` marks a node whose children have already been scheduled.
    let mut pending = Stack::new();
    pending.push((root, false));

    while let Some((node, expanded)) = pending.pop() {
        if expanded {
            out.push_back(node.token.clone());
            continue;
        }
        pending.push((node, true));
        if let Some(right) = node.right.as_deref() {
            pending.push((right, false));
        }
        if let Some(left) = node.left.as_deref() {
            pending.push((left, false));
        }
    }
}

/// Joins the texts of `tokens` with single spaces.
///
/// This is the display form of a token sequence.
///
/// # Example
/// ```
/// use treecalc::interpreter::{lexer::tokenize, serializer::tokens_to_line};
///
/// assert_eq!(tokens_to_line(&tokenize("1+(x*2)").unwrap()), "1 + ( x * 2 )");
/// assert_eq!(tokens_to_line(&tokenize("").unwrap()), "");
/// ```
pub fn tokens_to_line<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens.into_iter()
          .map(|token| token.text.as_str())
          .collect::<Vec<_>>()
          .join(" ")
}
