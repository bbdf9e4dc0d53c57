use crate::interpreter::token::Token;

/// A binary operator recognised by the calculator.
///
/// Precedence and associativity drive the shunting-yard converter; the
/// evaluator dispatches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `=`; only meaningful to the command loop, which splits assignments
    /// off before the expression pipeline runs.
    Assign,
}

impl Operator {
    /// Looks up an operator by its one-character symbol.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("^"), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// assert_eq!(Operator::from_symbol("**"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            "=" => Some(Self::Assign),
            _ => None,
        }
    }

    /// Returns the symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::Assign => '=',
        }
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 4,
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 2,
            Self::Assign => 1,
        }
    }

    /// `^` groups right to left; everything else groups left to right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

/// Names of every built-in function, in lookup order.
pub const BUILTIN_FUNCTIONS: &[&str] = &["sqrt"];

/// A built-in unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Square root. Negative arguments produce NaN rather than an error.
    Sqrt,
}

impl Function {
    /// Looks up a built-in function by name.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("sin"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// Returns the name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
        }
    }

    /// Applies the function to a value.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::Function;
    ///
    /// assert_eq!(Function::Sqrt.apply(9.0), 3.0);
    /// assert!(Function::Sqrt.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sqrt => value.sqrt(),
        }
    }
}

/// A node of a binary expression tree.
///
/// The shape depends on the token kind:
/// - operands and identifiers are leaves with no children,
/// - functions hold their single argument in `right`,
/// - operators hold both operands, `left` and `right`.
///
/// Each child is owned by exactly one parent. Dropping a node drops its
/// whole subtree; the teardown uses an explicit worklist, so a degenerate
/// tree thousands of levels deep is freed without deep recursion.
///
/// # Example
/// ```
/// use treecalc::{ast::ExprNode, interpreter::token::Token};
///
/// let sum = ExprNode::binary(Token::operator('+'),
///                            ExprNode::leaf(Token::operand("1")),
///                            ExprNode::leaf(Token::identifier("x")));
///
/// assert!(!sum.is_leaf());
/// assert_eq!(sum.left.as_deref().map(|n| n.token.text.as_str()), Some("1"));
/// assert_eq!(sum.depth(), 2);
/// ```
#[derive(Debug, PartialEq)]
pub struct ExprNode {
    /// The token this node was built from.
    pub token: Token,
    /// Left operand of a binary operator.
    pub left:  Option<Box<Self>>,
    /// Right operand of a binary operator, or the argument of a function.
    pub right: Option<Box<Self>>,
}

impl ExprNode {
    /// Creates a childless node.
    #[must_use]
    pub fn leaf(token: Token) -> Box<Self> {
        Box::new(Self { token,
                        left: None,
                        right: None })
    }

    /// Creates a function application node; the argument goes to `right`.
    #[must_use]
    pub fn unary(token: Token, operand: Box<Self>) -> Box<Self> {
        Box::new(Self { token,
                        left: None,
                        right: Some(operand) })
    }

    /// Creates a binary operator node.
    #[must_use]
    pub fn binary(token: Token, left: Box<Self>, right: Box<Self>) -> Box<Self> {
        Box::new(Self { token,
                        left: Some(left),
                        right: Some(right) })
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.left.as_deref().map(|left| (left, level + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, level + 1)));
        }
        deepest
    }
}

impl Drop for ExprNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Self>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
