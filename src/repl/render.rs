use crate::{ast::ExprNode, interpreter::tree::ExprTree, util::stack::Stack};

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const CONTINUATION: &str = "│  ";
const GAP: &str = "   ";

/// Draws the tree with box-drawing branches, one node per line.
///
/// Left children are drawn with `├─` and right children with `└─`, so a
/// function's single argument always hangs from `└─`.
///
/// # Example
/// ```
/// use treecalc::{compile, repl::render::render_tree};
///
/// let tree = compile("1+2*3").unwrap();
/// assert_eq!(render_tree(&tree), "+\n├─ 1\n└─ *\n   ├─ 2\n   └─ 3");
/// ```
#[must_use]
pub fn render_tree(tree: &ExprTree<'_>) -> String {
    let Some(root) = tree.root() else {
        return "(empty tree)".to_string();
    };

    let mut lines = vec![root.token.text.clone()];
    let mut pending = Stack::new();
    schedule_children(root, "", &mut pending);

    while let Some(Branch { node, indent, is_left }) = pending.pop() {
        let (branch, carry) = if is_left { (BRANCH, CONTINUATION) } else { (LAST_BRANCH, GAP) };
        lines.push(format!("{indent}{branch}{}", node.token.text));
        schedule_children(node, &format!("{indent}{carry}"), &mut pending);
    }

    lines.join("\n")
}

/// A node waiting to be drawn, with the prefix of its line.
struct Branch<'t> {
    node:    &'t ExprNode,
    indent:  String,
    is_left: bool,
}

/// Queues the children of `node` so that the left one is drawn first.
fn schedule_children<'t>(node: &'t ExprNode, indent: &str, pending: &mut Stack<Branch<'t>>) {
    if let Some(right) = node.right.as_deref() {
        pending.push(Branch { node:    right,
                              indent:  indent.to_string(),
                              is_left: false, });
    }
    if let Some(left) = node.left.as_deref() {
        pending.push(Branch { node:    left,
                              indent:  indent.to_string(),
                              is_left: true, });
    }
}
