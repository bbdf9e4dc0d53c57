use crate::util::sequence::{Iter, Sequence};

/// A last-in, first-out stack backed by a [`Sequence`].
///
/// The top of the stack is the front of the underlying sequence, so `push`,
/// `pop` and `peek` are all constant time. Both the shunting-yard converter
/// (pending operators) and the tree builder (partially assembled subtrees)
/// use it as their working storage.
///
/// # Example
/// ```
/// use treecalc::util::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push('(');
/// stack.push('+');
///
/// assert_eq!(stack.peek(), Some(&'+'));
/// assert_eq!(stack.pop_if(|top| *top == '('), None);
/// assert_eq!(stack.pop(), Some('+'));
/// assert_eq!(stack.pop_if(|top| *top == '('), Some('('));
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Sequence<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Sequence::new() }
    }

    /// Places a value on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Removes and returns the top value.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes and returns the top value only when `predicate` accepts it.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if self.peek().is_some_and(predicate) {
            self.pop()
        } else {
            None
        }
    }

    /// Returns a reference to the top value.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of values on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the stack is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the top of the stack to the bottom.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
