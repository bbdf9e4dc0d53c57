use std::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next:  Link<T>,
}

/// An insertion-ordered, singly-linked sequence.
///
/// `Sequence` is the substrate every pipeline stage is written against: the
/// tokenizer produces one, the converter consumes one and produces another,
/// and the tree serializers linearize into one. It supports constant-time
/// insertion at both ends, constant-time removal at the front, and forward
/// iteration. Removing from the back walks the list and is linear.
///
/// Nodes are owned by the sequence through raw links so that the tail can be
/// reached without a second owning pointer. Every node reachable from `head`
/// was allocated by `Box::new` in this module and is freed exactly once, in
/// `pop_front`, `pop_back` or `Drop`.
///
/// # Example
/// ```
/// use treecalc::util::sequence::Sequence;
///
/// let mut seq = Sequence::new();
/// seq.push_back(2);
/// seq.push_back(3);
/// seq.push_front(1);
///
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(seq.pop_back(), Some(3));
/// assert_eq!(seq.pop_front(), Some(1));
/// ```
pub struct Sequence<T> {
    head:  Link<T>,
    tail:  Link<T>,
    len:   usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { head:  None,
               tail:  None,
               len:   0,
               _owns: PhantomData, }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the sequence holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an element after the current last one.
    pub fn push_back(&mut self, value: T) {
        let node = Self::allocate(value, None);
        match self.tail {
            // SAFETY: `tail` points at the last live node owned by `self`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts an element before the current first one.
    pub fn push_front(&mut self, value: T) {
        let node = Self::allocate(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
                     // SAFETY: `head` was produced by `allocate` and is unlinked here
                     // before the box is reclaimed, so it is freed exactly once.
                     let node = unsafe { Box::from_raw(head.as_ptr()) };
                     self.head = node.next;
                     if self.head.is_none() {
                         self.tail = None;
                     }
                     self.len -= 1;
                     node.value
                 })
    }

    /// Removes and returns the last element.
    ///
    /// The list only links forward, so this walks from the head to find the
    /// new tail.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.head == self.tail {
            return self.pop_front();
        }

        let mut cursor = self.head?;
        // SAFETY: every link followed here belongs to a live node owned by
        // `self`; the walk stops at the node whose successor is `tail`, which
        // exists because the sequence holds at least two elements.
        unsafe {
            while (*cursor.as_ptr()).next != Some(tail) {
                cursor = (*cursor.as_ptr()).next?;
            }
            (*cursor.as_ptr()).next = None;
            self.tail = Some(cursor);
            self.len -= 1;
            Some(Box::from_raw(tail.as_ptr()).value)
        }
    }

    /// Returns a reference to the first element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by `self`, borrowed for `&self`.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `front`, with exclusivity guaranteed by `&mut self`.
        self.head.map(|head| unsafe { &mut (*head.as_ptr()).value })
    }

    /// Returns a reference to the last element.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node owned by `self`, borrowed for `&self`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a front-to-back iterator over references to the elements.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { next:      self.head,
               remaining: self.len,
               _borrow:   PhantomData, }
    }

    fn allocate(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing front-to-back iterator returned by [`Sequence::iter`].
pub struct Iter<'a, T> {
    next:      Link<T>,
    remaining: usize,
    _borrow:   PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
                     // SAFETY: the sequence is borrowed for `'a`, so the node
                     // cannot be freed or mutated while this reference lives.
                     let node: &'a Node<T> = unsafe { &*node.as_ptr() };
                     self.next = node.next;
                     self.remaining -= 1;
                     &node.value
                 })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning front-to-back iterator.
pub struct IntoIter<T>(Sequence<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Sequence<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
