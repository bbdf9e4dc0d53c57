use std::{cell::Cell, rc::Rc};

use treecalc::util::{sequence::Sequence, stack::Stack};

fn contents<T: Clone>(seq: &Sequence<T>) -> Vec<T> {
    seq.iter().cloned().collect()
}

/// Counts how many times it has been dropped.
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn new_sequence_is_empty() {
    let mut seq: Sequence<i32> = Sequence::new();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.front(), None);
    assert_eq!(seq.back(), None);
    assert_eq!(seq.pop_front(), None);
    assert_eq!(seq.pop_back(), None);
    assert_eq!(seq.iter().next(), None);
}

#[test]
fn pushes_preserve_order() {
    let mut seq = Sequence::new();
    seq.push_back(2);
    seq.push_front(1);
    seq.push_back(3);
    seq.push_front(0);

    assert_eq!(contents(&seq), vec![0, 1, 2, 3]);
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.front(), Some(&0));
    assert_eq!(seq.back(), Some(&3));
}

#[test]
fn push_front_on_empty_sets_back() {
    let mut seq = Sequence::new();
    seq.push_front('a');
    assert_eq!(seq.back(), Some(&'a'));

    seq.push_back('b');
    assert_eq!(contents(&seq), vec!['a', 'b']);
}

#[test]
fn pops_from_both_ends() {
    let mut seq: Sequence<_> = (1..=5).collect();

    assert_eq!(seq.pop_back(), Some(5));
    assert_eq!(seq.pop_front(), Some(1));
    assert_eq!(seq.pop_back(), Some(4));
    assert_eq!(contents(&seq), vec![2, 3]);
    assert_eq!(seq.back(), Some(&3));

    assert_eq!(seq.pop_back(), Some(3));
    assert_eq!(seq.pop_back(), Some(2));
    assert_eq!(seq.pop_back(), None);
    assert!(seq.is_empty());
    assert_eq!(seq.front(), None);
    assert_eq!(seq.back(), None);
}

#[test]
fn reusable_after_draining() {
    let mut seq: Sequence<_> = [1, 2].into_iter().collect();
    while seq.pop_front().is_some() {}

    seq.push_back(7);
    assert_eq!(seq.front(), Some(&7));
    assert_eq!(seq.back(), Some(&7));
    assert_eq!(seq.len(), 1);
}

#[test]
fn front_mut_edits_in_place() {
    let mut seq: Sequence<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
    if let Some(first) = seq.front_mut() {
        first.push('!');
    }
    assert_eq!(contents(&seq), vec!["a!".to_string(), "b".to_string()]);
}

#[test]
fn iterators_report_exact_length() {
    let seq: Sequence<_> = (0..10).collect();
    let mut iter = seq.iter();
    assert_eq!(iter.len(), 10);
    iter.next();
    assert_eq!(iter.len(), 9);

    let owned: Vec<_> = seq.into_iter().collect();
    assert_eq!(owned, (0..10).collect::<Vec<_>>());
}

#[test]
fn clone_and_equality() {
    let seq: Sequence<_> = ["x", "y", "z"].into_iter().collect();
    let mut copy = seq.clone();
    assert_eq!(seq, copy);

    copy.pop_back();
    assert_ne!(seq, copy);
    assert_eq!(format!("{seq:?}"), r#"["x", "y", "z"]"#);
}

#[test]
fn clear_and_drop_release_every_element() {
    let drops = Rc::new(Cell::new(0));

    let mut seq = Sequence::new();
    for _ in 0..3 {
        seq.push_back(DropCounter(Rc::clone(&drops)));
    }
    seq.clear();
    assert_eq!(drops.get(), 3);
    assert!(seq.is_empty());

    for _ in 0..4 {
        seq.push_front(DropCounter(Rc::clone(&drops)));
    }
    drop(seq.pop_back());
    assert_eq!(drops.get(), 4);
    drop(seq);
    assert_eq!(drops.get(), 7);
}

#[test]
fn partially_consumed_into_iter_drops_rest() {
    let drops = Rc::new(Cell::new(0));
    let seq: Sequence<_> = (0..5).map(|_| DropCounter(Rc::clone(&drops))).collect();

    let mut iter = seq.into_iter();
    drop(iter.next());
    assert_eq!(drops.get(), 1);
    drop(iter);
    assert_eq!(drops.get(), 5);
}

#[test]
fn long_sequences_drop_without_recursion() {
    let seq: Sequence<_> = (0..200_000).collect();
    assert_eq!(seq.len(), 200_000);
    drop(seq);
}

#[test]
fn stack_is_last_in_first_out() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);

    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
}

#[test]
fn stack_pop_if_checks_the_top_only() {
    let mut stack = Stack::new();
    stack.push(10);
    stack.push(1);

    assert_eq!(stack.pop_if(|top| *top > 5), None);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop_if(|top| *top < 5), Some(1));
    assert_eq!(stack.pop_if(|top| *top > 5), Some(10));
    assert_eq!(stack.pop_if(|_| true), None);
}
