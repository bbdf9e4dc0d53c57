/// Operand parsing helpers.
///
/// The operand grammar shared by the tokenizer and the evaluator, and the
/// conversion from operand text to `f64`.
pub mod num;
/// Singly-linked sequence.
///
/// The ordered container used to pass tokens between pipeline stages.
pub mod sequence;
/// Stack adapter.
///
/// A last-in, first-out view over [`sequence::Sequence`], used as working
/// storage by the converter and the tree builder.
pub mod stack;
