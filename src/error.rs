/// Notation errors.
///
/// Defines every failure the public conversion and evaluation operations can
/// report: invalid characters, unbalanced brackets, adjacent operators,
/// malformed numeric literals, missing or left-over operands, and unknown
/// operators.
pub mod notation_error;
/// Stack errors.
///
/// Overflow and underflow failures of the [`Stack`](crate::stack::Stack)
/// capability. These never leave the crate's public operations directly; they
/// are converted into a [`NotationError`] at the converter and evaluator
/// boundary.
pub mod stack_error;

pub use notation_error::NotationError;
pub use stack_error::StackError;
