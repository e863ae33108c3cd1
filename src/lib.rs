//! # notation
//!
//! notation converts arithmetic expressions between infix (`2 + 3 * 4`) and
//! postfix (`2 3 4 * +`) notation and evaluates either form. It supports the
//! binary operators `+ - * / ^`, decimal literals, single-letter variables and
//! the bracket pairs `( )`, `{ }` and `[ ]`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

pub use crate::{
    error::NotationError,
    expression::core::{Notation, NotationResult},
};

/// Provides unified error types for validation, conversion and evaluation.
///
/// Every failure the public operations can report is a variant of
/// [`NotationError`](error::NotationError). Stack overflow and underflow are
/// reported internally as [`StackError`](error::StackError) and converted at
/// the boundary.
///
/// # Responsibilities
/// - Defines one flat error enum with a variant per failure kind.
/// - Attaches the offending character, literal or offset for diagnostics.
/// - Maps stack failures onto notation errors.
pub mod error;
/// Orchestrates validation, tokenizing, conversion and evaluation.
///
/// # Responsibilities
/// - Rejects invalid characters, unbalanced brackets and adjacent operators.
/// - Splits expressions into tokens.
/// - Converts between infix and postfix and evaluates both.
pub mod expression;
/// A bounded or unbounded last-in, first-out stack.
///
/// The converter and evaluator keep their operators, brackets and operands
/// on [`Stack`](stack::Stack)s that exist only for the duration of one call.
pub mod stack;

/// Converts an infix expression to space-separated postfix.
///
/// # Examples
/// ```
/// use notation::{convert_infix_to_postfix, error::NotationError};
///
/// assert_eq!(convert_infix_to_postfix("2+3*4").unwrap(), "2 3 4 * +");
///
/// assert!(matches!(convert_infix_to_postfix("5++4"),
///                  Err(NotationError::SequentialOperators { .. })));
/// ```
pub fn convert_infix_to_postfix(infix: &str) -> NotationResult<String> {
    Notation::default().convert_infix_to_postfix(infix)
}

/// Converts a postfix expression to infix, parenthesising `+` and `-`.
///
/// # Examples
/// ```
/// use notation::convert_postfix_to_infix;
///
/// assert_eq!(convert_postfix_to_infix("2 3 4 * +").unwrap(), "(2 + 3 * 4)");
/// ```
pub fn convert_postfix_to_infix(postfix: &str) -> NotationResult<String> {
    Notation::default().convert_postfix_to_infix(postfix)
}

/// Evaluates an infix expression.
///
/// # Examples
/// ```
/// use notation::{error::NotationError, evaluate_infix_expression};
///
/// assert_eq!(evaluate_infix_expression("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate_infix_expression("2/0").unwrap(), f64::INFINITY);
///
/// assert!(matches!(evaluate_infix_expression("(2+3"),
///                  Err(NotationError::UnbalancedDelimiters { .. })));
/// ```
pub fn evaluate_infix_expression(infix: &str) -> NotationResult<f64> {
    Notation::default().evaluate_infix_expression(infix)
}

/// Evaluates a postfix expression.
///
/// # Examples
/// ```
/// use notation::evaluate_postfix_expression;
///
/// assert_eq!(evaluate_postfix_expression("8 2 -").unwrap(), 6.0);
/// assert_eq!(evaluate_postfix_expression("8 2 /").unwrap(), 4.0);
/// ```
pub fn evaluate_postfix_expression(postfix: &str) -> NotationResult<f64> {
    Notation::default().evaluate_postfix_expression(postfix)
}
