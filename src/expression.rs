/// Infix and postfix conversion.
///
/// Turns infix into postfix with an operator-precedence (shunting-yard)
/// pass over one operator stack, and postfix back into infix with one stack of
/// partial expressions.
pub mod converter;
/// Shared settings and the result type.
///
/// Declares [`Notation`](self::core::Notation), which carries the optional stack
/// limit and variable bindings, and [`NotationResult`](self::core::NotationResult).
pub mod core;
/// Numeric evaluation.
///
/// Evaluates infix expressions with an operator stack and an operand stack,
/// and postfix expressions with a single operand stack.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// Splits a raw expression into numbers, operators, brackets and
/// single-letter variables, each tagged with its byte offset. Numbers may span
/// several digits and hold one decimal point.
pub mod lexer;
/// Operators and brackets.
///
/// Defines the five binary operators with their precedence and operand order,
/// the three bracket kinds, and [`operate`](operator::operate).
pub mod operator;
/// Input checks run before any conversion or evaluation.
///
/// Character-set checks for infix and postfix input, bracket balance, and
/// adjacent-operator detection.
pub mod validator;
