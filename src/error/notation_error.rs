use thiserror::Error;

use crate::error::StackError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while converting or evaluating an
/// expression.
///
/// Every public operation either succeeds completely or returns exactly one of
/// these; partial output is never produced.
pub enum NotationError {
    /// The expression was empty or contained only whitespace.
    #[error("Invalid notation: the expression is empty.")]
    EmptyExpression,
    /// The expression contained a character outside the supported set.
    #[error("Invalid notation: unexpected character '{character}' at offset {offset}. The \
             expression may only contain numbers, single-letter variables, brackets and \
             the operators +, -, *, /, ^.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        offset:    usize,
    },
    /// A bracket was closed without being opened, closed by the wrong kind,
    /// or never closed.
    #[error("Invalid notation: unbalanced '{bracket}' at offset {offset}.")]
    UnbalancedDelimiters {
        /// The bracket character at fault.
        bracket: char,
        /// Byte offset of the bracket in the input.
        offset:  usize,
    },
    /// An operator or open bracket was directly followed by another operator
    /// or a close bracket.
    #[error("Invalid notation: '{next}' may not follow '{previous}' (offset {offset}).")]
    SequentialOperators {
        /// The operator or open bracket.
        previous: char,
        /// The symbol that illegally follows it.
        next:     char,
        /// Byte offset of `next` in the input.
        offset:   usize,
    },
    /// A numeric literal contained more than one decimal point, or nothing
    /// but a decimal point.
    #[error("Invalid notation: malformed number '{literal}' at offset {offset}.")]
    MalformedNumber {
        /// The literal text as written.
        literal: String,
        /// Byte offset of the literal in the input.
        offset:  usize,
    },
    /// An operator ran out of operands.
    #[error("Invalid notation: an operator is missing an operand.")]
    StackUnderflow,
    /// A configured stack limit was exceeded.
    #[error("Invalid notation: the expression needs more than {limit} pending items.")]
    StackOverflow {
        /// The configured limit.
        limit: usize,
    },
    /// More than one value was left after the whole expression was consumed.
    #[error("Invalid notation: {count} values remain after evaluation, expected exactly one.")]
    ResidualOperands {
        /// How many values were left over.
        count: usize,
    },
    /// A variable was evaluated without a bound value.
    #[error("Unbound variable '{name}'.")]
    UnboundVariable {
        /// The variable letter.
        name: char,
    },
    /// `operate` was asked to apply a symbol that is not an operator.
    #[error("Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The unrecognised symbol.
        symbol: char,
    },
}

impl From<StackError> for NotationError {
    fn from(error: StackError) -> Self {
        match error {
            StackError::Overflow { limit } => Self::StackOverflow { limit },
            StackError::Underflow => Self::StackUnderflow,
        }
    }
}
