use log::trace;

use crate::{
    error::NotationError,
    expression::{
        core::NotationResult,
        operator::{BracketKind, Operator},
    },
    stack::Stack,
};

/// Returns `true` if `ch` may appear in an infix expression.
fn is_infix_char(ch: char) -> bool {
    is_postfix_char(ch) || BracketKind::from_open(ch).is_some() || BracketKind::from_close(ch).is_some()
}

/// Returns `true` if `ch` may appear in a postfix expression.
fn is_postfix_char(ch: char) -> bool {
    ch.is_whitespace()
    || ch.is_ascii_digit()
    || ch == '.'
    || ch.is_alphabetic()
    || Operator::from_symbol(ch).is_some()
}

/// Fails on blank input.
///
/// # Errors
/// Returns [`NotationError::EmptyExpression`] if `source` is empty or only
/// whitespace.
pub fn ensure_not_blank(source: &str) -> NotationResult<()> {
    if source.trim().is_empty() {
        return Err(NotationError::EmptyExpression);
    }
    Ok(())
}

/// Fails on the first character that cannot appear in an infix expression.
///
/// # Errors
/// Returns [`NotationError::InvalidCharacter`] with the character and its byte
/// offset.
pub fn ensure_valid_characters(source: &str) -> NotationResult<()> {
    match source.char_indices().find(|&(_, ch)| !is_infix_char(ch)) {
        Some((offset, character)) => Err(NotationError::InvalidCharacter { character, offset }),
        None => Ok(()),
    }
}

/// Fails on blank input or on the first character that cannot appear in a
/// postfix expression. Brackets are rejected outright.
///
/// # Errors
/// - [`NotationError::EmptyExpression`] if there is nothing but whitespace.
/// - [`NotationError::InvalidCharacter`] for a bracket or unsupported
///   character.
pub fn ensure_valid_postfix_characters(source: &str) -> NotationResult<()> {
    ensure_not_blank(source)?;
    match source.char_indices().find(|&(_, ch)| !is_postfix_char(ch)) {
        Some((offset, character)) => Err(NotationError::InvalidCharacter { character, offset }),
        None => Ok(()),
    }
}

/// Fails unless every bracket is closed by the same kind, correctly nested.
///
/// Open brackets are pushed onto a stack; each close bracket pops one and
/// must match it. Anything left on the stack at the end is unclosed.
///
/// # Errors
/// Returns [`NotationError::UnbalancedDelimiters`] naming the first close
/// bracket without a matching opener, or else the innermost bracket left
/// open.
pub fn ensure_balanced(source: &str) -> NotationResult<()> {
    let mut open: Stack<(BracketKind, usize)> = Stack::new();

    for (offset, ch) in source.char_indices() {
        if let Some(kind) = BracketKind::from_open(ch) {
            open.push((kind, offset))?;
        } else if let Some(kind) = BracketKind::from_close(ch) {
            match open.pop() {
                Ok((opened, _)) if opened == kind => {},
                _ => {
                    trace!("unmatched '{ch}' at {offset}");
                    return Err(NotationError::UnbalancedDelimiters { bracket: ch, offset });
                },
            }
        }
    }

    match open.pop() {
        Ok((kind, offset)) => Err(NotationError::UnbalancedDelimiters { bracket: kind.open(),
                                                                         offset }),
        Err(_) => Ok(()),
    }
}

/// Fails if an operator or open bracket is immediately followed by an
/// operator or a close bracket, as in `5++4`, `5+)` or `(*2)`.
///
/// Only the infix form is checked this way; whitespace between the two
/// symbols does not make the pair legal. Operands and close brackets may be
/// followed by anything.
///
/// # Errors
/// Returns [`NotationError::SequentialOperators`] for the first offending
/// pair.
pub fn ensure_no_sequential_operators(source: &str) -> NotationResult<()> {
    let mut significant = source.char_indices().filter(|(_, ch)| !ch.is_whitespace()).peekable();

    while let Some((_, previous)) = significant.next() {
        let opens = Operator::from_symbol(previous).is_some() || BracketKind::from_open(previous).is_some();
        if !opens {
            continue;
        }
        if let Some(&(offset, next)) = significant.peek()
           && (Operator::from_symbol(next).is_some() || BracketKind::from_close(next).is_some())
        {
            return Err(NotationError::SequentialOperators { previous, next, offset });
        }
    }

    Ok(())
}

/// Runs every infix check in order: blank input, characters, balance,
/// sequential operators.
///
/// # Errors
/// Returns the error of the first failing check.
pub fn validate_infix(source: &str) -> NotationResult<()> {
    ensure_not_blank(source)?;
    ensure_valid_characters(source)?;
    ensure_balanced(source)?;
    ensure_no_sequential_operators(source)
}

/// Runs every postfix check: blank input and characters (brackets included).
///
/// # Errors
/// Returns the error of the first failing check.
pub fn validate_postfix(source: &str) -> NotationResult<()> {
    ensure_valid_postfix_characters(source)
}

/// Returns `true` if every character is whitespace, a digit, `.`, a letter,
/// one of `+ - * / ^` or a bracket.
///
/// # Example
/// ```
/// use notation::expression::validator::has_valid_characters;
///
/// assert!(has_valid_characters("{a + 2.5} * [3 - b]"));
/// assert!(!has_valid_characters("2 % 3"));
/// ```
#[must_use]
pub fn has_valid_characters(source: &str) -> bool {
    ensure_valid_characters(source).is_ok()
}

/// Returns `true` if the input is a non-blank expression without brackets or
/// unsupported characters.
///
/// # Example
/// ```
/// use notation::expression::validator::has_valid_postfix_characters;
///
/// assert!(has_valid_postfix_characters("2 3 +"));
/// assert!(!has_valid_postfix_characters("(2 3 +)"));
/// assert!(!has_valid_postfix_characters("   "));
/// ```
#[must_use]
pub fn has_valid_postfix_characters(source: &str) -> bool {
    ensure_valid_postfix_characters(source).is_ok()
}

/// Returns `true` if every open bracket has a correctly nested close bracket
/// of the same kind. Other characters are ignored.
///
/// # Example
/// ```
/// use notation::expression::validator::is_balanced;
///
/// assert!(is_balanced("{[(a)]}"));
/// assert!(!is_balanced("{[(a])}"));
/// assert!(!is_balanced("(a"));
/// ```
#[must_use]
pub fn is_balanced(source: &str) -> bool {
    ensure_balanced(source).is_ok()
}

/// Returns `true` if an operator or open bracket is directly followed by an
/// operator or close bracket.
///
/// # Example
/// ```
/// use notation::expression::validator::has_sequential_operators;
///
/// assert!(has_sequential_operators("5++4"));
/// assert!(has_sequential_operators("5 + )"));
/// assert!(!has_sequential_operators("(5 + 4) * 2"));
/// ```
#[must_use]
pub fn has_sequential_operators(source: &str) -> bool {
    ensure_no_sequential_operators(source).is_err()
}
