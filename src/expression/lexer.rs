use std::fmt;

use logos::Logos;
use ordered_float::OrderedFloat;

use crate::{
    error::NotationError,
    expression::{
        core::NotationResult,
        operator::{BracketKind, Operator},
    },
};

/// Represents a lexical token of an infix or postfix expression.
///
/// Tokens are produced once per call by [`tokenize`] and are never modified
/// afterwards.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(error = LexError)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Decimal literals such as `42`, `3.14`, `.5` or `7.`.
    #[regex(r"[0-9.]+", parse_literal)]
    Number(Literal),
    /// `+ - * / ^`
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `( { [`
    #[token("(", |_| BracketKind::Paren)]
    #[token("{", |_| BracketKind::Brace)]
    #[token("[", |_| BracketKind::Bracket)]
    OpenBracket(BracketKind),
    /// `) } ]`
    #[token(")", |_| BracketKind::Paren)]
    #[token("}", |_| BracketKind::Brace)]
    #[token("]", |_| BracketKind::Bracket)]
    CloseBracket(BracketKind),
    /// Single-letter variables such as `x`.
    #[regex(r"\p{Alphabetic}", |lex| lex.slice().chars().next())]
    Variable(char),
}

impl Token {
    /// The first character of the token as written, for diagnostics.
    #[must_use]
    pub fn lead_char(&self) -> char {
        match self {
            Self::Number(literal) => literal.text.chars().next().unwrap_or('0'),
            Self::Operator(op) => op.symbol(),
            Self::OpenBracket(kind) => kind.open(),
            Self::CloseBracket(kind) => kind.close(),
            Self::Variable(name) => *name,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{}", literal.text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenBracket(kind) => write!(f, "{}", kind.open()),
            Self::CloseBracket(kind) => write!(f, "{}", kind.close()),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// A numeric literal: its value and the text it was written as.
///
/// Converted output repeats `text` verbatim, so `3.50` stays `3.50`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The parsed value.
    pub value: OrderedFloat<f64>,
    /// The literal as it appeared in the source.
    pub text:  String,
}

/// Failures raised while lexing, before positions are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character no token starts with.
    #[default]
    UnexpectedCharacter,
    /// A run of digits and points that is not a single decimal number.
    MalformedNumber,
}

/// The ordered tokens of one expression, each paired with its byte offset.
pub type TokenStream = Vec<(Token, usize)>;

/// Parses a run of digits and decimal points.
///
/// # Returns
/// - `Ok(Literal)`: The literal if it holds at most one `.` and at least one
///   digit.
/// - `Err(LexError::MalformedNumber)`: Otherwise.
fn parse_literal(lex: &logos::Lexer<Token>) -> Result<Literal, LexError> {
    let text = lex.slice();

    if text.chars().filter(|&c| c == '.').count() > 1 {
        return Err(LexError::MalformedNumber);
    }

    let value = text.parse::<f64>().map_err(|_| LexError::MalformedNumber)?;
    Ok(Literal { value: OrderedFloat(value),
                 text:  text.to_string(), })
}

/// Splits an expression into tokens.
///
/// Consecutive digits and at most one `.` form a single number; every other
/// non-whitespace character is a token of its own. Whitespace only separates
/// tokens, so `"23"` is one number while `"2 3"` is two.
///
/// # Errors
/// - [`NotationError::MalformedNumber`] for a literal such as `1.2.3`, raised
///   as soon as that literal is reached.
/// - [`NotationError::InvalidCharacter`] for any character that starts no
///   token.
///
/// # Example
/// ```
/// use notation::expression::{
///     lexer::{Token, tokenize},
///     operator::Operator,
/// };
///
/// let tokens = tokenize("12.5*x").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].0.to_string(), "12.5");
/// assert_eq!(tokens[1], (Token::Operator(Operator::Mul), 4));
/// assert_eq!(tokens[2], (Token::Variable('x'), 5));
/// ```
pub fn tokenize(source: &str) -> NotationResult<TokenStream> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, offset)),
            Err(LexError::MalformedNumber) => {
                return Err(NotationError::MalformedNumber { literal: lexer.slice().to_string(),
                                                            offset });
            },
            Err(LexError::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                return Err(NotationError::InvalidCharacter { character, offset });
            },
        }
    }

    Ok(tokens)
}
