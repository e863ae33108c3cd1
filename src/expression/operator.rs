use std::fmt;

use crate::{error::NotationError, expression::core::NotationResult};

/// A binary arithmetic operator.
///
/// Precedence from low to high is `+ -`, `* /`, `^`. Operators of equal
/// precedence are applied left to right, except `^`, which never forces a
/// pending operator off the stack and therefore chains right to left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the operator for `symbol`, if it is one of `+ - * / ^`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength: 1 for `+ -`, 2 for `* /`, 3 for `^`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns `true` if `top`, sitting on the operator stack, must be
    /// applied before `self` is pushed.
    ///
    /// `+` and `-` yield to every operator, `*` and `/` yield to `^`, `*` and
    /// `/`, and `^` yields to nothing.
    ///
    /// # Example
    /// ```
    /// use notation::expression::operator::Operator;
    ///
    /// assert!(Operator::Add.yields_to(Operator::Pow));
    /// assert!(Operator::Div.yields_to(Operator::Mul));
    /// assert!(!Operator::Mul.yields_to(Operator::Sub));
    /// assert!(!Operator::Pow.yields_to(Operator::Pow));
    /// ```
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        !matches!(self, Self::Pow) && top.precedence() >= self.precedence()
    }

    /// Applies the operator to two operands.
    ///
    /// `top` is the operand pushed last and `beneath` the one pushed before
    /// it, so `beneath` is the left-hand side in reading order: `-` computes
    /// `beneath - top`, `/` computes `beneath / top` and `^` computes
    /// `beneath ^ top`. Division by zero follows IEEE 754.
    ///
    /// # Example
    /// ```
    /// use notation::expression::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(2.0, 8.0), 6.0);
    /// assert_eq!(Operator::Div.apply(2.0, 8.0), 4.0);
    /// assert_eq!(Operator::Pow.apply(3.0, 2.0), 8.0);
    /// ```
    #[must_use]
    pub fn apply(self, top: f64, beneath: f64) -> f64 {
        match self {
            Self::Add => top + beneath,
            Self::Sub => beneath - top,
            Self::Mul => top * beneath,
            Self::Div => beneath / top,
            Self::Pow => beneath.powf(top),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The three bracket pairs: `( )`, `{ }` and `[ ]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `( )`
    Paren,
    /// `{ }`
    Brace,
    /// `[ ]`
    Bracket,
}

impl BracketKind {
    /// Returns the kind of an opening bracket character.
    #[must_use]
    pub const fn from_open(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::Paren),
            '{' => Some(Self::Brace),
            '[' => Some(Self::Bracket),
            _ => None,
        }
    }

    /// Returns the kind of a closing bracket character.
    #[must_use]
    pub const fn from_close(ch: char) -> Option<Self> {
        match ch {
            ')' => Some(Self::Paren),
            '}' => Some(Self::Brace),
            ']' => Some(Self::Bracket),
            _ => None,
        }
    }

    /// The opening character.
    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Brace => '{',
            Self::Bracket => '[',
        }
    }

    /// The closing character.
    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Brace => '}',
            Self::Bracket => ']',
        }
    }
}

/// Applies the operator written as `symbol` to two operands.
///
/// `top` is the more recently pushed operand, `beneath` the one under it; see
/// [`Operator::apply`] for the operand order of `-`, `/` and `^`.
///
/// # Errors
/// Returns [`NotationError::UnknownOperator`] if `symbol` is not one of
/// `+ - * / ^`.
///
/// # Example
/// ```
/// use notation::{error::NotationError, expression::operator::operate};
///
/// assert_eq!(operate(2.0, 8.0, '-'), Ok(6.0));
/// assert_eq!(operate(2.0, 8.0, '%'),
///            Err(NotationError::UnknownOperator { symbol: '%' }));
/// ```
pub fn operate(top: f64, beneath: f64, symbol: char) -> NotationResult<f64> {
    Operator::from_symbol(symbol).map(|op| op.apply(top, beneath))
                                 .ok_or(NotationError::UnknownOperator { symbol })
}
