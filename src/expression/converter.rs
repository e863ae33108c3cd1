use log::{debug, trace};

use crate::{
    error::NotationError,
    expression::{
        core::{Notation, NotationResult, sole_result},
        lexer::{Token, tokenize},
        operator::Operator,
        validator::{validate_infix, validate_postfix},
    },
    stack::Stack,
};

/// Collects postfix output while tracking how many operands are pending, so
/// an operator with too few operands or a leftover operand is caught before
/// any output is returned.
#[derive(Default)]
struct PostfixWriter {
    output:  Vec<String>,
    pending: usize,
}

impl PostfixWriter {
    fn operand(&mut self, token: &Token) {
        self.pending += 1;
        self.output.push(token.to_string());
    }

    fn operator(&mut self, op: Operator) -> NotationResult<()> {
        if self.pending < 2 {
            return Err(NotationError::StackUnderflow);
        }
        self.pending -= 1;
        self.output.push(op.to_string());
        Ok(())
    }

    fn finish(self) -> NotationResult<String> {
        match self.pending {
            1 => Ok(self.output.join(" ")),
            0 => Err(NotationError::StackUnderflow),
            count => Err(NotationError::ResidualOperands { count }),
        }
    }
}

impl Notation {
    /// Converts an infix expression to postfix.
    ///
    /// Operands are written out as soon as they are read. Operators wait on a
    /// stack until an operator that binds no tighter arrives (see
    /// [`Operator::yields_to`]); `^` and open brackets are always pushed. A
    /// close bracket flushes the stack down to its opener, and whatever is
    /// left at the end is flushed last-in first-out. Tokens in the result are
    /// separated by single spaces.
    ///
    /// # Errors
    /// - [`NotationError::EmptyExpression`], [`NotationError::InvalidCharacter`],
    ///   [`NotationError::UnbalancedDelimiters`] or
    ///   [`NotationError::SequentialOperators`] from validation.
    /// - [`NotationError::MalformedNumber`] for a literal with two points.
    /// - [`NotationError::StackUnderflow`] or
    ///   [`NotationError::ResidualOperands`] if operators and operands do not
    ///   pair up, as in `2 3`.
    /// - [`NotationError::StackOverflow`] if a stack limit is configured and
    ///   exceeded.
    ///
    /// # Example
    /// ```
    /// use notation::expression::core::Notation;
    ///
    /// let notation = Notation::new();
    ///
    /// assert_eq!(notation.convert_infix_to_postfix("(a+b)*c").unwrap(), "a b + c *");
    /// assert_eq!(notation.convert_infix_to_postfix("{1.5 - 2}^[3]").unwrap(), "1.5 2 - 3 ^");
    /// ```
    pub fn convert_infix_to_postfix(&self, infix: &str) -> NotationResult<String> {
        validate_infix(infix)?;
        let tokens = tokenize(infix)?;

        let mut writer = PostfixWriter::default();
        let mut operators: Stack<Token> = self.stack();

        for (token, offset) in tokens {
            match token {
                Token::Number(_) | Token::Variable(_) => writer.operand(&token),
                Token::Operator(op) => {
                    while let Ok(&Token::Operator(top)) = operators.peek()
                          && op.yields_to(top)
                    {
                        operators.pop()?;
                        writer.operator(top)?;
                    }
                    operators.push(token)?;
                },
                Token::OpenBracket(_) => operators.push(token)?,
                Token::CloseBracket(kind) => loop {
                    match operators.pop()? {
                        Token::Operator(top) => writer.operator(top)?,
                        Token::OpenBracket(opened) if opened == kind => break,
                        _ => {
                            return Err(NotationError::UnbalancedDelimiters { bracket: kind.close(),
                                                                             offset });
                        },
                    }
                },
            }
            trace!("operator stack: {}", operators.render(" "));
        }

        while let Ok(top) = operators.pop() {
            match top {
                Token::Operator(op) => writer.operator(op)?,
                other => {
                    return Err(NotationError::UnbalancedDelimiters { bracket: other.lead_char(),
                                                                     offset:  infix.len(), });
                },
            }
        }

        let postfix = writer.finish()?;
        debug!("infix {infix:?} -> postfix {postfix:?}");
        Ok(postfix)
    }

    /// Converts a postfix expression to infix.
    ///
    /// Each operator combines the two most recent partial expressions, the
    /// earlier one on the left. `+` and `-` results are wrapped in
    /// parentheses; `*`, `/` and `^` results are not, so a chain such as
    /// `8 2 2 / /` comes back as `8 / 2 / 2` and no longer groups the same
    /// way when read as infix.
    ///
    /// # Errors
    /// - [`NotationError::EmptyExpression`] or
    ///   [`NotationError::InvalidCharacter`] (including any bracket) from
    ///   validation.
    /// - [`NotationError::MalformedNumber`] for a literal with two points.
    /// - [`NotationError::StackUnderflow`] if an operator lacks operands.
    /// - [`NotationError::ResidualOperands`] if operands are left over.
    ///
    /// # Example
    /// ```
    /// use notation::expression::core::Notation;
    ///
    /// let notation = Notation::new();
    ///
    /// assert_eq!(notation.convert_postfix_to_infix("a b + c *").unwrap(), "(a + b) * c");
    /// assert_eq!(notation.convert_postfix_to_infix("2 3 ^").unwrap(), "2 ^ 3");
    /// ```
    pub fn convert_postfix_to_infix(&self, postfix: &str) -> NotationResult<String> {
        validate_postfix(postfix)?;
        let tokens = tokenize(postfix)?;

        let mut operands: Stack<String> = self.stack();

        for (token, offset) in tokens {
            match token {
                Token::Number(_) | Token::Variable(_) => operands.push(token.to_string())?,
                Token::Operator(op) => {
                    let top = operands.pop()?;
                    let beneath = operands.pop()?;
                    let combined = match op {
                        Operator::Add | Operator::Sub => format!("({beneath} {op} {top})"),
                        Operator::Mul | Operator::Div | Operator::Pow => {
                            format!("{beneath} {op} {top}")
                        },
                    };
                    operands.push(combined)?;
                },
                Token::OpenBracket(_) | Token::CloseBracket(_) => {
                    return Err(NotationError::InvalidCharacter { character: token.lead_char(),
                                                                 offset });
                },
            }
        }

        let infix = sole_result(operands)?;
        debug!("postfix {postfix:?} -> infix {infix:?}");
        Ok(infix)
    }
}
