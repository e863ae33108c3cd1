use log::{debug, trace};

use crate::{
    error::NotationError,
    expression::{
        core::{Notation, NotationResult, sole_result},
        lexer::{Token, tokenize},
        operator::{BracketKind, Operator},
        validator::{validate_infix, validate_postfix},
    },
    stack::Stack,
};

/// What the infix evaluator keeps on its operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    Open(BracketKind),
}

/// Pops the top two operands, applies `op` and pushes the result.
fn reduce(operands: &mut Stack<f64>, op: Operator) -> NotationResult<()> {
    let top = operands.pop()?;
    let beneath = operands.pop()?;
    let result = op.apply(top, beneath);
    trace!("{beneath} {op} {top} = {result}");
    operands.push(result)?;
    Ok(())
}

impl Notation {
    /// Evaluates an infix expression.
    ///
    /// Works like [`Notation::convert_infix_to_postfix`] with a second stack
    /// for operands: wherever the converter would write an operator out, the
    /// evaluator instead pops two operands, applies the operator and pushes the
    /// result. Variables take their bound values.
    ///
    /// # Errors
    /// - Any validation error, as for conversion.
    /// - [`NotationError::MalformedNumber`] for a literal with two points.
    /// - [`NotationError::UnboundVariable`] for a variable without a value.
    /// - [`NotationError::StackUnderflow`] or
    ///   [`NotationError::ResidualOperands`] if operators and operands do not
    ///   pair up.
    /// - [`NotationError::StackOverflow`] if a stack limit is exceeded.
    ///
    /// # Example
    /// ```
    /// use notation::expression::core::Notation;
    ///
    /// let notation = Notation::new();
    ///
    /// assert_eq!(notation.evaluate_infix_expression("2+3*4").unwrap(), 14.0);
    /// assert_eq!(notation.evaluate_infix_expression("[10 - 4] / {1.5}").unwrap(), 4.0);
    /// ```
    pub fn evaluate_infix_expression(&self, infix: &str) -> NotationResult<f64> {
        validate_infix(infix)?;
        let tokens = tokenize(infix)?;

        let mut operators: Stack<Pending> = self.stack();
        let mut operands: Stack<f64> = self.stack();

        for (token, offset) in tokens {
            match token {
                Token::Number(literal) => operands.push(literal.value.into_inner())?,
                Token::Variable(name) => operands.push(self.variable(name)?)?,
                Token::Operator(op) => {
                    while let Ok(&Pending::Operator(top)) = operators.peek()
                          && op.yields_to(top)
                    {
                        operators.pop()?;
                        reduce(&mut operands, top)?;
                    }
                    operators.push(Pending::Operator(op))?;
                },
                Token::OpenBracket(kind) => operators.push(Pending::Open(kind))?,
                Token::CloseBracket(kind) => loop {
                    match operators.pop()? {
                        Pending::Operator(top) => reduce(&mut operands, top)?,
                        Pending::Open(opened) if opened == kind => break,
                        Pending::Open(_) => {
                            return Err(NotationError::UnbalancedDelimiters { bracket: kind.close(),
                                                                             offset });
                        },
                    }
                },
            }
        }

        while let Ok(top) = operators.pop() {
            match top {
                Pending::Operator(op) => reduce(&mut operands, op)?,
                Pending::Open(kind) => {
                    return Err(NotationError::UnbalancedDelimiters { bracket: kind.open(),
                                                                     offset:  infix.len(), });
                },
            }
        }

        let value = sole_result(operands)?;
        debug!("infix {infix:?} = {value}");
        Ok(value)
    }

    /// Evaluates a postfix expression.
    ///
    /// Operands are pushed as they are read. Each operator pops the most
    /// recent value and the one beneath it and pushes
    /// [`Operator::apply`]`(top, beneath)`, so `8 2 -` is `6` and `8 2 /` is
    /// `4`.
    ///
    /// # Errors
    /// - [`NotationError::EmptyExpression`] or
    ///   [`NotationError::InvalidCharacter`] (including any bracket).
    /// - [`NotationError::MalformedNumber`] for a literal with two points.
    /// - [`NotationError::UnboundVariable`] for a variable without a value.
    /// - [`NotationError::StackUnderflow`] if an operator lacks operands.
    /// - [`NotationError::ResidualOperands`] if values are left over.
    ///
    /// # Example
    /// ```
    /// use notation::{error::NotationError, expression::core::Notation};
    ///
    /// let notation = Notation::new();
    ///
    /// assert_eq!(notation.evaluate_postfix_expression("2 3 4 * +").unwrap(), 14.0);
    /// assert_eq!(notation.evaluate_postfix_expression("2 3"),
    ///            Err(NotationError::ResidualOperands { count: 2 }));
    /// ```
    pub fn evaluate_postfix_expression(&self, postfix: &str) -> NotationResult<f64> {
        validate_postfix(postfix)?;
        let tokens = tokenize(postfix)?;

        let mut operands: Stack<f64> = self.stack();

        for (token, offset) in tokens {
            match token {
                Token::Number(literal) => operands.push(literal.value.into_inner())?,
                Token::Variable(name) => operands.push(self.variable(name)?)?,
                Token::Operator(op) => reduce(&mut operands, op)?,
                Token::OpenBracket(_) | Token::CloseBracket(_) => {
                    return Err(NotationError::InvalidCharacter { character: token.lead_char(),
                                                                 offset });
                },
            }
        }

        let value = sole_result(operands)?;
        debug!("postfix {postfix:?} = {value}");
        Ok(value)
    }
}
