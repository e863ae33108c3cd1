use std::collections::HashMap;

use crate::{error::NotationError, stack::Stack};

/// Result type used by the converter, evaluator and validator.
///
/// All operations return either a value of type `T` or a [`NotationError`]
/// describing the failure.
pub type NotationResult<T> = Result<T, NotationError>;

/// Settings shared by every conversion and evaluation.
///
/// A `Notation` holds no state between calls: each operation builds its own
/// stacks from these settings and drops them before returning, so one value
/// can be shared freely, including across threads.
///
/// ## Usage
///
/// The free functions at the crate root use `Notation::default()`, which is
/// unbounded and binds no variables. Build a custom one to limit stack depth
/// or to give variables a value:
///
/// ```
/// use notation::expression::core::Notation;
///
/// let notation = Notation::new().with_stack_limit(16).bind('x', 4.0);
///
/// assert_eq!(notation.evaluate_infix_expression("x*(x+1)").unwrap(), 20.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notation {
    /// Maximum number of items any single stack may hold.
    pub stack_limit: Option<usize>,
    /// Values for single-letter variables, used only by evaluation.
    pub bindings:    HashMap<char, f64>,
}

impl Notation {
    /// Creates settings with unbounded stacks and no variable bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds every stack used by this `Notation` to `limit` items.
    #[must_use]
    pub fn with_stack_limit(mut self, limit: usize) -> Self {
        self.stack_limit = Some(limit);
        self
    }

    /// Binds the variable `name` to `value` for evaluation.
    #[must_use]
    pub fn bind(mut self, name: char, value: f64) -> Self {
        self.bindings.insert(name, value);
        self
    }

    /// Creates an empty stack honouring the configured limit.
    pub(crate) fn stack<T>(&self) -> Stack<T> {
        self.stack_limit.map_or_else(Stack::new, Stack::with_capacity_limit)
    }

    /// Looks up a bound variable.
    ///
    /// # Errors
    /// Returns [`NotationError::UnboundVariable`] if `name` has no value.
    pub fn variable(&self, name: char) -> NotationResult<f64> {
        self.bindings
            .get(&name)
            .copied()
            .ok_or(NotationError::UnboundVariable { name })
    }
}

/// Takes the single value left on an operand stack once an expression has
/// been consumed.
///
/// # Errors
/// - [`NotationError::StackUnderflow`] if the stack is empty.
/// - [`NotationError::ResidualOperands`] if more than one value is left.
pub(crate) fn sole_result<T>(mut operands: Stack<T>) -> NotationResult<T> {
    match operands.size() {
        1 => Ok(operands.pop()?),
        0 => Err(NotationError::StackUnderflow),
        count => Err(NotationError::ResidualOperands { count }),
    }
}
