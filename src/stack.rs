use std::fmt;

use log::trace;

use crate::error::StackError;

/// A last-in, first-out container with an optional maximum size.
///
/// `Stack` is the only container the converter and evaluator use. Every
/// operation that can fail returns a [`StackError`] instead of panicking, so
/// callers can turn an empty or full stack into a notation error of their own.
///
/// A stack created with [`Stack::new`] is unbounded. A stack created with
/// [`Stack::with_capacity_limit`] refuses pushes once it holds `limit` items.
///
/// # Example
/// ```
/// use notation::{error::StackError, stack::Stack};
///
/// let mut stack = Stack::with_capacity_limit(2);
/// stack.push('(').unwrap();
/// stack.push('[').unwrap();
///
/// assert!(stack.is_full());
/// assert_eq!(stack.push('{'), Err(StackError::Overflow { limit: 2 }));
/// assert_eq!(stack.pop(), Ok('['));
/// assert_eq!(stack.peek(), Ok(&'('));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
    limit: Option<usize>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty, unbounded stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new(),
               limit: None, }
    }

    /// Creates an empty stack that holds at most `limit` items.
    #[must_use]
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self { items: Vec::with_capacity(limit.min(64)),
               limit: Some(limit), }
    }

    /// Creates an unbounded stack holding a single item.
    #[must_use]
    pub fn from_item(item: T) -> Self {
        Self { items: vec![item],
               limit: None, }
    }

    /// Creates a stack holding a single item, bounded to `limit` items.
    ///
    /// # Errors
    /// Returns [`StackError::Overflow`] if `limit` is zero.
    pub fn from_item_with_limit(item: T, limit: usize) -> Result<Self, StackError> {
        let mut stack = Self::with_capacity_limit(limit);
        stack.push(item)?;
        Ok(stack)
    }

    /// Returns the configured maximum size, or `None` for an unbounded stack.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if another push would overflow the stack.
    #[must_use]
    pub fn is_full(&self) -> bool {
        match self.limit {
            Some(limit) => self.items.len() >= limit,
            None => false,
        }
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Pushes `item` onto the top of the stack.
    ///
    /// # Errors
    /// Returns [`StackError::Overflow`] if the stack already holds its
    /// configured maximum number of items.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if let Some(limit) = self.limit
           && self.items.len() >= limit
        {
            trace!("stack overflow at {limit} items");
            return Err(StackError::Overflow { limit });
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Returns a reference to the top item without removing it.
    ///
    /// # Errors
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Underflow)
    }

    /// Pushes every item in order, so the first item ends up at the bottom.
    ///
    /// Items pushed before an overflow stay on the stack.
    ///
    /// # Errors
    /// Returns [`StackError::Overflow`] as soon as the stack is full.
    ///
    /// # Example
    /// ```
    /// use notation::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.fill([1, 2, 3]).unwrap();
    ///
    /// assert_eq!(stack.pop(), Ok(3));
    /// assert_eq!(stack.size(), 2);
    /// ```
    pub fn fill<I>(&mut self, items: I) -> Result<(), StackError>
        where I: IntoIterator<Item = T>
    {
        for item in items {
            self.push(item)?;
        }
        Ok(())
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: fmt::Display> Stack<T> {
    /// Renders the contents from bottom to top, separated by `delimiter`.
    ///
    /// # Example
    /// ```
    /// use notation::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.fill(["2", "3", "+"]).unwrap();
    ///
    /// assert_eq!(stack.render(" "), "2 3 +");
    /// ```
    #[must_use]
    pub fn render(&self, delimiter: &str) -> String {
        self.items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
