use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents the two ways a bounded or unbounded stack operation can fail.
pub enum StackError {
    /// A value was pushed onto a stack that already holds `limit` items.
    #[error("The stack is full ({limit} items). The operation may not be completed.")]
    Overflow {
        /// The configured maximum size of the stack.
        limit: usize,
    },
    /// A value was popped or peeked from an empty stack.
    #[error("The stack is empty. The operation may not be completed.")]
    Underflow,
}
