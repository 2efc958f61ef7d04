use std::fmt;

/// Failure of an operation that needs a front element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` was called on an empty queue.
    EmptyDequeue,
    /// `peek` was called on an empty queue.
    EmptyPeek,
}

impl QueueError {
    /// Name of the operation that failed.
    pub fn operation(self) -> &'static str {
        match self {
            QueueError::EmptyDequeue => "dequeue",
            QueueError::EmptyPeek => "peek",
        }
    }
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyDequeue => {
                write!(f, "dequeue: attempting to dequeue an empty queue")
            }
            QueueError::EmptyPeek => write!(f, "peek: attempting to peek at an empty queue"),
        }
    }
}

impl std::error::Error for QueueError {}
