use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The preorder sequence has no tokens at all
    EmptySequence,
    /// The preorder sequence is longer than the accepted maximum
    InputTooLarge {
        /// Length of the rejected input, in characters
        len: usize,
        /// The accepted maximum
        max: usize,
    },
    /// The preorder sequence does not describe exactly one tree
    MalformedSequence {
        /// A human-readable message explaining the error
        message: String,
        /// The token position (0-based) where the problem was detected
        position: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::EmptySequence => write!(f, "Empty preorder sequence"),
            TreeError::InputTooLarge { len, max } => write!(
                f,
                "Preorder sequence too large: {} characters (max {})",
                len, max
            ),
            TreeError::MalformedSequence { message, position } => write!(
                f,
                "Malformed preorder sequence at position {}: {}",
                position, message
            ),
        }
    }
}

impl std::error::Error for TreeError {}
