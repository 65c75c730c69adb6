/// A binary tree node. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Payload. Nodes have no identity beyond this value.
    pub value: char,

    pub left: Option<Box<Node>>,

    pub right: Option<Box<Node>>,
}

impl Node {
    /// Create a leaf node
    pub fn new(value: char) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Set the left child (builder pattern)
    pub fn with_left(mut self, left: Node) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Set the right child (builder pattern)
    pub fn with_right(mut self, right: Node) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Check if the node is a leaf (no children)
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
