pub mod build;
pub mod query;
#[cfg(test)]
pub mod tests;
pub mod traversal;

use super::error::TreeError;
use super::node::Node;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tree {
    /// `None` for the empty tree (preorder `#`)
    pub(super) root: Option<Box<Node>>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already assembled node hierarchy
    pub fn from_root(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Get the root node
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Get number of nodes
    pub fn len(&self) -> usize {
        query::count(self.root())
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    // --- Delegation to build ---

    /// Build a tree from a preorder sequence, `#` marking absent children.
    /// Missing tokens are treated as absent children and tokens after a
    /// complete tree are ignored. The empty string is an error.
    pub fn from_preorder(seq: &str) -> Result<Tree, TreeError> {
        Ok(build::parse(seq)?.tree)
    }

    /// Like [`Tree::from_preorder`], but rejects sequences that do not
    /// describe exactly one tree.
    pub fn from_preorder_strict(seq: &str) -> Result<Tree, TreeError> {
        build::parse_strict(seq)
    }

    // --- Delegation to traversal ---

    pub fn postorder(&self) -> Vec<char> {
        traversal::postorder(self.root())
    }

    pub fn levelorder(&self) -> Vec<char> {
        traversal::levelorder(self.root())
    }

    // --- Delegation to query ---

    pub fn height(&self) -> usize {
        query::height(self.root())
    }

    pub fn find_path(&self, target: char) -> Option<Vec<char>> {
        query::find_path(self.root(), target)
    }

    pub fn node_level(&self, target: char) -> Option<usize> {
        query::node_level(self.root(), target)
    }
}
