pub mod error;
pub mod node;
pub mod reader;
pub mod tree;

pub use error::TreeError;
pub use node::Node;
pub use tree::Tree;

/// Token marking an absent child in a preorder sequence.
pub const SENTINEL: char = '#';

/// Largest accepted preorder sequence, in characters.
pub const MAX_SEQ_LEN: usize = 2048;

/// Separator between node values when a path is rendered.
pub const PATH_DELIMITER: &str = "->";

/// Side file written by `build` when no other name is given.
pub const DEFAULT_TREE_FILE: &str = "tree_data.tmp";

/// Renders a root-to-node path, e.g. `A->B->D`.
///
/// ```
/// assert_eq!(bitree::libs::bitree::join_path(&['A', 'B', 'D']), "A->B->D");
/// assert_eq!(bitree::libs::bitree::join_path(&['A']), "A");
/// ```
pub fn join_path(path: &[char]) -> String {
    path.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(PATH_DELIMITER)
}
