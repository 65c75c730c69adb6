use super::Tree;
use crate::libs::bitree::error::TreeError;
use crate::libs::bitree::node::Node;
use crate::libs::bitree::{MAX_SEQ_LEN, SENTINEL};

/// Outcome of a lenient preorder parse.
#[derive(Debug, Clone)]
pub struct Preorder {
    pub tree: Tree,
    /// Number of tokens used by the tree
    pub consumed: usize,
    /// Total number of tokens in the input
    pub total: usize,
    /// False if the input ran out while subtrees were still expected
    pub complete: bool,
}

impl Preorder {
    /// True when the input describes exactly one tree, with nothing missing
    /// and nothing left over.
    pub fn is_exact(&self) -> bool {
        self.complete && self.consumed == self.total
    }
}

struct Cursor {
    tokens: Vec<char>,
    pos: usize,
    complete: bool,
}

impl Cursor {
    fn next_subtree(&mut self) -> Option<Box<Node>> {
        let token = match self.tokens.get(self.pos) {
            Some(&t) => t,
            None => {
                // end of input reads as an absent child
                self.complete = false;
                return None;
            }
        };
        self.pos += 1;

        if token == SENTINEL {
            return None;
        }

        let mut node = Node::new(token);
        node.left = self.next_subtree();
        node.right = self.next_subtree();
        Some(Box::new(node))
    }
}

/// Parse a preorder sequence, left subtree before right.
///
/// An empty string is rejected; `#` is the empty tree. The length check
/// also bounds the recursion depth.
///
/// ```
/// use bitree::libs::bitree::tree::build::parse;
///
/// let parsed = parse("AB#D##C##").unwrap();
/// assert_eq!(parsed.consumed, 9);
/// assert!(parsed.is_exact());
///
/// let parsed = parse("AB").unwrap();
/// assert!(!parsed.complete);
/// assert_eq!(parsed.tree.len(), 2);
/// ```
pub fn parse(seq: &str) -> Result<Preorder, TreeError> {
    if seq.is_empty() {
        return Err(TreeError::EmptySequence);
    }

    let tokens: Vec<char> = seq.chars().collect();
    if tokens.len() > MAX_SEQ_LEN {
        return Err(TreeError::InputTooLarge {
            len: tokens.len(),
            max: MAX_SEQ_LEN,
        });
    }

    let total = tokens.len();
    let mut cursor = Cursor {
        tokens,
        pos: 0,
        complete: true,
    };
    let root = cursor.next_subtree();

    Ok(Preorder {
        tree: Tree { root },
        consumed: cursor.pos,
        total,
        complete: cursor.complete,
    })
}

/// Parse a preorder sequence that must describe exactly one tree.
pub fn parse_strict(seq: &str) -> Result<Tree, TreeError> {
    let parsed = parse(seq)?;
    if !parsed.complete {
        return Err(TreeError::MalformedSequence {
            message: "sequence ended before the tree was complete".to_string(),
            position: parsed.total,
        });
    }
    if parsed.consumed < parsed.total {
        let extra = seq.chars().nth(parsed.consumed).unwrap_or(SENTINEL);
        return Err(TreeError::MalformedSequence {
            message: format!("unexpected token '{}' after the tree was complete", extra),
            position: parsed.consumed,
        });
    }

    Ok(parsed.tree)
}
