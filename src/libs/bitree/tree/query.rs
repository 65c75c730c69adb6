use crate::libs::bitree::node::Node;
use std::collections::VecDeque;

/// Number of nodes on the longest root-to-leaf path. The empty tree has
/// height 0.
pub fn height(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + height(n.left.as_deref()).max(height(n.right.as_deref())),
    }
}

/// Number of nodes in the subtree.
pub fn count(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + count(n.left.as_deref()) + count(n.right.as_deref()),
    }
}

/// Values from the root down to the first node holding `target`.
///
/// Depth-first: a node is checked before its children, and the left
/// subtree is exhausted before the right one is entered.
pub fn find_path(root: Option<&Node>, target: char) -> Option<Vec<char>> {
    fn dfs(node: Option<&Node>, target: char, path: &mut Vec<char>) -> bool {
        let node = match node {
            Some(n) => n,
            None => return false,
        };

        path.push(node.value);
        if node.value == target
            || dfs(node.left.as_deref(), target, path)
            || dfs(node.right.as_deref(), target, path)
        {
            return true;
        }
        path.pop();

        false
    }

    let mut path = Vec::new();
    if dfs(root, target, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// Level (root = 1) of the first node holding `target` in breadth-first
/// order, i.e. the shallowest and, among those, the leftmost.
pub fn node_level(root: Option<&Node>, target: char) -> Option<usize> {
    let mut queue = VecDeque::new();
    if let Some(root) = root {
        queue.push_back((root, 1));
    }

    while let Some((node, level)) = queue.pop_front() {
        if node.value == target {
            return Some(level);
        }
        let children = [node.left.as_deref(), node.right.as_deref()];
        for child in children.into_iter().flatten() {
            queue.push_back((child, level + 1));
        }
    }

    None
}
