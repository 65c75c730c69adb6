use crate::libs::bitree::node::Node;
use std::collections::VecDeque;

/// Node values in postorder traversal (Left -> Right -> Root)
pub fn postorder(root: Option<&Node>) -> Vec<char> {
    fn helper(node: Option<&Node>, result: &mut Vec<char>) {
        if let Some(node) = node {
            helper(node.left.as_deref(), result);
            helper(node.right.as_deref(), result);
            result.push(node.value);
        }
    }

    let mut result = Vec::new();
    helper(root, &mut result);
    result
}

/// Node values in levelorder traversal (BFS, left child before right)
pub fn levelorder(root: Option<&Node>) -> Vec<char> {
    let mut result = Vec::new();
    let mut queue = VecDeque::new();
    if let Some(root) = root {
        queue.push_back(root);
    }

    while let Some(node) = queue.pop_front() {
        result.push(node.value);
        let children = [node.left.as_deref(), node.right.as_deref()];
        for child in children.into_iter().flatten() {
            queue.push_back(child);
        }
    }

    result
}
