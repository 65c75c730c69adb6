use super::*;
use crate::libs::bitree::{join_path, MAX_SEQ_LEN};

#[test]
fn test_tree_build_shape() {
    //     A
    //    / \
    //   B   C
    //    \
    //     D
    let tree = Tree::from_preorder("AB#D##C##").unwrap();

    let expected = Tree::from_root(
        Node::new('A')
            .with_left(Node::new('B').with_right(Node::new('D')))
            .with_right(Node::new('C')),
    );
    assert_eq!(tree, expected);
    assert_eq!(tree.len(), 4);

    let root = tree.root().unwrap();
    assert!(!root.is_leaf());
    assert!(root.right.as_ref().unwrap().is_leaf());
}

#[test]
fn test_tree_traversals() {
    let tree = Tree::from_preorder("AB#D##C##").unwrap();

    assert_eq!(tree.height(), 3);
    assert_eq!(tree.postorder(), vec!['D', 'B', 'C', 'A']);
    assert_eq!(tree.levelorder(), vec!['A', 'B', 'C', 'D']);
}

#[test]
fn test_tree_queries() {
    let tree = Tree::from_preorder("AB#D##C##").unwrap();

    assert_eq!(tree.find_path('D'), Some(vec!['A', 'B', 'D']));
    assert_eq!(join_path(&tree.find_path('D').unwrap()), "A->B->D");
    assert_eq!(tree.find_path('A'), Some(vec!['A']));
    assert_eq!(tree.find_path('C'), Some(vec!['A', 'C']));
    assert_eq!(tree.find_path('Z'), None);

    assert_eq!(tree.node_level('A'), Some(1));
    assert_eq!(tree.node_level('C'), Some(2));
    assert_eq!(tree.node_level('D'), Some(3));
    assert_eq!(tree.node_level('Z'), None);
}

#[test]
fn test_tree_empty() {
    let tree = Tree::from_preorder("#").unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.postorder().is_empty());
    assert_eq!(tree.find_path('A'), None);
    assert_eq!(tree.node_level('#'), None);

    assert_eq!(Tree::from_preorder(""), Err(TreeError::EmptySequence));
    assert!(matches!(build::parse(""), Err(TreeError::EmptySequence)));
}

#[test]
fn test_tree_line_ending_values() {
    // line endings are ordinary node values
    let tree = Tree::from_preorder("A\n").unwrap();
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.postorder(), vec!['\n', 'A']);
    assert_eq!(tree.node_level('\n'), Some(2));
}

#[test]
fn test_tree_len() {
    assert_eq!(Tree::new().len(), 0);
    assert_eq!(Tree::from_preorder("A##").unwrap().len(), 1);
    assert_eq!(Tree::from_preorder("ABD##E##CF##G##").unwrap().len(), 7);
    // duplicates are separate nodes
    assert_eq!(Tree::from_preorder("AA#A##A##").unwrap().len(), 4);
}

#[test]
fn test_tree_single_node() {
    let tree = Tree::from_preorder("A##").unwrap();

    assert_eq!(tree.height(), 1);
    assert_eq!(tree.postorder(), vec!['A']);
    assert_eq!(tree.node_level('A'), Some(1));
}

#[test]
fn test_tree_duplicates() {
    // root A, left child A
    let tree = Tree::from_preorder("AA###").unwrap();
    assert_eq!(tree.find_path('A'), Some(vec!['A']));
    assert_eq!(tree.node_level('A'), Some(1));

    //       X
    //      / \
    //     Y   T
    //    /
    //   T
    // path search goes deep on the left, level search stays shallow
    let tree = Tree::from_preorder("XYT###T##").unwrap();
    assert_eq!(tree.find_path('T'), Some(vec!['X', 'Y', 'T']));
    assert_eq!(tree.node_level('T'), Some(2));

    // same depth in both subtrees
    let tree_dup = Tree::from_root(
        Node::new('X')
            .with_left(Node::new('Q').with_left(Node::new('K')))
            .with_right(Node::new('Q').with_right(Node::new('K'))),
    );
    assert_eq!(tree_dup.find_path('K'), Some(vec!['X', 'Q', 'K']));
    assert_eq!(tree_dup.node_level('K'), Some(3));
}

#[test]
fn test_tree_left_skewed() {
    let tree = Tree::from_preorder("ABCD#####").unwrap();

    assert_eq!(tree.height(), 4);
    assert_eq!(tree.postorder(), vec!['D', 'C', 'B', 'A']);
    assert_eq!(tree.find_path('D'), Some(vec!['A', 'B', 'C', 'D']));
    assert_eq!(tree.node_level('D'), Some(4));
}

#[test]
fn test_tree_postorder_counts_values() {
    for seq in [
        "#",
        "A##",
        "AB##C##",
        "AB#D##C##",
        "ABD##E##CF##G##",
        "A#B#C#D##",
        "12#3##4##",
    ] {
        let tree = Tree::from_preorder(seq).unwrap();
        let values = seq.chars().filter(|&c| c != '#').count();
        assert_eq!(tree.postorder().len(), values, "{}", seq);
        assert_eq!(tree.len(), values, "{}", seq);
        assert_eq!(tree.postorder(), tree.postorder(), "{}", seq);
    }
}

#[test]
fn test_tree_lenient_parse() {
    // truncated: missing children are absent
    let parsed = build::parse("AB").unwrap();
    assert!(!parsed.complete);
    assert!(!parsed.is_exact());
    assert_eq!(parsed.consumed, 2);
    assert_eq!(parsed.tree.postorder(), vec!['B', 'A']);

    // trailing tokens are ignored
    let parsed = build::parse("A##B").unwrap();
    assert!(parsed.complete);
    assert_eq!(parsed.consumed, 3);
    assert_eq!(parsed.total, 4);
    assert!(!parsed.is_exact());
    assert_eq!(parsed.tree.postorder(), vec!['A']);
}

#[test]
fn test_tree_strict_parse() {
    assert!(Tree::from_preorder_strict("AB#D##C##").is_ok());
    assert!(Tree::from_preorder_strict("#").unwrap().is_empty());

    assert_eq!(
        Tree::from_preorder_strict(""),
        Err(TreeError::EmptySequence)
    );

    match Tree::from_preorder_strict("AB#") {
        Err(TreeError::MalformedSequence { position, .. }) => assert_eq!(position, 3),
        other => panic!("unexpected result: {:?}", other),
    }

    match Tree::from_preorder_strict("A##B") {
        Err(TreeError::MalformedSequence { position, message }) => {
            assert_eq!(position, 3);
            assert!(message.contains("'B'"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_tree_too_large() {
    let seq = "#".repeat(MAX_SEQ_LEN + 1);
    assert_eq!(
        Tree::from_preorder(&seq),
        Err(TreeError::InputTooLarge {
            len: MAX_SEQ_LEN + 1,
            max: MAX_SEQ_LEN
        })
    );

    // deepest accepted input: a left spine
    let depth = MAX_SEQ_LEN / 2 - 1;
    let seq = "A".repeat(depth) + &"#".repeat(depth + 1);
    assert_eq!(seq.chars().count(), MAX_SEQ_LEN - 1);
    let tree = Tree::from_preorder_strict(&seq).unwrap();
    assert_eq!(tree.height(), depth);
    assert_eq!(tree.node_level('A'), Some(1));
}

#[test]
fn test_tree_error_display() {
    let err = TreeError::InputTooLarge { len: 3000, max: 2048 };
    assert_eq!(
        err.to_string(),
        "Preorder sequence too large: 3000 characters (max 2048)"
    );

    let err = TreeError::MalformedSequence {
        message: "sequence ended before the tree was complete".to_string(),
        position: 3,
    };
    assert!(err.to_string().starts_with("Malformed preorder sequence at position 3"));
}
