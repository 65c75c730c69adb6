use super::error::TreeError;
use super::tree::Tree;
use super::MAX_SEQ_LEN;
use anyhow::Context;
use std::io::Read;

/// Read the raw preorder sequence stored in a tree file.
///
/// The content ends at the first NUL byte, if any; every other byte,
/// line endings included, is part of the sequence. Oversized content is an
/// error, never truncated.
///
/// # Arguments
/// * `infile` - Path to the tree file (or "stdin" for stdin).
pub fn load_preorder(infile: &str) -> anyhow::Result<String> {
    let mut reader = crate::libs::io::reader(infile)?;
    let mut preorder = String::new();
    reader
        .read_to_string(&mut preorder)
        .with_context(|| format!("Cannot read tree file {}", infile))?;

    if let Some(end) = preorder.find('\0') {
        preorder.truncate(end);
    }

    let chars = preorder.chars().count();
    if chars > MAX_SEQ_LEN {
        return Err(TreeError::InputTooLarge {
            len: chars,
            max: MAX_SEQ_LEN,
        }
        .into());
    }
    log::debug!("Loaded {} characters from {}", chars, infile);

    Ok(preorder)
}

/// Rebuild the tree stored in a tree file.
///
/// An empty file holds the empty tree.
///
/// # Example
/// ```
/// use bitree::libs::bitree::reader;
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = dir.path().join("tree_data.tmp");
/// std::fs::write(&file, "AB#D##C##").unwrap();
///
/// let tree = reader::from_file(file.to_str().unwrap()).unwrap();
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.postorder(), vec!['D', 'B', 'C', 'A']);
///
/// std::fs::write(&file, "").unwrap();
/// assert!(reader::from_file(file.to_str().unwrap()).unwrap().is_empty());
/// ```
pub fn from_file(infile: &str) -> anyhow::Result<Tree> {
    let preorder = load_preorder(infile)?;
    let tree = if preorder.is_empty() {
        Tree::new()
    } else {
        Tree::from_preorder(&preorder)?
    };
    log::debug!("Rebuilt tree with {} nodes", tree.len());

    Ok(tree)
}
