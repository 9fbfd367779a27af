//! Plumbing shared by both tree variants: the traversals only depend on a
//! node's data and children, so they are written once against [`BinaryNode`].

use std::collections::VecDeque;

use crate::Error;

/// A node holding one key and up to two owned children.
pub(crate) trait BinaryNode {
    type Data;

    fn data(&self) -> &Self::Data;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Node, then left subtree, then right subtree.
pub(crate) fn preorder<'a, N: BinaryNode>(node: Option<&'a N>, out: &mut Vec<&'a N::Data>) {
    if let Some(node) = node {
        out.push(node.data());
        preorder(node.left(), out);
        preorder(node.right(), out);
    }
}

/// Left subtree, then node, then right subtree. Yields keys in ascending order.
pub(crate) fn inorder<'a, N: BinaryNode>(node: Option<&'a N>, out: &mut Vec<&'a N::Data>) {
    if let Some(node) = node {
        inorder(node.left(), out);
        out.push(node.data());
        inorder(node.right(), out);
    }
}

/// Left subtree, then right subtree, then node.
pub(crate) fn postorder<'a, N: BinaryNode>(node: Option<&'a N>, out: &mut Vec<&'a N::Data>) {
    if let Some(node) = node {
        postorder(node.left(), out);
        postorder(node.right(), out);
        out.push(node.data());
    }
}

/// Breadth first, root first, each level from left to right.
pub(crate) fn levelorder<'a, N: BinaryNode>(
    root: Option<&'a N>,
    capacity: usize,
) -> Vec<&'a N::Data> {
    let mut out = Vec::with_capacity(capacity);
    let mut queue = VecDeque::new();
    queue.extend(root);

    while let Some(node) = queue.pop_front() {
        out.push(node.data());
        queue.extend(node.left());
        queue.extend(node.right());
    }

    out
}

/// Feeds every key to `add` in order, stopping at the first missing one.
pub(crate) fn add_all_present<T>(
    data: impl IntoIterator<Item = Option<T>>,
    mut add: impl FnMut(T),
) -> Result<(), Error> {
    for datum in data {
        let datum = datum.ok_or(Error::InvalidArgument("a value in the data is missing"))?;
        add(datum);
    }
    Ok(())
}
