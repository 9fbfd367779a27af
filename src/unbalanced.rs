//! A plain BST. Nothing is ever rebalanced so the shape of the tree is
//! decided entirely by the order keys are added in. Adding keys in sorted
//! order degenerates into a linked list with a height of `n - 1`.
//!
//! # Examples
//!
//! ```
//! use ordtree::unbalanced::Tree;
//! use ordtree::Error;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.add(2);
//! tree.add(1);
//! tree.add(3);
//! assert_eq!(tree.inorder(), [&1, &2, &3]);
//!
//! // Adding a key that's already stored does nothing.
//! tree.add(2);
//! assert_eq!(tree.size(), 3);
//!
//! // Removing a key gives back the stored key.
//! assert_eq!(tree.remove(&2), Ok(2));
//! assert_eq!(tree.remove(&2), Err(Error::NotFound));
//! ```

use std::cmp::Ordering;

use crate::util::{self, BinaryNode};
use crate::Error;

type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree of distinct keys.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Builds a tree by adding every key in `data`, in order. Fails with
    /// [`Error::InvalidArgument`] if any of the keys is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::unbalanced::Tree;
    /// use ordtree::Error;
    ///
    /// let tree = Tree::try_from_options([Some(2), Some(1)]).unwrap();
    /// assert_eq!(tree.preorder(), [&2, &1]);
    ///
    /// assert!(matches!(
    ///     Tree::try_from_options([Some(2), None]),
    ///     Err(Error::InvalidArgument(_))
    /// ));
    /// ```
    pub fn try_from_options<I>(data: I) -> Result<Self, Error>
    where
        T: Ord,
        I: IntoIterator<Item = Option<T>>,
    {
        let mut tree = Self::new();
        util::add_all_present(data, |datum| tree.add(datum))?;
        Ok(tree)
    }

    /// Adds `data` as a new leaf. If an equal key is already stored the
    /// tree is left unchanged.
    pub fn add(&mut self, data: T)
    where
        T: Ord,
    {
        self.root = Some(Node::add(self.root.take(), data, &mut self.size));
    }

    /// Removes the key equal to `data` and returns the instance that was
    /// stored in the tree. A node with two children is replaced by its
    /// in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::unbalanced::Tree;
    /// use ordtree::Error;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.preorder(), [&7, &3, &8, &9]);
    /// assert_eq!(tree.remove(&42), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, data: &T) -> Result<T, Error>
    where
        T: Ord,
    {
        let root = self.root.take().ok_or(Error::NotFound)?;
        let (root, removed) = root.remove(data);
        self.root = root;

        let removed = removed.ok_or(Error::NotFound)?;
        self.size -= 1;
        Ok(removed)
    }

    /// Returns the stored key equal to `data`.
    pub fn get(&self, data: &T) -> Result<&T, Error>
    where
        T: Ord,
    {
        Node::find(self.root(), data).ok_or(Error::NotFound)
    }

    /// Whether a key equal to `data` is stored.
    pub fn contains(&self, data: &T) -> bool
    where
        T: Ord,
    {
        Node::find(self.root(), data).is_some()
    }

    /// Keys in pre-order: node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        util::preorder(self.root(), &mut out);
        out
    }

    /// Keys in in-order, i.e. ascending.
    pub fn inorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        util::inorder(self.root(), &mut out);
        out
    }

    /// Keys in post-order: left subtree, right subtree, node.
    pub fn postorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        util::postorder(self.root(), &mut out);
        out
    }

    /// Keys level by level, starting at the root.
    pub fn levelorder(&self) -> Vec<&T> {
        util::levelorder(self.root(), self.size)
    }

    /// The `k` largest keys in ascending order. Only the right spine and
    /// as much of the tree as is needed to collect `k` keys are visited.
    ///
    /// Fails with [`Error::InvalidArgument`] if fewer than `k` keys are stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [50, 25, 75, 12, 37, 10, 15, 40, 13].into_iter().collect();
    ///
    /// assert_eq!(tree.k_largest(5).unwrap(), [&25, &37, &40, &50, &75]);
    /// assert_eq!(tree.k_largest(3).unwrap(), [&40, &50, &75]);
    /// assert!(tree.k_largest(10).is_err());
    /// ```
    pub fn k_largest(&self, k: usize) -> Result<Vec<&T>, Error> {
        if k > self.size {
            return Err(Error::InvalidArgument(
                "there are not enough elements in the tree",
            ));
        }

        let mut largest = Vec::with_capacity(k);
        Node::collect_largest(self.root(), k, &mut largest);
        largest.reverse();
        Ok(largest)
    }

    /// The height of the tree, computed by visiting every node. A single
    /// node has a height of 0 and an empty tree has a height of -1.
    pub fn height(&self) -> isize {
        Node::height(self.root())
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// The number of keys stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.add(data);
        }
    }
}

/// A `Node` owns one key and its two (possibly empty) subtrees.
#[derive(Clone, Debug)]
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> BinaryNode for Node<T> {
    type Data = T;

    fn data(&self) -> &T {
        &self.data
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adds `data` below `link` and returns the subtree root to store back
    /// into `link`. `size` is bumped only when a new leaf is created.
    fn add(link: Link<T>, data: T, size: &mut usize) -> Box<Self>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            *size += 1;
            return Self::new_boxed(data);
        };

        match data.cmp(&node.data) {
            Ordering::Less => node.left = Some(Self::add(node.left.take(), data, size)),
            Ordering::Equal => {}
            Ordering::Greater => node.right = Some(Self::add(node.right.take(), data, size)),
        }

        if cfg!(debug_assertions) {
            if let Some(left) = node.left() {
                assert!(node.data > left.data);
            }
            if let Some(right) = node.right() {
                assert!(node.data < right.data);
            }
        }
        node
    }

    fn find<'a>(node: Option<&'a Self>, data: &T) -> Option<&'a T>
    where
        T: Ord,
    {
        let node = node?;
        match data.cmp(&node.data) {
            Ordering::Less => Self::find(node.left(), data),
            Ordering::Equal => Some(&node.data),
            Ordering::Greater => Self::find(node.right(), data),
        }
    }

    /// Removes `data` from the subtree rooted here. Returns the new subtree
    /// root along with the stored key if one was removed. When nothing
    /// matches, the subtree comes back untouched.
    fn remove(mut self: Box<Self>, data: &T) -> (Link<T>, Option<T>)
    where
        T: Ord,
    {
        match data.cmp(&self.data) {
            Ordering::Less => {
                let Some(left) = self.left.take() else {
                    return (Some(self), None);
                };
                let (left, removed) = left.remove(data);
                self.left = left;
                (Some(self), removed)
            }
            Ordering::Greater => {
                let Some(right) = self.right.take() else {
                    return (Some(self), None);
                };
                let (right, removed) = right.remove(data);
                self.right = right;
                (Some(self), removed)
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, None) => (None, Some(self.data)),
                (Some(child), None) | (None, Some(child)) => (Some(child), Some(self.data)),
                (Some(left), Some(right)) => {
                    let (right, successor) = right.remove_smallest();
                    let removed = std::mem::replace(&mut self.data, successor);
                    self.left = Some(left);
                    self.right = right;
                    (Some(self), Some(removed))
                }
            },
        }
    }

    /// Detaches the leftmost node of this subtree. Returns what is left of
    /// the subtree and the detached key.
    fn remove_smallest(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            Some(left) => {
                let (left, smallest) = left.remove_smallest();
                self.left = left;
                (Some(self), smallest)
            }
            None => {
                let Self { data, right, .. } = *self;
                (right, data)
            }
        }
    }

    /// Reverse in-order walk that stops once `k` keys have been pushed.
    fn collect_largest<'a>(node: Option<&'a Self>, k: usize, out: &mut Vec<&'a T>) {
        let Some(node) = node else {
            return;
        };

        Self::collect_largest(node.right(), k, out);
        if out.len() < k {
            out.push(&node.data);
            Self::collect_largest(node.left(), k, out);
        }
    }

    fn height(node: Option<&Self>) -> isize {
        node.map_or(-1, |n| Self::height(n.left()).max(Self::height(n.right())) + 1)
    }
}
