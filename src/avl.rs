//! A self-balancing BST (specifically, an AVL tree). Every node caches its
//! height and balance factor, and after every add or remove the nodes on
//! the affected path are rotated back into balance on the way back up.
//! This keeps the height of the tree in `O(lg N)` regardless of the order
//! keys are added in.
//!
//! # Examples
//!
//! ```
//! use ordtree::avl::Tree;
//! use ordtree::Error;
//!
//! let mut tree = Tree::new();
//!
//! // Adding in ascending order would make a plain BST into a list...
//! tree.add(10);
//! tree.add(20);
//! tree.add(30);
//!
//! // ...but here 20 gets rotated up to be the root.
//! assert_eq!(tree.root().map(|n| *n.data()), Some(20));
//! assert_eq!(tree.height(), 1);
//!
//! assert_eq!(tree.sorted_in_between(&10, &30), Ok(vec![&20]));
//! assert_eq!(tree.remove(&20), Ok(20));
//! assert_eq!(tree.get(&20), Err(Error::NotFound));
//! ```

use std::cmp::Ordering;

use crate::util::{self, BinaryNode};
use crate::Error;

type Link<T> = Option<Box<Node<T>>>;

/// An AVL tree of distinct keys.
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
    pub fn try_from_options<I>(data: I) -> Result<Self, Error>
    where
        T: Ord,
        I: IntoIterator<Item = Option<T>>,
    {
        let mut tree = Self::new();
        util::add_all_present(data, |datum| tree.add(datum))?;
        Ok(tree)
    }

    /// Adds `data` to the tree, rebalancing as needed. If an equal key is
    /// already stored the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(3);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// // Left-right case: 2 is rotated up above both.
    /// assert_eq!(tree.preorder(), [&2, &1, &3]);
    ///
    /// tree.add(2);
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn add(&mut self, data: T)
    where
        T: Ord,
    {
        self.root = Some(Node::add(self.root.take(), data, &mut self.size));
    }

    /// Removes the key equal to `data` and returns the instance that was
    /// stored in the tree. A node with two children is replaced by its
    /// in-order successor. Every node on the path is rebalanced, including
    /// the ones visited while detaching the successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    /// use ordtree::Error;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    ///
    /// assert_eq!(tree.remove(&4), Ok(4));
    /// assert_eq!(tree.root().map(|n| *n.data()), Some(5));
    /// assert_eq!(tree.remove(&4), Err(Error::NotFound));
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

    /// Keys in ascending order.
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

    /// Every key lying on a path of maximum depth from the root, in
    /// pre-order. When both subtrees of a node are equally tall both hold a
    /// deepest branch, so the left one is listed first and then the right.
    /// Shorter subtrees are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    ///
    /// //          2
    /// //        /   \
    /// //       1     4
    /// //            / \
    /// //           3   5
    /// let tree: Tree<_> = [2, 1, 4, 3, 5].into_iter().collect();
    ///
    /// assert_eq!(tree.deepest_branches(), [&2, &4, &3, &5]);
    /// ```
    pub fn deepest_branches(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        Node::collect_deepest(self.root(), &mut out);
        out
    }

    /// Every stored key strictly greater than `low` and strictly less than
    /// `high`, in ascending order. Subtrees that can't hold such a key are
    /// skipped.
    ///
    /// Fails with [`Error::InvalidArgument`] if `low > high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    ///
    /// let tree: Tree<_> = (0..10).collect();
    ///
    /// assert_eq!(tree.sorted_in_between(&3, &7).unwrap(), [&4, &5, &6]);
    /// assert!(tree.sorted_in_between(&4, &4).unwrap().is_empty());
    /// assert!(tree.sorted_in_between(&7, &3).is_err());
    /// ```
    pub fn sorted_in_between(&self, low: &T, high: &T) -> Result<Vec<&T>, Error>
    where
        T: Ord,
    {
        if low > high {
            return Err(Error::InvalidArgument(
                "the lower bound cannot be greater than the upper bound",
            ));
        }

        let mut out = Vec::new();
        Node::collect_between(self.root(), low, high, &mut out);
        Ok(out)
    }

    /// The height of the root, read from its cache. A single node has a
    /// height of 0 and an empty tree has a height of -1.
    pub fn height(&self) -> isize {
        height(&self.root)
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

fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}

/// A `Node` owns one key and its two (possibly empty) subtrees, and caches
/// the shape of the subtree it roots.
#[derive(Clone, Debug)]
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,

    /// How many edges are on the longest path from this node down to a
    /// leaf. A node with no children has a height of 0.
    height: isize,
    /// Height of the left subtree minus height of the right subtree.
    balance_factor: isize,
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
            height: 0,
            balance_factor: 0,
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

    /// The cached height of the subtree rooted here.
    pub fn height(&self) -> isize {
        self.height
    }

    /// The cached difference between the left and right subtree heights.
    /// Always in `-1..=1` between operations.
    pub fn balance_factor(&self) -> isize {
        self.balance_factor
    }

    /// Adds `data` below `link` and returns the (possibly rotated) subtree
    /// root to store back into `link`. `size` is bumped only when a new leaf
    /// is created.
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
            Ordering::Equal => return node,
            Ordering::Greater => node.right = Some(Self::add(node.right.take(), data, size)),
        }

        node.balance()
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
    /// matches no node's shape changed, so the subtree comes back untouched
    /// without rebalancing.
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
                match removed {
                    Some(removed) => (Some(self.balance()), Some(removed)),
                    None => (Some(self), None),
                }
            }
            Ordering::Greater => {
                let Some(right) = self.right.take() else {
                    return (Some(self), None);
                };
                let (right, removed) = right.remove(data);
                self.right = right;
                match removed {
                    Some(removed) => (Some(self.balance()), Some(removed)),
                    None => (Some(self), None),
                }
            }
            // A lone child of an AVL node is a leaf, so it can take our place
            // without any rebalancing.
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, None) => (None, Some(self.data)),
                (Some(child), None) | (None, Some(child)) => (Some(child), Some(self.data)),
                (Some(left), Some(right)) => {
                    let (right, successor) = right.remove_smallest();
                    let removed = std::mem::replace(&mut self.data, successor);
                    self.left = Some(left);
                    self.right = right;
                    (Some(self.balance()), Some(removed))
                }
            },
        }
    }

    /// Detaches the leftmost node of this subtree, rebalancing every node
    /// on the way back up. Returns what is left of the subtree and the
    /// detached key.
    fn remove_smallest(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            Some(left) => {
                let (left, smallest) = left.remove_smallest();
                self.left = left;
                (Some(self.balance()), smallest)
            }
            None => {
                let Self { data, right, .. } = *self;
                (right, data)
            }
        }
    }

    /// Recomputes the cached height and balance factor from the children,
    /// which must already be up to date.
    fn update(&mut self) {
        let left_height = height(&self.left);
        let right_height = height(&self.right);

        self.height = left_height.max(right_height) + 1;
        self.balance_factor = left_height - right_height;
    }

    /// Restores the AVL invariant at this node after one of its subtrees
    /// changed height by at most one. Returns the new subtree root.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        self.update();

        let new_root = if self.balance_factor > 1 {
            // Left-right case: straighten the left child out first.
            if self.left.as_ref().is_some_and(|left| left.balance_factor < 0) {
                self.left = self.left.take().map(Self::rotate_left);
            }
            self.rotate_right()
        } else if self.balance_factor < -1 {
            // Right-left case.
            if self.right.as_ref().is_some_and(|right| right.balance_factor > 0) {
                self.right = self.right.take().map(Self::rotate_right);
            }
            self.rotate_left()
        } else {
            self
        };

        if cfg!(debug_assertions) {
            let left_height = height(&new_root.left);
            let right_height = height(&new_root.right);
            assert_eq!(new_root.height, left_height.max(right_height) + 1);
            assert_eq!(new_root.balance_factor, left_height - right_height);
            assert!(new_root.balance_factor.abs() <= 1);
        }
        new_root
    }

    /// Rotates self to the right. This moves the left child up vertically
    /// and self down vertically. Used to rebalance the tree when the left
    /// child is too tall, so a node without a left child is returned as is.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    old_root (i.e. "self")    new_root
    ///     /     \                  /     \
    ///  new_root  z     rotate ->  x    old_root
    ///   / \                               /  \
    ///  x   y                             y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };

        self.left = new_root.right.take();
        self.update();

        new_root.right = Some(self);
        new_root.update();
        new_root
    }

    /// Rotates self to the left. The mirror image of [`Node::rotate_right`]:
    /// the right child moves up and its left subtree becomes self's right
    /// subtree.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };

        self.right = new_root.left.take();
        self.update();

        new_root.left = Some(self);
        new_root.update();
        new_root
    }

    /// Pre-order walk that only descends into the taller child, or into
    /// both when they are the same height.
    fn collect_deepest<'a>(node: Option<&'a Self>, out: &mut Vec<&'a T>) {
        let Some(node) = node else {
            return;
        };

        out.push(&node.data);
        match node.balance_factor.cmp(&0) {
            Ordering::Greater => Self::collect_deepest(node.left(), out),
            Ordering::Less => Self::collect_deepest(node.right(), out),
            Ordering::Equal => {
                Self::collect_deepest(node.left(), out);
                Self::collect_deepest(node.right(), out);
            }
        }
    }

    /// In-order walk restricted to the open interval `(low, high)`.
    fn collect_between<'a>(node: Option<&'a Self>, low: &T, high: &T, out: &mut Vec<&'a T>)
    where
        T: Ord,
    {
        let Some(node) = node else {
            return;
        };

        if node.data <= *low {
            Self::collect_between(node.right(), low, high, out);
        } else if node.data >= *high {
            Self::collect_between(node.left(), low, high, out);
        } else {
            Self::collect_between(node.left(), low, high, out);
            out.push(&node.data);
            Self::collect_between(node.right(), low, high, out);
        }
    }
}
