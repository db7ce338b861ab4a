//! An unbalanced BST over a set of keys. Every node is owned by exactly one link: the root by the
//! `OrderedTree` and every other node by its parent. Dropping a link drops the whole subtree.
//!
//! Nothing in here recurses. Walks are loops over `&mut` links (or explicit stacks for
//! iteration and teardown) so a tree that degenerates into a list, e.g. after ascending inserts,
//! never runs the call stack dry.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.to_string(), "20 30 40 50 60 70 80");
//!
//! assert!(tree.search(&40));
//! assert!(!tree.search(&25));
//!
//! // Removing a key keeps everything else in order.
//! tree.remove(&30);
//! assert_eq!(tree.to_string(), "20 40 50 60 70 80");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use tracing::trace;

/// An owned, possibly empty, child slot.
type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced Binary Search Tree holding unique keys. It can be used for inserting, searching
/// and removing keys and for walking them in ascending order.
///
/// Two trees compare equal when they have the same shape and the same keys, so the same set of
/// keys inserted in different orders may give unequal trees.
pub struct OrderedTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for OrderedTree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Clone for OrderedTree<K>
where
    K: Clone,
{
    // Each stack entry pairs a node to copy with the empty link its copy goes into.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut stack: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
        stack.extend(self.root.as_deref().map(|node| (node, &mut root)));
        while let Some((node, link)) = stack.pop() {
            let copy = link.insert(Node::new_boxed(node.key.clone()));
            let Node { left, right, .. } = &mut **copy;
            stack.extend(node.left.as_deref().map(|l| (l, left)));
            stack.extend(node.right.as_deref().map(|r| (r, right)));
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> PartialEq for OrderedTree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut stack = vec![(self.root.as_deref(), other.root.as_deref())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    stack.push((a.left.as_deref(), b.left.as_deref()));
                    stack.push((a.right.as_deref(), b.right.as_deref()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl<K> Eq for OrderedTree<K> where K: Eq {}

impl<K> OrderedTree<K> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key` unless an equal key is already stored. Returns whether the key was added.
    /// An equal key already in the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let link = Self::locate(&mut self.root, &key);
        if link.is_some() {
            trace!(len = self.len, "key already present");
            return false;
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
        trace!(len = self.len, "inserted key");
        true
    }

    /// Returns whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Removes `key` from the tree. Returns whether it was present; removing a missing key
    /// changes nothing.
    ///
    /// A node with two children is not unlinked itself. It takes over the key of its in-order
    /// successor (the smallest key of its right subtree) and the successor's node is unlinked
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_string(), "1 3");
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let link = Self::locate(&mut self.root, key);
        let node = match link.take() {
            Some(node) => node,
            None => return false,
        };

        *link = Self::splice(node);
        self.len -= 1;
        true
    }

    /// An in-order walk of the keys, smallest first. Every call starts a fresh walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse().collect::<Vec<_>>(), [&30, &50, &70]);
    /// assert_eq!(tree.traverse().count(), 3);
    /// ```
    pub fn traverse(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has height
    /// 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        let mut level: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }

        height
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Some(&node.key)
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Some(&node.key)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Returns the link holding `key`, or the empty link where `key` belongs.
    fn locate<'a>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
    where
        K: Ord,
    {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return link,
            };
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    /// Returns the subtree that takes the place of `node` once its key is gone.
    fn splice(mut node: Box<Node<K>>) -> Link<K>
    where
        K: Ord,
    {
        if node.left.is_none() {
            trace!("removed node without left child");
            return node.right.take();
        }

        match Self::pop_min(&mut node.right) {
            Some(successor) => {
                trace!("removed node with two children, promoted its successor");
                node.key = successor;
                debug_assert!(node.left.as_ref().map_or(true, |l| l.key < node.key));
                debug_assert!(node.right.as_ref().map_or(true, |r| r.key > node.key));
                Some(node)
            }
            None => {
                trace!("removed node without right child");
                node.left.take()
            }
        }
    }

    /// Unlinks the smallest node under `link`, leaving its right child in its place, and returns
    /// its key. `None` when `link` is empty.
    fn pop_min(mut link: &mut Link<K>) -> Option<K> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let min = link.take()?;
        let Node { key, right, .. } = *min;
        *link = right;
        Some(key)
    }
}

impl<K> fmt::Debug for OrderedTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.traverse()).finish()
    }
}

/// Renders the keys in ascending order separated by single spaces.
impl<K> fmt::Display for OrderedTree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.traverse().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(key, f)?;
        }

        Ok(())
    }
}

impl<K> FromIterator<K> for OrderedTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for OrderedTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<K> IntoIterator for OrderedTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

/// Borrowing in-order iterator returned by [`OrderedTree::traverse`].
///
/// The stack holds the nodes whose key hasn't been yielded yet but whose left subtree has been
/// entered. Its top is always the next key.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

// Manual so that cloning the iterator doesn't require `K: Clone`.
impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// Owning in-order iterator. Nodes are taken apart as their keys are yielded.
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<K>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K> Drop for IntoIter<K> {
    // The stacked nodes still own their right subtrees, so drain instead of letting them drop
    // recursively.
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { key, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
