//! A general N-ary tree. Every node owns a value and an ordered sequence of
//! child slots, any of which may be vacant. Children keep their insertion
//! order and there is no ordering invariant on values.
//!
//! # Examples
//!
//! ```
//! use arbor::tree::Tree;
//! use arbor::Append;
//!
//! let mut tree = Tree::new(5);
//! tree.add(3);
//! tree.add(7);
//!
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.search(|v| *v > 5), Some(&7));
//! assert_eq!(tree.to_string(), "5\n├─3\n└─7");
//! ```

use std::fmt;

use crate::render;
use crate::{Append, TreeError};

/// An N-ary tree node.
///
/// The child sequence may contain vacant slots (`None`); every operation
/// that walks the tree skips them. Each occupied child is exclusively owned
/// by its parent, so dropping a node drops its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    value: T,
    children: Vec<Option<Tree<T>>>,
}

impl<T> Tree<T> {
    /// Creates a leaf node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Builds a node from an optional value and pre-built child slots. The
    /// slots are adopted as-is, vacancies included.
    ///
    /// Returns [`TreeError::InvalidValue`] when no value is supplied; a node
    /// never exists without one.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::tree::Tree;
    /// use arbor::TreeError;
    ///
    /// let tree = Tree::from_parts(Some(5), vec![Some(Tree::new(3)), None]).unwrap();
    /// assert_eq!(tree.children().len(), 2);
    ///
    /// assert_eq!(
    ///     Tree::<i32>::from_parts(None, Vec::new()),
    ///     Err(TreeError::InvalidValue),
    /// );
    /// ```
    pub fn from_parts(
        value: Option<T>,
        children: Vec<Option<Tree<T>>>,
    ) -> Result<Self, TreeError> {
        match value {
            Some(value) => Ok(Self { value, children }),
            None => Err(TreeError::InvalidValue),
        }
    }

    /// The value stored at this node. A node's value is fixed for its
    /// lifetime; there is no mutable accessor.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The child slots in insertion order. Vacant slots are `None`.
    pub fn children(&self) -> &[Option<Tree<T>>] {
        &self.children
    }

    /// Finds the first value matching `predicate` in a depth-first,
    /// pre-order walk: the node itself is checked before its children, and
    /// children are visited in storage order with vacant slots skipped. The
    /// walk stops at the first hit.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::tree::Tree;
    /// use arbor::Append;
    ///
    /// let mut tree = Tree::new(5);
    /// tree.add(3);
    /// tree.add(7);
    ///
    /// assert_eq!(tree.search(|v| *v < 5), Some(&3));
    /// assert_eq!(tree.search(|v| *v == 42), None);
    /// ```
    pub fn search<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.search_inner(&predicate)
    }

    fn search_inner<P>(&self, predicate: &P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        if predicate(&self.value) {
            return Some(&self.value);
        }
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.search_inner(predicate))
    }

    /// The number of edges on the longest path from this node down to a
    /// leaf. A node with no occupied child slots is a leaf with height 0,
    /// even when vacant slots are present.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .flatten()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Mirrors the tree in place: reverses the child slot sequence at this
    /// node, then recursively inverts each occupied child. Values are left
    /// untouched. Applying `invert` twice restores the original order at
    /// every level.
    pub fn invert(&mut self) {
        self.children.reverse();
        for child in self.children.iter_mut().flatten() {
            child.invert();
        }
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Renders the tree with a custom renderer for the value.
    ///
    /// The renderer applies to this node's value only; descendant values
    /// always fall back to their `Display` implementation. That asymmetry
    /// is long-standing observable behavior and is kept deliberately rather
    /// than silently threading the renderer through recursive calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::tree::Tree;
    /// use arbor::Append;
    ///
    /// let mut tree = Tree::new(5);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.render_with(|v| format!("<{v}>")), "<5>\n└─3");
    /// ```
    pub fn render_with<F>(&self, renderer: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        render::compose(&renderer(&self.value), &self.child_blocks())
    }

    fn child_blocks(&self) -> Vec<String> {
        self.children
            .iter()
            .flatten()
            .map(|child| child.to_string())
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::compose(
            &self.value.to_string(),
            &self.child_blocks(),
        ))
    }
}

impl<T> Append<T> for Tree<T> {
    /// Appends a new occupied leaf slot wrapping `value` to the child
    /// sequence. No ordering, no deduplication, no balancing.
    fn add(&mut self, value: T) {
        self.children.push(Some(Tree::new(value)));
    }
}
