//! An ordered binary tree (a Binary Search Tree without balancing).
//!
//! Nodes live in a [`generational_arena::Arena`] and refer to each other by
//! index. Child links are the owning edges of the structure; the parent
//! back-reference is just another index, used only for lookup, so ownership
//! remains a strict tree even though the reference graph has cycles.
//!
//! # Examples
//!
//! ```
//! use arbor::binary::BinaryTree;
//!
//! let mut tree = BinaryTree::new(5);
//! tree.insert(3);
//! tree.insert(7);
//! tree.insert(3); // duplicate, silently dropped
//!
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.left_most().value(), &3);
//! assert_eq!(tree.search(|v| *v > 5), Some(&7));
//!
//! // Unordered growth is rejected; the ordering invariant only survives
//! // because `insert` is the single entry point.
//! assert!(tree.add(9).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};

use crate::render;
use crate::{Insert, TreeError};

#[derive(Debug, Clone)]
struct BinaryNode<T> {
    value: T,
    left: Option<Index>,
    right: Option<Index>,
    parent: Option<Index>,
}

impl<T> BinaryNode<T> {
    fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

/// A binary search tree: exactly two slots per node (`left` and `right`),
/// with all left descendants less than the node's value and all right
/// descendants greater than it.
///
/// The root always exists; a tree is never empty. Nodes are only ever
/// attached, never removed, so arena indices stay valid for the life of the
/// tree.
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    arena: Arena<BinaryNode<T>>,
    root: Index,
}

impl<T> BinaryTree<T> {
    /// Creates a tree whose root holds `value`.
    pub fn new(value: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(BinaryNode::new(value, None));
        Self { arena, root }
    }

    /// Builds a tree from an optional root value.
    ///
    /// Returns [`TreeError::InvalidValue`] when no value is supplied; a node
    /// never exists without one.
    pub fn from_value(value: Option<T>) -> Result<Self, TreeError> {
        value.map(Self::new).ok_or(TreeError::InvalidValue)
    }

    /// A handle on the root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef {
            tree: self,
            index: self.root,
        }
    }

    /// Rejects unordered insertion.
    ///
    /// An ordered tree only grows through [`insert`](Self::insert); an
    /// arrival-order append would corrupt the ordering invariant, so this
    /// always fails with [`TreeError::UnsupportedOperation`]. The capability
    /// traits already rule this out at compile time ([`BinaryTree`] does not
    /// implement [`Append`][crate::Append]); this guard preserves the
    /// runtime contract for callers reaching past them.
    pub fn add(&mut self, _value: T) -> Result<(), TreeError> {
        Err(TreeError::UnsupportedOperation)
    }

    /// The node reached by following `left` links from the root until a
    /// vacant slot. This is the in-order minimum; it is the root itself when
    /// the root has no left child.
    pub fn left_most(&self) -> NodeRef<'_, T> {
        let mut current = self.root;
        while let Some(next) = self.arena[current].left {
            current = next;
        }
        NodeRef {
            tree: self,
            index: current,
        }
    }

    /// The node reached by following `right` links from the root until a
    /// vacant slot. This is the in-order maximum; it is the root itself when
    /// the root has no right child.
    pub fn right_most(&self) -> NodeRef<'_, T> {
        let mut current = self.root;
        while let Some(next) = self.arena[current].right {
            current = next;
        }
        NodeRef {
            tree: self,
            index: current,
        }
    }

    /// Finds the first value matching `predicate` in a depth-first,
    /// pre-order walk: the node itself, then the left subtree, then the
    /// right subtree. Stops at the first hit.
    pub fn search<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.search_at(self.root, &predicate)
    }

    fn search_at<P>(&self, at: Index, predicate: &P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        let node = &self.arena[at];
        if predicate(&node.value) {
            return Some(&node.value);
        }
        node.left
            .and_then(|left| self.search_at(left, predicate))
            .or_else(|| node.right.and_then(|right| self.search_at(right, predicate)))
    }

    /// The number of edges on the longest path from the root down to a
    /// leaf. A single-node tree has height 0; a node with both slots vacant
    /// is a leaf.
    pub fn height(&self) -> usize {
        self.height_at(self.root)
    }

    fn height_at(&self, at: Index) -> usize {
        let node = &self.arena[at];
        match (node.left, node.right) {
            (None, None) => 0,
            (left, right) => {
                let left = left.map_or(0, |child| self.height_at(child));
                let right = right.map_or(0, |child| self.height_at(child));
                left.max(right) + 1
            }
        }
    }

    /// The node count of a *complete* binary tree of this height:
    /// `2^(height + 1) - 1`.
    ///
    /// This is an upper bound on the population of this (possibly
    /// unbalanced) tree, not its actual node count. No actual-count
    /// operation is provided.
    pub fn max_nodes(&self) -> usize {
        2usize.pow(self.height() as u32 + 1) - 1
    }

    /// Mirrors the tree in place: swaps the `left` and `right` slots at
    /// every node. This is a structural mirror, so it deliberately breaks
    /// the ordering invariant; applying it a second time restores both the
    /// original shape and the invariant.
    pub fn invert(&mut self) {
        self.invert_at(self.root);
    }

    fn invert_at(&mut self, at: Index) {
        let node = &mut self.arena[at];
        mem::swap(&mut node.left, &mut node.right);
        let (left, right) = (node.left, node.right);
        if let Some(left) = left {
            self.invert_at(left);
        }
        if let Some(right) = right {
            self.invert_at(right);
        }
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Inserts `value` at its ordered position: values less than a node go
    /// left, values greater go right. Inserting a value already present is
    /// a silent no-op, so the tree never holds duplicates.
    ///
    /// Attaching the new node also records its parent's index, keeping the
    /// back-reference in step with the owning edge.
    pub fn insert(&mut self, value: T) {
        let mut current = self.root;
        loop {
            let (go_left, next) = {
                let node = &self.arena[current];
                match value.cmp(&node.value) {
                    Ordering::Equal => return,
                    Ordering::Less => (true, node.left),
                    Ordering::Greater => (false, node.right),
                }
            };
            match next {
                Some(child) => current = child,
                None => {
                    let leaf = self.arena.insert(BinaryNode::new(value, Some(current)));
                    let node = &mut self.arena[current];
                    if go_left {
                        node.left = Some(leaf);
                    } else {
                        node.right = Some(leaf);
                    }
                    return;
                }
            }
        }
    }
}

impl<T: Ord> Insert<T> for BinaryTree<T> {
    fn insert(&mut self, value: T) {
        BinaryTree::insert(self, value);
    }
}

impl<T: fmt::Display> BinaryTree<T> {
    /// Renders the tree with a custom renderer for the value.
    ///
    /// The renderer applies to the root's value only; descendant values
    /// always fall back to their `Display` implementation. That asymmetry
    /// is long-standing observable behavior and is kept deliberately rather
    /// than silently threading the renderer through recursive calls.
    pub fn render_with<F>(&self, renderer: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        render::compose(
            &renderer(&self.arena[self.root].value),
            &self.child_blocks(self.root),
        )
    }

    fn rendered_at(&self, at: Index) -> String {
        render::compose(&self.arena[at].value.to_string(), &self.child_blocks(at))
    }

    fn child_blocks(&self, at: Index) -> Vec<String> {
        let node = &self.arena[at];
        node.left
            .into_iter()
            .chain(node.right)
            .map(|child| self.rendered_at(child))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered_at(self.root))
    }
}

/// A borrowed handle on one node of a [`BinaryTree`].
///
/// Handles are cheap to copy and let callers walk the structure, including
/// the parent back-reference, without exposing arena indices.
pub struct NodeRef<'a, T> {
    tree: &'a BinaryTree<T>,
    index: Index,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    fn node(&self) -> &'a BinaryNode<T> {
        &self.tree.arena[self.index]
    }

    /// The value stored at this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The left child, when that slot is occupied.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node().left.map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }

    /// The right child, when that slot is occupied.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node().right.map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }

    /// The parent of this node; `None` at the root.
    ///
    /// This is a lookup-only back-reference. Ownership runs strictly from
    /// parent to child, so the link never affects the lifetime of either
    /// node.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node().parent.map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-order walk used to check the ordering invariant.
    fn in_order<T: Copy>(node: NodeRef<'_, T>, out: &mut Vec<T>) {
        if let Some(left) = node.left() {
            in_order(left, out);
        }
        out.push(*node.value());
        if let Some(right) = node.right() {
            in_order(right, out);
        }
    }

    fn collect(tree: &BinaryTree<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        in_order(tree.root(), &mut out);
        out
    }

    #[test]
    fn insert_places_values_in_order() {
        let mut tree = BinaryTree::new(5);
        for value in [3, 7, 2, 4, 6, 8] {
            tree.insert(value);
        }

        assert_eq!(collect(&tree), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn duplicates_are_silently_dropped() {
        let mut tree = BinaryTree::new(5);
        tree.insert(3);
        tree.insert(5);
        tree.insert(3);

        assert_eq!(collect(&tree), vec![3, 5]);
    }

    #[test]
    fn from_value_without_a_value_fails() {
        assert!(matches!(
            BinaryTree::<i32>::from_value(None),
            Err(TreeError::InvalidValue)
        ));
        assert_eq!(*BinaryTree::from_value(Some(5)).unwrap().root().value(), 5);
    }

    #[test]
    fn add_is_always_rejected() {
        let mut tree = BinaryTree::new(5);
        assert_eq!(tree.add(3), Err(TreeError::UnsupportedOperation));

        tree.insert(3);
        tree.insert(7);
        assert_eq!(tree.add(9), Err(TreeError::UnsupportedOperation));
    }

    #[test]
    fn height_counts_edges() {
        let mut tree = BinaryTree::new(5);
        assert_eq!(tree.height(), 0);

        tree.insert(3);
        assert_eq!(tree.height(), 1);

        tree.insert(7);
        assert_eq!(tree.height(), 1);

        tree.insert(2);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn max_nodes_is_the_complete_tree_bound() {
        let mut tree = BinaryTree::new(5);
        for value in [3, 7, 2, 4, 6] {
            tree.insert(value);
        }

        // Height 2, so the bound is 2^3 - 1 even though only 6 nodes exist.
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.max_nodes(), 7);
    }

    #[test]
    fn extremes_follow_the_outer_links() {
        let mut tree = BinaryTree::new(5);
        for value in [3, 7, 2, 4, 6, 8] {
            tree.insert(value);
        }

        assert_eq!(tree.left_most().value(), &2);
        assert_eq!(tree.right_most().value(), &8);
    }

    #[test]
    fn extremes_of_a_single_node_are_the_root() {
        let tree = BinaryTree::new(5);
        assert_eq!(tree.left_most().value(), &5);
        assert_eq!(tree.right_most().value(), &5);
    }

    #[test]
    fn attaching_sets_the_parent_link() {
        let mut tree = BinaryTree::new(5);
        tree.insert(3);
        tree.insert(7);
        tree.insert(4);

        let root = tree.root();
        assert!(root.parent().is_none());

        let three = root.left().unwrap();
        assert_eq!(three.parent().unwrap().value(), &5);

        let four = three.right().unwrap();
        assert_eq!(four.parent().unwrap().value(), &3);
        assert_eq!(four.parent().unwrap().parent().unwrap().value(), &5);
    }

    #[test]
    fn search_is_preorder_and_short_circuits() {
        let mut tree = BinaryTree::new(5);
        for value in [3, 7, 2, 4] {
            tree.insert(value);
        }

        // Root, left subtree, right subtree; 2 precedes 4 and 7.
        assert_eq!(tree.search(|v| *v % 2 == 0), Some(&2));
        assert_eq!(tree.search(|v| *v == 42), None);
    }

    #[test]
    fn invert_mirrors_the_structure() {
        let mut tree = BinaryTree::new(5);
        for value in [3, 7, 2, 4, 6, 8] {
            tree.insert(value);
        }

        tree.invert();

        // The mirror reverses the in-order traversal.
        assert_eq!(collect(&tree), vec![8, 7, 6, 5, 4, 3, 2]);
        assert_eq!(tree.root().left().unwrap().value(), &7);
        assert_eq!(tree.root().right().unwrap().value(), &3);

        tree.invert();
        assert_eq!(collect(&tree), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn rendering_matches_byte_for_byte() {
        let mut tree = BinaryTree::new(5);
        for value in [3, 7, 2, 4, 6] {
            tree.insert(value);
        }

        assert_eq!(tree.to_string(), "5\n├─3\n│ ├─2\n│ └─4\n└─7\n  └─6");
    }

    #[test]
    fn custom_renderer_applies_to_the_root_only() {
        let mut tree = BinaryTree::new(5);
        tree.insert(3);

        assert_eq!(tree.render_with(|v| format!("root:{v}")), "root:5\n└─3");
    }
}
