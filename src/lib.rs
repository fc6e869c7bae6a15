//! This crate exposes two generic tree containers, mostly for educational
//! purposes.
//!
//! ## N-ary Tree
//!
//! A [`Tree`][tree::Tree] is a node holding a value and an ordered sequence
//! of child slots, any of which may be vacant. New values are appended with
//! no ordering and no deduplication, so the child sequence remembers
//! insertion order. On top of that shape the tree supports a pre-order
//! `search`, a `height` computation counting edges on the longest
//! root-to-leaf path, a structural `invert` that mirrors the children at
//! every level, and a box-drawing text rendering.
//!
//! ## Binary Search Tree
//!
//! A [`BinaryTree`][binary::BinaryTree] narrows the general shape to exactly
//! two named slots per node, `left` and `right`, and keeps them ordered. The
//! most important invariants are:
//!
//! 1. For every node, all the nodes in its left subtree have a value less
//!    than its own value.
//! 2. For every node, all the nodes in its right subtree have a value
//!    greater than its own value.
//!
//! `insert` is the only way the tree grows, which is what maintains the
//! invariants; inserting a value already present is a silent no-op. Each
//! node also carries a back-reference to its parent. That link is an arena
//! index rather than an owning edge, so ownership stays a strict tree even
//! though the reference graph has cycles.
//!
//! The two growth styles are captured by the [`Append`] and [`Insert`]
//! capability traits. `Tree` implements `Append` and `BinaryTree` implements
//! `Insert`, so feeding unordered values into an ordered tree is a compile
//! error rather than a latent invariant violation.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
mod error;
mod render;
pub mod tree;

pub use error::TreeError;

/// The capability to grow by appending values in arrival order.
///
/// Implemented by containers with no ordering invariant to protect. Notably
/// *not* implemented by [`binary::BinaryTree`], whose ordered structure
/// would be silently corrupted by an unordered append.
pub trait Append<T> {
    /// Appends `value` to the container, preserving arrival order.
    fn add(&mut self, value: T);
}

/// The capability to grow while keeping values totally ordered.
pub trait Insert<T: Ord> {
    /// Places `value` according to the container's ordering invariant.
    fn insert(&mut self, value: T);
}
