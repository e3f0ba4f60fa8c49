// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumpcue Tree: a prefix-free keystroke decision tree.
//!
//! Given an ordered list of candidates and an ordered alphabet of keys, the
//! tree assigns every candidate a unique character sequence (its *address*)
//! such that no address is a prefix of another. Prefix-freedom is what lets a
//! caller act the instant a typed sequence reaches a leaf, with no terminator
//! key: every value lives at a leaf, and internal nodes never carry values.
//!
//! Addresses are allocated greedily from the front of the candidate list, so
//! earlier candidates always receive sequences of equal or shorter length
//! than later ones, and the tree depth grows by at most one level each time
//! the candidate count crosses a power of the alphabet size.
//!
//! The tree is stored as a flat arena: a vector of nodes addressed by
//! [`NodeId`], with the root at index 0. Nodes own small inline child lists;
//! there is no shared ownership and no parent pointer.
//!
//! # Example
//!
//! ```rust
//! use jumpcue_tree::Tree;
//!
//! let tree = Tree::build(vec!["back", "forward", "reload"], &['a', 'l']);
//! assert_eq!(tree.sequences(), ["aa", "al", "l"]);
//!
//! // Walking a complete address yields the candidate assigned to it.
//! let hit = tree.walk("al".chars()).unwrap();
//! assert_eq!(tree.value(hit), Some(&"forward"));
//!
//! // A strict prefix of an address is not a selection.
//! assert!(tree.walk("a".chars()).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;

pub use tree::{NodeId, Tree};
