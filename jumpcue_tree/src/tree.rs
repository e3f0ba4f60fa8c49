// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction, traversal, and address derivation.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Identifier for a node in the tree.
///
/// Plain index into the tree's arena; the tree is immutable once built, so
/// identifiers stay valid for the lifetime of the tree that produced them.
/// Identifiers from one tree must not be used with another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Label used for the synthetic root node. Never part of any address.
const ROOT_LABEL: char = ' ';

#[derive(Clone, Debug)]
struct Node<T> {
    /// The label of the edge connecting this node to its parent.
    ///
    /// Labels are distinct among the children of any one node.
    label: char,
    children: SmallVec<[NodeId; 8]>,
    /// Only leaf nodes carry values.
    value: Option<T>,
}

impl<T> Node<T> {
    fn new(label: char) -> Self {
        Self {
            label,
            children: SmallVec::new(),
            value: None,
        }
    }
}

/// A prefix-free keystroke decision tree.
///
/// Parent nodes are connected to child nodes via labelled edges, with labels
/// distinct per node and ordered by the build alphabet. Leaf nodes store the
/// candidate values; the label path from (but excluding) the root down to a
/// leaf is that candidate's unique address.
///
/// Built once via [`Tree::build`] and read-only afterwards. See the crate
/// docs for the allocation strategy.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> core::fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self.nodes.iter().filter(|n| n.children.is_empty()).count();
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}

impl<T> Tree<T> {
    const ROOT: NodeId = NodeId(0);

    /// Build a tree assigning each of `candidates` a unique prefix-free
    /// address over `keys`.
    ///
    /// `keys` is an ordered, duplicate-free alphabet. At most
    /// `min(keys.len(), candidates.len())` keys are used, so the first level
    /// never branches wider than the candidate count. With no candidates the
    /// tree is a bare root: one valueless leaf whose address is the empty
    /// string, which callers must treat as "nothing to select".
    ///
    /// Candidates are assigned to leaves in depth-first order, which by
    /// construction equals the input order.
    ///
    /// # Panics
    ///
    /// Panics if the number of leaves produced does not match the candidate
    /// count. That indicates a coordination bug in the caller's candidate
    /// accounting (for example a miscomputed grid cell count), not a runtime
    /// condition to recover from.
    pub fn build(candidates: Vec<T>, keys: &[char]) -> Self {
        let num_candidates = candidates.len();
        let keys = &keys[..keys.len().min(num_candidates)];

        let mut tree = Self {
            nodes: alloc::vec![Node::new(ROOT_LABEL)],
        };

        if num_candidates == 0 {
            return tree;
        }

        debug_assert!(
            keys.iter()
                .enumerate()
                .all(|(i, k)| !keys[..i].contains(k)),
            "alphabet must be duplicate-free"
        );

        // Level 1: one child per usable key.
        let mut level: Vec<NodeId> = keys.iter().map(|&key| tree.attach(Self::ROOT, key)).collect();
        let mut num_leaves = level.len();

        // Expand level by level until there is one leaf per candidate. The
        // first child attached to a node is leaf-neutral (the parent stops
        // being a leaf as the child becomes one); every subsequent child
        // grows the leaf count by one.
        while num_leaves < num_candidates {
            let mut next_level = Vec::with_capacity(level.len() * keys.len());
            'fill: for &parent in &level {
                for &key in keys {
                    if num_leaves == num_candidates {
                        break 'fill;
                    }
                    let child = tree.attach(parent, key);
                    next_level.push(child);
                    if tree.nodes[parent.idx()].children.len() > 1 {
                        num_leaves += 1;
                    }
                }
            }
            level = next_level;
        }

        let leaves = tree.leaves();
        assert_eq!(
            leaves.len(),
            num_candidates,
            "tree invariant violated: leaf count must equal candidate count"
        );
        for (leaf, value) in leaves.into_iter().zip(candidates) {
            tree.nodes[leaf.idx()].value = Some(value);
        }

        tree
    }

    fn attach(&mut self, parent: NodeId, label: char) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(label));
        self.nodes[parent.idx()].children.push(id);
        id
    }

    /// The root node. Its label is synthetic and excluded from addresses.
    pub const fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The label of the edge connecting `id` to its parent.
    pub fn label(&self, id: NodeId) -> char {
        self.node(id).label
    }

    /// The value stored at `id`, if any. Only leaves carry values, and the
    /// sentinel leaf of an empty tree carries none.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).value.as_ref()
    }

    /// The children of `id`, in alphabet order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Whether `id` has no children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).children.is_empty()
    }

    /// The child of `id` labelled `character`, or `None`.
    pub fn step(&self, id: NodeId, character: char) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).label == character)
    }

    /// Follow `sequence` from the root, returning the final node only if the
    /// sequence lands exactly on a leaf.
    ///
    /// A strict prefix of an address (ending on an internal node), an
    /// overlong sequence (stepping past a leaf), and any unknown branch all
    /// yield `None`.
    pub fn walk(&self, sequence: impl IntoIterator<Item = char>) -> Option<NodeId> {
        let mut node = Self::ROOT;
        for character in sequence {
            node = self.step(node, character)?;
        }
        self.is_leaf(node).then_some(node)
    }

    /// All leaves in depth-first, children-in-alphabet-order traversal.
    ///
    /// This order matches the candidate order passed to [`Tree::build`].
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.children.is_empty() {
                out.push(id);
            } else {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Number of leaves; equals `max(candidate_count, 1)`.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.children.is_empty()).count()
    }

    /// The address of every leaf, in the same depth-first order as
    /// [`Tree::leaves`]: one string per leaf, the concatenation of edge
    /// labels from (but excluding) the root.
    pub fn sequences(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeId, String)> = alloc::vec![(Self::ROOT, String::new())];
        while let Some((id, path)) = stack.pop() {
            let node = self.node(id);
            if node.children.is_empty() {
                out.push(path);
            } else {
                for &child in node.children.iter().rev() {
                    let mut extended = path.clone();
                    extended.push(self.node(child).label);
                    stack.push((child, extended));
                }
            }
        }
        out
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes
            .get(id.idx())
            .expect("tree invariant violated: NodeId out of bounds")
    }
}
