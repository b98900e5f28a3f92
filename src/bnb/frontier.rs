//! Best-first frontier of live nodes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::config::TieBreak;
use super::node::SearchNode;

/// Heap entry. `BinaryHeap` is a max-heap, so the ordering is reversed on
/// cost and sequence: the cheapest, earliest entry compares greatest.
struct Entry {
    node: SearchNode,
    depth: usize,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .cost()
            .cmp(&self.node.cost())
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue of search nodes keyed by lower bound, with a
/// deterministic tie-break.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    tie_break: TieBreak,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, node: SearchNode) {
        let depth = match self.tie_break {
            TieBreak::InsertionOrder => 0,
            TieBreak::DeepestFirst => node.level(),
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { node, depth, seq });
    }

    /// Removes the node with the smallest bound.
    pub(crate) fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
