use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{constants::Distance, graph::NodeIndex};

/// Priority queue implementation using a binary heap.
/// The heap is a min heap, so the element with the smallest distance
/// is always at the top.
///
/// There is no decrease-key. A node may be pushed several times; callers
/// have to skip entries whose distance is larger than the best one known.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<HeapItem>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: HeapItem) {
        self.heap.push(item);
    }

    pub fn pop(&mut self) -> Option<HeapItem> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeapItem {
    pub distance: Distance,
    pub node: NodeIndex,
}

impl HeapItem {
    pub fn new(distance: Distance, node: NodeIndex) -> Self {
        HeapItem { distance, node }
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the ordering so that the smallest element is at the top of the heap.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}
