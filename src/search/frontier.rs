use super::node::NodeId;

use std::cmp::Ordering;


/// Entry in a priority frontier
/// - for ordering we only need the key and the insertion order
/// - the node itself lives in the arena
#[derive(Debug)]
pub(crate) struct Prioritized {
    pub key: u32, // h for greedy, f for A*
    pub order: u64, // strictly increasing insertion counter
    pub node: NodeId,
}

// BinaryHeap is a max-heap: reverse so the smallest key pops first,
// and the earliest insertion wins among equal keys
impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
            .then_with(|| other.order.cmp(&self.order))
    }
}
impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.order == other.order
    }
}
impl Eq for Prioritized {}


/// Min-priority frontier with deterministic tie-breaking
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: std::collections::BinaryHeap<Prioritized>,
    counter: u64,
}

impl PriorityFrontier {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: u32, node: NodeId) {
        self.heap.push(Prioritized { key, order: self.counter, node });
        self.counter += 1;
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }
}
