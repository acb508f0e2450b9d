use crate::geometry::Position;

use std::hash::{Hash, Hasher};


/// Index of a node in its run's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}


/// State in the search tree
/// Equality and hashing only look at the position
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub position: Position,
    pub parent: Option<NodeId>, // always created before this node
    pub g: u32, // cost from start
    pub h: u32, // heuristic estimate to goal
}

impl Node {

    pub fn root(position: Position, h: u32) -> Self {
        Self { position, parent: None, g: 0, h }
    }

    /// f(n) = g(n) + h(n), saturating for far-off goals
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}
impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}


/// Every node created during one run, indexed by creation order
/// Parents always sit at lower indices, so parent chains end at the root
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add the root node
    pub fn root(&mut self, position: Position, h: u32) -> NodeId {
        self.push(Node::root(position, h))
    }

    /// Add a successor of `parent`, one step further from the start
    pub fn child(&mut self, parent: NodeId, position: Position, h: u32) -> NodeId {
        let g = self[parent].g + 1;
        self.push(Node { position, parent: Some(parent), g, h })
    }

    fn push(&mut self, node: Node) -> NodeId {
        debug_assert!(node.parent.is_none_or(|p| p.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}


/// Construct the path from the root to `goal` by following parent links
/// Returns positions ordered from start to goal
/// Pure: calling it again on the same node gives the same path
pub fn reconstruct_path(arena: &NodeArena, goal: NodeId) -> Vec<Position> {

    let mut path = Vec::new();
    let mut current = arena.get(goal);

    // Trace back from goal to start
    while let Some(node) = current {
        path.push(node.position);
        current = node.parent.and_then(|p| arena.get(p));
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
