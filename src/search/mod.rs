pub mod node;
pub mod flood;
mod frontier;
mod bfs;
mod dfs;
mod greedy;
mod a_star;

pub use node::{Node, NodeArena, NodeId, reconstruct_path};

use crate::geometry::Position;
use crate::maze::Maze;

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};


/// Outcome of a single traversal
/// The arena holds every node created; `goal` is the accepted goal node, if any
#[derive(Debug)]
pub struct Traversal {
    pub arena: NodeArena,
    pub goal: Option<NodeId>,
}


/// Search strategies
/// Each one differs only in how its frontier orders and filters nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,    // FIFO queue
    DepthFirst,      // LIFO stack
    GreedyBestFirst, // priority by h
    AStar,           // priority by g + h
}

impl Strategy {

    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "Breadth-First Search (BFS)",
            Strategy::DepthFirst => "Depth-First Search (DFS)",
            Strategy::GreedyBestFirst => "Greedy Best-First Search",
            Strategy::AStar => "A* Search",
        }
    }

    /// Run the traversal, appending each accepted position to `explored`
    pub fn traverse(self, maze: &Maze, explored: &mut Vec<Position>) -> Traversal {
        match self {
            Strategy::BreadthFirst => bfs::breadth_first(maze, explored),
            Strategy::DepthFirst => dfs::depth_first(maze, explored),
            Strategy::GreedyBestFirst => greedy::greedy_best_first(maze, explored),
            Strategy::AStar => a_star::a_star(maze, explored),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Performance snapshot of the last run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub algorithm: &'static str,
    pub nodes_expanded: usize,
    pub path_length: usize,
    pub execution_time: String, // seconds, four decimals e.g. "0.0012s"
    pub path_found: bool,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: found={} nodes_expanded={} path_length={} time={}",
            self.algorithm, self.path_found, self.nodes_expanded, self.path_length, self.execution_time
        )
    }
}


/// Search run state for one strategy
/// Holds the exploration trace, final path and metrics of the last `search`.
/// Reusing an instance for sequential runs is fine; each run starts with `reset`.
#[derive(Debug)]
pub struct Search {
    strategy: Strategy,
    explored: Vec<Position>, // acceptance order, one entry per accepted node
    path: Vec<Position>,     // start -> goal inclusive, empty if not found
    nodes_expanded: usize,
    path_length: usize,
    execution_time: Duration,
}

impl Search {

    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            explored: Vec::new(),
            path: Vec::new(),
            nodes_expanded: 0,
            path_length: 0,
            execution_time: Duration::ZERO,
        }
    }

    /// Clear the trace, path and metrics
    pub fn reset(&mut self) {
        self.nodes_expanded = 0;
        self.path_length = 0;
        self.execution_time = Duration::ZERO;
        self.explored.clear();
        self.path.clear();
    }

    /// Run the strategy to completion on `maze`
    /// Returns true if the goal was reached. An unreachable goal is not an error.
    pub fn search(&mut self, maze: &Maze) -> bool {
        self.reset();
        let started = Instant::now();

        let traversal = self.strategy.traverse(maze, &mut self.explored);
        self.nodes_expanded = self.explored.len();

        if let Some(goal) = traversal.goal {
            self.path = reconstruct_path(&traversal.arena, goal);
            self.path_length = self.path.len();
        }
        self.execution_time = started.elapsed();

        log::debug!(
            "{}: found={} nodes_expanded={} path_length={} nodes_created={} in {:?}",
            self.strategy, !self.path.is_empty(), self.nodes_expanded, self.path_length,
            traversal.arena.len(), self.execution_time
        );

        !self.path.is_empty()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Positions in the order they were accepted
    pub fn explored(&self) -> &[Position] {
        &self.explored
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn path_length(&self) -> usize {
        self.path_length
    }

    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            algorithm: self.strategy.name(),
            nodes_expanded: self.nodes_expanded,
            path_length: self.path_length,
            execution_time: format!("{:.4}s", self.execution_time.as_secs_f64()),
            path_found: !self.path.is_empty(),
        }
    }
}


/// Run every strategy on the same maze and collect their metrics
pub fn compare(maze: &Maze) -> Vec<Metrics> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let mut search = Search::new(strategy);
            search.search(maze);
            search.metrics()
        })
        .collect()
}
