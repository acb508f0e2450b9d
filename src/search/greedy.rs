use super::Traversal;
use super::frontier::PriorityFrontier;
use super::node::NodeArena;
use crate::collections::FxHashSet;
use crate::geometry::Position;
use crate::maze::Maze;


/// Greedy Best-First Search
/// https://en.wikipedia.org/wiki/Best-first_search#Greedy_BFS
/// Frontier ordered by h(n) alone (Manhattan distance to goal), ties by insertion.
/// Positions are marked visited when enqueued; g is tracked but never used for ordering,
/// so the path found is not necessarily the shortest.
pub(crate) fn greedy_best_first(maze: &Maze, explored: &mut Vec<Position>) -> Traversal {

    let goal = maze.goal();
    let mut arena = NodeArena::new();
    let start = arena.root(maze.start(), maze.start().manhattan(&goal));

    let mut frontier = PriorityFrontier::new();
    frontier.push(arena[start].h, start);

    let mut visited = FxHashSet::default();
    visited.insert(maze.start());

    while let Some(current) = frontier.pop() {
        let position = arena[current].position;
        explored.push(position);

        if position == goal {
            return Traversal { arena, goal: Some(current) };
        }

        for neighbor in maze.neighbors(position) {
            if visited.insert(neighbor) {
                let h = neighbor.manhattan(&goal);
                let child = arena.child(current, neighbor, h);
                frontier.push(h, child);
            }
        }
    }

    Traversal { arena, goal: None }
}
