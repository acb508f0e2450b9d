use super::Traversal;
use super::frontier::PriorityFrontier;
use super::node::NodeArena;
use crate::collections::FxHashSet;
use crate::geometry::Position;
use crate::maze::Maze;


/// A* Search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Frontier ordered by f(n) = g(n) + h(n), ties by insertion.
/// With the Manhattan heuristic (admissible and consistent) the first time a
/// position is popped its cost is final, so positions are closed on pop and
/// stale duplicate entries are discarded then (lazy deletion).
pub(crate) fn a_star(maze: &Maze, explored: &mut Vec<Position>) -> Traversal {

    let goal = maze.goal();
    let mut arena = NodeArena::new();
    let start = arena.root(maze.start(), maze.start().manhattan(&goal));

    // Open List - may hold several entries for one position
    let mut frontier = PriorityFrontier::new();
    frontier.push(arena[start].f(), start);

    // Closed List - positions whose cost is known
    let mut closed = FxHashSet::default();

    while let Some(current) = frontier.pop() {
        let node = arena[current];

        // An earlier, cheaper entry already settled this position
        if !closed.insert(node.position) {
            log::trace!("discarding stale entry for {} (g = {})", node.position, node.g);
            continue;
        }
        explored.push(node.position);

        if node.position == goal {
            return Traversal { arena, goal: Some(current) };
        }

        for neighbor in maze.neighbors(node.position) {
            if closed.contains(&neighbor) {
                continue;
            }
            let h = neighbor.manhattan(&goal);
            let child = arena.child(current, neighbor, h);
            frontier.push(arena[child].f(), child);
        }
    }

    Traversal { arena, goal: None }
}
