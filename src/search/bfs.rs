use super::Traversal;
use super::node::NodeArena;
use crate::collections::FxHashSet;
use crate::geometry::Position;
use crate::maze::Maze;

use std::collections::VecDeque;


/// Breadth-First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// FIFO frontier, positions marked visited when enqueued.
/// Complete, and optimal for unit-cost moves.
pub(crate) fn breadth_first(maze: &Maze, explored: &mut Vec<Position>) -> Traversal {

    let mut arena = NodeArena::new();
    let start = arena.root(maze.start(), 0);

    let mut frontier = VecDeque::from([start]);
    let mut visited = FxHashSet::default();
    visited.insert(maze.start());

    while let Some(current) = frontier.pop_front() {
        let position = arena[current].position;
        explored.push(position);

        if position == maze.goal() {
            return Traversal { arena, goal: Some(current) };
        }

        for neighbor in maze.neighbors(position) {
            // first enqueue is already the shallowest
            if visited.insert(neighbor) {
                let child = arena.child(current, neighbor, 0);
                frontier.push_back(child);
            }
        }
    }

    Traversal { arena, goal: None }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explores_level_by_level() {
        let maze = Maze::from_ascii(
            "
            ...
            ...
            ...
            ",
            Position::new(0, 0),
            Position::new(2, 2),
        );
        let mut explored = Vec::new();
        let traversal = breadth_first(&maze, &mut explored);

        assert!(traversal.goal.is_some());
        assert_eq!(explored, vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(2, 0),
            Position::new(1, 1),
            Position::new(0, 2),
            Position::new(2, 1),
            Position::new(1, 2),
            Position::new(2, 2),
        ]);
    }

    #[test]
    fn test_each_position_enqueued_once() {
        let maze = Maze::from_ascii(
            "
            ....
            ....
            ....
            ",
            Position::new(0, 0),
            Position::new(9, 9),
        );
        let mut explored = Vec::new();
        let traversal = breadth_first(&maze, &mut explored);

        assert!(traversal.goal.is_none());
        assert_eq!(traversal.arena.len(), 12);
        assert_eq!(explored.len(), 12);
    }
}
