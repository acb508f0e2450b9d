use super::Traversal;
use super::node::NodeArena;
use crate::collections::FxHashSet;
use crate::geometry::Position;
use crate::maze::Maze;


/// Depth-First Search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// LIFO frontier, positions marked visited when pushed.
/// Finds a valid path when one exists, not necessarily the shortest.
pub(crate) fn depth_first(maze: &Maze, explored: &mut Vec<Position>) -> Traversal {

    let mut arena = NodeArena::new();
    let start = arena.root(maze.start(), 0);

    let mut frontier = vec![start];
    let mut visited = FxHashSet::default();
    visited.insert(maze.start());

    while let Some(current) = frontier.pop() {
        let position = arena[current].position;
        explored.push(position);

        if position == maze.goal() {
            return Traversal { arena, goal: Some(current) };
        }

        // push in reverse so successors pop in canonical order
        let neighbors: Vec<Position> = maze.neighbors(position).collect();
        for neighbor in neighbors.into_iter().rev() {
            if visited.insert(neighbor) {
                let child = arena.child(current, neighbor, 0);
                frontier.push(child);
            }
        }
    }

    Traversal { arena, goal: None }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::node::reconstruct_path;

    #[test]
    fn test_dives_right_first() {
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
        let traversal = depth_first(&maze, &mut explored);

        assert_eq!(explored, vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
        ]);

        let goal = traversal.goal.unwrap();
        assert_eq!(reconstruct_path(&traversal.arena, goal), explored);
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // right branch is a dead end, goal is down
        let maze = Maze::from_ascii(
            "
            ...
            .##
            ...
            ",
            Position::new(0, 0),
            Position::new(2, 2),
        );
        let mut explored = Vec::new();
        let traversal = depth_first(&maze, &mut explored);

        let goal = traversal.goal.unwrap();
        assert_eq!(explored[..3], [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]);
        assert_eq!(reconstruct_path(&traversal.arena, goal).len(), 5);
    }
}
