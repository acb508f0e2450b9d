use crate::collections::FxIndexMap;
use crate::geometry::Position;
use crate::maze::Maze;

use indexmap::map::Entry::Vacant;


/// Type alias for the distance map built by the flood fill
/// The tuple contains (parent_index, distance) where:
/// - parent_index is the index of the parent position in the map (usize::MAX for the origin)
/// - distance is the number of steps from the origin
pub type DistanceMap = FxIndexMap<Position, (usize, u32)>;


/// Returns a full map of the component reachable from `origin`, with step distances
/// Plain breadth-first flood fill, independent of the search strategies
pub fn distance_map(maze: &Maze, origin: Position) -> DistanceMap {

    let mut map: DistanceMap = FxIndexMap::default();
    map.insert(origin, (usize::MAX, 0));

    // The map doubles as the FIFO queue: entries are appended in distance order
    let mut index = 0;
    while let Some((&position, &(_, distance))) = map.get_index(index) {
        for neighbor in maze.neighbors(position) {
            if let Vacant(e) = map.entry(neighbor) {
                e.insert((index, distance + 1));
            }
        }
        index += 1;
    }

    map
}

/// Number of steps on the shortest route from start to goal, None if unreachable
pub fn shortest_distance(maze: &Maze) -> Option<u32> {
    distance_map(maze, maze.start())
        .get(&maze.goal())
        .map(|&(_, distance)| distance)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_map() {
        let maze = Maze::from_ascii(
            "
            ..#
            ..#
            #..
            ",
            Position::new(0, 0),
            Position::new(2, 2),
        );
        let map = distance_map(&maze, maze.start());

        assert_eq!(map.len(), 6);
        assert_eq!(map[&Position::new(0, 0)].1, 0);
        assert_eq!(map[&Position::new(1, 1)].1, 2);
        assert_eq!(map[&Position::new(2, 2)].1, 4);
        assert_eq!(shortest_distance(&maze), Some(4));

        // parent links lead back to the origin
        let (parent, _) = map[&Position::new(2, 2)];
        let (parent_position, _) = map.get_index(parent).unwrap();
        assert_eq!(*parent_position, Position::new(1, 2));
    }

    #[test]
    fn test_unreachable_goal() {
        let maze = Maze::from_ascii(
            "
            .#.
            ",
            Position::new(0, 0),
            Position::new(2, 0),
        );
        assert_eq!(distance_map(&maze, maze.start()).len(), 1);
        assert_eq!(shortest_distance(&maze), None);
    }
}
