//! Grid maze generation and classical graph search.
//!
//! A [`Maze`] is searched by one of four [`Strategy`] kinds (BFS, DFS, Greedy
//! Best-First, A*). A [`Search`] run records the exploration order, the final
//! path and [`Metrics`] for an external consumer such as a renderer.
//!
//! ```
//! use maze_search::{Maze, Search, Strategy};
//!
//! let maze = Maze::generate_random(21, 21).unwrap();
//! let mut search = Search::new(Strategy::AStar);
//! assert!(search.search(&maze));
//! assert_eq!(search.path().first(), Some(&maze.start()));
//! ```

pub mod errors;
pub mod geometry;
pub mod maze;
pub mod search;
mod collections;

pub use errors::{MazeError, Result};
pub use geometry::Position;
pub use maze::{Cell, GeneratorConfig, Maze};
pub use search::{Metrics, Search, Strategy, compare};
