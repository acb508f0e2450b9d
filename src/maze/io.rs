use super::{Cell, Maze};
use crate::errors::Result;
use crate::geometry::Position;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;


/// On-disk layout: `{ "grid": [[0, 1, ...], ...], "start": [x, y], "goal": [x, y] }`
#[derive(Deserialize)]
struct MazeRecord {
    grid: Vec<Vec<Cell>>,
    start: Position,
    goal: Position,
}

#[derive(Serialize)]
struct MazeRecordRef<'a> {
    grid: &'a [Vec<Cell>],
    start: Position,
    goal: Position,
}


impl Maze {

    /// Parse a maze from JSON
    /// Only the JSON shape is checked; jagged rows or a walled start/goal are accepted
    pub fn from_json_str(json: &str) -> Result<Maze> {
        let record: MazeRecord = serde_json::from_str(json)?;
        let maze = Maze::new(record.grid, record.start, record.goal);

        for (label, p) in [("start", maze.start), ("goal", maze.goal)] {
            if !maze.is_valid_position(p.x, p.y) {
                log::warn!("loaded maze {label} {p} is not a free cell");
            }
        }

        Ok(maze)
    }

    /// Serialize the maze as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        let record = MazeRecordRef {
            grid: &self.rows,
            start: self.start,
            goal: self.goal,
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }

    /// Load a maze from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Maze> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Save the maze to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MazeError;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "grid": [[0, 0, 1], [1, 0, 0]],
            "start": [0, 0],
            "goal": [2, 1]
        }"#;
        let maze = Maze::from_json_str(json).unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 2);
        assert_eq!(maze.start(), Position::new(0, 0));
        assert_eq!(maze.goal(), Position::new(2, 1));
        assert_eq!(maze.cell(2, 0), Some(Cell::Wall));
        assert_eq!(maze.cell(1, 1), Some(Cell::Free));
    }

    #[test]
    fn test_load_accepts_unchecked_layouts() {
        // jagged rows, walled start, goal out of bounds
        let json = r#"{ "grid": [[1, 0, 0], [0]], "start": [0, 0], "goal": [9, 9] }"#;
        let maze = Maze::from_json_str(json).unwrap();
        assert!(!maze.is_valid_position(0, 0));
        assert!(!maze.is_valid_position(9, 9));
        assert!(maze.is_valid_position(0, 1));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let missing_goal = r#"{ "grid": [[0]], "start": [0, 0] }"#;
        assert!(matches!(Maze::from_json_str(missing_goal), Err(MazeError::Format(_))));

        let bad_position = r#"{ "grid": [[0]], "start": [0], "goal": [0, 0] }"#;
        assert!(matches!(Maze::from_json_str(bad_position), Err(MazeError::Format(_))));

        assert!(matches!(Maze::from_json_str("not json"), Err(MazeError::Format(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let maze = Maze::generate_with_rng(15, 9, &mut StdRng::seed_from_u64(3)).unwrap();
        let path = std::env::temp_dir().join(format!("maze-search-roundtrip-{}.json", std::process::id()));

        maze.save_to_file(&path).unwrap();
        let loaded = Maze::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, maze);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("maze-search-does-not-exist.json");
        assert!(matches!(Maze::load_from_file(path), Err(MazeError::Io(_))));
    }

    #[test]
    fn test_saved_layout() {
        let maze = Maze::from_ascii(".#\n..", Position::new(0, 0), Position::new(1, 1));
        let value: serde_json::Value = serde_json::from_str(&maze.to_json_string().unwrap()).unwrap();
        assert_eq!(value["grid"], serde_json::json!([[0, 1], [0, 0]]));
        assert_eq!(value["start"], serde_json::json!([0, 0]));
        assert_eq!(value["goal"], serde_json::json!([1, 1]));
    }
}
