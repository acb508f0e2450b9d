use thiserror::Error;


/// Errors raised while building, loading or saving a maze
/// Searching never fails: an unreachable goal is reported as "not found"
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze file I/O failed: {0}")]
    Io(#[from] std::io::Error), // Unable to read or write the maze file

    #[error("malformed maze data: {0}")]
    Format(#[from] serde_json::Error), // JSON does not match the maze layout

    #[error("maze of {width}x{height} is too small to hold distinct start and goal cells")]
    DegenerateDimensions { width: usize, height: usize },

    #[error("generated maze has no route from start to goal")]
    Unsolvable,
}

pub type Result<T> = std::result::Result<T, MazeError>;
