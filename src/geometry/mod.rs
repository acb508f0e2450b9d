use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;


/// Manhattan distance
/// Computed in i128 so extreme coordinates cannot overflow, saturating at u64::MAX
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> u64
where
    T: ToPrimitive,
    {
    let axis = |a: T, b: T| match (a.to_i128(), b.to_i128()) {
        (Some(a), Some(b)) => u64::try_from(a.abs_diff(b)).unwrap_or(u64::MAX),
        _ => u64::MAX,
    };
    axis(x1, x2).saturating_add(axis(y1, y2))
}


/// Cell coordinates on a maze grid
/// Persisted as a two element array `[x, y]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Position shifted by (dx, dy), None if either coordinate leaves the i32 range
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }

    /// Manhattan distance to another position, saturating at u32::MAX
    /// Admissible and consistent for 4-directional unit-cost moves
    pub fn manhattan(&self, other: &Position) -> u32 {
        u32::try_from(manhattan_distance(self.x, self.y, other.x, other.y)).unwrap_or(u32::MAX)
    }

    /// True when `other` is exactly one horizontal or vertical step away
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(0, 0, 3, 4), 7);
        assert_eq!(manhattan_distance(-2, 5, 1, 1), 7);
        assert_eq!(Position::new(4, 4).manhattan(&Position::new(0, 0)), 8);
    }

    #[test]
    fn test_manhattan_distance_at_i32_limits() {
        assert_eq!(manhattan_distance(i32::MAX, 0, i32::MIN, 0), u32::MAX as u64);
        assert_eq!(
            manhattan_distance(i32::MAX, i32::MAX, i32::MIN, i32::MIN),
            2 * u32::MAX as u64
        );
        assert_eq!(Position::new(i32::MAX, i32::MAX).manhattan(&Position::new(i32::MIN, i32::MIN)), u32::MAX);
    }

    #[test]
    fn test_checked_offset() {
        assert_eq!(Position::new(1, 1).checked_offset(-1, 2), Some(Position::new(0, 3)));
        assert_eq!(Position::new(i32::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Position::new(0, i32::MIN).checked_offset(0, -1), None);
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(2, 2);
        assert!(p.is_adjacent(&p.offset(1, 0)));
        assert!(p.is_adjacent(&p.offset(0, -1)));
        assert!(!p.is_adjacent(&p.offset(1, 1)));
        assert!(!p.is_adjacent(&p));
    }

    #[test]
    fn test_position_serializes_as_array() {
        let json = serde_json::to_string(&Position::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");

        let back: Position = serde_json::from_str("[5, 1]").unwrap();
        assert_eq!(back, Position::new(5, 1));
    }
}
