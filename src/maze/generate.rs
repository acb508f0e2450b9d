use super::{Cell, Maze};
use crate::errors::{MazeError, Result};
use crate::geometry::Position;
use crate::search::flood::distance_map;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};


/// Two-cell moves between lattice rooms, before shuffling
const CARVE_STEPS: [(i32, i32); 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];


/// Settings for random maze generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,  // forced odd
    pub height: usize, // forced odd
    pub seed: Option<u64>, // None draws from the thread rng
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 41,
            height: 41,
            seed: None,
        }
    }
}


impl Maze {

    /// Generate a maze from a config
    /// A seeded config always produces the same maze
    pub fn generate(config: &GeneratorConfig) -> Result<Maze> {
        match config.seed {
            Some(seed) => Self::generate_with_rng(config.width, config.height, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate_random(config.width, config.height),
        }
    }

    /// Generate a perfect maze with the thread rng
    pub fn generate_random(width: usize, height: usize) -> Result<Maze> {
        Self::generate_with_rng(width, height, &mut rand::rng())
    }

    /// Generate a perfect maze using randomized depth-first carving
    /// https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search
    ///
    /// Even dimensions are bumped to the next odd number. Rooms sit on odd
    /// coordinates and each one is opened exactly once, so the free cells form
    /// a spanning tree: one route between any two cells.
    /// Start is (1, 1) and goal is (width - 2, height - 2).
    pub fn generate_with_rng<R>(width: usize, height: usize, rng: &mut R) -> Result<Maze>
    where
        R: Rng + ?Sized,
    {
        let width = width | 1;
        let height = height | 1;

        // start and goal must be distinct rooms
        if width < 3 || height < 3 || (width == 3 && height == 3) {
            return Err(MazeError::DegenerateDimensions { width, height });
        }

        let mut rows = vec![vec![Cell::Wall; width]; height];
        let start = Position::new(1, 1);
        let goal = Position::new(width as i32 - 2, height as i32 - 2);

        let rooms = carve_passages(&mut rows, start, rng);

        rows[start.y as usize][start.x as usize] = Cell::Free;
        rows[goal.y as usize][goal.x as usize] = Cell::Free;

        let maze = Maze::new(rows, start, goal);

        if !distance_map(&maze, start).contains_key(&goal) {
            return Err(MazeError::Unsolvable);
        }

        log::debug!("generated {width}x{height} maze with {rooms} rooms");
        Ok(maze)
    }
}


/// Room being carved along with the directions still to try
struct Frame {
    room: Position,
    steps: [(i32, i32); 4],
    next: usize,
}

/// Depth-first carving with an explicit stack
/// Visits rooms in the same order as the recursive formulation
/// Returns the number of rooms opened
fn carve_passages<R>(rows: &mut [Vec<Cell>], origin: Position, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, Vec::len) as i32;

    let mut rooms = 0;
    let mut stack = vec![open_room(rows, origin, rng, &mut rooms)];

    while let Some(frame) = stack.last_mut() {

        // all directions tried - backtrack
        if frame.next == frame.steps.len() {
            stack.pop();
            continue;
        }

        let (dx, dy) = frame.steps[frame.next];
        frame.next += 1;

        let room = frame.room;
        let target = room.offset(dx, dy);

        let in_bounds = (0..width).contains(&target.x) && (0..height).contains(&target.y);
        if in_bounds && rows[target.y as usize][target.x as usize] == Cell::Wall {
            // knock down the wall between the two rooms
            let wall = room.offset(dx / 2, dy / 2);
            rows[wall.y as usize][wall.x as usize] = Cell::Free;

            let next = open_room(rows, target, rng, &mut rooms);
            stack.push(next);
        }
    }

    rooms
}

fn open_room<R>(rows: &mut [Vec<Cell>], room: Position, rng: &mut R, rooms: &mut usize) -> Frame
where
    R: Rng + ?Sized,
{
    rows[room.y as usize][room.x as usize] = Cell::Free;
    *rooms += 1;

    let mut steps = CARVE_STEPS;
    steps.shuffle(rng);

    Frame { room, steps, next: 0 }
}
