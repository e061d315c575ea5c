//! Random perfect-maze generation.
//!
//! This module contains the maze generator. It carves passages out of a grid full of walls with a
//! randomized depth-first search that always moves two cells at a time, so corridors stay one
//! cell wide and are always separated by a wall.

use log::{debug, trace};
use rand::{seq::SliceRandom as _, Rng};
use thiserror::Error;

use crate::grid::{Cell, Coord, Grid};

/// Maze side length used for difficulty tiers without a dedicated size.
pub const FALLBACK_SIZE: usize = 10;

/// Returns the maze side length for a difficulty tier.
///
/// Tiers 1, 2 and 3 map to 15, 25 and 35 cells per side. Any other tier falls back to
/// [`FALLBACK_SIZE`].
#[must_use]
pub const fn size_for_tier(tier: i32) -> usize {
    match tier {
        1 => 15,
        2 => 25,
        3 => 35,
        _ => FALLBACK_SIZE,
    }
}

/// Requested maze size cannot hold a single cell.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid maze size {size}: a maze needs at least one cell per side")]
pub struct InvalidSizeError {
    /// The rejected side length.
    pub size: usize,
}

/// Axis-aligned carving direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Every direction, in the order they are handed to the shuffle.
    const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta of a single step in this direction.
    const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Pending work for one carved cell: its directions in shuffled order and how many were tried.
struct Frame {
    /// Cell this frame carves from.
    coord: Coord,
    /// Directions in the order they will be tried.
    directions: [Direction; 4],
    /// Index of the next direction to try.
    next: usize,
}

impl Frame {
    /// Builds the frame for a cell that has just been carved, shuffling its directions.
    fn enter<R: Rng + ?Sized>(coord: Coord, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        Self {
            coord,
            directions,
            next: 0,
        }
    }

    /// Hands out the next untried direction.
    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).copied()?;
        self.next += 1;

        Some(direction)
    }
}

/// A generated maze: its grid and the goal cell the player has to reach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Wall and passage layout.
    grid: Grid,
    /// Cell that wins the round, always the bottom-right corner.
    goal: Coord,
}

impl Maze {
    /// Cell the player starts from.
    pub const START: Coord = Coord::new(0, 0);

    /// Generates a maze of side `size`, drawing every random choice from `rng`.
    ///
    /// See [`generate`] for the algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `size` is zero.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, InvalidSizeError> {
        generate(size, rng)
    }

    /// Wraps an existing grid, placing the goal in its bottom-right corner.
    ///
    /// The grid is used as is; nothing forces the start or the goal to be passages.
    #[must_use]
    pub const fn from_grid(grid: Grid) -> Self {
        let goal = Coord::new(
            grid.size().saturating_sub(1),
            grid.size().saturating_sub(1),
        );

        Self { grid, goal }
    }

    /// Returns the wall and passage layout.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the goal cell.
    #[must_use]
    pub const fn goal(&self) -> Coord {
        self.goal
    }

    /// Returns the side length of the maze.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Generates a perfect maze of side `size` rooted at the top-left cell.
///
/// Every cell starts as a wall. A depth-first search then runs from `(0, 0)`: each cell it enters
/// becomes a passage and gets its four directions shuffled with `rng`. The directions are tried in
/// that order; when both the neighbour one step away and the cell two steps away are in bounds and
/// still walls, the neighbour is carved and the search enters the cell two steps away. The search
/// keeps an explicit stack, so large sizes never run into call-depth limits.
///
/// The bottom-right goal is forced to a passage afterwards. On even sizes the carve never lands on
/// it, so one of the two cells between it and the nearest junction is carved as well, keeping the
/// maze connected and free of loops.
///
/// Given an `rng` in the same state, the returned maze is identical on every call.
///
/// # Errors
///
/// Returns [`InvalidSizeError`] if `size` is zero.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Maze, InvalidSizeError> {
    if size == 0 {
        return Err(InvalidSizeError { size });
    }

    let mut grid = Grid::filled(size, Cell::Wall);
    carve(&mut grid, Maze::START, rng);

    let goal = Coord::new(size - 1, size - 1);
    grid.set(goal, Cell::Passage);
    if !grid.path_exists(Maze::START, goal) {
        link_goal(&mut grid, goal, rng);
    }

    debug!(
        "generated {size}x{size} maze with {} passages",
        grid.passages().count()
    );
    trace!("maze layout:\n{grid}");

    Ok(Maze { grid, goal })
}

/// Runs the two-step randomized depth-first carve from `start`.
fn carve<R: Rng + ?Sized>(grid: &mut Grid, start: Coord, rng: &mut R) {
    let size = grid.size();

    grid.set(start, Cell::Passage);
    let mut stack = vec![Frame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(direction) = frame.next_direction() else {
            let _ = stack.pop();
            continue;
        };

        let (row_delta, col_delta) = direction.delta();
        let from = frame.coord;
        let Some(step) = from.offset(row_delta, col_delta, size) else {
            continue;
        };
        let Some(jump) = from.offset(row_delta * 2, col_delta * 2, size) else {
            continue;
        };

        if grid.is_wall(step) && grid.is_wall(jump) {
            grid.set(step, Cell::Passage);
            grid.set(jump, Cell::Passage);
            stack.push(Frame::enter(jump, rng));
        }
    }
}

/// Joins a goal left isolated by the carve to the junction diagonally above-left of it.
///
/// The carve only lands on cells whose coordinates are both even, so on even sizes the goal sits
/// next to two cells that are always walls, each of which touches the junction at
/// `(size - 2, size - 2)`. One of them is picked with `rng` and carved.
fn link_goal<R: Rng + ?Sized>(grid: &mut Grid, goal: Coord, rng: &mut R) {
    let size = grid.size();
    let (Some(above), Some(left)) = (goal.offset(-1, 0, size), goal.offset(0, -1, size)) else {
        return;
    };

    let link = if rng.gen_bool(0.5) { above } else { left };
    grid.set(link, Cell::Passage);

    debug!("goal {goal} was cut off by the carve, linked through {link}");
}
