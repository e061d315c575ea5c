//! Win and loss state machine for a single round.
//!
//! This module contains the pure transition functions, [`classify`] and [`on_pointer_exit`], and
//! the [`Round`] value that pairs a maze with its current state for the front end to hold on to.

use log::info;
use rand::Rng;

use crate::{
    grid::{Cell, Coord, Grid},
    maze::{InvalidSizeError, Maze},
    sampling::PointerCell,
};

/// State of a round.
///
/// A round starts [`Playing`](GameState::Playing). Both other states are terminal: once reached,
/// nothing but starting a new round changes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The pointer is on the way to the goal.
    #[default]
    Playing,
    /// The pointer reached the goal.
    Won,
    /// The pointer touched a wall or left the board.
    Lost,
}

impl GameState {
    /// Returns `true` for [`Won`](GameState::Won) and [`Lost`](GameState::Lost).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Computes the state after the pointer was sampled over `pointer`.
///
/// Terminal states are returned unchanged. Samples outside the grid are ignored; leaving the board
/// is reported separately through [`on_pointer_exit`]. A wall loses the round, the goal wins it,
/// and any other passage keeps it going.
#[must_use]
pub fn classify(grid: &Grid, goal: Coord, state: GameState, pointer: PointerCell) -> GameState {
    if state.is_terminal() {
        return state;
    }

    let Some(coord) = pointer.to_coord(grid.size()) else {
        return state;
    };

    match grid.get(coord) {
        Some(Cell::Wall) => GameState::Lost,
        Some(Cell::Passage) if coord == goal => GameState::Won,
        Some(Cell::Passage) | None => state,
    }
}

/// Computes the state after the pointer left the board. Leaving while playing loses the round.
#[must_use]
pub const fn on_pointer_exit(state: GameState) -> GameState {
    match state {
        GameState::Playing => GameState::Lost,
        GameState::Won | GameState::Lost => state,
    }
}

/// A maze together with the state of the round being played on it.
///
/// Every round owns its maze; starting over means building a new [`Round`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// Maze of this round.
    maze: Maze,
    /// Current state.
    state: GameState,
}

impl Round {
    /// Starts a round on a freshly generated maze of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `size` is zero.
    pub fn start<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, InvalidSizeError> {
        let maze = Maze::generate(size, rng)?;
        info!("round started on a {size}x{size} maze");

        Ok(Self::new(maze))
    }

    /// Starts a round on an existing maze.
    #[must_use]
    pub const fn new(maze: Maze) -> Self {
        Self {
            maze,
            state: GameState::Playing,
        }
    }

    /// Returns the maze of this round.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Feeds a pointer sample into the round and returns the resulting state.
    pub fn pointer_moved(&mut self, pointer: PointerCell) -> GameState {
        let next = classify(self.maze.grid(), self.maze.goal(), self.state, pointer);
        self.transition(next, "pointer moved");

        self.state
    }

    /// Reports that the pointer left the board and returns the resulting state.
    pub fn pointer_exited(&mut self) -> GameState {
        let next = on_pointer_exit(self.state);
        self.transition(next, "pointer left the board");

        self.state
    }

    /// Stores `next`, logging the change if there is one.
    fn transition(&mut self, next: GameState, cause: &str) {
        if next != self.state {
            info!("round {:?} -> {next:?} ({cause})", self.state);
            self.state = next;
        }
    }
}
