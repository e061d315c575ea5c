//! Square cell grid shared by the generator and the round state machine.
//!
//! This module contains the [`Grid`] type holding the wall and passage layout of a maze, the
//! [`Coord`] type used to index into it, and the plain-text format used for logging and test
//! fixtures.

use std::{collections::VecDeque, fmt, str::FromStr};

use thiserror::Error;

/// Kind of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Cell the pointer must never touch.
    Wall,
    /// Traversable cell.
    Passage,
}

impl Cell {
    /// Character used for this cell in the text format.
    const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Passage => '.',
        }
    }
}

/// In-grid coordinate.
///
/// Rows grow downwards and columns grow to the right, so `(0, 0)` is the top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coord {
    /// Builds a coordinate from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate displaced by the given deltas, if it stays inside a grid of side
    /// `size`.
    #[must_use]
    pub fn offset(self, row_delta: isize, col_delta: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(row_delta)?;
        let col = self.col.checked_add_signed(col_delta)?;

        (row < size && col < size).then_some(Self { row, col })
    }

    /// Returns the in-bounds axis neighbours of this coordinate in a grid of side `size`.
    pub(crate) fn neighbours(self, size: usize) -> impl Iterator<Item = Self> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(row_delta, col_delta)| self.offset(row_delta, col_delta, size))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Square grid of maze cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Side length of the grid.
    size: usize,
    /// Cells, `size * size` of them, row after row.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid of side `size` with every cell set to `cell`.
    #[must_use]
    pub fn filled(size: usize, cell: Cell) -> Self {
        Self {
            size,
            cells: vec![cell; size * size],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Maps a coordinate to its index in the backing storage, if it is in bounds.
    const fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Returns the cell at `coord`, or [`None`] if the coordinate is out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Overwrites the cell at `coord`. Out-of-bounds coordinates are ignored.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = self
            .index(coord)
            .and_then(|index| self.cells.get_mut(index))
        {
            *slot = cell;
        }
    }

    /// Returns `true` if `coord` is in bounds and holds a passage.
    #[must_use]
    pub fn is_passage(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Passage)
    }

    /// Returns `true` if `coord` is in bounds and holds a wall.
    #[must_use]
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Wall)
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `chunks` panics on a zero chunk size; an empty grid has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Iterates over the coordinates of every passage cell in row-major order.
    pub fn passages(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Passage)
                .map(move |(col, _)| Coord::new(row, col))
        })
    }

    /// Counts the pairs of axis-adjacent passage cells.
    ///
    /// Together with [`Grid::passages`] this tells whether the passages form a tree: a connected
    /// set of `n` passages is cycle-free exactly when it has `n - 1` such pairs.
    #[must_use]
    pub fn passage_links(&self) -> usize {
        self.passages()
            .map(|coord| {
                [coord.offset(0, 1, self.size), coord.offset(1, 0, self.size)]
                    .into_iter()
                    .flatten()
                    .filter(|next| self.is_passage(*next))
                    .count()
            })
            .sum()
    }

    /// Returns the passage cells reachable from `from` through axis moves, `from` included.
    ///
    /// The result is empty when `from` is not a passage.
    #[must_use]
    pub fn reachable_from(&self, from: Coord) -> Vec<Coord> {
        if !self.is_passage(from) {
            return Vec::new();
        }

        let mut seen = vec![false; self.cells.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([from]);
        if let Some(flag) = self.index(from).and_then(|index| seen.get_mut(index)) {
            *flag = true;
        }

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for next in current.neighbours(self.size) {
                let Some(flag) = self.index(next).and_then(|index| seen.get_mut(index)) else {
                    continue;
                };
                if !*flag && self.is_passage(next) {
                    *flag = true;
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Returns `true` if a path of passage cells joins `from` and `to`.
    #[must_use]
    pub fn path_exists(&self, from: Coord, to: Coord) -> bool {
        self.is_passage(to) && self.reachable_from(from).contains(&to)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(formatter)?;
            }
            for cell in row {
                write!(formatter, "{}", cell.symbol())?;
            }
        }

        Ok(())
    }
}

/// Failure to read a grid from its text format.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    /// The text holds no rows.
    #[error("grid text is empty")]
    Empty,
    /// A character other than `#` or `.` was found.
    #[error("unexpected character {found:?} at row {row}, column {col}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Row of the character.
        row: usize,
        /// Column of the character.
        col: usize,
    },
    /// A row does not have as many cells as there are rows.
    #[error("row {row} has {len} cells but the grid has {size} rows")]
    NotSquare {
        /// Row with the wrong length.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the text.
        size: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Reads a grid where `#` is a wall and `.` a passage, one row per line.
    ///
    /// Surrounding whitespace on each line is ignored, and so are blank lines.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let size = lines.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(ParseGridError::NotSquare { row, len, size });
            }
            for (col, found) in line.chars().enumerate() {
                cells.push(match found {
                    '#' => Cell::Wall,
                    '.' => Cell::Passage,
                    _ => return Err(ParseGridError::InvalidCharacter { found, row, col }),
                });
            }
        }

        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses a fixture that is known to be well formed.
    fn fixture(text: &str) -> Grid {
        text.parse().expect("fixture should parse")
    }

    #[test]
    fn test_filled_grid() {
        let grid = Grid::filled(3, Cell::Wall);

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.passages().next().is_none());
        assert_eq!(grid.get(Coord::new(2, 2)), Some(Cell::Wall));
        assert_eq!(grid.get(Coord::new(3, 0)), None);
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut grid = Grid::filled(2, Cell::Wall);
        grid.set(Coord::new(1, 0), Cell::Passage);
        grid.set(Coord::new(5, 5), Cell::Passage);

        assert!(grid.is_passage(Coord::new(1, 0)));
        assert_eq!(grid.passages().count(), 1);
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        let origin = Coord::new(0, 0);

        assert_eq!(origin.offset(-1, 0, 5), None);
        assert_eq!(origin.offset(0, 2, 5), Some(Coord::new(0, 2)));
        assert_eq!(Coord::new(4, 4).offset(1, 0, 5), None);
    }

    #[test]
    fn test_neighbours_of_corner() {
        let neighbours: Vec<Coord> = Coord::new(0, 0).neighbours(3).collect();

        assert_eq!(neighbours, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn test_display_round_trips_fixture() {
        let text = "#.#\n...\n#.#";
        let grid = fixture(text);

        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let grid = fixture("\n  ..\n  .#\n\n");

        assert_eq!(grid.size(), 2);
        assert!(grid.is_wall(Coord::new(1, 1)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "..\n.x".parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter {
                found: 'x',
                row: 1,
                col: 1
            })
        );
        assert_eq!(
            "...\n..\n...".parse::<Grid>(),
            Err(ParseGridError::NotSquare {
                row: 1,
                len: 2,
                size: 3
            })
        );
    }

    #[test]
    fn test_reachability() {
        let grid = fixture(
            "
            ..#
            #.#
            #..
            ",
        );

        assert!(grid.path_exists(Coord::new(0, 0), Coord::new(2, 2)));
        assert_eq!(grid.reachable_from(Coord::new(0, 0)).len(), 5);
        assert!(grid.reachable_from(Coord::new(0, 2)).is_empty());
    }

    #[test]
    fn test_unreachable_island() {
        let grid = fixture(
            "
            ..#
            ###
            #..
            ",
        );

        assert!(!grid.path_exists(Coord::new(0, 0), Coord::new(2, 2)));
    }

    #[test]
    fn test_passage_links_detects_cycle() {
        let tree = fixture(
            "
            ...
            #.#
            #..
            ",
        );
        let looped = fixture(
            "
            ..
            ..
            ",
        );

        assert_eq!(tree.passage_links(), tree.passages().count() - 1);
        assert_eq!(looped.passage_links(), 4);
    }
}
