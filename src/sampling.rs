//! Pointer sampling.
//!
//! This module converts raw pointer positions into grid cells. A pointer position is expressed in
//! whatever unit the front end reports (pixels, terminal columns and rows) and is divided by the
//! size of one maze cell in that same unit.

use std::num::NonZeroU16;

use crate::grid::Coord;

/// Side of a maze cell, in pixels, on a pixel-addressed play surface.
pub const REFERENCE_CELL_PIXELS: u16 = 28;

/// Grid cell under the pointer.
///
/// Unlike [`Coord`] this may lie outside the grid, including at negative positions, when the
/// pointer is left of or above the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerCell {
    /// Row under the pointer.
    pub row: i64,
    /// Column under the pointer.
    pub col: i64,
}

impl PointerCell {
    /// Builds a pointer cell from a row and a column.
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns the grid coordinate of this cell if it lies inside a grid of side `size`.
    #[must_use]
    pub fn to_coord(self, size: usize) -> Option<Coord> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;

        (row < size && col < size).then_some(Coord::new(row, col))
    }
}

impl From<Coord> for PointerCell {
    fn from(coord: Coord) -> Self {
        Self {
            row: i64::try_from(coord.row).unwrap_or(i64::MAX),
            col: i64::try_from(coord.col).unwrap_or(i64::MAX),
        }
    }
}

/// Size of one maze cell in pointer units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellScale {
    /// Horizontal extent of a cell.
    width: NonZeroU16,
    /// Vertical extent of a cell.
    height: NonZeroU16,
}

impl CellScale {
    /// Cell size on a pixel surface.
    pub const PIXELS: Self = Self::square(match NonZeroU16::new(REFERENCE_CELL_PIXELS) {
        Some(side) => side,
        None => NonZeroU16::MIN,
    });

    /// Cell size on a terminal: two columns by one row, which looks roughly square.
    pub const TERMINAL: Self = Self {
        width: match NonZeroU16::new(2) {
            Some(width) => width,
            None => NonZeroU16::MIN,
        },
        height: NonZeroU16::MIN,
    };

    /// Builds a scale from a width and a height, or [`None`] if either is zero.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Option<Self> {
        match (NonZeroU16::new(width), NonZeroU16::new(height)) {
            (Some(width), Some(height)) => Some(Self { width, height }),
            _ => None,
        }
    }

    /// Builds a scale for square cells.
    #[must_use]
    pub const fn square(side: NonZeroU16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the horizontal extent of a cell.
    #[must_use]
    pub const fn width(self) -> u16 {
        self.width.get()
    }

    /// Returns the vertical extent of a cell.
    #[must_use]
    pub const fn height(self) -> u16 {
        self.height.get()
    }

    /// Maps a position relative to the board origin to the cell under it.
    ///
    /// The division rounds towards negative infinity, so a position one unit left of the board
    /// lands in column -1 rather than column 0.
    #[must_use]
    pub fn cell_at(self, x: i64, y: i64) -> PointerCell {
        PointerCell {
            row: y.div_euclid(i64::from(self.height.get())),
            col: x.div_euclid(i64::from(self.width.get())),
        }
    }
}

impl Default for CellScale {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// Region of the screen where the board is drawn.
///
/// This tells apart pointer positions that belong to the board from those that mean the pointer
/// has left it, and converts the former into cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaySurface {
    /// Horizontal position of the top-left corner of cell `(0, 0)`.
    origin_x: i64,
    /// Vertical position of the top-left corner of cell `(0, 0)`.
    origin_y: i64,
    /// Side of the maze, in cells.
    size: usize,
    /// Size of one cell.
    scale: CellScale,
}

impl PlaySurface {
    /// Describes a board of `size` cells per side whose top-left corner is at the given origin.
    #[must_use]
    pub const fn new(origin_x: i64, origin_y: i64, size: usize, scale: CellScale) -> Self {
        Self {
            origin_x,
            origin_y,
            size,
            scale,
        }
    }

    /// Returns the cell under a raw pointer position.
    #[must_use]
    pub fn sample(&self, x: i64, y: i64) -> PointerCell {
        self.scale.cell_at(x - self.origin_x, y - self.origin_y)
    }

    /// Returns `true` if the raw pointer position lies on the board.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.sample(x, y).to_coord(self.size).is_some()
    }
}
