use crate::consts;
use rand::Rng;
use thiserror::Error;

/// A grid-aligned position on the board, in pixels.  The coordinates of a
/// cell produced by a [`Board`] are always multiples of the board's scale.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// A position on (or off) the board in pixels, not necessarily grid-aligned
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    pub(crate) const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub(crate) fn offset(self, dx: f64, dy: f64) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point {
            x: f64::from(cell.x),
            y: f64::from(cell.y),
        }
    }
}

/// The playing field: a grid of `columns` × `rows` cells, each `scale` pixels
/// on a side, with the origin at the top-left corner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    scale: u16,
    columns: u16,
    rows: u16,
}

impl Board {
    /// Create a new board.  Callers are responsible for ensuring that all
    /// arguments are nonzero and that the pixel extents do not exceed
    /// [`MAX_EXTENT`][consts::MAX_EXTENT]; see [`Board::validate()`].
    pub(crate) const fn new(scale: u16, columns: u16, rows: u16) -> Board {
        Board {
            scale,
            columns,
            rows,
        }
    }

    /// Check that the board is nonempty and not unreasonably large
    pub(crate) fn validate(self) -> Result<Board, BoardError> {
        if self.scale == 0 {
            Err(BoardError::ZeroScale)
        } else if self.columns == 0 || self.rows == 0 {
            Err(BoardError::Empty)
        } else if u32::from(self.columns) * u32::from(self.scale) > consts::MAX_EXTENT
            || u32::from(self.rows) * u32::from(self.scale) > consts::MAX_EXTENT
        {
            Err(BoardError::TooLarge)
        } else {
            Ok(self)
        }
    }

    pub(crate) fn scale(self) -> u16 {
        self.scale
    }

    pub(crate) fn columns(self) -> u16 {
        self.columns
    }

    pub(crate) fn rows(self) -> u16 {
        self.rows
    }

    /// Width of the board in pixels
    pub(crate) fn width(self) -> i32 {
        i32::from(self.columns) * i32::from(self.scale)
    }

    /// Height of the board in pixels
    pub(crate) fn height(self) -> i32 {
        i32::from(self.rows) * i32::from(self.scale)
    }

    /// Return the cell at the given column & row
    pub(crate) fn cell(self, column: u16, row: u16) -> Cell {
        Cell {
            x: i32::from(column) * i32::from(self.scale),
            y: i32::from(row) * i32::from(self.scale),
        }
    }

    /// Test whether `point` lies within the board's pixel extents.  The top
    /// and left edges are inclusive; the bottom and right edges are not.
    pub(crate) fn contains(self, point: Point) -> bool {
        (0.0..f64::from(self.width())).contains(&point.x)
            && (0.0..f64::from(self.height())).contains(&point.y)
    }

    /// Choose a cell uniformly at random
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        let column = rng.random_range(0..self.columns);
        let row = rng.random_range(0..self.rows);
        self.cell(column, row)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(consts::SCALE, consts::COLUMNS, consts::ROWS)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardError {
    #[error("cell scale must be positive")]
    ZeroScale,
    #[error("board must have at least one column and one row")]
    Empty,
    #[error("board may not be more than {} pixels wide or tall", consts::MAX_EXTENT)]
    TooLarge,
}
