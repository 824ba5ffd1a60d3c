use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The four axis families a winning line can lie on: horizontal, vertical,
/// and the two diagonals. The opposite of each direction is scanned too.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column accepts a drop iff it is in range and its top cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Drop a piece in a column, returning the row where it landed.
    /// On a full or out-of-range column nothing is written.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_move(col))
    }

    /// Check if the piece at (row, col) completes a line of four or more.
    ///
    /// Only the lines through the given position are examined, never the
    /// whole board; a legal game can only create a new line through the
    /// newest piece. For each axis the run is counted outward in both
    /// directions, minus one because both scans count the pivot.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            self.run_length(row, col, cell, dr, dc) + self.run_length(row, col, cell, -dr, -dc)
                - 1
                >= 4
        })
    }

    /// Count consecutive `cell` pieces starting at (row, col) and stepping by
    /// (dr, dc) until the edge of the board or a different cell.
    fn run_length(&self, row: usize, col: usize, cell: Cell, dr: i32, dc: i32) -> usize {
        let mut count = 0;
        let mut r = row as i32;
        let mut c = col as i32;
        while r >= 0
            && r < ROWS as i32
            && c >= 0
            && c < COLS as i32
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
