//! # Board State
//!
//! The grid data model for Connect Four: a rows x cols matrix of cells,
//! row 0 at the top, pieces obeying gravity within a column.
//!
//! The board is pure data plus queries. Turn order, win detection and the
//! computer opponent live in their own modules and operate on a board they
//! borrow from the [`GameController`](crate::game_controller::GameController).

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The human player (moves come from the presentation layer)
    Human,
    /// The computer opponent (moves chosen by the heuristic)
    Computer,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// A single grid cell.
///
/// `owner` only ever transitions from `None` to `Some(player)` during a game;
/// it goes back to `None` only on a full-board reset or when the computer
/// opponent undoes one of its hypothetical scratch placements.
///
/// `winning` and `highlight` are cosmetic bookkeeping for the renderer: the
/// cells of a detected four-in-a-row, and the landing cell the current
/// selection targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    owner: Option<Player>,
    winning: bool,
    highlight: Option<Player>,
}

impl Cell {
    /// The side occupying this cell, if any.
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Whether this cell is part of a detected four-in-a-row.
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    /// The side this cell is currently highlighted for, if any.
    pub fn highlight(&self) -> Option<Player> {
        self.highlight
    }
}

/// The game grid.
///
/// Stored row-major with row 0 at the top, so the "bottom" of a column is
/// the highest row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row * self.cols + col]
    }

    /// The row a piece dropped into `col` would land in: the lowest
    /// unoccupied cell of the column.
    ///
    /// Returns `None` when the column is full or out of range, so callers
    /// can treat both as "not playable".
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.cell(row, col).owner.is_none())
    }

    /// Occupies a cell.
    ///
    /// The cell must be unoccupied; a violation is an engine bug, not a
    /// player-facing condition, and fails fast.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        let cell = self.cell_mut(row, col);
        assert!(
            cell.owner.is_none(),
            "cell ({row}, {col}) is already occupied"
        );
        cell.owner = Some(player);
    }

    /// Returns a cell to the unoccupied state.
    ///
    /// Used only to undo the computer opponent's scratch placements and by
    /// [`reset`](Board::reset).
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cell_mut(row, col).owner = None;
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.owner.is_some())
    }

    /// Reinitializes every cell: unoccupied, no winning or highlight flags.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Marks a cell as part of a winning run.
    pub fn mark_winning(&mut self, row: usize, col: usize) {
        self.cell_mut(row, col).winning = true;
    }

    /// Clears every winning flag.
    pub fn clear_winning(&mut self) {
        for cell in &mut self.cells {
            cell.winning = false;
        }
    }

    /// Highlights the landing cell of `col` for `player`, if the column is
    /// playable.
    pub fn set_highlight(&mut self, col: usize, player: Player) {
        if let Some(row) = self.landing_row(col) {
            self.cell_mut(row, col).highlight = Some(player);
        }
    }

    /// Clears every highlight.
    pub fn clear_highlights(&mut self) {
        for cell in &mut self.cells {
            cell.highlight = None;
        }
    }
}
