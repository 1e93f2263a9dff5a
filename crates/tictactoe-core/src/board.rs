//! Board representation, sizing policy and win/draw evaluation.
//!
//! This module contains:
//! - Player symbols placed on the board
//! - The sizing policy deriving board dimensions from the player count
//! - The square board grid (row-major cells)
//! - Line enumeration and the win/draw evaluator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identifier (index into the roster, 0-4 for a 5-player game)
pub type PlayerId = u8;

/// Fewest players a game can be configured with
pub const MIN_PLAYERS: u8 = 2;

/// Most players a game can be configured with
pub const MAX_PLAYERS: u8 = 5;

/// Mark placed on the board, one per player, assigned by seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
    A,
    B,
    C,
}

impl Symbol {
    /// All symbols in seat order
    pub const ALL: [Symbol; 5] = [Symbol::X, Symbol::O, Symbol::A, Symbol::B, Symbol::C];

    /// Get the symbol for a player index
    pub fn for_player(id: PlayerId) -> Self {
        Self::ALL[id as usize % Self::ALL.len()]
    }

    /// Character drawn in the cell
    pub fn as_char(&self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Board dimensions derived from the number of players.
///
/// Two players get the classic 3x3 grid; every extra player widens the board,
/// so 3, 4 and 5 players play on 5x5, 6x6 and 7x7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDimensions {
    /// Number of rows (and columns)
    pub size: usize,
    /// Run length advertised to players. The evaluator only scores full lines.
    pub win_length: usize,
}

impl BoardDimensions {
    /// Sizing policy for a player count, clamped to the supported range
    pub fn for_players(player_count: u8) -> Self {
        let count = player_count.clamp(MIN_PLAYERS, MAX_PLAYERS) as usize;
        let size = if count == 2 { 3 } else { count + 2 };
        let win_length = if size >= 4 { 4 } else { 3 };
        Self { size, win_length }
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}

/// Outcome of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// No completed line and at least one empty cell
    InProgress,
    /// A full row, column or diagonal holds this symbol
    Winner(Symbol),
    /// Every cell is filled without a completed line
    Draw,
}

impl GameResult {
    /// Whether the result ends move acceptance
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Square game board, stored row-major.
///
/// ```text
///  0 | 1 | 2
/// -----------
///  3 | 4 | 5
/// -----------
///  6 | 7 | 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Symbol>>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create an empty board for the given dimensions
    pub fn with_dimensions(dimensions: BoardDimensions) -> Self {
        Self::new(dimensions.size)
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Option<Symbol>] {
        &self.cells
    }

    /// Symbol at a cell, `None` if the cell is empty or off the board
    pub fn get(&self, cell: usize) -> Option<Symbol> {
        self.cells.get(cell).copied().flatten()
    }

    /// Whether a cell exists and is still empty
    pub fn is_open(&self, cell: usize) -> bool {
        matches!(self.cells.get(cell), Some(None))
    }

    /// Indices of all empty cells
    pub fn open_cells(&self) -> Vec<usize> {
        (0..self.cells.len()).filter(|&cell| self.is_open(cell)).collect()
    }

    /// Write a symbol into an empty cell. Returns false if the cell is
    /// occupied or off the board; cells are never overwritten.
    pub fn place(&mut self, cell: usize, symbol: Symbol) -> bool {
        if !self.is_open(cell) {
            return false;
        }
        self.cells[cell] = Some(symbol);
        true
    }

    /// Whether every cell holds a symbol
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty every cell, keeping the size
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Candidate winning lines in evaluation order: rows top to bottom,
    /// columns left to right, main diagonal, anti-diagonal.
    ///
    /// Every line spans the whole board.
    pub fn lines(&self) -> Vec<Vec<usize>> {
        let n = self.size;
        let mut lines: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            lines.push((0..n).map(|col| row * n + col).collect());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| row * n + col).collect());
        }
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

        lines
    }

    /// Symbol holding every cell of the line, if any
    fn line_owner(&self, line: &[usize]) -> Option<Symbol> {
        let first = self.get(*line.first()?)?;
        line.iter()
            .all(|&cell| self.get(cell) == Some(first))
            .then_some(first)
    }

    /// Evaluate the board: first completed line wins, otherwise a full board
    /// is a draw.
    pub fn evaluate(&self) -> GameResult {
        if let Some(symbol) = self.lines().iter().find_map(|line| self.line_owner(line)) {
            return GameResult::Winner(symbol);
        }

        if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f, "{}", "-".repeat(self.size * 4 - 1))?;
            }
            for col in 0..self.size {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.get(row * self.size + col) {
                    Some(symbol) => write!(f, " {} ", symbol)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
