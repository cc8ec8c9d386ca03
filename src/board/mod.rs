pub mod cell;
pub mod coordinate;
pub mod error;
pub mod player;

mod display;
mod zobrist;


use smallvec::SmallVec;

pub use self::cell::Cell;
pub use self::coordinate::Coord;
pub use self::error::BoardError;
pub use self::player::Player;

use self::zobrist::Zobrist;

/// A list of board coordinates. Kept inline for the board sizes the engine
/// is built for; larger boards spill to the heap.
pub type CoordList = SmallVec<[Coord; 32]>;

/// Represents the state of an m,n,k board: a `size` x `size` grid of cells,
/// where a run of `win_length` consecutive marks along a row, column or
/// diagonal wins the game.
///
/// The board keeps a zobrist hash of its contents in sync with every
/// mutation, so `position_hash` is a cheap read during search.
#[derive(Clone)]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
    win_length: usize,
    zobrist: Zobrist,
    position_hash: u64,
}

impl Board {
    /// Creates an all-empty board. A `win_length` outside `1..=size` is a
    /// caller bug and panics.
    pub fn new(size: usize, win_length: usize) -> Self {
        assert!(win_length >= 1, "win length must be at least 1");
        assert!(
            win_length <= size,
            "win length {} exceeds board size {}",
            win_length,
            size
        );

        Self {
            cells: vec![Cell::Empty; size * size],
            size,
            win_length,
            zobrist: Zobrist::new(size),
            position_hash: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::CoordinateOutOfRangeError {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index_of(row, col).map(|index| self.cells[index])
    }

    /// Writes `cell` at the given coordinate, overwriting whatever was
    /// there, including clearing a mark back to `Cell::Empty`. The search
    /// relies on this to place and undo marks freely; during real play the
    /// caller is responsible for only placing into empty cells.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let index = self.index_of(row, col)?;

        if let Some(player) = self.cells[index].player() {
            self.position_hash ^= self.zobrist.key(index, player);
        }
        if let Some(player) = cell.player() {
            self.position_hash ^= self.zobrist.key(index, player);
        }
        self.cells[index] = cell;

        Ok(())
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.get(row, col).map(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &cell)| (Coord::new(index / size, index % size), cell))
    }

    /// All empty cells in row-major order. Doubles as the move list for the
    /// search and as the "untouched board" probe (length `size * size`).
    pub fn empty_cells(&self) -> CoordList {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Returns true if `player` has a run of at least `win_length`
    /// consecutive marks along any row, column, or diagonal.
    pub fn check_win(&self, player: Player) -> bool {
        let mark = Cell::from(player);
        let n = self.size;
        let k = self.win_length;

        // Rows
        for row in 0..n {
            for col in 0..=(n - k) {
                if (0..k).all(|i| self.cells[row * n + col + i] == mark) {
                    return true;
                }
            }
        }

        // Columns
        for col in 0..n {
            for row in 0..=(n - k) {
                if (0..k).all(|i| self.cells[(row + i) * n + col] == mark) {
                    return true;
                }
            }
        }

        // Down-right diagonals
        for row in 0..=(n - k) {
            for col in 0..=(n - k) {
                if (0..k).all(|i| self.cells[(row + i) * n + col + i] == mark) {
                    return true;
                }
            }
        }

        // Down-left diagonals
        for row in 0..=(n - k) {
            for col in (k - 1)..n {
                if (0..k).all(|i| self.cells[(row + i) * n + col - i] == mark) {
                    return true;
                }
            }
        }

        false
    }

    /// The zobrist hash of the current contents. Structural: boards with
    /// identical cells hash identically however they were reached.
    pub fn position_hash(&self) -> u64 {
        self.position_hash
    }
}

// Equality is structural: same size, same cell contents. The win length is
// game configuration, not position state, and does not participate.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}
