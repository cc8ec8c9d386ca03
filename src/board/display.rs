use std::fmt;

use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f, "{}", vec!["-"; self.size].join("+"))?;
            }
            let cells: Vec<String> = (0..self.size)
                .map(|col| self.cells[row * self.size + col].to_string())
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} board (win length {}):", self.size, self.size, self.win_length)?;
        fmt::Display::fmt(self, f)
    }
}

/// Builds a board from a pictured position.
///
/// Cells are listed row by row using `X`, `O` and `.` for empty. The win
/// length defaults to the board size (classic tic-tac-toe) and can be
/// overridden with a `win_length = k;` prefix:
///
/// ```
/// use mnk::mnk_position;
///
/// let board = mnk_position! {
///     win_length = 3;
///     X . . .
///     . O . .
///     . . X .
///     . . . O
/// };
/// assert_eq!(4, board.size());
/// assert_eq!(3, board.win_length());
/// ```
#[macro_export]
macro_rules! mnk_position {
    (@build $win_length:expr; $($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let size = (1..=cells.len())
            .find(|n| n * n == cells.len())
            .expect("cell count must be a perfect square");
        let win_length: Option<usize> = $win_length;
        let mut board = $crate::board::Board::new(size, win_length.unwrap_or(size));
        for (i, &c) in cells.iter().enumerate() {
            let cell = match c {
                'X' => $crate::board::Cell::X,
                'O' => $crate::board::Cell::O,
                '.' => continue,
                _ => panic!("invalid character in mnk position: {}", c),
            };
            board.set(i / size, i % size, cell).unwrap();
        }
        board
    }};
    (win_length = $k:expr; $($cell:tt)*) => {
        $crate::mnk_position!(@build Some($k); $($cell)*)
    };
    ($($cell:tt)*) => {
        $crate::mnk_position!(@build None; $($cell)*)
    };
}
