use crate::board::{Board, Player};

// This score is significantly larger than any positional value a board can
// accumulate, so a found win always dominates the heuristic.
pub const WIN_SCORE: i32 = 1000;

/// Returns the static score of the board from the perspective of `player`.
///
/// Used when the search hits its depth or fullness cutoff: every occupied
/// cell is worth the board size minus its manhattan distance to the center,
/// counted for `player` and against the opponent. Central control is the
/// proxy; the win length plays no part here. Terminal wins never reach this
/// function, the search scores those directly.
pub fn score(board: &Board, player: Player) -> i32 {
    let size = board.size() as i32;
    let center = size / 2;
    let mut score = 0;

    for (coord, cell) in board.cells() {
        let owner = match cell.player() {
            Some(owner) => owner,
            None => continue,
        };

        let center_distance =
            (coord.row as i32 - center).abs() + (coord.col as i32 - center).abs();
        let position_value = size - center_distance;

        if owner == player {
            score += position_value;
        } else {
            score -= position_value;
        }
    }

    score
}
