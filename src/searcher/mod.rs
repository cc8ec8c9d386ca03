//! Minimax search with alpha-beta pruning.
//!
//! # Core Algorithm
//!
//! The searcher explores the game tree depth-first, mutating the board in
//! place and undoing each placement on the way back up, so one allocation
//! serves the whole search. Alpha-beta pruning maintains a window
//! [alpha, beta] of scores that still matter; once a node proves no better
//! than an already-found alternative, its remaining children are skipped.
//!
//! # Transposition Cache
//!
//! Positions reached via different move orders are structurally identical
//! and hash identically, so their fully-searched scores are cached by
//! position hash and reused on later encounters. The cache belongs to one
//! searcher and one player perspective; scores in it are meaningless to the
//! other side.
//!
//! # Terminal Scoring
//!
//! A won position scores `WIN_SCORE` plus the remaining depth budget, so
//! faster wins outrank slower ones and slower losses outrank faster ones.
//! Positions at the depth or fullness cutoff fall back to the static
//! heuristic in [`crate::evaluate`].

mod stats;
mod transposition_table;


use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::board::{Board, Cell, Coord, Player};
use crate::evaluate;

pub use self::stats::SearchStats;
pub use self::transposition_table::TranspositionTable;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// A chosen move and the minimax score backing it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveEvaluation {
    pub coord: Coord,
    pub score: i32,
}

/// Searches on behalf of one player. Two opposing engines are two
/// `Searcher` instances, each with its own cache and statistics.
pub struct Searcher {
    player: Player,
    opponent: Player,
    search_depth: u8,
    cache_enabled: bool,
    transposition_table: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher playing as `player`. A `search_depth` of zero is
    /// a caller bug and panics.
    pub fn new(player: Player, search_depth: u8, cache_enabled: bool) -> Self {
        assert!(search_depth >= 1, "search depth must be at least 1");

        Self {
            player,
            opponent: player.opposite(),
            search_depth,
            cache_enabled,
            transposition_table: TranspositionTable::new(),
            stats: SearchStats::new(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.cache_enabled = enabled;
    }

    /// Empties the transposition table; statistics are left untouched.
    /// Cached scores only stay meaningful while the game they were computed
    /// for is still in progress, so call this when starting a new game.
    pub fn clear_cache(&mut self) {
        self.transposition_table.clear();
    }

    /// Counters from the last completed `find_best_move` call.
    pub fn statistics(&self) -> &SearchStats {
        &self.stats
    }

    /// Finds the strongest move for this searcher's player on `board`.
    ///
    /// The board is mutated during the search and restored before
    /// returning; its observable state is unchanged. Returns
    /// `SearchError::NoAvailableMoves` on a full board.
    #[must_use = "search returns the best move found"]
    pub fn find_best_move(&mut self, board: &mut Board) -> Result<MoveEvaluation, SearchError> {
        self.stats.reset();
        let start = Instant::now();

        let candidates = board.empty_cells();
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        debug!(
            "searching for {} at depth {}, {} candidate moves",
            self.player,
            self.search_depth,
            candidates.len()
        );

        // Opening shortcut: on an untouched board the tree is at its widest
        // and the center is the strongest cell under the heuristic, so skip
        // the search entirely.
        if candidates.len() == board.size() * board.size() {
            let center = board.size() / 2;
            let evaluation = MoveEvaluation {
                coord: Coord::new(center, center),
                score: 0,
            };
            self.stats.record_result(evaluation.score, start.elapsed());
            return Ok(evaluation);
        }

        let own_mark = Cell::from(self.player);
        let mut best: Option<MoveEvaluation> = None;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for coord in candidates {
            board
                .set(coord.row, coord.col, own_mark)
                .expect("empty cell coordinates are always in range");

            let score = self.minimax(
                board,
                self.search_depth - 1,
                alpha,
                beta,
                self.opponent,
                false,
            );

            board
                .set(coord.row, coord.col, Cell::Empty)
                .expect("empty cell coordinates are always in range");

            debug!("candidate {} scored {}", coord, score);

            // Strictly greater: on a tie the earlier row-major move stands.
            if best.map_or(true, |b| score > b.score) {
                best = Some(MoveEvaluation { coord, score });
            }
            alpha = alpha.max(score);
        }

        let best = best.expect("at least one candidate was scored");
        self.stats.record_result(best.score, start.elapsed());

        Ok(best)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        current_player: Player,
        maximizing: bool,
    ) -> i32 {
        self.stats.count_visited_node();

        // Faster wins score higher; slower losses score higher than faster
        // ones, so a lost engine still plays for the longest defense.
        if board.check_win(self.player) {
            return evaluate::WIN_SCORE + depth as i32;
        }
        if board.check_win(self.opponent) {
            return -(evaluate::WIN_SCORE + depth as i32);
        }
        if board.is_full() || depth == 0 {
            return evaluate::score(board, self.player);
        }

        let hash = board.position_hash();
        if self.cache_enabled {
            if let Some(score) = self.transposition_table.probe(hash) {
                self.stats.count_cache_hit();
                return score;
            }
            self.stats.count_cache_miss();
        }

        let moves = board.empty_cells();
        self.stats.count_generated_nodes(moves.len());

        let mark = Cell::from(current_player);
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for coord in moves {
            board
                .set(coord.row, coord.col, mark)
                .expect("empty cell coordinates are always in range");

            let score = self.minimax(
                board,
                depth - 1,
                alpha,
                beta,
                current_player.opposite(),
                !maximizing,
            );

            board
                .set(coord.row, coord.col, Cell::Empty)
                .expect("empty cell coordinates are always in range");

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        if self.cache_enabled {
            // Every placement above was undone, so the board is back at this
            // node's own position and `hash` still identifies it.
            self.transposition_table.store(hash, best_score);
        }

        best_score
    }
}
