//! Common types re-exported for convenience.

pub use crate::board::{Board, BoardError, Cell, Coord, Player};
pub use crate::searcher::{MoveEvaluation, SearchError, Searcher};
