//! Transposition table for caching search results.

use rustc_hash::FxHashMap;

/// Maps a board's position hash to the minimax score computed for that
/// position, so that positions reached via different move orders collapse
/// to one entry.
///
/// Scores are relative to the owning searcher's player, so a table must
/// never be shared between searchers representing different sides. Entries
/// are keyed by the position hash alone: a score computed under one
/// remaining-depth budget is reused under any other.
pub struct TranspositionTable {
    table: FxHashMap<u64, i32>,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }
}

impl TranspositionTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Simple replacement strategy: always replace.
    pub fn store(&mut self, hash: u64, score: i32) {
        self.table.insert(hash, score);
    }

    pub fn probe(&self, hash: u64) -> Option<i32> {
        self.table.get(&hash).copied()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }
}
