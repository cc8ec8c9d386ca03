use std::time::Duration;

/// Statistics collected during search.
///
/// Counters accumulate across every recursive call of one top-level
/// `find_best_move` invocation and are reset at the start of the next.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    nodes_visited: usize,
    nodes_generated: usize,
    cache_hits: usize,
    cache_misses: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn count_visited_node(&mut self) {
        self.nodes_visited += 1;
    }

    pub(crate) fn count_generated_nodes(&mut self, count: usize) {
        self.nodes_generated += count;
    }

    pub(crate) fn count_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    pub(crate) fn count_cache_miss(&mut self) {
        self.cache_misses += 1;
    }

    pub(crate) fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn nodes_generated(&self) -> usize {
        self.nodes_generated
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses
    }

    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn last_duration(&self) -> Option<Duration> {
        self.last_duration
    }
}
