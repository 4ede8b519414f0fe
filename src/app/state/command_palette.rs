use crate::app::config::PaletteConfig;
use crate::domain::{group_results, match_commands, GroupedResults, MatchResult, Registry};

/// Per-session palette state.
///
/// `cursor` indexes `results` and stays in `0..results.len()` whenever there
/// are results; with no results it is 0 and inert.
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    query: String,
    results: Vec<MatchResult>,
    grouped: GroupedResults,
    cursor: usize,
    is_open: bool,
    query_seq: u64,
}

impl PaletteState {
    /// Fresh open session: empty query, browse results, cursor on the first row.
    pub fn opened(registry: &Registry, config: &PaletteConfig) -> Self {
        let mut state = Self {
            is_open: true,
            ..Default::default()
        };
        state.recompute(registry, config);
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn grouped(&self) -> &GroupedResults {
        &self.grouped
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> Option<&MatchResult> {
        self.results.get(self.cursor)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected().is_some_and(|r| r.id() == id)
    }

    /// Sequence number of the current query; bumped on every query change.
    ///
    /// Results computed off the event loop for an older sequence must be dropped.
    pub fn query_seq(&self) -> u64 {
        self.query_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.query_seq
    }

    /// Query-changed transition. Always resets the cursor, even when the
    /// new result set would still contain the old position.
    pub fn set_query(&mut self, query: String, registry: &Registry, config: &PaletteConfig) {
        self.query = query;
        self.query_seq += 1;
        self.recompute(registry, config);
    }

    /// Recompute against the current query, e.g. after a registry swap.
    pub fn recompute(&mut self, registry: &Registry, config: &PaletteConfig) {
        self.results = match_commands(&self.query, registry, config.result_limit);
        self.grouped = group_results(&self.results, config.category_order.as_deref());
        self.cursor = 0;
    }

    pub fn move_down(&mut self) {
        if !self.results.is_empty() {
            self.cursor = (self.cursor + 1).min(self.results.len() - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
