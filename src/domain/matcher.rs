use super::models::{CommandDescriptor, MatchKind, MatchResult, MatchScore};
use super::registry::Registry;
use std::cmp::Reverse;

pub const DEFAULT_RESULT_LIMIT: usize = 8;

/// Rank `registry` against `query` and keep the best `limit` entries.
///
/// An empty or whitespace-only query browses the registry by priority.
/// Otherwise a command matches when the query, untrimmed, is a case-insensitive substring
/// of its name, description or one of its keywords; names that start with the
/// query rank ahead of the rest. Ties fall back to priority, then registry order.
#[must_use]
pub fn match_commands(query: &str, registry: &Registry, limit: usize) -> Vec<MatchResult> {
    if limit == 0 {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = if query.trim().is_empty() {
        registry
            .iter()
            .enumerate()
            .map(|(index, cmd)| MatchResult {
                command: cmd.clone(),
                score: MatchScore {
                    kind: MatchKind::Browse,
                    priority: cmd.priority,
                },
                index,
            })
            .collect()
    } else {
        let query_lower = query.to_lowercase();
        registry
            .iter()
            .enumerate()
            .filter_map(|(index, cmd)| {
                classify(cmd, &query_lower).map(|kind| MatchResult {
                    command: cmd.clone(),
                    score: MatchScore {
                        kind,
                        priority: cmd.priority,
                    },
                    index,
                })
            })
            .collect()
    };

    // Stable sort, so equal scores keep registry order.
    results.sort_by_key(|r| Reverse(r.score));
    results.truncate(limit);
    results
}

fn classify(cmd: &CommandDescriptor, query_lower: &str) -> Option<MatchKind> {
    let name = cmd.name.to_lowercase();
    if name.starts_with(query_lower) {
        return Some(MatchKind::Prefix);
    }

    let contained = name.contains(query_lower)
        || cmd.description.to_lowercase().contains(query_lower)
        || cmd
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(query_lower));

    contained.then_some(MatchKind::Contains)
}
