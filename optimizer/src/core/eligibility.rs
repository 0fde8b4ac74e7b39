//! Candidate selection
//!
//! Turns raw feed records into the ranked slice both search algorithms work
//! from. Ineligible records are dropped without error; partial rows are
//! normal in real feeds.

use std::collections::HashSet;

use shared::{process_debug, Player, PlayerRecord, ProcessId};

/// Validated players in feed order, ineligible records silently dropped
pub fn eligible_players(records: &[PlayerRecord]) -> Vec<Player> {
    let mut excluded = 0usize;
    let players: Vec<Player> = records
        .iter()
        .filter_map(|record| match record.validate() {
            Ok(player) => Some(player),
            Err(reason) => {
                excluded += 1;
                process_debug!(
                    ProcessId::current(),
                    "Skipping ineligible player {:?} ({}): {}",
                    record.name,
                    record.id.as_ref().map(|id| id.as_str()).unwrap_or("<no id>"),
                    reason
                );
                None
            }
        })
        .collect();

    if excluded > 0 {
        process_debug!(
            ProcessId::current(),
            "Excluded {} of {} player records as ineligible",
            excluded,
            records.len()
        );
    }
    players
}

/// Eligible players ranked by projection (highest first), truncated to `limit`
///
/// The sort is stable, so equal projections keep feed order. A repeated id
/// keeps only its highest-ranked row.
pub fn candidate_slice(records: &[PlayerRecord], limit: usize) -> Vec<Player> {
    let mut players = eligible_players(records);
    players.sort_by(|a, b| b.projection.total_cmp(&a.projection));

    let mut seen = HashSet::new();
    players.retain(|player| seen.insert(player.id.clone()));
    players.truncate(limit);
    players
}
