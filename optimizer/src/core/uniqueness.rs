//! Lineup signatures and per-call duplicate tracking
//!
//! A signature is the six player ids sorted and joined, so two rosters with
//! the same members are the same lineup no matter who holds the MVP slot.

use std::collections::HashSet;
use std::fmt;

use shared::{Lineup, Player};

/// Separator between ids inside a signature
pub const SIGNATURE_SEPARATOR: &str = "|";

/// Order-independent identity of a roster
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineupSignature(String);

impl LineupSignature {
    /// Signature of any set of players (MVP included)
    pub fn of<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut ids: Vec<&str> = players.into_iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        Self(ids.join(SIGNATURE_SEPARATOR))
    }

    pub fn of_lineup(lineup: &Lineup) -> Self {
        Self::of(lineup.players())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineupSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// True when `signature` was already produced
pub fn is_duplicate(signature: &LineupSignature, existing: &HashSet<LineupSignature>) -> bool {
    existing.contains(signature)
}

/// Statistics about duplicate rejection within one generation call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquenessStats {
    pub signatures_checked: u64,
    pub duplicates_rejected: u64,
}

/// Growing set of accepted signatures for a single generation call
#[derive(Debug, Default)]
pub struct UniquenessTracker {
    accepted: HashSet<LineupSignature>,
    stats: UniquenessStats,
}

impl UniquenessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `signature` if unseen; returns false for a duplicate
    pub fn try_accept(&mut self, signature: LineupSignature) -> bool {
        self.stats.signatures_checked += 1;
        if is_duplicate(&signature, &self.accepted) {
            self.stats.duplicates_rejected += 1;
            return false;
        }
        self.accepted.insert(signature)
    }

    pub fn stats(&self) -> &UniquenessStats {
        &self.stats
    }
}
