//! Exhaustive best-lineup search
//!
//! Every slice member takes a turn as MVP and every 5-subset of the rest is
//! scored as the UTIL group. The slice is bounded (top 30 by projection by
//! default) which keeps the search near 3.4M combinations.
//!
//! Scan order is MVP index ascending, then UTIL combinations in lexicographic
//! index order; the first combination reaching the best score wins. MVP
//! branches run on the rayon pool and are reduced in index order, so the
//! winner is the same one a sequential scan would pick.

use rayon::prelude::*;

use shared::{process_debug, Lineup, Player, PlayerRecord, ProcessId, MVP_MULTIPLIER, UTIL_SLOTS};

use super::constraints::RosterRules;
use super::eligibility::candidate_slice;
use crate::config::EngineConfig;

/// Best UTIL group found for one MVP
#[derive(Debug, Clone, Copy)]
struct BranchBest {
    score: f64,
    /// Indices into the MVP's "others" list
    utils: [usize; UTIL_SLOTS],
    combinations_within_cap: u64,
}

#[derive(Debug, Clone)]
pub struct ExhaustiveOptimizer {
    rules: RosterRules,
    pool_size: usize,
    enforce_team_limit: bool,
}

impl ExhaustiveOptimizer {
    pub fn new(rules: RosterRules, pool_size: usize) -> Self {
        Self {
            rules,
            pool_size,
            enforce_team_limit: false,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.roster_rules(), config.optimizer_pool_size)
            .with_team_limit(config.enforce_team_limit_in_optimizer)
    }

    /// Also reject rosters that break the per-team limit
    pub fn with_team_limit(mut self, enforce: bool) -> Self {
        self.enforce_team_limit = enforce;
        self
    }

    /// Highest-scoring cap-satisfying lineup over the top candidates, `None` if nothing fits
    pub fn find_best_lineup(&self, records: &[PlayerRecord]) -> Option<Lineup> {
        let candidates = candidate_slice(records, self.pool_size);
        self.search(&candidates)
    }

    /// Exhaustive search over an already ranked candidate slice
    pub fn search(&self, candidates: &[Player]) -> Option<Lineup> {
        if candidates.len() <= UTIL_SLOTS {
            return None;
        }

        let team_ids = team_indices(candidates);
        let branches: Vec<(usize, BranchBest)> = (0..candidates.len())
            .into_par_iter()
            .filter_map(|mvp| self.best_for_mvp(candidates, &team_ids, mvp).map(|best| (mvp, best)))
            .collect();

        let evaluated: u64 = branches.iter().map(|(_, b)| b.combinations_within_cap).sum();

        // Strict comparison in MVP order keeps the earliest branch on ties
        let mut winner: Option<(usize, BranchBest)> = None;
        for (mvp, best) in branches {
            if winner.map_or(true, |(_, w)| best.score > w.score) {
                winner = Some((mvp, best));
            }
        }

        process_debug!(
            ProcessId::current(),
            "Exhaustive search over {} candidates: {} combinations within cap",
            candidates.len(),
            evaluated
        );

        winner.map(|(mvp_index, best)| {
            let others = others_of(candidates.len(), mvp_index);
            let utils = best
                .utils
                .iter()
                .map(|&k| candidates[others[k]].clone())
                .collect();
            Lineup::new(candidates[mvp_index].clone(), utils)
        })
    }

    fn best_for_mvp(&self, candidates: &[Player], team_ids: &[usize], mvp_index: usize) -> Option<BranchBest> {
        let cap = self.rules.cap_half_units();
        let mvp = &candidates[mvp_index];
        let mvp_salary = 3 * u64::from(mvp.salary);
        if mvp_salary > cap {
            return None;
        }

        let others = others_of(candidates.len(), mvp_index);
        let salary: Vec<u64> = others.iter().map(|&j| 2 * u64::from(candidates[j].salary)).collect();
        let projection: Vec<f64> = others.iter().map(|&j| candidates[j].projection).collect();
        let team: Vec<usize> = others.iter().map(|&j| team_ids[j]).collect();
        let mvp_team = team_ids[mvp_index];
        let n = others.len();

        let base_score = mvp.projection * MVP_MULTIPLIER;
        let mut best: Option<BranchBest> = None;
        let mut within_cap = 0u64;

        // Salaries are positive, so a prefix already over the cap can be skipped with all its extensions
        for a in 0..n {
            let s1 = mvp_salary + salary[a];
            if s1 > cap {
                continue;
            }
            let p1 = base_score + projection[a];
            for b in a + 1..n {
                let s2 = s1 + salary[b];
                if s2 > cap {
                    continue;
                }
                let p2 = p1 + projection[b];
                for c in b + 1..n {
                    let s3 = s2 + salary[c];
                    if s3 > cap {
                        continue;
                    }
                    let p3 = p2 + projection[c];
                    for d in c + 1..n {
                        let s4 = s3 + salary[d];
                        if s4 > cap {
                            continue;
                        }
                        let p4 = p3 + projection[d];
                        for e in d + 1..n {
                            if s4 + salary[e] > cap {
                                continue;
                            }
                            if self.enforce_team_limit
                                && !within_team_limit(
                                    [mvp_team, team[a], team[b], team[c], team[d], team[e]],
                                    self.rules.max_per_team,
                                )
                            {
                                continue;
                            }
                            within_cap += 1;
                            let score = p4 + projection[e];
                            if best.map_or(true, |current| score > current.score) {
                                best = Some(BranchBest {
                                    score,
                                    utils: [a, b, c, d, e],
                                    combinations_within_cap: 0,
                                });
                            }
                        }
                    }
                }
            }
        }

        best.map(|b| BranchBest {
            combinations_within_cap: within_cap,
            ..b
        })
    }
}

/// Slice indices other than the MVP, ascending
fn others_of(len: usize, mvp_index: usize) -> Vec<usize> {
    (0..len).filter(|&j| j != mvp_index).collect()
}

/// Small integer per distinct team so the inner loop compares integers, not strings
fn team_indices(candidates: &[Player]) -> Vec<usize> {
    let mut teams: Vec<&str> = Vec::new();
    candidates
        .iter()
        .map(|p| match teams.iter().position(|t| *t == p.team) {
            Some(index) => index,
            None => {
                teams.push(&p.team);
                teams.len() - 1
            }
        })
        .collect()
}

fn within_team_limit(teams: [usize; UTIL_SLOTS + 1], max_per_team: usize) -> bool {
    teams
        .iter()
        .all(|t| teams.iter().filter(|other| *other == t).count() <= max_per_team)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PlayerId;

    fn player(id: &str, team: &str, salary: u32, projection: f64) -> Player {
        Player {
            id: PlayerId::new(id),
            name: id.to_string(),
            position: "G".to_string(),
            team: team.to_string(),
            opponent: "X".to_string(),
            salary,
            projection,
        }
    }

    fn util_ids(lineup: &Lineup) -> Vec<&str> {
        lineup.utils().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_too_few_candidates() {
        let candidates: Vec<Player> = (0..5).map(|i| player(&i.to_string(), "A", 1000, 1.0)).collect();
        assert!(ExhaustiveOptimizer::new(RosterRules::default(), 30).search(&candidates).is_none());
    }

    #[test]
    fn test_equal_scores_pick_first_in_scan_order() {
        let candidates: Vec<Player> = (0..8)
            .map(|i| player(&format!("p{i}"), if i % 2 == 0 { "A" } else { "B" }, 5000, 10.0))
            .collect();
        let lineup = ExhaustiveOptimizer::new(RosterRules::default(), 30)
            .search(&candidates)
            .unwrap();

        assert_eq!(lineup.mvp().id.as_str(), "p0");
        assert_eq!(util_ids(&lineup), vec!["p1", "p2", "p3", "p4", "p5"]);
    }

    #[test]
    fn test_cap_forces_cheaper_mvp() {
        // The star only fits as a UTIL once the multiplier is applied
        let mut candidates = vec![player("star", "A", 20000, 60.0)];
        candidates.extend((0..6).map(|i| player(&format!("r{i}"), "B", 7000, 20.0 - i as f64)));

        let lineup = ExhaustiveOptimizer::new(RosterRules::default(), 30)
            .search(&candidates)
            .unwrap();

        // star as MVP: 30000 + 5 * 7000 = 65000 > 60000
        assert_eq!(lineup.mvp().id.as_str(), "r0");
        assert_eq!(util_ids(&lineup), vec!["star", "r1", "r2", "r3", "r4"]);
        assert_eq!(lineup.total_salary(), 58500.0);
    }

    #[test]
    fn test_team_limit_flag() {
        let mut candidates: Vec<Player> = (0..6).map(|i| player(&format!("a{i}"), "A", 5000, 30.0)).collect();
        candidates.push(player("b0", "B", 5000, 1.0));

        let plain = ExhaustiveOptimizer::new(RosterRules::default(), 30);
        let lineup = plain.search(&candidates).unwrap();
        assert!(lineup.players().all(|p| p.team == "A"));

        let limited = plain.clone().with_team_limit(true);
        let lineup = limited.search(&candidates).unwrap();
        assert_eq!(lineup.players().filter(|p| p.team == "A").count(), 5);
        assert!(lineup.players().any(|p| p.id.as_str() == "b0"));
    }

    #[test]
    fn test_within_team_limit() {
        assert!(within_team_limit([0, 0, 0, 0, 0, 1], 5));
        assert!(!within_team_limit([2, 2, 2, 2, 2, 2], 5));
        assert!(!within_team_limit([0, 1, 0, 1, 0, 0], 3));
    }
}
