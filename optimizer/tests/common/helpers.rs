//! Test helpers: engine construction, mocks and invariant checks

use std::collections::HashSet;

use optimizer::core::{candidate_slice, RosterRules};
use optimizer::{EngineConfig, InMemoryPlayerSource, LineupEngine, MockPlayerSource, OptimizerError};
use shared::{Lineup, Player, PlayerRecord};

use super::fixtures::TestFixtures;

pub struct TestHelpers;

impl TestHelpers {
    pub fn engine_with(records: Vec<PlayerRecord>) -> LineupEngine<InMemoryPlayerSource> {
        LineupEngine::new(InMemoryPlayerSource::new(records), EngineConfig::default())
    }

    /// Mock source that must be fetched exactly `times` times
    pub fn mock_source(records: Vec<PlayerRecord>, times: usize) -> MockPlayerSource {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_players()
            .times(times)
            .returning(move || Ok(records.clone()));
        source
            .expect_describe()
            .returning(|| "mock source".to_string())
            .times(0..);
        source
    }

    /// Mock source whose upstream is down
    pub fn failing_source() -> MockPlayerSource {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_players()
            .times(1)
            .returning(|| Err(OptimizerError::source_unavailable("feed returned 503")));
        source
            .expect_describe()
            .returning(|| "failing source".to_string())
            .times(0..);
        source
    }

    /// Best score over every (MVP, 5 UTIL) combination of the ranked slice, by plain enumeration
    pub fn brute_force_best_score(records: &[PlayerRecord], slice_size: usize, rules: RosterRules) -> Option<f64> {
        let slice = candidate_slice(records, slice_size);
        let mut best: Option<f64> = None;

        for (mvp_index, mvp) in slice.iter().enumerate() {
            let others: Vec<&Player> = slice
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != mvp_index)
                .map(|(_, p)| p)
                .collect();

            for utils in combinations(&others, 5) {
                let lineup = Lineup::new(mvp.clone(), utils.into_iter().cloned().collect());
                if lineup.total_salary() > f64::from(rules.salary_cap) {
                    continue;
                }
                if best.map_or(true, |score| lineup.projected_score() > score) {
                    best = Some(lineup.projected_score());
                }
            }
        }
        best
    }

    /// Cap, composition and score derivation hold for `lineup`
    pub fn assert_lineup_invariants(lineup: &Lineup) {
        assert!(
            lineup.total_salary() <= f64::from(TestFixtures::SALARY_CAP),
            "salary {} over cap",
            lineup.total_salary()
        );

        assert_eq!(lineup.utils().len(), 5);
        let ids: HashSet<&str> = lineup.players().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 6, "roster repeats a player");

        let expected = lineup
            .utils()
            .iter()
            .fold(lineup.mvp().projection * 1.5, |acc, p| acc + p.projection);
        assert_eq!(lineup.projected_score(), expected);

        let expected_salary = f64::from(lineup.mvp().salary) * 1.5
            + lineup.utils().iter().map(|p| f64::from(p.salary)).sum::<f64>();
        assert_eq!(lineup.total_salary(), expected_salary);
    }

    pub fn ids(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.id.as_str()).collect()
    }
}

/// Every `k`-subset of `items` in lexicographic index order
fn combinations<'a, T>(items: &[&'a T], k: usize) -> Vec<Vec<&'a T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }

    let mut result = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        for mut rest in combinations(&items[i + 1..], k - 1) {
            rest.insert(0, first);
            result.push(rest);
        }
    }
    result
}
