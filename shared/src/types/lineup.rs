//! Finished rosters

use serde::Serialize;

use super::player::Player;

/// Scoring and salary multiplier of the MVP slot
pub const MVP_MULTIPLIER: f64 = 1.5;

/// Number of UTIL slots in a roster
pub const UTIL_SLOTS: usize = 5;

/// Players per roster (one MVP plus the UTIL slots)
pub const ROSTER_SIZE: usize = UTIL_SLOTS + 1;

/// Immutable six-player roster
///
/// `total_salary` and `projected_score` are derived once at construction from
/// the players themselves. Composition and cap rules are the caller's job;
/// the engine only builds a `Lineup` after the roster passed its checks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Lineup {
    mvp: Player,
    utils: Vec<Player>,
    total_salary: f64,
    projected_score: f64,
}

impl Lineup {
    pub fn new(mvp: Player, utils: Vec<Player>) -> Self {
        let total_salary = salary_half_units(&mvp, utils.iter()) as f64 / 2.0;
        let projected_score = projected_score(&mvp, utils.iter());

        Self {
            mvp,
            utils,
            total_salary,
            projected_score,
        }
    }

    pub fn mvp(&self) -> &Player {
        &self.mvp
    }

    pub fn utils(&self) -> &[Player] {
        &self.utils
    }

    pub fn total_salary(&self) -> f64 {
        self.total_salary
    }

    pub fn projected_score(&self) -> f64 {
        self.projected_score
    }

    /// MVP first, then the UTIL players in roster order
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        std::iter::once(&self.mvp).chain(self.utils.iter())
    }
}

/// Multiplier-adjusted salary in half-dollar units
///
/// `3 * mvp + 2 * Σ utils` is exact in integers, so cap comparisons never
/// see the rounding a 1.5 float multiply could introduce.
pub fn salary_half_units<'a>(mvp: &Player, utils: impl Iterator<Item = &'a Player>) -> u64 {
    let util_total: u64 = utils.map(|p| u64::from(p.salary)).sum();
    3 * u64::from(mvp.salary) + 2 * util_total
}

/// MVP projection times the multiplier, then each UTIL added in order
pub fn projected_score<'a>(mvp: &Player, utils: impl Iterator<Item = &'a Player>) -> f64 {
    utils.fold(mvp.projection * MVP_MULTIPLIER, |acc, p| acc + p.projection)
}
