//! Roster constraint checking
//!
//! Rules are evaluated in a fixed order and the first failure is reported:
//! composition, salary cap, team concentration.

use std::collections::{HashMap, HashSet};

use shared::types::lineup::salary_half_units;
use shared::{Player, ROSTER_SIZE, UTIL_SLOTS};
use thiserror::Error;

use crate::config::{DEFAULT_MAX_PER_TEAM, DEFAULT_SALARY_CAP};

/// Why a roster was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterViolation {
    #[error("roster needs {expected} distinct players, found {found}")]
    Composition { expected: usize, found: usize },

    #[error("total salary {total_salary} exceeds cap {salary_cap}")]
    OverCap { total_salary: f64, salary_cap: u32 },

    #[error("{count} players from {team} exceeds the per-team limit of {max_per_team}")]
    TeamConcentration {
        team: String,
        count: usize,
        max_per_team: usize,
    },
}

/// Salary cap and stacking limit a roster must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterRules {
    pub salary_cap: u32,
    pub max_per_team: usize,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self {
            salary_cap: DEFAULT_SALARY_CAP,
            max_per_team: DEFAULT_MAX_PER_TEAM,
        }
    }
}

impl RosterRules {
    /// Cap expressed in the half-dollar units of [`salary_half_units`]
    pub fn cap_half_units(&self) -> u64 {
        2 * u64::from(self.salary_cap)
    }

    /// Check a complete roster, short-circuiting on the first broken rule
    pub fn validate(&self, mvp: &Player, utils: &[&Player]) -> Result<(), RosterViolation> {
        self.check_composition(mvp, utils)?;
        self.check_salary(mvp, utils)?;
        self.check_team_limit(std::iter::once(mvp).chain(utils.iter().copied()))
    }

    fn check_composition(&self, mvp: &Player, utils: &[&Player]) -> Result<(), RosterViolation> {
        if utils.len() != UTIL_SLOTS {
            return Err(RosterViolation::Composition {
                expected: ROSTER_SIZE,
                found: utils.len() + 1,
            });
        }

        let distinct: HashSet<_> = std::iter::once(&mvp.id)
            .chain(utils.iter().map(|p| &p.id))
            .collect();
        if distinct.len() != ROSTER_SIZE {
            return Err(RosterViolation::Composition {
                expected: ROSTER_SIZE,
                found: distinct.len(),
            });
        }
        Ok(())
    }

    fn check_salary(&self, mvp: &Player, utils: &[&Player]) -> Result<(), RosterViolation> {
        let half_units = salary_half_units(mvp, utils.iter().copied());
        if half_units > self.cap_half_units() {
            return Err(RosterViolation::OverCap {
                total_salary: half_units as f64 / 2.0,
                salary_cap: self.salary_cap,
            });
        }
        Ok(())
    }

    /// Team concentration only; reports the first team to go over in roster order
    pub fn check_team_limit<'a>(
        &self,
        players: impl Iterator<Item = &'a Player>,
    ) -> Result<(), RosterViolation> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for player in players {
            let count = counts.entry(player.team.as_str()).or_insert(0);
            *count += 1;
            if *count > self.max_per_team {
                return Err(RosterViolation::TeamConcentration {
                    team: player.team.clone(),
                    count: *count,
                    max_per_team: self.max_per_team,
                });
            }
        }
        Ok(())
    }
}
