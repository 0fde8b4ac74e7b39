//! Randomized multi-lineup generator
//!
//! Rejection sampling over the top of the player pool. Every attempt picks an
//! MVP, fills the remaining UTIL slots at random, and keeps the roster only if
//! it passes the roster rules and has not been produced before in this call.
//! One attempt budget is shared by all requested lineups, so a large request
//! can come back short.

use std::collections::HashSet;

use rand::Rng;
use shared::{
    process_debug, BuildLineupsResponse, GenerationRequest, IneligibleReason, Lineup, Player, PlayerId,
    PlayerRecord, ProcessId, UTIL_SLOTS,
};

use super::constraints::RosterRules;
use super::eligibility::candidate_slice;
use super::uniqueness::{LineupSignature, UniquenessTracker};
use crate::config::EngineConfig;
use crate::error::OptimizerResult;

/// Lineups accumulated by one build call
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub lineups: Vec<Lineup>,
    pub requested: u32,
    pub attempts_used: u32,
}

impl GenerationOutcome {
    fn empty(requested: u32) -> Self {
        Self {
            lineups: Vec::new(),
            requested,
            attempts_used: 0,
        }
    }

    /// Fewer lineups than requested; still a success
    pub fn is_partial(&self) -> bool {
        (self.lineups.len() as u64) < u64::from(self.requested)
    }

    pub fn into_response(self) -> BuildLineupsResponse {
        let partial = self.is_partial();
        BuildLineupsResponse {
            lineups: self.lineups,
            requested: self.requested,
            attempts_used: self.attempts_used,
            partial,
        }
    }
}

/// Locked selections after normalization
struct Locks {
    /// `Err` when the caller locked an ineligible MVP
    mvp: Option<Result<Player, IneligibleReason>>,
    utils: Vec<Player>,
}

impl Locks {
    fn from_request(request: &GenerationRequest) -> Self {
        let mvp = request
            .locked_mvp
            .as_ref()
            .map(PlayerRecord::validate);

        let mut seen: HashSet<PlayerId> = HashSet::new();
        let utils = request
            .locked_utils
            .iter()
            .filter_map(|record| record.validate().ok())
            .filter(|player| seen.insert(player.id.clone()))
            .collect();

        Self { mvp, utils }
    }

    /// Multiplier-adjusted salary of the locked players, in half-dollar units
    fn salary_half_units(&self) -> u64 {
        let mvp = match &self.mvp {
            Some(Ok(player)) => 3 * u64::from(player.salary),
            _ => 0,
        };
        mvp + self.utils.iter().map(|p| 2 * u64::from(p.salary)).sum::<u64>()
    }
}

#[derive(Debug, Clone)]
pub struct LineupGenerator {
    rules: RosterRules,
    pool_size: usize,
    max_attempts: u32,
}

impl LineupGenerator {
    pub fn new(rules: RosterRules, pool_size: usize, max_attempts: u32) -> Self {
        Self {
            rules,
            pool_size,
            max_attempts,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.roster_rules(), config.generator_pool_size, config.max_attempts)
    }

    /// Build up to `request.target_count` distinct lineups honoring the request's locks
    pub fn build_lineups<R: Rng + ?Sized>(
        &self,
        records: &[PlayerRecord],
        request: &GenerationRequest,
        rng: &mut R,
    ) -> OptimizerResult<GenerationOutcome> {
        request.validate()?;

        if let Some(field_size) = request.field_size {
            process_debug!(ProcessId::current(), "Field size {} accepted, not used for scoring", field_size);
        }

        let pool = candidate_slice(records, self.pool_size);
        let locks = Locks::from_request(request);
        if let Some(Err(reason)) = &locks.mvp {
            process_debug!(ProcessId::current(), "Locked MVP is ineligible ({}), no roster can be built", reason);
        }

        if locks.mvp.is_none() && pool.is_empty() {
            process_debug!(ProcessId::current(), "No eligible players to draw an MVP from");
            return Ok(GenerationOutcome::empty(request.target_count));
        }
        if locks.salary_half_units() > self.rules.cap_half_units() {
            process_debug!(
                ProcessId::current(),
                "Locked players alone exceed the {} salary cap",
                self.rules.salary_cap
            );
            return Ok(GenerationOutcome::empty(request.target_count));
        }

        let target = request.target_count as usize;
        let mut tracker = UniquenessTracker::new();
        let mut lineups = Vec::with_capacity(target.min(64));
        let mut attempts = 0u32;
        let mut rule_rejections = 0u32;

        while lineups.len() < target && attempts < self.max_attempts {
            attempts += 1;

            let Some(lineup) = self.attempt(&pool, &locks, rng, &mut rule_rejections) else {
                continue;
            };
            if tracker.try_accept(LineupSignature::of_lineup(&lineup)) {
                lineups.push(lineup);
            }
        }

        process_debug!(
            ProcessId::current(),
            "Generated {}/{} lineups in {} attempts ({} rule rejections, {} duplicates)",
            lineups.len(),
            target,
            attempts,
            rule_rejections,
            tracker.stats().duplicates_rejected
        );

        Ok(GenerationOutcome {
            lineups,
            requested: request.target_count,
            attempts_used: attempts,
        })
    }

    /// One sampling attempt; `None` means the attempt was abandoned
    fn attempt<R: Rng + ?Sized>(
        &self,
        pool: &[Player],
        locks: &Locks,
        rng: &mut R,
        rule_rejections: &mut u32,
    ) -> Option<Lineup> {
        let mvp = match &locks.mvp {
            Some(Ok(player)) => player,
            Some(Err(_)) => return None,
            None => &pool[rng.gen_range(0..pool.len())],
        };

        let mut utils: Vec<&Player> = locks.utils.iter().collect();
        let used: HashSet<&PlayerId> = std::iter::once(&mvp.id)
            .chain(locks.utils.iter().map(|p| &p.id))
            .collect();
        let mut available: Vec<&Player> = pool.iter().filter(|p| !used.contains(&p.id)).collect();

        while utils.len() < UTIL_SLOTS && !available.is_empty() {
            let pick = rng.gen_range(0..available.len());
            utils.push(available.swap_remove(pick));
        }
        if utils.len() < UTIL_SLOTS {
            return None;
        }

        if self.rules.validate(mvp, &utils).is_err() {
            *rule_rejections += 1;
            return None;
        }

        Some(Lineup::new(mvp.clone(), utils.into_iter().cloned().collect()))
    }
}
