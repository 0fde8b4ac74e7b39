//! Lineup engine with dependency injection
//!
//! Fetches a fresh pool from the injected [`PlayerSource`] on every call and
//! runs the CPU-bound search on the blocking pool so async callers stay
//! responsive. The engine keeps no state between calls.

use rand::rngs::StdRng;
use rand::SeedableRng;

use shared::{process_debug, process_info, GenerationRequest, Lineup, Player, PlayerId, PlayerRecord, ProcessId};
use crate::config::EngineConfig;
use crate::core::{candidate_slice, ExhaustiveOptimizer, GenerationOutcome, LineupGenerator};
use crate::error::{OptimizerError, OptimizerResult};
use crate::traits::PlayerSource;

/// Engine facade over a player source
pub struct LineupEngine<P>
where
    P: PlayerSource,
{
    source: P,
    config: EngineConfig,
    optimizer: ExhaustiveOptimizer,
    generator: LineupGenerator,
}

impl<P> LineupEngine<P>
where
    P: PlayerSource,
{
    pub fn new(source: P, config: EngineConfig) -> Self {
        let optimizer = ExhaustiveOptimizer::from_config(&config);
        let generator = LineupGenerator::from_config(&config);
        Self {
            source,
            config,
            optimizer,
            generator,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    /// Raw records straight from the source
    pub async fn fetch_records(&self) -> OptimizerResult<Vec<PlayerRecord>> {
        let records = self.source.fetch_players().await?;
        process_debug!(
            ProcessId::current(),
            "Fetched {} records from {}",
            records.len(),
            self.source.describe()
        );
        Ok(records)
    }

    /// Eligible players ranked by projection, limited to the generator pool size
    pub async fn player_pool(&self) -> OptimizerResult<Vec<Player>> {
        let records = self.fetch_records().await?;
        Ok(candidate_slice(&records, self.config.generator_pool_size))
    }

    /// Highest-scoring valid lineup, `None` when nothing fits under the cap
    pub async fn get_best_lineup(&self) -> OptimizerResult<Option<Lineup>> {
        let records = self.fetch_records().await?;
        self.best_lineup_from(records).await
    }

    /// Like [`Self::get_best_lineup`] for callers where an empty result is a failure
    pub async fn require_best_lineup(&self) -> OptimizerResult<Lineup> {
        self.get_best_lineup().await?.ok_or(OptimizerError::NoValidLineup)
    }

    /// Exhaustive search over records the caller already holds
    pub async fn best_lineup_from(&self, records: Vec<PlayerRecord>) -> OptimizerResult<Option<Lineup>> {
        let optimizer = self.optimizer.clone();
        let started = std::time::Instant::now();

        let best = tokio::task::spawn_blocking(move || optimizer.find_best_lineup(&records))
            .await
            .map_err(|e| OptimizerError::SearchTaskFailed { message: e.to_string() })?;

        match &best {
            Some(lineup) => {
                process_info!(
                    ProcessId::current(),
                    "🏆 Best lineup found in {:?}: MVP {} | score {:.2} | salary {}",
                    started.elapsed(),
                    lineup.mvp().name,
                    lineup.projected_score(),
                    lineup.total_salary()
                );
            }
            None => {
                process_info!(
                    ProcessId::current(),
                    "🔍 No lineup fits under the {} cap ({:?})",
                    self.config.salary_cap,
                    started.elapsed()
                );
            }
        }
        Ok(best)
    }

    /// Generate distinct lineups; invalid requests are rejected before the source is touched
    pub async fn build_lineups(&self, request: &GenerationRequest) -> OptimizerResult<GenerationOutcome> {
        request.validate()?;
        let records = self.fetch_records().await?;
        self.build_lineups_from(records, request.clone(), None).await
    }

    /// Generate from records the caller already holds; a seed makes the run reproducible
    pub async fn build_lineups_from(
        &self,
        records: Vec<PlayerRecord>,
        request: GenerationRequest,
        seed: Option<u64>,
    ) -> OptimizerResult<GenerationOutcome> {
        let generator = self.generator.clone();

        let outcome = tokio::task::spawn_blocking(move || match seed {
            Some(seed) => generator.build_lineups(&records, &request, &mut StdRng::seed_from_u64(seed)),
            None => generator.build_lineups(&records, &request, &mut rand::thread_rng()),
        })
        .await
        .map_err(|e| OptimizerError::SearchTaskFailed { message: e.to_string() })??;

        process_info!(
            ProcessId::current(),
            "🎲 Built {}/{} lineups using {} attempts",
            outcome.lineups.len(),
            outcome.requested,
            outcome.attempts_used
        );
        Ok(outcome)
    }
}

/// Build a request whose locks are looked up by player id in `records`
///
/// Unknown ids are a caller mistake and rejected, unlike ineligible locks
/// which the generator silently handles.
pub fn request_with_locked_ids(
    records: &[PlayerRecord],
    target_count: u32,
    locked_mvp: Option<&str>,
    locked_utils: &[String],
) -> OptimizerResult<GenerationRequest> {
    let find = |id: &str| -> OptimizerResult<PlayerRecord> {
        let wanted = PlayerId::new(id);
        records
            .iter()
            .find(|record| record.id.as_ref() == Some(&wanted))
            .cloned()
            .ok_or_else(|| OptimizerError::invalid_request(format!("unknown player id {id}")))
    };

    let mut request = GenerationRequest::new(target_count);
    if let Some(id) = locked_mvp {
        request = request.with_locked_mvp(find(id)?);
    }
    for id in locked_utils {
        request = request.with_locked_util(find(id)?);
    }
    Ok(request)
}
