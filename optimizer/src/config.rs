//! Engine configuration
//!
//! Values come from built-in defaults, then the environment (a `.env` file is
//! loaded first if present), then command-line flags applied by the binaries.
//!
//! ## Environment keys
//! - `LINEUP_SALARY_CAP`: multiplier-adjusted salary limit (default 60000)
//! - `LINEUP_MAX_PER_TEAM`: players allowed from one team (default 5)
//! - `LINEUP_OPTIMIZER_POOL`: candidates the exhaustive search considers (default 30)
//! - `LINEUP_GENERATOR_POOL`: candidates the random generator draws from (default 50)
//! - `LINEUP_MAX_ATTEMPTS`: total sampling attempts per build request (default 1000)
//! - `LINEUP_ENFORCE_TEAM_LIMIT`: apply the team limit in the exhaustive search too (default false)

use std::str::FromStr;

use clap::Args;

use crate::core::RosterRules;
use crate::error::{OptimizerError, OptimizerResult};
use shared::ROSTER_SIZE;

pub const DEFAULT_SALARY_CAP: u32 = 60_000;
pub const DEFAULT_MAX_PER_TEAM: usize = 5;
pub const DEFAULT_OPTIMIZER_POOL: usize = 30;
pub const DEFAULT_GENERATOR_POOL: usize = 50;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub salary_cap: u32,
    pub max_per_team: usize,
    pub optimizer_pool_size: usize,
    pub generator_pool_size: usize,
    pub max_attempts: u32,
    /// Whether the exhaustive search also rejects rosters over `max_per_team`
    pub enforce_team_limit_in_optimizer: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            salary_cap: DEFAULT_SALARY_CAP,
            max_per_team: DEFAULT_MAX_PER_TEAM,
            optimizer_pool_size: DEFAULT_OPTIMIZER_POOL,
            generator_pool_size: DEFAULT_GENERATOR_POOL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            enforce_team_limit_in_optimizer: false,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by any `LINEUP_*` environment variables
    pub fn from_env() -> OptimizerResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenv::dotenv();

        let mut config = Self::default();
        if let Some(v) = env_value("LINEUP_SALARY_CAP")? {
            config.salary_cap = v;
        }
        if let Some(v) = env_value("LINEUP_MAX_PER_TEAM")? {
            config.max_per_team = v;
        }
        if let Some(v) = env_value("LINEUP_OPTIMIZER_POOL")? {
            config.optimizer_pool_size = v;
        }
        if let Some(v) = env_value("LINEUP_GENERATOR_POOL")? {
            config.generator_pool_size = v;
        }
        if let Some(v) = env_value("LINEUP_MAX_ATTEMPTS")? {
            config.max_attempts = v;
        }
        if let Some(v) = env_value("LINEUP_ENFORCE_TEAM_LIMIT")? {
            config.enforce_team_limit_in_optimizer = v;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OptimizerResult<()> {
        if self.salary_cap == 0 {
            return Err(config_error("salary_cap", self.salary_cap));
        }
        if self.max_per_team == 0 {
            return Err(config_error("max_per_team", self.max_per_team));
        }
        if self.optimizer_pool_size < ROSTER_SIZE {
            return Err(config_error("optimizer_pool_size", self.optimizer_pool_size));
        }
        if self.generator_pool_size < ROSTER_SIZE {
            return Err(config_error("generator_pool_size", self.generator_pool_size));
        }
        if self.max_attempts == 0 {
            return Err(config_error("max_attempts", self.max_attempts));
        }
        Ok(())
    }

    pub fn roster_rules(&self) -> RosterRules {
        RosterRules {
            salary_cap: self.salary_cap,
            max_per_team: self.max_per_team,
        }
    }
}

/// Command-line overrides shared by every binary that hosts the engine
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct EngineArgs {
    /// Override the salary cap
    #[arg(long)]
    pub salary_cap: Option<u32>,

    /// Override the per-team player limit
    #[arg(long)]
    pub max_per_team: Option<usize>,

    /// Override the generator's total attempt budget
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Apply the per-team limit in the best lineup search as well
    #[arg(long)]
    pub enforce_team_limit: bool,
}

impl EngineArgs {
    /// Layer these flags over `config` and validate the result
    pub fn apply(&self, mut config: EngineConfig) -> OptimizerResult<EngineConfig> {
        if let Some(cap) = self.salary_cap {
            config.salary_cap = cap;
        }
        if let Some(limit) = self.max_per_team {
            config.max_per_team = limit;
        }
        if let Some(attempts) = self.max_attempts {
            config.max_attempts = attempts;
        }
        if self.enforce_team_limit {
            config.enforce_team_limit_in_optimizer = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn config_error(field: &str, value: impl ToString) -> OptimizerError {
    OptimizerError::ConfigurationError {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn env_value<T: FromStr>(key: &str) -> OptimizerResult<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| config_error(key, raw)),
        Err(_) => Ok(None),
    }
}
