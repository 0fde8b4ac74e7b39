//! Optimizer command line entry point
//!
//! Loads a slate from a JSON file or a feed URL, then either prints the single
//! best lineup or generates a batch of distinct lineups.

use std::path::PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

use shared::{logging, process_info, BestLineupResponse, ErrorResponse, Lineup, ProcessId};
use optimizer::{
    export, request_with_locked_ids, ConfiguredPlayerSource, EngineArgs, EngineConfig, LineupEngine, OptimizerError,
    OptimizerResult, PlayerSource, RealFilePlayerSource, RealHttpPlayerSource,
};

#[derive(Parser, Debug)]
#[command(name = "optimizer")]
#[command(about = "Showdown lineup optimizer: best lineup search and multi-lineup generation")]
struct Args {
    /// JSON file holding an array of player records
    #[arg(long, conflicts_with = "feed_url", required_unless_present = "feed_url")]
    players: Option<PathBuf>,

    /// URL of a feed returning an array of player records
    #[arg(long)]
    feed_url: Option<String>,

    /// Output format for lineups
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Also write one lineup_N.csv per lineup and a lineups.json into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[command(flatten)]
    engine: EngineArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the highest-scoring valid lineup
    Best,

    /// Generate distinct lineups at random
    Build {
        /// Number of lineups wanted
        #[arg(long, default_value_t = 1)]
        count: u32,

        /// Player id to lock into the MVP slot
        #[arg(long)]
        lock_mvp: Option<String>,

        /// Player id to lock into a UTIL slot (repeatable)
        #[arg(long = "lock-util")]
        lock_utils: Vec<String>,

        /// Contest field size (logged only)
        #[arg(long)]
        field_size: Option<u32>,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> OptimizerResult<()> {
    let args = Args::parse();

    ProcessId::init_optimizer();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = args.engine.apply(EngineConfig::from_env()?)?;

    let source = match (&args.players, &args.feed_url) {
        (Some(path), _) => ConfiguredPlayerSource::File(RealFilePlayerSource::new(path)),
        (None, Some(url)) => ConfiguredPlayerSource::Http(RealHttpPlayerSource::new(url)?),
        (None, None) => return Err(OptimizerError::invalid_request("either --players or --feed-url is required")),
    };

    let engine = LineupEngine::new(source, config);
    logging::log_startup(ProcessId::current(), &format!("optimizer over {}", engine.source().describe()));

    let lineups = match args.command {
        Command::Best => match engine.require_best_lineup().await {
            Ok(lineup) => {
                if args.format == OutputFormat::Json {
                    let response = BestLineupResponse { lineup: lineup.clone() };
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                vec![lineup]
            }
            Err(error @ OptimizerError::NoValidLineup) => {
                println!("{}", serde_json::to_string_pretty(&ErrorResponse::new(error.to_string()))?);
                logging::log_shutdown(ProcessId::current(), "no lineup fits under the salary cap");
                return Err(error);
            }
            Err(error) => return Err(error),
        },
        Command::Build {
            count,
            lock_mvp,
            lock_utils,
            field_size,
            seed,
        } => {
            let records = engine.fetch_records().await?;
            let mut request = request_with_locked_ids(&records, count, lock_mvp.as_deref(), &lock_utils)?;
            request.field_size = field_size;

            let outcome = engine.build_lineups_from(records, request, seed).await?;
            if outcome.is_partial() {
                process_info!(
                    ProcessId::current(),
                    "⚠️ Only {} of {} lineups could be built",
                    outcome.lineups.len(),
                    outcome.requested
                );
            }

            let response = outcome.into_response();
            if args.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            response.lineups
        }
    };

    emit(&lineups, args.format, args.out_dir.as_deref())?;
    logging::log_success(ProcessId::current(), &format!("Produced {} lineup(s)", lineups.len()));
    Ok(())
}

fn emit(lineups: &[Lineup], format: OutputFormat, out_dir: Option<&std::path::Path>) -> OptimizerResult<()> {
    if format == OutputFormat::Csv {
        print!("{}", export::lineups_to_csv(lineups)?);
    }
    if let Some(dir) = out_dir {
        let paths = export::write_lineup_files(dir, lineups)?;
        process_info!(ProcessId::current(), "💾 Wrote {} files to {}", paths.len(), dir.display());
    }
    Ok(())
}
