//! WebServer entry point
//!
//! Serves the lineup API for the browser client on port 5001 by default.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use optimizer::{ConfiguredPlayerSource, EngineArgs, EngineConfig, LineupEngine, PlayerSource, RealFilePlayerSource, RealHttpPlayerSource};
use shared::{logging, process_info, ProcessId};
use webserver::{WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP API for the showdown lineup builder")]
struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "5001")]
    port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// JSON file holding an array of player records
    #[arg(long, conflicts_with = "feed_url", required_unless_present = "feed_url")]
    players: Option<PathBuf>,

    /// URL of a feed returning an array of player records
    #[arg(long)]
    feed_url: Option<String>,

    /// Deadline for one engine call, in seconds
    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,

    #[command(flatten)]
    engine: EngineArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = args.engine.apply(EngineConfig::from_env()?)?;

    let source = match (&args.players, &args.feed_url) {
        (Some(path), _) => ConfiguredPlayerSource::File(RealFilePlayerSource::new(path)),
        (None, Some(url)) => ConfiguredPlayerSource::Http(RealHttpPlayerSource::new(url)?),
        (None, None) => return Err(WebServerError::config("either --players or --feed-url is required")),
    };

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address {}:{}: {}", args.host, args.port, e)))?;

    let engine = LineupEngine::new(source, config);
    logging::log_startup(
        ProcessId::current(),
        &format!("webserver on {} over {}", bind_address, engine.source().describe()),
    );

    let server = WebServer::new(bind_address, Duration::from_secs(args.request_timeout_secs), engine);
    if let Err(e) = server.run().await {
        logging::log_error(ProcessId::current(), "Web server", &e);
        return Err(e);
    }

    process_info!(ProcessId::current(), "✅ WebServer shutdown complete");
    Ok(())
}
