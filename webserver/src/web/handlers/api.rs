//! REST API handlers
//!
//! Each engine call runs under the server's request deadline; the browser
//! sees a 504 instead of a hung request when the search runs long.

use std::future::Future;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

use optimizer::{OptimizerResult, PlayerSource};
use shared::{process_debug, BestLineupResponse, BuildLineupsResponse, GenerationRequest, Player, ProcessId};

use crate::error::{WebServerError, WebServerResult};
use crate::webserver_impl::WebServer;

/// Player pool for the browser table - /api/fanduel-players
pub async fn get_players<P>(State(webserver): State<WebServer<P>>) -> WebServerResult<Json<Vec<Player>>>
where
    P: PlayerSource + 'static,
{
    webserver.state().record_request();
    let pool = with_deadline(webserver.state().request_timeout, webserver.engine().player_pool()).await?;
    Ok(Json(pool))
}

/// Single best lineup - /api/fanduel-best-lineup
pub async fn get_best_lineup<P>(State(webserver): State<WebServer<P>>) -> WebServerResult<Json<BestLineupResponse>>
where
    P: PlayerSource + 'static,
{
    webserver.state().record_request();
    let best = with_deadline(webserver.state().request_timeout, webserver.engine().get_best_lineup()).await?;

    match best {
        Some(lineup) => Ok(Json(BestLineupResponse { lineup })),
        None => Err(WebServerError::NoValidLineup),
    }
}

/// Randomized lineup batch - /api/fanduel-build-lineups
pub async fn build_lineups<P>(
    State(webserver): State<WebServer<P>>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> WebServerResult<Json<BuildLineupsResponse>>
where
    P: PlayerSource + 'static,
{
    webserver.state().record_request();
    let Json(request) = body.map_err(|rejection| WebServerError::InvalidRequest {
        details: rejection.body_text(),
    })?;

    process_debug!(
        ProcessId::current(),
        "Build request: {} lineups, locked MVP: {}, locked UTILs: {}",
        request.target_count,
        request.locked_mvp.is_some(),
        request.locked_utils.len()
    );

    let outcome = with_deadline(webserver.state().request_timeout, webserver.engine().build_lineups(&request)).await?;
    Ok(Json(outcome.into_response()))
}

/// Health check - /health
pub async fn health_check<P>(State(webserver): State<WebServer<P>>) -> Json<Value>
where
    P: PlayerSource + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": webserver.state().get_uptime_seconds(),
        "requests_served": webserver.state().get_request_count()
    }))
}

async fn with_deadline<T>(
    timeout: Duration,
    operation: impl Future<Output = OptimizerResult<T>>,
) -> WebServerResult<T> {
    tokio::time::timeout(timeout, operation)
        .await
        .map_err(|_| WebServerError::Timeout {
            seconds: timeout.as_secs(),
        })?
        .map_err(WebServerError::from)
}
