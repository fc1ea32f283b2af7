// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP search service.
//!
//! One JSON endpoint plus an optional static front end:
//!
//! ```text
//! GET /search?q=<terms>[&limit=<n>]  → 200 [{"id", "title", "text"}, ...]
//!                                    → 400 when q is missing or empty
//! GET /<anything else>               → file from the static directory
//! ```
//!
//! Every search runs the concurrent query path. The engine is built before the
//! listener binds and is only ever read afterwards.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::engine::SearchEngine;
use crate::error::{Result, SearchError};
use crate::snippet::SearchHit;

pub const DEFAULT_PORT: u16 = 3001;
pub const MISSING_QUERY: &str = "missing search query in URL params";

/// Where to listen and what to serve besides `/search`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: Option<PathBuf>,
    /// Cap on results per request when the request doesn't set `limit`.
    /// `None` returns every matching document.
    pub default_limit: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            static_dir: None,
            default_limit: None,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    pub default_limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Wire shape of one result. `text` carries the highlighted snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub id: String,
    pub title: String,
    pub text: String,
}

impl From<SearchHit> for SearchDocument {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id,
            title: hit.title,
            text: hit.snippet,
        }
    }
}

pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(q) = params.q.filter(|q| !q.is_empty()) else {
        return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response();
    };
    let limit = params.limit.or(state.default_limit).unwrap_or(usize::MAX);

    // Query fan-out runs on rayon; keep it off the async workers.
    let engine = Arc::clone(&state.engine);
    let hits = tokio::task::spawn_blocking(move || {
        let hits = engine.search_hits(&q, true, limit);
        debug!(query = %q, hits = hits.len(), "served search");
        hits
    })
    .await;

    match hits {
        Ok(hits) => Json(
            hits.into_iter()
                .map(SearchDocument::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => {
            error!(error = %e, "search task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "search failure").into_response()
        }
    }
}

pub fn create_router(engine: Arc<SearchEngine>, config: &ServerConfig) -> Router {
    let state = AppState {
        engine,
        default_limit: config.default_limit,
    };
    let mut router = Router::new().route("/search", get(handle_search));
    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(engine: SearchEngine, config: ServerConfig) -> Result<()> {
    let app = create_router(Arc::new(engine), &config);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| SearchError::Bind {
            addr: config.addr,
            source,
        })?;

    let local = listener.local_addr().unwrap_or(config.addr);
    info!(addr = %local, static_dir = ?config.static_dir, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(SearchError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
