//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, warn};

use crate::graph::Graph;
use crate::planner::{
    LimitError, Query, QueryEngine, QueryLimits, QueryOutcome, standard_queries,
};
use crate::report::render_report;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/graph", get(graph_summary))
        .route("/graph/report", get(graph_report))
        .route("/graph/query", post(query_graph))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Summary of the startup graph.
async fn graph_summary(State(state): State<AppState>) -> Json<GraphSummary> {
    Json(GraphSummary::from_graph(&state.graph))
}

/// Standard queries against the startup graph, as a plain-text report.
async fn graph_report(State(state): State<AppState>) -> Result<String, AppError> {
    let outcomes = run_queries(state.graph.clone(), standard_queries(), &state.limits).await?;
    Ok(render_report(&outcomes))
}

/// Run queries against the startup graph or a supplied edge list.
async fn query_graph(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QueryGraphResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: QueryGraphRequest = if body.is_empty() {
        QueryGraphRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid query request");
            AppError::BadRequest {
                message: format!("Invalid JSON: {e}"),
            }
        })?
    };

    let queries = req.queries.unwrap_or_else(standard_queries);
    for query in &queries {
        state.limits.check(query).map_err(|e| AppError::from_limit(query, e))?;
    }

    let graph = match req.edges {
        Some(text) => state.cache.get_or_build(&text).await,
        None => state.graph.clone(),
    };

    debug!(
        towns = graph.len(),
        queries = queries.len(),
        "Running queries"
    );

    let summary = GraphSummary::from_graph(&graph);
    let outcomes = run_queries(graph, queries, &state.limits).await?;

    Ok(Json(QueryGraphResponse {
        graph: summary,
        results: outcomes.into_iter().map(QueryResult::from_outcome).collect(),
    }))
}

/// Answer queries off the async runtime; walk counting can be slow.
///
/// All queries of a request share one step budget, and the first query to
/// exhaust it fails the request.
async fn run_queries(
    graph: Arc<Graph>,
    queries: Vec<Query>,
    limits: &QueryLimits,
) -> Result<Vec<QueryOutcome>, AppError> {
    let mut budget = limits.budget();

    tokio::task::spawn_blocking(move || {
        let engine = QueryEngine::new(&graph);
        queries
            .into_iter()
            .map(|query| match engine.try_answer(&query, &mut budget) {
                Ok(value) => Ok(QueryOutcome { query, value }),
                Err(e) => Err(AppError::from_limit(&query, e)),
            })
            .collect::<Result<Vec<_>, AppError>>()
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("query task failed: {e}"),
    })?
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn from_limit(query: &Query, e: LimitError) -> Self {
        AppError::BadRequest {
            message: format!("{query}: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
