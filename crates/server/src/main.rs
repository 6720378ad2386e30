// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use portops::SchedulerPolicy;
use portops_api::{
    ApiError, ComputeScheduleRequest, ComputeScheduleResponse, StrategyListResponse,
    compute_daily_schedule, list_strategies,
};
use portops_domain::{EmptyAllowedTypesPolicy, Minutes, SkillSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Port Operations Server - HTTP server for the daily operations scheduler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Qualified staff assigned to every operation
    #[arg(long, default_value_t = 1)]
    staff_per_operation: usize,

    /// Skill every assigned staff member must hold (repeatable)
    #[arg(long = "required-skill")]
    required_skills: Vec<String>,

    /// Largest number of cranes one vessel may be split across
    #[arg(long, default_value_t = 2)]
    max_cranes: usize,

    /// Split across cranes whenever more than one is free
    #[arg(long)]
    prefer_multi_crane: bool,

    /// How docks with an empty allowed vessel type set are treated (accept-all or reject-all)
    #[arg(long, default_value = "accept-all")]
    empty_allowed_types: EmptyAllowedTypesPolicy,

    /// Latest minute, counted from midnight of the scheduling date, an operation may end
    /// (default: latest crane or staff availability end, at least the end of the day)
    #[arg(long)]
    horizon_minutes: Option<Minutes>,
}

impl Args {
    /// Builds the scheduler policy from the command line.
    fn policy(&self) -> SchedulerPolicy {
        SchedulerPolicy {
            staff_per_operation: self.staff_per_operation,
            required_skills: self.required_skills.iter().collect::<SkillSet>(),
            max_cranes_per_vessel: self.max_cranes,
            prefer_multi_crane: self.prefer_multi_crane,
            empty_allowed_types: self.empty_allowed_types,
            horizon_minutes: self.horizon_minutes,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The scheduler policy every request runs under.
    policy: Arc<SchedulerPolicy>,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct HealthResponse {
    /// Always "ok" while the server is serving.
    status: String,
    /// The server version.
    version: String,
}

/// Error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Machine-readable error code.
    code: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// Machine-readable error code.
    code: &'static str,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            code: self.code.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Configuration { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error while scheduling");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/schedule/daily`.
///
/// The computation runs on the blocking pool so it never stalls the reactor.
async fn handle_compute_schedule(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ComputeScheduleRequest>,
) -> Result<Json<ComputeScheduleResponse>, HttpError> {
    info!(date = %request.date, vessels = request.vessels.len(), "Handling schedule request");

    let policy: Arc<SchedulerPolicy> = Arc::clone(&app_state.policy);
    let response: ComputeScheduleResponse =
        tokio::task::spawn_blocking(move || compute_daily_schedule(&request, &policy))
            .await
            .map_err(|err| {
                error!(error = %err, "Scheduling task failed");
                HttpError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "internal",
                    message: format!("Scheduling task failed: {err}"),
                }
            })??;

    Ok(Json(response))
}

/// Handler for GET `/schedule/strategies`.
async fn handle_list_strategies() -> Json<StrategyListResponse> {
    Json(list_strategies())
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/schedule/daily", post(handle_compute_schedule))
        .route("/schedule/strategies", get(handle_list_strategies))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Port Operations Server");

    let policy: SchedulerPolicy = args.policy();
    policy.validate()?;
    info!(
        staff_per_operation = policy.staff_per_operation,
        max_cranes_per_vessel = policy.max_cranes_per_vessel,
        prefer_multi_crane = policy.prefer_multi_crane,
        empty_allowed_types = %policy.empty_allowed_types,
        horizon_minutes = ?policy.horizon_minutes,
        "Scheduler policy loaded"
    );

    let app_state: AppState = AppState {
        policy: Arc::new(policy),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
