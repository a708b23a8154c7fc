use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::{
    clients::{health::HealthChecker, webhook::WebhookClient},
    config::Config,
    error::DispatchError,
    models::{
        forms::{AdmissionApplication, ContactSubmission},
        health::HealthStatus,
        response::ApiResponse,
    },
    utils::{ProcessError, process_admission, process_contact},
};

pub struct AppState {
    pub config: Config,
    pub webhook_client: WebhookClient,
    pub health_checker: HealthChecker,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, DispatchError> {
        let webhook_client = WebhookClient::new(&config)?;
        let health_checker = HealthChecker::new(config.clone());

        Ok(Self {
            config,
            webhook_client,
            health_checker,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub reference_id: Uuid,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/admission", post(submit_admission))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let port = config.server_port;
    let state = Arc::new(AppState::new(config)?);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Form relay server started");

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ContactSubmission>,
) -> impl IntoResponse {
    let result = process_contact(&submission, &state.config, &state.webhook_client).await;
    submission_response(result)
}

async fn submit_admission(
    State(state): State<Arc<AppState>>,
    Json(application): Json<AdmissionApplication>,
) -> impl IntoResponse {
    let result = process_admission(&application, &state.config, &state.webhook_client).await;
    submission_response(result)
}

fn submission_response(
    result: Result<Uuid, ProcessError>,
) -> (StatusCode, Json<ApiResponse<SubmissionReceipt>>) {
    match result {
        Ok(reference_id) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionReceipt { reference_id },
                "Submission received".to_string(),
            )),
        ),
        Err(ProcessError::Validation(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error(
                e.to_string(),
                "Please correct the highlighted fields and resubmit".to_string(),
                false,
            )),
        ),
        // Missing configuration stays out of the response body; the
        // detail is already in the server log.
        Err(ProcessError::Dispatch(DispatchError::Configuration(_))) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(
                "service_unavailable".to_string(),
                "This service is currently unavailable".to_string(),
                false,
            )),
        ),
        Err(ProcessError::Dispatch(e)) => (
            StatusCode::BAD_GATEWAY,
            Json(ApiResponse::error(
                "delivery_failed".to_string(),
                "Your submission could not be delivered, please try again".to_string(),
                e.is_retryable(),
            )),
        ),
    }
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all();

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
